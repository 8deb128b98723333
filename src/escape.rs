/// Replaces the five characters with markup significance by their entity
/// references. Text appended to a fragment passes through here exactly once.
pub fn escape(input: &str) -> String {
  let mut output = String::with_capacity(input.len());

  for ch in input.chars() {
    match ch {
      '&' => output.push_str("&amp;"),
      '<' => output.push_str("&lt;"),
      '>' => output.push_str("&gt;"),
      '"' => output.push_str("&#34;"),
      '\'' => output.push_str("&#39;"),
      _ => output.push(ch),
    }
  }

  output
}
