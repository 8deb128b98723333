use crate::model::{SelfClosingStyle, SelfClosingTag, Tag};
use std::fmt;

/// Every standard tag name, sorted for binary search. Includes the legacy
/// names so markup targeting older doctypes still resolves statically.
pub static HTML5_TAGS: &[&str] = &[
  "a", "abbr", "acronym", "address", "applet", "area", "article", "aside", "audio", "b", "base",
  "basefont", "bdi", "bdo", "big", "blockquote", "body", "br", "button", "canvas", "caption",
  "center", "cite", "code", "col", "colgroup", "data", "datalist", "dd", "del", "details", "dfn",
  "dialog", "dir", "div", "dl", "dt", "em", "embed", "fieldset", "figcaption", "figure", "font",
  "footer", "form", "frame", "frameset", "h1", "h2", "h3", "h4", "h5", "h6", "head", "header",
  "hr", "html", "i", "iframe", "img", "input", "ins", "kbd", "label", "legend", "li", "link",
  "main", "map", "mark", "meta", "meter", "nav", "noframes", "noscript", "object", "ol",
  "optgroup", "option", "output", "p", "param", "picture", "pre", "progress", "q", "rp", "rt",
  "ruby", "s", "samp", "script", "section", "select", "small", "source", "span", "strike",
  "strong", "style", "sub", "summary", "sup", "svg", "table", "tbody", "td", "template",
  "textarea", "tfoot", "th", "thead", "time", "title", "tr", "track", "tt", "u", "ul", "var",
  "video", "wbr",
];

pub static VOID_ELEMENTS: &[&str] = &[
  "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
  "track", "wbr",
];

pub fn is_standard(name: &str) -> bool {
  HTML5_TAGS.binary_search(&name).is_ok()
}

pub fn is_void(name: &str) -> bool {
  VOID_ELEMENTS.contains(&name)
}

macro_rules! tags {
  ($($name:ident),* $(,)?) => {
    $(pub fn $name() -> Tag {
      Tag::new(stringify!($name))
    })*
  };
}

macro_rules! void_tags {
  ($($name:ident),* $(,)?) => {
    $(pub fn $name() -> SelfClosingTag {
      SelfClosingTag::new(stringify!($name), SelfClosingStyle::Html)
    })*
  };
}

tags!(
  a, abbr, acronym, address, applet, article, aside, audio, b, basefont, bdi, bdo, big,
  blockquote, body, button, canvas, caption, center, cite, code, colgroup, data, datalist, dd,
  del, details, dfn, dialog, dir, div, dl, dt, em, fieldset, figcaption, figure, font, footer,
  form, frame, frameset, h1, h2, h3, h4, h5, h6, head, header, html, i, iframe, ins, kbd, label,
  legend, li, main, map, mark, meter, nav, noframes, noscript, object, ol, optgroup, option,
  output, p, picture, pre, progress, q, rp, rt, ruby, s, samp, script, section, select, small,
  span, strike, strong, style, sub, summary, sup, svg, table, tbody, td, template, textarea,
  tfoot, th, thead, time, title, tr, tt, u, ul, var, video,
);

void_tags!(
  area, base, br, col, embed, hr, img, input, link, meta, param, source, track, wbr,
);

/// The fixed document type declarations, a rendering convenience prepended
/// by callers. See https://www.w3.org/QA/2002/04/valid-dtd-list.html for the
/// source of these.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Doctype {
  Html,
  Html4Strict,
  Html4Transitional,
  Html4Frameset,
  Xhtml1Strict,
  Xhtml1Transitional,
  Xhtml1Frameset,
  Xhtml11,
  XhtmlBasic11,
}

impl fmt::Display for Doctype {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let declaration = match self {
      Doctype::Html => "<!DOCTYPE html>",
      Doctype::Html4Strict => {
        "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\"\n   \
         \"http://www.w3.org/TR/html4/strict.dtd\">"
      }
      Doctype::Html4Transitional => {
        "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\"\n   \
         \"http://www.w3.org/TR/html4/loose.dtd\">"
      }
      Doctype::Html4Frameset => {
        "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Frameset//EN\"\n   \
         \"http://www.w3.org/TR/html4/frameset.dtd\">"
      }
      Doctype::Xhtml1Strict => {
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\"\n   \
         \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">"
      }
      Doctype::Xhtml1Transitional => {
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\"\n   \
         \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">"
      }
      Doctype::Xhtml1Frameset => {
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Frameset//EN\"\n   \
         \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd\">"
      }
      Doctype::Xhtml11 => {
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.1//EN\"\n   \
         \"http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd\">"
      }
      Doctype::XhtmlBasic11 => {
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML Basic 1.1//EN\"\n    \
         \"http://www.w3.org/TR/xhtml-basic/xhtml-basic11.dtd\">"
      }
    };
    write!(f, "{}", declaration)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fragment::Fragment;
  use pretty_assertions::assert_eq;

  #[test]
  fn catalog_is_sorted_for_binary_search() {
    let mut sorted = HTML5_TAGS.to_vec();
    sorted.sort_unstable();
    assert_eq!(HTML5_TAGS, &sorted[..]);
  }

  #[test]
  fn standard_lookup() {
    assert!(is_standard("div"));
    assert!(is_standard("wbr"));
    assert!(!is_standard("my-component"));
  }

  #[test]
  fn void_lookup_matches_constructors() {
    assert!(is_void("br"));
    assert!(!is_void("div"));
    assert_eq!(br().to_string(), "<br>");
  }

  #[test]
  fn constructors_build_plain_references() {
    assert_eq!(div().name, "div");
    assert_eq!(div().open().to_string(), "<div>");
  }

  #[test]
  fn doctype_prepends_to_a_rendered_fragment() {
    let f = Fragment::new().append(html()).unwrap();
    let page = format!("{}{}", Doctype::Html, f);
    assert_eq!(page, "<!DOCTYPE html><html>");
  }
}
