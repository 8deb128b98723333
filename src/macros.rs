
macro_rules! attrs {
  () => {
    $crate::model::Attributes::new()
  };

  ($($key:ident = $value:expr),+ $(,)?) => {
    $crate::model::Attributes::from([
      $((stringify!($key), $crate::model::Value::from($value)),)+
    ])
  };
}
