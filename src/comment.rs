#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Comment {
  pub(crate) author: Option<String>,
  pub(crate) body: String,
  pub(crate) depth: usize,
  pub(crate) score: Option<i64>,
}
