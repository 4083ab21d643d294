use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Submission {
  #[serde(default, deserialize_with = "deserialize_optional_author")]
  pub(crate) author: Option<String>,
  #[serde(default, rename = "num_comments")]
  pub(crate) comment_count: u64,
  pub(crate) permalink: String,
  #[serde(default)]
  pub(crate) score: i64,
  #[serde(default)]
  pub(crate) selftext: String,
  pub(crate) subreddit: String,
  pub(crate) title: String,
}
