use super::*;

#[derive(Debug, Serialize)]
#[allow(clippy::arbitrary_source_item_ordering)]
pub(crate) struct Payload {
  pub(crate) title: String,
  pub(crate) selftext: String,
  pub(crate) comments: Vec<String>,
  pub(crate) permalink: String,
  pub(crate) score: i64,
  pub(crate) subreddit: String,
  pub(crate) author: Option<String>,
  pub(crate) comment_count: u64,
}

impl Payload {
  pub(crate) fn new(submission: Submission, comments: Vec<String>) -> Self {
    let Submission {
      author,
      comment_count,
      permalink,
      score,
      selftext,
      subreddit,
      title,
    } = submission;

    Self {
      title,
      selftext,
      comments,
      permalink,
      score,
      subreddit,
      author,
      comment_count,
    }
  }
}
