use super::*;

pub(crate) trait SubmissionSource {
  fn fetch_thread(&self, url: &str, sort: &str) -> Result<Thread>;
}
