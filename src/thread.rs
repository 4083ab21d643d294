use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Thread {
  pub(crate) comments: Vec<Comment>,
  pub(crate) submission: Submission,
}
