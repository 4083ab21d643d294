use super::*;

pub(crate) fn transcribe(
  source: &dyn SubmissionSource,
  url: &str,
  config: &Config,
) -> Result<Payload> {
  let thread = source.fetch_thread(url, &config.comment_sort)?;

  let comments = render_comments(&thread.comments, config.comment_limit);

  Ok(Payload::new(thread.submission, comments))
}
