use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Config {
  pub(crate) client_id: String,
  pub(crate) client_secret: String,
  pub(crate) comment_limit: Option<usize>,
  pub(crate) comment_sort: String,
  pub(crate) user_agent: String,
}

impl Config {
  const DEFAULT_COMMENT_SORT: &str = "confidence";
  const DEFAULT_USER_AGENT: &str = "twx-reddit/0.1";

  pub(crate) fn from_env() -> Result<Self> {
    Self::from_lookup(|name| env::var(name).ok())
  }

  fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let credential =
      |name: &str| lookup(name).filter(|value| !value.is_empty());

    let (Some(client_id), Some(client_secret)) = (
      credential("REDDIT_CLIENT_ID"),
      credential("REDDIT_CLIENT_SECRET"),
    ) else {
      bail!(
        "missing REDDIT_CLIENT_ID or REDDIT_CLIENT_SECRET environment variables"
      );
    };

    Ok(Self {
      client_id,
      client_secret,
      comment_limit: lookup("REDDIT_COMMENT_LIMIT").and_then(parse_limit),
      comment_sort: lookup("REDDIT_COMMENT_SORT")
        .unwrap_or_else(|| Self::DEFAULT_COMMENT_SORT.to_string()),
      user_agent: lookup("REDDIT_USER_AGENT")
        .unwrap_or_else(|| Self::DEFAULT_USER_AGENT.to_string()),
    })
  }
}

fn parse_limit(raw: String) -> Option<usize> {
  raw.trim().parse().ok()
}
