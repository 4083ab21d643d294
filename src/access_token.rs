use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct AccessToken {
  pub(crate) access_token: String,
}
