use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct MoreChildren {
  pub(crate) json: MoreChildrenEnvelope,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MoreChildrenData {
  #[serde(default)]
  pub(crate) things: Vec<Thing>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MoreChildrenEnvelope {
  pub(crate) data: MoreChildrenData,
}
