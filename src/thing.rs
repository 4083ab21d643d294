use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct CommentData {
  #[serde(default, deserialize_with = "deserialize_optional_author")]
  pub(crate) author: Option<String>,
  #[serde(default)]
  pub(crate) body: Option<String>,
  #[serde(default)]
  pub(crate) name: String,
  #[serde(default)]
  pub(crate) parent_id: Option<String>,
  #[serde(default, deserialize_with = "deserialize_replies")]
  pub(crate) replies: Vec<Thing>,
  #[serde(default)]
  pub(crate) score: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Listing {
  #[serde(default)]
  pub(crate) children: Vec<Thing>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MoreData {
  #[serde(default)]
  pub(crate) children: Vec<String>,
  pub(crate) parent_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub(crate) enum Thing {
  #[serde(rename = "t1")]
  Comment(CommentData),
  #[serde(rename = "Listing")]
  Listing(Listing),
  #[serde(rename = "more")]
  More(MoreData),
  #[serde(rename = "t3")]
  Submission(Submission),
}

fn deserialize_replies<'de, D>(deserializer: D) -> Result<Vec<Thing>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  match value {
    None | Some(Value::Null | Value::String(_)) => Ok(Vec::new()),
    Some(value) => {
      let thing =
        serde_json::from_value::<Thing>(value).map_err(de::Error::custom)?;

      match thing {
        Thing::Listing(listing) => Ok(listing.children),
        thing => Ok(vec![thing]),
      }
    }
  }
}
