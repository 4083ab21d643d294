use super::*;

pub(crate) fn deserialize_optional_author<'de, D>(
  deserializer: D,
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(name)) if name == "[deleted]" => Ok(None),
    Some(Value::String(name)) => Ok(Some(name)),
    Some(Value::Bool(b)) => {
      Err(de::Error::invalid_type(Unexpected::Bool(b), &"string"))
    }
    Some(Value::Number(_)) => Err(de::Error::invalid_type(
      Unexpected::Other("number"),
      &"string",
    )),
    Some(Value::Array(_)) => {
      Err(de::Error::invalid_type(Unexpected::Seq, &"string"))
    }
    Some(Value::Object(_)) => {
      Err(de::Error::invalid_type(Unexpected::Map, &"string"))
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde::Deserialize};

  #[derive(Deserialize, Debug, PartialEq)]
  struct AuthorWrapper {
    #[serde(default, deserialize_with = "deserialize_optional_author")]
    author: Option<String>,
  }

  fn parse_author(input: &str) -> Result<Option<String>, serde_json::Error> {
    serde_json::from_str::<AuthorWrapper>(input).map(|wrapper| wrapper.author)
  }

  #[test]
  fn deserialize_optional_author_keeps_real_names() {
    assert_eq!(
      parse_author(r#"{"author": "alice"}"#).unwrap(),
      Some("alice".to_string())
    );
  }

  #[test]
  fn deserialize_optional_author_maps_deleted_sentinel_to_none() {
    assert_eq!(parse_author(r#"{"author": "[deleted]"}"#).unwrap(), None);
  }

  #[test]
  fn deserialize_optional_author_maps_null_and_missing_to_none() {
    assert_eq!(parse_author(r#"{"author": null}"#).unwrap(), None);
    assert_eq!(parse_author(r"{}").unwrap(), None);
  }

  #[test]
  fn deserialize_optional_author_rejects_non_strings() {
    assert!(parse_author(r#"{"author": true}"#).is_err());
    assert!(parse_author(r#"{"author": 7}"#).is_err());
    assert!(parse_author(r#"{"author": []}"#).is_err());
    assert!(parse_author(r#"{"author": {}}"#).is_err());
  }
}
