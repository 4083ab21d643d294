use super::*;

pub(crate) struct Client {
  client_id: String,
  client_secret: String,
  http: reqwest::blocking::Client,
}

impl Client {
  const ACCESS_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

  const API_BASE_URL: &str = "https://oauth.reddit.com";

  const COMMENT_LISTING_LIMIT: &str = "500";

  const MORE_CHILDREN_BATCH: usize = 100;

  fn authenticate(&self) -> Result<AccessToken> {
    let response = self
      .http
      .post(Self::ACCESS_TOKEN_URL)
      .basic_auth(&self.client_id, Some(&self.client_secret))
      .form(&[("grant_type", "client_credentials")])
      .send()
      .context("could not reach the reddit token endpoint")?
      .error_for_status()
      .context("reddit rejected the client credentials")?;

    response
      .json()
      .context("could not parse the access token response")
  }

  fn comment_subtree(
    &self,
    token: &AccessToken,
    id: &str,
    parent_id: &str,
    sort: &str,
  ) -> Result<Vec<Thing>> {
    let parent = parent_id.strip_prefix("t1_").unwrap_or(parent_id);

    let listings = self
      .http
      .get(format!("{}/comments/{id}/_/{parent}", Self::API_BASE_URL))
      .bearer_auth(&token.access_token)
      .query(&[
        ("limit", Self::COMMENT_LISTING_LIMIT),
        ("raw_json", "1"),
        ("sort", sort),
      ])
      .send()
      .with_context(|| format!("could not continue the thread at `{parent}`"))?
      .error_for_status()?
      .json::<Vec<Thing>>()
      .context("could not parse the continued thread response")?;

    let (_, things) = split_listings(listings)?;

    for thing in things {
      if let Thing::Comment(comment) = thing
        && comment.name == parent_id
      {
        return Ok(comment.replies);
      }
    }

    Ok(Vec::new())
  }

  fn comment_things(
    &self,
    token: &AccessToken,
    id: &str,
    sort: &str,
  ) -> Result<(Submission, Vec<Thing>)> {
    let listings = self
      .http
      .get(format!("{}/comments/{id}", Self::API_BASE_URL))
      .bearer_auth(&token.access_token)
      .query(&[
        ("limit", Self::COMMENT_LISTING_LIMIT),
        ("raw_json", "1"),
        ("sort", sort),
      ])
      .send()
      .with_context(|| format!("could not fetch submission `{id}`"))?
      .error_for_status()
      .with_context(|| format!("reddit rejected the request for `{id}`"))?
      .json::<Vec<Thing>>()
      .context("could not parse the submission response")?;

    split_listings(listings)
  }

  fn more_children(
    &self,
    token: &AccessToken,
    link_id: &str,
    children: &[String],
    sort: &str,
  ) -> Result<Vec<Thing>> {
    let children = children.join(",");

    let response = self
      .http
      .get(format!("{}/api/morechildren", Self::API_BASE_URL))
      .bearer_auth(&token.access_token)
      .query(&[
        ("api_type", "json"),
        ("children", children.as_str()),
        ("limit_children", "false"),
        ("link_id", link_id),
        ("raw_json", "1"),
        ("sort", sort),
      ])
      .send()
      .context("could not fetch additional comments")?
      .error_for_status()?
      .json::<MoreChildren>()
      .context("could not parse the additional comments response")?;

    Ok(response.json.data.things)
  }

  pub(crate) fn new(config: &Config) -> Result<Self> {
    let http = reqwest::blocking::Client::builder()
      .user_agent(config.user_agent.as_str())
      .build()
      .context("could not build the http client")?;

    Ok(Self {
      client_id: config.client_id.clone(),
      client_secret: config.client_secret.clone(),
      http,
    })
  }
}

impl SubmissionSource for Client {
  fn fetch_thread(&self, url: &str, sort: &str) -> Result<Thread> {
    let id = submission_id(url)?;

    let token = self.authenticate()?;

    let (submission, things) = self.comment_things(&token, &id, sort)?;

    let link_id = format!("t3_{id}");

    let mut forest = Forest::new(things);

    while let Some(more) = forest.next_more() {
      if more.children.is_empty() {
        if more.parent_id.starts_with("t1_") {
          let replies =
            self.comment_subtree(&token, &id, &more.parent_id, sort)?;

          forest.graft_under(&more.parent_id, replies);
        }

        continue;
      }

      for batch in more.children.chunks(Self::MORE_CHILDREN_BATCH) {
        let things = self.more_children(&token, &link_id, batch, sort)?;

        forest.graft(things);
      }
    }

    Ok(Thread {
      comments: forest.flatten(),
      submission,
    })
  }
}

fn split_listings(listings: Vec<Thing>) -> Result<(Submission, Vec<Thing>)> {
  let mut listings = listings.into_iter();

  let submission = match listings.next() {
    Some(Thing::Listing(listing)) => {
      listing.children.into_iter().find_map(|thing| match thing {
        Thing::Submission(submission) => Some(submission),
        _ => None,
      })
    }
    _ => None,
  }
  .context("response did not include a submission")?;

  let comments = match listings.next() {
    Some(Thing::Listing(listing)) => listing.children,
    _ => Vec::new(),
  };

  Ok((submission, comments))
}

fn submission_id(url: &str) -> Result<String> {
  let parsed = reqwest::Url::parse(url)
    .with_context(|| format!("invalid submission url `{url}`"))?;

  let segments = match parsed.path_segments() {
    Some(segments) => segments
      .filter(|segment| !segment.is_empty())
      .map(str::to_string)
      .collect::<Vec<_>>(),
    None => Vec::new(),
  };

  let host = parsed.host_str().unwrap_or_default();

  let id = if host == "redd.it" {
    segments.first().cloned()
  } else {
    segments
      .iter()
      .position(|segment| segment == "comments")
      .and_then(|position| segments.get(position + 1).cloned())
  };

  id.with_context(|| format!("could not find a submission id in `{url}`"))
}
