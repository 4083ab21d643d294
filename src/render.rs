use super::*;

pub(crate) fn render_comment(comment: &Comment) -> String {
  let author = match &comment.author {
    Some(name) => format!("u/{name}"),
    None => "[deleted]".to_string(),
  };

  let header = match comment.score {
    Some(score) => format!("{author} (score: {score})"),
    None => author,
  };

  let indent = "  ".repeat(comment.depth);

  format!("{indent}{header}\n{indent}{}", comment.body)
}

pub(crate) fn render_comments(
  comments: &[Comment],
  limit: Option<usize>,
) -> Vec<String> {
  let limit = limit.filter(|&limit| limit > 0);

  let mut rendered = Vec::new();

  for comment in comments {
    if comment.body.is_empty() {
      continue;
    }

    rendered.push(render_comment(comment));

    if let Some(limit) = limit
      && rendered.len() >= limit
    {
      break;
    }
  }

  rendered
}
