use super::*;

use std::{
  collections::{HashMap, VecDeque},
  mem,
};

pub(crate) struct Forest {
  index: HashMap<String, usize>,
  nodes: Vec<Node>,
  pending: VecDeque<usize>,
  roots: Vec<usize>,
}

enum Node {
  Comment {
    children: Vec<usize>,
    comment: CommentData,
  },
  More(Option<MoreData>),
}

impl Forest {
  fn attach(&mut self, thing: Thing, parent: Option<usize>) {
    match thing {
      Thing::Comment(mut comment) => {
        let replies = mem::take(&mut comment.replies);

        let idx = self.nodes.len();

        if !comment.name.is_empty() {
          self.index.insert(comment.name.clone(), idx);
        }

        self.nodes.push(Node::Comment {
          children: Vec::new(),
          comment,
        });

        self.link(parent, idx);

        for reply in replies {
          self.attach(reply, Some(idx));
        }
      }
      Thing::Listing(listing) => {
        for child in listing.children {
          self.attach(child, parent);
        }
      }
      Thing::More(more) => {
        let idx = self.nodes.len();

        self.nodes.push(Node::More(Some(more)));

        self.link(parent, idx);

        self.pending.push_back(idx);
      }
      Thing::Submission(_) => {}
    }
  }

  pub(crate) fn flatten(&self) -> Vec<Comment> {
    let mut comments = Vec::new();

    for &root in &self.roots {
      self.flatten_node(root, 0, &mut comments);
    }

    comments
  }

  fn flatten_node(&self, idx: usize, depth: usize, comments: &mut Vec<Comment>) {
    let Some(Node::Comment { children, comment }) = self.nodes.get(idx) else {
      return;
    };

    comments.push(Comment {
      author: comment.author.clone(),
      body: comment.body.clone().unwrap_or_default(),
      depth,
      score: comment.score,
    });

    for &child in children {
      self.flatten_node(child, depth + 1, comments);
    }
  }

  pub(crate) fn graft(&mut self, things: Vec<Thing>) {
    for thing in things {
      let parent = self.parent_of(&thing);

      self.attach(thing, parent);
    }
  }

  pub(crate) fn graft_under(&mut self, parent_id: &str, things: Vec<Thing>) {
    let parent = self.index.get(parent_id).copied();

    for thing in things {
      self.attach(thing, parent);
    }
  }

  fn link(&mut self, parent: Option<usize>, idx: usize) {
    match parent {
      Some(parent) => {
        if let Some(Node::Comment { children, .. }) = self.nodes.get_mut(parent)
        {
          children.push(idx);
        }
      }
      None => self.roots.push(idx),
    }
  }

  pub(crate) fn new(things: Vec<Thing>) -> Self {
    let mut forest = Self {
      index: HashMap::new(),
      nodes: Vec::new(),
      pending: VecDeque::new(),
      roots: Vec::new(),
    };

    for thing in things {
      forest.attach(thing, None);
    }

    forest
  }

  pub(crate) fn next_more(&mut self) -> Option<MoreData> {
    while let Some(idx) = self.pending.pop_front() {
      if let Some(Node::More(more)) = self.nodes.get_mut(idx)
        && let Some(more) = more.take()
      {
        return Some(more);
      }
    }

    None
  }

  fn parent_of(&self, thing: &Thing) -> Option<usize> {
    let parent_id = match thing {
      Thing::Comment(comment) => comment.parent_id.as_deref(),
      Thing::More(more) => Some(more.parent_id.as_str()),
      Thing::Listing(_) | Thing::Submission(_) => None,
    };

    parent_id.and_then(|parent_id| self.index.get(parent_id).copied())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json};

  fn comment_thing(
    name: &str,
    parent_id: &str,
    body: &str,
    replies: serde_json::Value,
  ) -> Thing {
    serde_json::from_value(json!({
      "kind": "t1",
      "data": {
        "author": name.trim_start_matches("t1_"),
        "body": body,
        "name": name,
        "parent_id": parent_id,
        "replies": replies,
        "score": 1
      }
    }))
    .unwrap()
  }

  fn more_thing(parent_id: &str, children: &[&str]) -> Thing {
    serde_json::from_value(json!({
      "kind": "more",
      "data": {
        "children": children,
        "parent_id": parent_id
      }
    }))
    .unwrap()
  }

  fn reply_listing(things: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
      "kind": "Listing",
      "data": {
        "children": things
      }
    })
  }

  fn bodies_with_depths(forest: &Forest) -> Vec<(String, usize)> {
    forest
      .flatten()
      .into_iter()
      .map(|comment| (comment.body, comment.depth))
      .collect()
  }

  #[test]
  fn flatten_walks_the_tree_in_pre_order_with_depths() {
    let nested = reply_listing(vec![json!({
      "kind": "t1",
      "data": {
        "body": "grandchild",
        "name": "t1_ccc",
        "parent_id": "t1_bbb",
        "replies": ""
      }
    })]);

    let child = reply_listing(vec![json!({
      "kind": "t1",
      "data": {
        "body": "child",
        "name": "t1_bbb",
        "parent_id": "t1_aaa",
        "replies": nested
      }
    })]);

    let forest = Forest::new(vec![
      comment_thing("t1_aaa", "t3_abc", "root", child),
      comment_thing("t1_ddd", "t3_abc", "sibling", json!("")),
    ]);

    assert_eq!(
      bodies_with_depths(&forest),
      vec![
        ("root".to_string(), 0),
        ("child".to_string(), 1),
        ("grandchild".to_string(), 2),
        ("sibling".to_string(), 0),
      ]
    );
  }

  #[test]
  fn next_more_drains_each_placeholder_once() {
    let mut forest = Forest::new(vec![
      comment_thing("t1_aaa", "t3_abc", "root", json!("")),
      more_thing("t3_abc", &["bbb"]),
    ]);

    let more = forest.next_more().unwrap();
    assert_eq!(more.children, vec!["bbb".to_string()]);

    assert!(forest.next_more().is_none());
  }

  #[test]
  fn flatten_skips_unresolved_placeholders() {
    let forest = Forest::new(vec![
      comment_thing("t1_aaa", "t3_abc", "root", json!("")),
      more_thing("t3_abc", &["bbb"]),
    ]);

    assert_eq!(bodies_with_depths(&forest), vec![("root".to_string(), 0)]);
  }

  #[test]
  fn graft_attaches_flat_things_under_their_own_parents() {
    let mut forest = Forest::new(vec![
      comment_thing("t1_aaa", "t3_abc", "root", json!("")),
      more_thing("t3_abc", &["bbb", "ccc"]),
    ]);

    forest.next_more().unwrap();

    forest.graft(vec![
      comment_thing("t1_bbb", "t1_aaa", "reply", json!("")),
      comment_thing("t1_ccc", "t1_bbb", "deep reply", json!("")),
    ]);

    assert_eq!(
      bodies_with_depths(&forest),
      vec![
        ("root".to_string(), 0),
        ("reply".to_string(), 1),
        ("deep reply".to_string(), 2),
      ]
    );
  }

  #[test]
  fn graft_falls_back_to_the_root_for_unknown_parents() {
    let mut forest = Forest::new(Vec::new());

    forest.graft(vec![comment_thing("t1_zzz", "t1_unknown", "stray", json!(""))]);

    assert_eq!(bodies_with_depths(&forest), vec![("stray".to_string(), 0)]);
  }

  #[test]
  fn graft_under_splices_a_subtree_beneath_its_parent() {
    let deep = reply_listing(vec![json!({
      "kind": "t1",
      "data": {
        "body": "continued reply",
        "name": "t1_ggg",
        "parent_id": "t1_fff",
        "replies": ""
      }
    })]);

    let mut forest = Forest::new(vec![comment_thing(
      "t1_eee",
      "t3_abc",
      "deep parent",
      json!(""),
    )]);

    forest.graft_under(
      "t1_eee",
      vec![comment_thing("t1_fff", "t1_eee", "continued", deep)],
    );

    assert_eq!(
      bodies_with_depths(&forest),
      vec![
        ("deep parent".to_string(), 0),
        ("continued".to_string(), 1),
        ("continued reply".to_string(), 2),
      ]
    );
  }

  #[test]
  fn grafted_placeholders_join_the_pending_queue() {
    let mut forest = Forest::new(vec![comment_thing(
      "t1_aaa",
      "t3_abc",
      "root",
      json!(""),
    )]);

    forest.graft(vec![more_thing("t1_aaa", &["ggg"])]);

    let more = forest.next_more().unwrap();
    assert_eq!(more.parent_id, "t1_aaa");
  }
}
