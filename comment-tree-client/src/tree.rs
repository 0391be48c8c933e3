use std::collections::HashMap;

use crate::api::{Comment, CommentId};

/// A comment together with its direct replies, newest first
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentNode {
    #[serde(flatten)]
    pub comment: Comment,
    pub children: Vec<CommentNode>,
}

/// Rebuilds the reply forest from a flat list of comments.
///
/// The input may be unordered, and in particular may list replies before the
/// comment they answer to. Roots keep the order the server returned them in;
/// within every node, `children` is sorted by creation date, newest first,
/// with ties keeping input order. A reply whose parent is not part of the
/// input is dropped, along with everything under it.
pub fn build_tree(comments: &[Comment]) -> Vec<CommentNode> {
    let (mut by_id, mut replies) = index(comments);

    let mut forest = Vec::new();
    for c in comments {
        if c.parent_id.is_none() {
            if let Some(root) = assemble(c.id, &mut by_id, &mut replies) {
                forest.push(root);
            }
        }
    }
    forest
}

/// Rebuilds the subtree rooted at `root` from a flat thread snapshot.
///
/// Unlike [`build_tree`], the root is kept even when its own `parent_id`
/// points outside the snapshot, which is always the case for the thread
/// endpoint of a non-root comment. Returns `None` when `root` is not in the
/// input at all.
pub fn build_thread(root: CommentId, comments: &[Comment]) -> Option<CommentNode> {
    let (mut by_id, mut replies) = index(comments);
    assemble(root, &mut by_id, &mut replies)
}

type Replies = HashMap<CommentId, Vec<CommentId>>;

/// Index pass: one map from id to record (duplicate ids are last-write-wins)
/// and one map from id to the replies seen for it, in input order
fn index(comments: &[Comment]) -> (HashMap<CommentId, Comment>, Replies) {
    let mut by_id = HashMap::with_capacity(comments.len());
    let mut replies: Replies = HashMap::new();
    for c in comments {
        by_id.insert(c.id, c.clone());
    }
    for c in comments {
        if let Some(parent) = c.parent_id {
            if by_id.contains_key(&parent) {
                replies.entry(parent).or_default().push(c.id);
            } else {
                tracing::warn!(id = ?c.id, ?parent, "dropping reply to unknown comment");
            }
        }
    }
    (by_id, replies)
}

fn assemble(
    id: CommentId,
    by_id: &mut HashMap<CommentId, Comment>,
    replies: &mut Replies,
) -> Option<CommentNode> {
    // Removing from the maps guarantees each record lands in the output at
    // most once, even for malformed inputs with duplicate ids or parent_id
    // cycles.
    let comment = by_id.remove(&id)?;
    let mut children: Vec<CommentNode> = replies
        .remove(&id)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|child| assemble(child, by_id, replies))
        .collect();
    children.sort_by(|a, b| b.comment.created_at.cmp(&a.comment.created_at));
    Some(CommentNode { comment, children })
}
