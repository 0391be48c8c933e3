mod tree;
pub use tree::{build_thread, build_tree, CommentNode};

pub mod api {
    pub use comment_tree_api::*;
}
