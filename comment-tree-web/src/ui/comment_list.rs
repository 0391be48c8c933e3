use comment_tree_client::{
    api::{CommentId, NewComment},
    CommentNode,
};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentListProps {
    pub comments: Vec<CommentNode>,
    pub on_reply: Callback<NewComment>,
    pub on_delete: Callback<CommentId>,
    pub on_open_thread: Callback<CommentId>,
}

#[function_component(CommentList)]
pub fn comment_list(p: &CommentListProps) -> Html {
    if p.comments.is_empty() {
        return html! { <p class="no-comments">{ "No comments found" }</p> };
    }
    html! {
        <div class="comment-list">
            { for p.comments.iter().map(|node| html! {
                <ui::CommentItem
                    node={node.clone()}
                    on_reply={p.on_reply.clone()}
                    on_delete={p.on_delete.clone()}
                    on_open_thread={p.on_open_thread.clone()}
                />
            }) }
        </div>
    }
}
