use comment_tree_client::{
    api::{CommentId, NewComment},
    CommentNode,
};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct ThreadViewProps {
    /// None while the thread fetch is still in flight
    pub thread: Option<CommentNode>,
    pub on_back: Callback<()>,
    pub on_reply: Callback<NewComment>,
    pub on_delete: Callback<CommentId>,
    pub on_open_thread: Callback<CommentId>,
}

#[function_component(ThreadView)]
pub fn thread_view(p: &ThreadViewProps) -> Html {
    let body = match &p.thread {
        None => html! { <p>{ "Loading..." }</p> },
        Some(node) => html! {
            <ui::CommentItem
                node={node.clone()}
                on_reply={p.on_reply.clone()}
                on_delete={p.on_delete.clone()}
                on_open_thread={p.on_open_thread.clone()}
            />
        },
    };
    html! {
        <>
            <button class="back-link" onclick={p.on_back.reform(|_| ())}>
                { "Back to main comments" }
            </button>
            <h1>{ "Comment Thread" }</h1>
            { body }
        </>
    }
}
