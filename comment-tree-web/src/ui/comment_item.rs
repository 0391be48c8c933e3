use comment_tree_client::{
    api::{CommentId, NewComment},
    CommentNode,
};
use yew::prelude::*;

use crate::ui;

/// Above this many direct replies, the replies are not expanded inline but
/// linked out to the dedicated thread view. A rendering policy only, the
/// tree builder knows nothing about it.
pub const INLINE_REPLIES_MAX: usize = 4;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentItemProps {
    pub node: CommentNode,
    pub on_reply: Callback<NewComment>,
    pub on_delete: Callback<CommentId>,
    pub on_open_thread: Callback<CommentId>,
}

#[function_component(CommentItem)]
pub fn comment_item(p: &CommentItemProps) -> Html {
    let show_reply_form = use_state(|| false);
    let show_children = use_state(|| false);

    let id = p.node.comment.id;
    let num_children = p.node.children.len();

    let reply_toggle = {
        let shown = show_reply_form.clone();
        let label = match *show_reply_form {
            true => "Cancel",
            false => "Reply",
        };
        html! {
            <button onclick={Callback::from(move |_| shown.set(!*shown))}>
                { label }
            </button>
        }
    };

    let children_toggle = (num_children > 0).then(|| {
        let shown = show_children.clone();
        let verb = match *show_children {
            true => "Hide",
            false => "Show",
        };
        let noun = match num_children {
            1 => "reply",
            _ => "replies",
        };
        html! {
            <button onclick={Callback::from(move |_| shown.set(!*shown))}>
                { format!("{} {} {}", verb, num_children, noun) }
            </button>
        }
    });

    let reply_form = (*show_reply_form).then(|| {
        let on_submit = {
            let shown = show_reply_form.clone();
            p.on_reply.reform(move |data| {
                shown.set(false);
                data
            })
        };
        html! { <ui::CommentForm parent_id={Some(id)} {on_submit} /> }
    });

    let children = (*show_children && num_children > 0).then(|| {
        if num_children > INLINE_REPLIES_MAX {
            html! {
                <button
                    class="thread-link"
                    onclick={p.on_open_thread.reform(move |_| id)}
                >
                    { format!("View all {} replies in a separate page...", num_children) }
                </button>
            }
        } else {
            html! {
                <div class="replies">
                    { for p.node.children.iter().map(|child| html! {
                        <CommentItem
                            node={child.clone()}
                            on_reply={p.on_reply.clone()}
                            on_delete={p.on_delete.clone()}
                            on_open_thread={p.on_open_thread.clone()}
                        />
                    }) }
                </div>
            }
        }
    });

    html! {
        <div class="comment">
            <p class="comment-content">{ &p.node.comment.content }</p>
            <p class="comment-date">
                { p.node.comment.created_at.format("%Y-%m-%d %H:%M").to_string() }
            </p>
            <button onclick={p.on_delete.reform(move |_| id)}>{ "Delete" }</button>
            { reply_toggle }
            { for children_toggle }
            { for reply_form }
            { for children }
        </div>
    }
}
