use comment_tree_client::api::{CommentId, NewComment};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentFormProps {
    /// None for a new root comment
    #[prop_or_default]
    pub parent_id: Option<CommentId>,
    pub on_submit: Callback<NewComment>,
}

#[function_component(CommentForm)]
pub fn comment_form(p: &CommentFormProps) -> Html {
    let content = use_state(String::new);

    let oninput = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            content.set(input.value());
        })
    };

    let onclick = {
        let content = content.clone();
        let parent_id = p.parent_id;
        p.on_submit.reform(move |_| {
            let data = NewComment {
                parent_id,
                content: (*content).clone(),
            };
            content.set(String::new());
            data
        })
    };

    html! {
        <div class="comment-form">
            <textarea
                rows="3"
                placeholder="Write your comment..."
                value={(*content).clone()}
                {oninput}
            />
            <button
                type="button"
                disabled={content.trim().is_empty()}
                {onclick}
            >
                { "Post Comment" }
            </button>
        </div>
    }
}
