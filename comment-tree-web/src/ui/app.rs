use comment_tree_client::{
    api::{Comment, CommentId, ListQuery, NewComment, DEFAULT_LIMIT},
    build_tree, CommentNode,
};
use yew::prelude::*;

use crate::{api, ui};

pub enum View {
    List,
    Thread(CommentId),
}

pub enum AppMsg {
    ReceivedComments(Vec<Comment>),
    ReceivedThread(Box<CommentNode>),
    SearchChanged(String),
    PrevPage,
    NextPage,
    OpenThread(CommentId),
    CloseThread,
    SubmitComment(NewComment),
    CommentCreated(Comment),
    DeleteComment(CommentId),
    CommentDeleted,
    RequestFailed(String),
}

pub struct App {
    view: View,
    forest: Vec<CommentNode>,
    /// Number of records in the last listing fetch, before tree-building;
    /// drives the Next button
    flat_len: usize,
    thread: Option<CommentNode>,
    search: String,
    page: i64,
    loading: bool,
    error: Option<String>,
}

impl App {
    fn list_query(&self) -> ListQuery {
        ListQuery {
            search: (!self.search.is_empty()).then(|| self.search.clone()),
            offset: (self.page - 1) * DEFAULT_LIMIT,
            ..ListQuery::default()
        }
    }

    /// Refetches the flat list backing the current view; the forest is
    /// rebuilt from scratch when the response lands
    fn refetch(&mut self, ctx: &Context<Self>) {
        self.loading = true;
        match self.view {
            View::List => {
                let q = self.list_query();
                ctx.link().send_future(async move {
                    match api::fetch_comments(&q).await {
                        Ok(comments) => AppMsg::ReceivedComments(comments),
                        Err(err) => AppMsg::RequestFailed(format!("{err:#}")),
                    }
                });
            }
            View::Thread(id) => {
                ctx.link().send_future(async move {
                    match api::fetch_thread(id).await {
                        Ok(node) => AppMsg::ReceivedThread(Box::new(node)),
                        Err(err) => AppMsg::RequestFailed(format!("{err:#}")),
                    }
                });
            }
        }
    }
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut this = App {
            view: View::List,
            forest: Vec::new(),
            flat_len: 0,
            thread: None,
            search: String::new(),
            page: 1,
            loading: false,
            error: None,
        };
        this.refetch(ctx);
        this
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ReceivedComments(comments) => {
                self.flat_len = comments.len();
                self.forest = build_tree(&comments);
                self.loading = false;
                self.error = None;
            }
            AppMsg::ReceivedThread(node) => {
                self.thread = Some(*node);
                self.loading = false;
                self.error = None;
            }
            AppMsg::SearchChanged(search) => {
                self.search = search;
                self.page = 1;
                self.refetch(ctx);
            }
            AppMsg::PrevPage => {
                self.page = std::cmp::max(1, self.page - 1);
                self.refetch(ctx);
            }
            AppMsg::NextPage => {
                self.page += 1;
                self.refetch(ctx);
            }
            AppMsg::OpenThread(id) => {
                self.view = View::Thread(id);
                self.thread = None;
                self.refetch(ctx);
            }
            AppMsg::CloseThread => {
                self.view = View::List;
                self.thread = None;
                self.refetch(ctx);
            }
            AppMsg::SubmitComment(data) => {
                ctx.link().send_future(async move {
                    match api::create_comment(&data).await {
                        Ok(comment) => AppMsg::CommentCreated(comment),
                        Err(err) => AppMsg::RequestFailed(format!("{err:#}")),
                    }
                });
            }
            AppMsg::CommentCreated(comment) => {
                match (&self.view, comment.parent_id) {
                    // A new root comment shows up immediately; the next
                    // refetch will put it at its server-assigned position
                    (View::List, None) => self.forest.insert(
                        0,
                        CommentNode {
                            comment,
                            children: Vec::new(),
                        },
                    ),
                    _ => self.refetch(ctx),
                }
            }
            AppMsg::DeleteComment(id) => {
                ctx.link().send_future(async move {
                    match api::delete_comment(id).await {
                        Ok(()) => AppMsg::CommentDeleted,
                        Err(err) => AppMsg::RequestFailed(format!("{err:#}")),
                    }
                });
            }
            AppMsg::CommentDeleted => {
                self.refetch(ctx);
            }
            AppMsg::RequestFailed(err) => {
                tracing::error!("request failed: {}", err);
                self.loading = false;
                self.error = Some(err);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_reply = ctx.link().callback(AppMsg::SubmitComment);
        let on_delete = ctx.link().callback(AppMsg::DeleteComment);
        let on_open_thread = ctx.link().callback(AppMsg::OpenThread);

        let error_banner = self
            .error
            .as_ref()
            .map(|err| html! { <div class="error-banner">{ err }</div> });
        let loading_banner = self.loading.then(|| html! { <p>{ "Loading..." }</p> });

        match self.view {
            View::List => html! {
                <div class="container">
                    <h1>{ "Comments" }</h1>
                    { for error_banner }
                    { for loading_banner }
                    <ui::SearchBar on_search={ctx.link().callback(AppMsg::SearchChanged)} />
                    <ui::CommentForm on_submit={on_reply.clone()} />
                    <ui::CommentList
                        comments={self.forest.clone()}
                        {on_reply}
                        {on_delete}
                        {on_open_thread}
                    />
                    <div class="pager">
                        <button
                            disabled={self.page == 1}
                            onclick={ctx.link().callback(|_| AppMsg::PrevPage)}
                        >
                            { "Previous" }
                        </button>
                        <button
                            disabled={(self.flat_len as i64) < DEFAULT_LIMIT}
                            onclick={ctx.link().callback(|_| AppMsg::NextPage)}
                        >
                            { "Next" }
                        </button>
                    </div>
                </div>
            },
            View::Thread(_) => html! {
                <div class="container">
                    { for error_banner }
                    <ui::ThreadView
                        thread={self.thread.clone()}
                        on_back={ctx.link().callback(|_| AppMsg::CloseThread)}
                        {on_reply}
                        {on_delete}
                        {on_open_thread}
                    />
                </div>
            },
        }
    }
}
