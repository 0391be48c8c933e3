mod app;
pub use app::{App, AppMsg};

mod comment_form;
pub use comment_form::CommentForm;

mod comment_item;
pub use comment_item::{CommentItem, INLINE_REPLIES_MAX};

mod comment_list;
pub use comment_list::CommentList;

mod search_bar;
pub use search_bar::SearchBar;

mod thread_view;
pub use thread_view::ThreadView;
