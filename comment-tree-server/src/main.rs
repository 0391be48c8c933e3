use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use structopt::StructOpt;

mod db;
mod error;
mod extractors;
mod handlers;
mod query;

pub use error::Error;
use extractors::{AppState, PgPool};

#[derive(Debug, StructOpt)]
#[structopt(name = "comment-tree-server", about = "HTTP API for threaded comments")]
struct Opt {
    /// Address to listen on
    #[structopt(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,
}

fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/comments",
            post(handlers::create_comment).get(handlers::list_comments),
        )
        .route(
            "/api/comments/:id",
            get(handlers::fetch_thread).delete(handlers::delete_comment),
        )
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let opt = Opt::from_args();

    let db_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(8)
        .connect(&db_url)
        .await
        .with_context(|| format!("opening database {:?}", db_url))?;
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("running migrations")?;

    let app = app(AppState {
        db: PgPool::new(pool),
    });

    tracing::info!("listening on {}", opt.bind);
    axum::Server::bind(&opt.bind)
        .serve(app.into_make_service())
        .await
        .context("serving axum webserver")
}
