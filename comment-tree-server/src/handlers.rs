use anyhow::Context;
use axum::{
    extract::{Path, Query},
    Json,
};
use comment_tree_api::{Comment, CommentId, ListQuery, NewComment, Uuid};
use comment_tree_client::{build_thread, CommentNode};

use crate::{db, extractors::PgConn, Error};

pub async fn create_comment(
    mut conn: PgConn,
    Json(data): Json<NewComment>,
) -> Result<Json<Comment>, Error> {
    data.validate()?;
    let comment = db::create_comment(&mut *conn, data)
        .await
        .context("creating comment")?;
    tracing::debug!(id = ?comment.id, parent = ?comment.parent_id, "created comment");
    Ok(Json(comment))
}

pub async fn list_comments(
    Query(q): Query<ListQuery>,
    mut conn: PgConn,
) -> Result<Json<Vec<Comment>>, Error> {
    let q = q.normalized();
    q.validate()?;
    Ok(Json(
        db::fetch_comments(&mut *conn, &q)
            .await
            .with_context(|| format!("fetching comment list for {:?}", q))?,
    ))
}

pub async fn fetch_thread(
    Path(id): Path<Uuid>,
    mut conn: PgConn,
) -> Result<Json<CommentNode>, Error> {
    let id = CommentId(id);
    let flat = db::fetch_thread(&mut *conn, id)
        .await
        .with_context(|| format!("fetching thread for {:?}", id))?;
    build_thread(id, &flat)
        .map(Json)
        .ok_or_else(|| Error::comment_not_found(id.0))
}

pub async fn delete_comment(Path(id): Path<Uuid>, mut conn: PgConn) -> Result<(), Error> {
    db::delete_comment(&mut *conn, CommentId(id)).await
}
