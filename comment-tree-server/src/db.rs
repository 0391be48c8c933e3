use anyhow::Context;
use comment_tree_api::{Comment, CommentId, ListQuery, NewComment, Time};
use sqlx::{postgres::PgRow, Row};
use uuid::Uuid;

use crate::{query, query::QueryBind, Error};

fn comment_from_row(row: &PgRow) -> anyhow::Result<Comment> {
    Ok(Comment {
        id: CommentId(row.try_get::<Uuid, _>("id").context("getting id column")?),
        parent_id: row
            .try_get::<Option<Uuid>, _>("parent_id")
            .context("getting parent_id column")?
            .map(CommentId),
        content: row.try_get("content").context("getting content column")?,
        created_at: row
            .try_get::<Time, _>("created_at")
            .context("getting created_at column")?,
        updated_at: row
            .try_get::<Time, _>("updated_at")
            .context("getting updated_at column")?,
    })
}

pub async fn create_comment(
    conn: &mut sqlx::PgConnection,
    data: NewComment,
) -> anyhow::Result<Comment> {
    let row = sqlx::query(
        "
            INSERT INTO comments (parent_id, content)
            VALUES ($1, $2)
            RETURNING id, parent_id, content, created_at, updated_at
        ",
    )
    .bind(data.parent_id.map(|p| p.0))
    .bind(&data.content)
    .fetch_one(conn)
    .await
    .context("inserting comment")?;
    comment_from_row(&row)
}

pub async fn fetch_comments(
    conn: &mut sqlx::PgConnection,
    q: &ListQuery,
) -> anyhow::Result<Vec<Comment>> {
    let sql = query::to_postgres(q, 1);
    let sql_string = format!(
        "
            SELECT id, parent_id, content, created_at, updated_at
            FROM comments
            WHERE {}
            ORDER BY {}
        ",
        sql.where_clause, sql.order_clause,
    );
    let mut sqlx_query = sqlx::query(&sql_string);
    for bind in sql.binds {
        sqlx_query = match bind {
            QueryBind::Uuid(u) => sqlx_query.bind(u),
            QueryBind::String(s) => sqlx_query.bind(s),
            QueryBind::Int(i) => sqlx_query.bind(i),
        };
    }
    sqlx_query
        .fetch_all(conn)
        .await
        .context("querying comments table")?
        .iter()
        .map(comment_from_row)
        .collect()
}

/// Returns the comment itself and all its descendants, as a flat list
pub async fn fetch_thread(
    conn: &mut sqlx::PgConnection,
    id: CommentId,
) -> anyhow::Result<Vec<Comment>> {
    sqlx::query(
        "
            WITH RECURSIVE thread AS (
                SELECT id, parent_id, content, created_at, updated_at
                FROM comments
                WHERE id = $1
                UNION ALL
                SELECT c.id, c.parent_id, c.content, c.created_at, c.updated_at
                FROM comments c
                JOIN thread t ON c.parent_id = t.id
            )
            SELECT id, parent_id, content, created_at, updated_at
            FROM thread
            ORDER BY created_at
        ",
    )
    .bind(id.0)
    .fetch_all(conn)
    .await
    .context("querying comment thread")?
    .iter()
    .map(comment_from_row)
    .collect()
}

/// Deletes the comment and all its descendants
pub async fn delete_comment(conn: &mut sqlx::PgConnection, id: CommentId) -> Result<(), Error> {
    let res = sqlx::query(
        "
            WITH RECURSIVE to_delete AS (
                SELECT id FROM comments WHERE id = $1
                UNION ALL
                SELECT c.id
                FROM comments c
                JOIN to_delete td ON c.parent_id = td.id
            )
            DELETE FROM comments
            WHERE id IN (SELECT id FROM to_delete)
        ",
    )
    .bind(id.0)
    .execute(conn)
    .await
    .context("deleting comment thread")?;

    match res.rows_affected() {
        0 => Err(Error::comment_not_found(id.0)),
        _ => Ok(()),
    }
}
