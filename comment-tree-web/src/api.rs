use anyhow::Context;
use comment_tree_client::{
    api::{Comment, CommentId, Error as ApiError, ListQuery, NewComment},
    CommentNode,
};

/// Turns a non-success response into the server's error, falling back to a
/// generic one when the body is not the tagged-JSON error encoding
async fn check(resp: reqwest::Response) -> anyhow::Result<reqwest::Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.bytes().await.context("reading error response")?;
    match ApiError::parse(&body) {
        Ok(err) => Err(anyhow::Error::new(err)),
        Err(_) => Err(anyhow::anyhow!("server returned status {}", status)),
    }
}

pub async fn fetch_comments(q: &ListQuery) -> anyhow::Result<Vec<Comment>> {
    let resp = crate::CLIENT
        .get(format!("{}/api/comments", crate::API_HOST))
        .query(q)
        .send()
        .await
        .context("fetching comment list")?;
    check(resp)
        .await?
        .json()
        .await
        .context("parsing comment list")
}

pub async fn fetch_thread(id: CommentId) -> anyhow::Result<CommentNode> {
    let resp = crate::CLIENT
        .get(format!("{}/api/comments/{}", crate::API_HOST, id.0))
        .send()
        .await
        .context("fetching comment thread")?;
    check(resp)
        .await?
        .json()
        .await
        .context("parsing comment thread")
}

pub async fn create_comment(data: &NewComment) -> anyhow::Result<Comment> {
    let resp = crate::CLIENT
        .post(format!("{}/api/comments", crate::API_HOST))
        .json(data)
        .send()
        .await
        .context("submitting comment")?;
    check(resp)
        .await?
        .json()
        .await
        .context("parsing created comment")
}

pub async fn delete_comment(id: CommentId) -> anyhow::Result<()> {
    let resp = crate::CLIENT
        .delete(format!("{}/api/comments/{}", crate::API_HOST, id.0))
        .send()
        .await
        .context("deleting comment")?;
    check(resp).await?;
    Ok(())
}
