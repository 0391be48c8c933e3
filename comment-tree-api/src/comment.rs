use crate::{Error, Time, Uuid, STUB_UUID};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn stub() -> CommentId {
        CommentId(STUB_UUID)
    }
}

pub const MAX_CONTENT_LEN: usize = 1000;

/// One comment as stored by the server, with no nesting. `parent_id` being
/// `None` means this is a root comment.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub parent_id: Option<CommentId>,
    pub content: String,
    pub created_at: Time,
    pub updated_at: Time,
}

/// Submission payload; id and timestamps are assigned server-side
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    pub parent_id: Option<CommentId>,
    pub content: String,
}

impl NewComment {
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.content)?;
        if self.content.is_empty() || self.content.len() > MAX_CONTENT_LEN {
            return Err(Error::ContentLengthOutOfRange(self.content.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_comment(content: &str) -> NewComment {
        NewComment {
            parent_id: None,
            content: String::from(content),
        }
    }

    #[test]
    fn content_validation() {
        assert_eq!(new_comment("hello").validate(), Ok(()));
        assert_eq!(new_comment(&"x".repeat(MAX_CONTENT_LEN)).validate(), Ok(()));
        assert_eq!(
            new_comment("").validate(),
            Err(Error::ContentLengthOutOfRange(0))
        );
        assert_eq!(
            new_comment(&"x".repeat(MAX_CONTENT_LEN + 1)).validate(),
            Err(Error::ContentLengthOutOfRange(MAX_CONTENT_LEN + 1))
        );
        assert_eq!(
            new_comment("he\0llo").validate(),
            Err(Error::NullByteInString(String::from("he\0llo")))
        );
    }
}
