use crate::{CommentId, Error};

pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    CreatedAsc,
    CreatedDesc,
    UpdatedAsc,
    UpdatedDesc,
}

impl Default for SortOrder {
    fn default() -> SortOrder {
        SortOrder::CreatedDesc
    }
}

/// Parameters of the comment listing endpoint. All fields are optional on
/// the wire; out-of-range pagination values fall back to the defaults
/// instead of being rejected.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListQuery {
    /// Restrict to direct replies of this comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<CommentId>,

    /// Full-text search over comment contents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(default)]
    pub sort: SortOrder,

    #[serde(default = "default_limit")]
    pub limit: i64,

    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for ListQuery {
    fn default() -> ListQuery {
        ListQuery {
            parent: None,
            search: None,
            sort: SortOrder::default(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl ListQuery {
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(search) = &self.search {
            crate::validate_string(search)?;
        }
        Ok(())
    }

    /// Replaces out-of-range pagination parameters with the defaults
    pub fn normalized(mut self) -> ListQuery {
        if self.limit <= 0 {
            self.limit = DEFAULT_LIMIT;
        }
        if self.offset < 0 {
            self.offset = 0;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameters_fall_back_to_defaults() {
        let q: ListQuery = serde_json::from_str("{}").expect("parsing empty query");
        assert_eq!(q, ListQuery::default());
        assert_eq!(q.sort, SortOrder::CreatedDesc);
        assert_eq!(q.limit, DEFAULT_LIMIT);
        assert_eq!(q.offset, 0);
    }

    #[test]
    fn sort_order_wire_names() {
        for (s, o) in [
            ("\"created_asc\"", SortOrder::CreatedAsc),
            ("\"created_desc\"", SortOrder::CreatedDesc),
            ("\"updated_asc\"", SortOrder::UpdatedAsc),
            ("\"updated_desc\"", SortOrder::UpdatedDesc),
        ] {
            assert_eq!(serde_json::from_str::<SortOrder>(s).unwrap(), o);
        }
        assert!(serde_json::from_str::<SortOrder>("\"created_at_asc\"").is_err());
    }

    #[test]
    fn normalization_resets_bad_pagination() {
        let q = ListQuery {
            limit: -3,
            offset: -1,
            ..ListQuery::default()
        };
        let q = q.normalized();
        assert_eq!(q.limit, DEFAULT_LIMIT);
        assert_eq!(q.offset, 0);

        let q = ListQuery {
            limit: 50,
            offset: 20,
            ..ListQuery::default()
        };
        let q = q.normalized();
        assert_eq!(q.limit, 50);
        assert_eq!(q.offset, 20);
    }

    #[test]
    fn search_with_null_byte_is_rejected() {
        let q = ListQuery {
            search: Some(String::from("foo\0bar")),
            ..ListQuery::default()
        };
        assert_eq!(
            q.validate(),
            Err(Error::NullByteInString(String::from("foo\0bar")))
        );
    }
}
