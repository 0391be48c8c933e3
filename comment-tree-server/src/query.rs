use comment_tree_api::{ListQuery, SortOrder, Uuid};

pub enum QueryBind {
    Uuid(Uuid),
    String(String),
    Int(i64),
}

/// SQL fragments for a comment listing, with `binds` numbered from
/// `first_bind_idx`. Assumes the `comments` table is available unqualified.
#[derive(Default)]
pub struct SqlQuery {
    pub where_clause: String,
    pub order_clause: String,
    pub binds: Vec<QueryBind>,
}

impl SqlQuery {
    /// Adds a QueryBind, returning the index that should be used to refer to
    /// it assuming the first bind is at index first_bind_idx
    fn add_bind(&mut self, first_bind_idx: usize, b: QueryBind) -> usize {
        let res = first_bind_idx + self.binds.len();
        self.binds.push(b);
        res
    }
}

/// Expects `q` to have been normalized and validated beforehand
pub fn to_postgres(q: &ListQuery, first_bind_idx: usize) -> SqlQuery {
    let mut res = SqlQuery::default();
    res.where_clause.push_str("(true");

    if let Some(parent) = q.parent {
        let idx = res.add_bind(first_bind_idx, QueryBind::Uuid(parent.0));
        res.where_clause
            .push_str(&format!(" AND parent_id = ${}", idx));
    }

    if let Some(search) = &q.search {
        let idx = res.add_bind(first_bind_idx, QueryBind::String(search.clone()));
        res.where_clause.push_str(&format!(
            " AND to_tsvector('english', content) @@ plainto_tsquery('english', ${})",
            idx
        ));
    }

    res.where_clause.push(')');

    res.order_clause.push_str(match q.sort {
        SortOrder::CreatedAsc => "created_at ASC",
        SortOrder::CreatedDesc => "created_at DESC",
        SortOrder::UpdatedAsc => "updated_at ASC",
        SortOrder::UpdatedDesc => "updated_at DESC",
    });

    let limit = res.add_bind(first_bind_idx, QueryBind::Int(q.limit));
    let offset = res.add_bind(first_bind_idx, QueryBind::Int(q.offset));
    res.order_clause
        .push_str(&format!(" LIMIT ${} OFFSET ${}", limit, offset));

    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use comment_tree_api::CommentId;

    #[test]
    fn empty_query_only_binds_pagination() {
        let sql = to_postgres(&ListQuery::default(), 1);
        assert_eq!(sql.where_clause, "(true)");
        assert_eq!(sql.order_clause, "created_at DESC LIMIT $1 OFFSET $2");
        assert_eq!(sql.binds.len(), 2);
    }

    #[test]
    fn every_active_filter_gets_one_bind() {
        let q = ListQuery {
            parent: Some(CommentId::stub()),
            search: Some(String::from("hello world")),
            sort: SortOrder::UpdatedAsc,
            limit: 20,
            offset: 40,
        };
        let sql = to_postgres(&q, 1);
        assert_eq!(
            sql.where_clause,
            "(true AND parent_id = $1 \
             AND to_tsvector('english', content) @@ plainto_tsquery('english', $2))"
        );
        assert_eq!(sql.order_clause, "updated_at ASC LIMIT $3 OFFSET $4");
        assert_eq!(sql.binds.len(), 4);
    }

    #[test]
    fn binds_are_numbered_from_first_bind_idx() {
        let q = ListQuery {
            parent: Some(CommentId::stub()),
            ..ListQuery::default()
        };
        let sql = to_postgres(&q, 3);
        assert_eq!(sql.where_clause, "(true AND parent_id = $3)");
        assert_eq!(sql.order_clause, "created_at DESC LIMIT $4 OFFSET $5");
    }
}
