//! Composable video listing queries.
//!
//! A `VideoListQuery` fixes the stage order for every video listing: match
//! filters (publish flag, owner, case-insensitive text search), owner/like
//! enrichment, sort, then limit/offset. It yields a count statement and a
//! page statement over the same filters so totals always agree with pages.

use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::error::{AppError, Result};

/// Columns selected by owner-enriched video queries; maps to
/// [`crate::models::VideoListRow`].
pub const VIDEO_ROW_SELECT: &str = "\
SELECT v.id, v.owner_id, v.title, v.description, v.video_url, v.thumbnail_url, \
v.duration_seconds, v.views, v.is_published, v.created_at, v.updated_at, \
u.username AS owner_username, u.email AS owner_email, \
u.full_name AS owner_full_name, u.avatar AS owner_avatar, \
(SELECT COUNT(*) FROM likes l WHERE l.video_id = v.id) AS total_likes \
FROM videos v JOIN users u ON u.id = v.owner_id";

/// Sort direction; descending unless ascending is explicitly requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// `"asc"` selects ascending; anything else (including absence) is
    /// descending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Whitelisted sort fields for video listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoSortField {
    CreatedAt,
    Views,
    Duration,
    Title,
}

impl VideoSortField {
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw {
            None | Some("createdAt") => Ok(VideoSortField::CreatedAt),
            Some("views") => Ok(VideoSortField::Views),
            Some("duration") => Ok(VideoSortField::Duration),
            Some("title") => Ok(VideoSortField::Title),
            Some(other) => Err(AppError::Validation(format!(
                "sortBy '{other}' is not a sortable field"
            ))),
        }
    }

    fn as_column(self) -> &'static str {
        match self {
            VideoSortField::CreatedAt => "created_at",
            VideoSortField::Views => "views",
            VideoSortField::Duration => "duration_seconds",
            VideoSortField::Title => "title",
        }
    }
}

/// Filter and ordering criteria for a published-video listing.
#[derive(Debug, Clone)]
pub struct VideoListQuery {
    pub owner: Option<Uuid>,
    pub search: Option<String>,
    pub sort_field: VideoSortField,
    pub sort_direction: SortDirection,
}

impl VideoListQuery {
    pub fn new(
        owner: Option<Uuid>,
        search: Option<String>,
        sort_by: Option<&str>,
        sort_type: Option<&str>,
    ) -> Result<Self> {
        Ok(VideoListQuery {
            owner,
            search: search.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            sort_field: VideoSortField::parse(sort_by)?,
            sort_direction: SortDirection::parse(sort_type),
        })
    }

    /// Match stage, identical for the count and the page statements.
    fn push_filters(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push(" WHERE v.is_published");
        if let Some(owner) = self.owner {
            qb.push(" AND v.owner_id = ").push_bind(owner);
        }
        if let Some(term) = &self.search {
            let pattern = format!("%{term}%");
            qb.push(" AND (v.title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR v.description ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
    }

    /// `SELECT COUNT(*)` over the filtered set.
    pub fn count_statement(&self) -> QueryBuilder<'_, Postgres> {
        let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM videos v");
        self.push_filters(&mut qb);
        qb
    }

    /// Enriched page statement: filters, then sort, then limit/offset.
    pub fn page_statement(&self, limit: i64, offset: i64) -> QueryBuilder<'_, Postgres> {
        let mut qb = QueryBuilder::new(VIDEO_ROW_SELECT);
        self.push_filters(&mut qb);
        qb.push(" ORDER BY v.")
            .push(self.sort_field.as_column())
            .push(" ")
            .push(self.sort_direction.as_sql());
        qb.push(" LIMIT ").push_bind(limit).push(" OFFSET ").push_bind(offset);
        qb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(
        owner: Option<Uuid>,
        search: Option<&str>,
        sort_by: Option<&str>,
        sort_type: Option<&str>,
    ) -> VideoListQuery {
        VideoListQuery::new(owner, search.map(String::from), sort_by, sort_type).unwrap()
    }

    #[test]
    fn listing_is_always_published_only() {
        let q = query(None, None, None, None);
        assert!(q.count_statement().sql().contains("WHERE v.is_published"));
        assert!(q.page_statement(10, 0).sql().contains("WHERE v.is_published"));
    }

    #[test]
    fn owner_filter_is_applied_to_both_statements() {
        let q = query(Some(Uuid::new_v4()), None, None, None);
        assert!(q.count_statement().sql().contains("v.owner_id ="));
        assert!(q.page_statement(10, 0).sql().contains("v.owner_id ="));
    }

    #[test]
    fn search_matches_title_and_description_case_insensitively() {
        let q = query(None, Some("rust"), None, None);
        let sql = q.page_statement(10, 0).sql().to_string();
        assert!(sql.contains("v.title ILIKE"));
        assert!(sql.contains("v.description ILIKE"));
    }

    #[test]
    fn blank_search_is_dropped() {
        let q = query(None, Some("   "), None, None);
        assert!(q.search.is_none());
        assert!(!q.page_statement(10, 0).sql().contains("ILIKE"));
    }

    #[test]
    fn sort_defaults_to_created_at_descending() {
        let q = query(None, None, None, None);
        assert!(q
            .page_statement(10, 0)
            .sql()
            .contains("ORDER BY v.created_at DESC"));
    }

    #[test]
    fn ascending_sort_only_when_requested() {
        let q = query(None, None, Some("views"), Some("asc"));
        assert!(q.page_statement(10, 0).sql().contains("ORDER BY v.views ASC"));

        let q = query(None, None, Some("views"), Some("descending-ish"));
        assert!(q.page_statement(10, 0).sql().contains("ORDER BY v.views DESC"));
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        let err = VideoListQuery::new(None, None, Some("owner_id"), None);
        assert!(err.is_err());
    }

    #[test]
    fn sort_precedes_pagination() {
        let sql = query(None, None, Some("duration"), None)
            .page_statement(10, 20)
            .sql()
            .to_string();
        let order = sql.find("ORDER BY").unwrap();
        let limit = sql.find("LIMIT").unwrap();
        assert!(order < limit);
    }

    #[test]
    fn enrichment_joins_owner_and_counts_likes() {
        let sql = query(None, None, None, None).page_statement(10, 0).sql().to_string();
        assert!(sql.contains("JOIN users u ON u.id = v.owner_id"));
        assert!(sql.contains("AS total_likes"));
    }
}
