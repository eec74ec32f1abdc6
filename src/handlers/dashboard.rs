//! Channel dashboard handlers.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::pagination::PageParams;
use crate::db::video_query::VideoListQuery;
use crate::error::Result;
use crate::handlers::response::ApiResponse;
use crate::middleware::UserId;
use crate::services::{DashboardService, MediaHost, VideoService};

/// Listing filters for the channel's own videos. Same surface as the public
/// listing, except the owner is always the requester.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelVideosParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub query: Option<String>,
    pub sort_by: Option<String>,
    pub sort_type: Option<String>,
}

impl ChannelVideosParams {
    fn into_parts(self, owner: Uuid) -> Result<(VideoListQuery, PageParams)> {
        let query = VideoListQuery::new(
            Some(owner),
            self.query,
            self.sort_by.as_deref(),
            self.sort_type.as_deref(),
        )?;
        Ok((query, PageParams::from_parts(self.page, self.limit)))
    }
}

/// GET /dashboard/stats
pub async fn channel_stats(pool: web::Data<PgPool>, user: UserId) -> Result<HttpResponse> {
    let stats = DashboardService::new((**pool).clone())
        .channel_stats(user.0)
        .await?;
    Ok(ApiResponse::ok(stats, "Channel stats fetched successfully"))
}

/// GET /dashboard/videos
pub async fn channel_videos(
    pool: web::Data<PgPool>,
    media: web::Data<Arc<dyn MediaHost>>,
    user: UserId,
    params: web::Query<ChannelVideosParams>,
) -> Result<HttpResponse> {
    let (query, page) = params.into_inner().into_parts(user.0)?;
    let videos = VideoService::new((**pool).clone(), media.get_ref().clone())
        .list(query, page)
        .await?;
    Ok(ApiResponse::ok(videos, "Channel videos fetched successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::video_query::{SortDirection, VideoSortField};

    #[test]
    fn channel_filters_flow_into_the_listing_query() {
        let owner = Uuid::new_v4();
        let params = ChannelVideosParams {
            page: Some(2),
            limit: Some(5),
            query: Some("rust".into()),
            sort_by: Some("views".into()),
            sort_type: Some("asc".into()),
        };

        let (query, page) = params.into_parts(owner).unwrap();
        assert_eq!(query.owner, Some(owner));
        assert_eq!(query.search.as_deref(), Some("rust"));
        assert_eq!(query.sort_field, VideoSortField::Views);
        assert_eq!(query.sort_direction, SortDirection::Asc);
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 5);
    }

    #[test]
    fn channel_listing_rejects_unknown_sort_fields() {
        let params = ChannelVideosParams {
            page: None,
            limit: None,
            query: None,
            sort_by: Some("owner_id".into()),
            sort_type: None,
        };
        assert!(params.into_parts(Uuid::new_v4()).is_err());
    }
}
