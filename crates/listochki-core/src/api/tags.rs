use crate::models::{PaginatedResponse, Tag, WorksheetListItem};

use super::gateway::{Gateway, Query, Result};

#[derive(Clone)]
pub struct TagsApi {
    gateway: Gateway,
}

impl TagsApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> Result<Vec<Tag>> {
        self.gateway.get_list("/api/tags/", Query::new()).await
    }

    /// Top 20 tags by usage, ranked by the server.
    pub async fn popular(&self) -> Result<Vec<Tag>> {
        self.gateway.get_list("/api/tags/popular/", Query::new()).await
    }

    pub async fn detail(&self, slug: &str) -> Result<Tag> {
        self.gateway
            .get_json(&self.gateway.slug_path("/api/tags/", slug, "")?, Query::new())
            .await
    }

    pub async fn worksheets(
        &self,
        slug: &str,
        page: Option<u32>,
    ) -> Result<PaginatedResponse<WorksheetListItem>> {
        let query: Query = page.map(|p| ("page", p.to_string())).into_iter().collect();
        self.gateway
            .get_json(&self.gateway.slug_path("/api/tags/", slug, "worksheets/")?, query)
            .await
    }
}
