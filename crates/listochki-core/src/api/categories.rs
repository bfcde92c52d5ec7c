use tracing::debug;

use crate::models::{Category, CategoryTree, PaginatedResponse, WorksheetListItem};

use super::gateway::{Gateway, Query, Result};

#[derive(Clone)]
pub struct CategoriesApi {
    gateway: Gateway,
}

impl CategoriesApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Flat list of every category.
    pub async fn list(&self) -> Result<Vec<Category>> {
        self.gateway.get_list("/api/categories/", Query::new()).await
    }

    /// Top-level categories with one level of children, for menus.
    pub async fn tree(&self) -> Result<Vec<CategoryTree>> {
        let tree: Vec<CategoryTree> = self.gateway.get_list("/api/categories/tree/", Query::new()).await?;
        debug!(roots = tree.len(), "Fetched category tree");
        Ok(tree)
    }

    /// One category with its children populated. Unknown slugs fail with
    /// `TransportFailure::NotFound`.
    pub async fn detail(&self, slug: &str) -> Result<CategoryTree> {
        self.gateway
            .get_json(&self.gateway.slug_path("/api/categories/", slug, "")?, Query::new())
            .await
    }

    pub async fn worksheets(
        &self,
        slug: &str,
        page: Option<u32>,
    ) -> Result<PaginatedResponse<WorksheetListItem>> {
        let query: Query = page.map(|p| ("page", p.to_string())).into_iter().collect();
        self.gateway
            .get_json(&self.gateway.slug_path("/api/categories/", slug, "worksheets/")?, query)
            .await
    }
}
