use crate::api::CategoriesApi;
use crate::models::{Category, CategoryTree};

use super::{FetchOutcome, ReferenceStore};

/// Shown when the category tree cannot be loaded.
pub const CATEGORIES_ERROR: &str = "Не удалось загрузить категории";

/// Caches the category tree used by menus and list pages.
pub struct CategoriesStore {
    api: CategoriesApi,
    store: ReferenceStore<Vec<CategoryTree>>,
}

impl CategoriesStore {
    pub fn new(api: CategoriesApi) -> Self {
        Self {
            api,
            store: ReferenceStore::new("categories", CATEGORIES_ERROR),
        }
    }

    pub async fn fetch(&self) -> FetchOutcome {
        self.store.fetch_with(|| self.api.tree()).await
    }

    /// Cached tree, empty until a fetch succeeds.
    pub fn category_tree(&self) -> Vec<CategoryTree> {
        self.store.value().unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.store.error()
    }

    /// Look a category up in the cached tree, roots first.
    pub fn find(&self, slug: &str) -> Option<Category> {
        let tree = self.category_tree();
        tree.iter()
            .find(|node| node.category.slug == slug)
            .map(|node| node.category.clone())
            .or_else(|| tree.iter().find_map(|node| node.find_child(slug).cloned()))
    }
}
