use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use super::table::{PageKind, RouteMatch, RouteTable};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    #[error("No route matches {0}")]
    NotFound(String),

    #[error("No page component registered for {0:?}")]
    MissingPage(PageKind),
}

/// Builds a page component; invoked once, on first navigation to the page.
pub type PageFactory<C> = Box<dyn Fn() -> C + Send + Sync>;

/// Result of a successful navigation.
pub struct Navigation<C> {
    pub route: RouteMatch,
    pub component: Arc<C>,
    pub scroll_top: u32,
}

pub struct Router<C> {
    table: RouteTable,
    factories: HashMap<PageKind, PageFactory<C>>,
    loaded: HashMap<PageKind, Arc<C>>,
    current: Option<RouteMatch>,
    scroll_top: u32,
}

impl<C> Router<C> {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            factories: HashMap::new(),
            loaded: HashMap::new(),
            current: None,
            scroll_top: 0,
        }
    }

    pub fn register<F>(&mut self, page: PageKind, factory: F) -> &mut Self
    where
        F: Fn() -> C + Send + Sync + 'static,
    {
        self.factories.insert(page, Box::new(factory));
        self
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn navigate(&mut self, path: &str) -> Result<Navigation<C>, RouteError> {
        let route = self
            .table
            .resolve(path)
            .ok_or_else(|| RouteError::NotFound(path.to_string()))?;

        let component = match self.loaded.get(&route.page) {
            Some(component) => Arc::clone(component),
            None => {
                let factory = self
                    .factories
                    .get(&route.page)
                    .ok_or(RouteError::MissingPage(route.page))?;
                debug!(page = ?route.page, "Loading page component");
                let component = Arc::new(factory());
                self.loaded.insert(route.page, Arc::clone(&component));
                component
            }
        };

        self.scroll_top = 0;
        self.current = Some(route.clone());

        Ok(Navigation {
            route,
            component,
            scroll_top: self.scroll_top,
        })
    }

    pub fn current(&self) -> Option<&RouteMatch> {
        self.current.as_ref()
    }

    pub fn scroll_top(&self) -> u32 {
        self.scroll_top
    }

    pub fn scroll_to(&mut self, top: u32) {
        self.scroll_top = top;
    }

    pub fn is_loaded(&self, page: PageKind) -> bool {
        self.loaded.contains_key(&page)
    }
}

impl<C> Default for Router<C> {
    fn default() -> Self {
        Self::new(RouteTable::default())
    }
}
