//! Reference data stores.
//!
//! Each store caches one piece of rarely-changing, globally shared data
//! with memoize-once semantics: the first successful `fetch()` fills the
//! cache and every later call returns without touching the network. There
//! is no invalidation and no expiry.
//!
//! Stores are plain values built around their resource client, so callers
//! pass them where they are needed and tests build fresh ones.

pub mod categories;
pub mod settings;
pub mod store;

pub use categories::{CategoriesStore, CATEGORIES_ERROR};
pub use settings::{SettingsStore, SETTINGS_ERROR};
pub use store::{FetchOutcome, Memoized, ReferenceStore, StoreState};
