//! Data models for the worksheet catalog.
//!
//! These mirror the backend's response shapes and are read-only
//! projections: nothing here is created or mutated by the client.
//!
//! - `Tag`: labels attached to worksheets
//! - `Category`, `CategoryTree`: the category hierarchy
//! - `WorksheetListItem`, `WorksheetDetail`: catalog entries
//! - `PaginatedResponse`: the list envelope used by paginated endpoints
//! - `SiteSettings`: the singleton site configuration

pub mod category;
pub mod pagination;
pub mod settings;
pub mod tag;
pub mod worksheet;

pub use category::{Category, CategoryParent, CategoryTree};
pub use pagination::PaginatedResponse;
pub use settings::SiteSettings;
pub use tag::Tag;
pub use worksheet::{Difficulty, GradeLevel, WorksheetDetail, WorksheetListItem};

#[cfg(test)]
pub(crate) use worksheet::fixtures;
