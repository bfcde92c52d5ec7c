//! REST API access for the worksheet catalog backend.
//!
//! `Gateway` is the single configured HTTP entry point. The resource
//! clients (`CategoriesApi`, `TagsApi`, `SettingsApi`, `WorksheetsApi`)
//! wrap one endpoint family each; `ApiClient` bundles them over one gateway.

pub mod categories;
pub mod client;
pub mod envelope;
pub mod error;
pub mod gateway;
pub mod settings;
pub mod tags;
pub mod worksheets;

#[cfg(test)]
pub(crate) mod mock;

pub use categories::CategoriesApi;
pub use client::ApiClient;
pub use error::TransportFailure;
pub use gateway::{
    Gateway, HttpRequest, HttpResponse, HttpTransport, Query, RequestOptions, ResponseBody,
    ResponseType, Transport,
};
pub use settings::SettingsApi;
pub use tags::TagsApi;
pub use worksheets::{WorksheetFilters, WorksheetsApi};
