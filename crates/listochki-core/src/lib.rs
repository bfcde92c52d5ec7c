//! Core library for listochki.
//!
//! Client-side plumbing for the Umnye Listochki worksheet catalog:
//!
//! - `api`: the HTTP gateway and one resource client per backend family
//! - `stores`: memoize-once caches for the category tree and site settings
//! - `routes`: the client route table and a lazy page router
//! - `models`: serde types mirroring backend responses
//! - `config`: backend base address resolution

pub mod api;
pub mod config;
pub mod models;
pub mod routes;
pub mod stores;

pub use api::{ApiClient, TransportFailure};
pub use config::Config;
