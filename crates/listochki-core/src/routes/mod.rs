//! Client-side routing.
//!
//! `RouteTable` is the static path → page mapping. `Router` resolves paths
//! against it, builds each page component lazily on first navigation and
//! resets the scroll position on every navigation.

pub mod router;
pub mod table;

pub use router::{Navigation, RouteError, Router};
pub use table::{PageKind, PageProps, PropsRule, RouteDef, RouteMatch, RouteTable, ROUTES};
