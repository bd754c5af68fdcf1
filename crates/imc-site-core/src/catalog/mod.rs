//! # Catalog Module
//!
//! The plugin catalog shown on the home page.
//!
//! - `record`: plugin records, categories, filters and sort keys
//! - `builtin`: the plugins published when no catalog file is configured
//! - `store`: the runtime store answering filter/search/sort queries
//!
//! ## Example
//!
//! ```rust
//! use imc_site_core::catalog::{CatalogStore, CategoryFilter};
//!
//! let store = CatalogStore::builtin();
//! let active = store.query(CategoryFilter::Active, "");
//! assert!(active.iter().all(|p| !p.is_archived()));
//!
//! // Search is case-insensitive over name, description and tags
//! let hits = store.query(CategoryFilter::All, "valentine");
//! assert_eq!(hits[0].id, "valentines");
//! ```

mod builtin;
mod record;
mod store;

pub use builtin::{BuiltinPlugin, BUILTIN_PLUGINS};
pub use record::{Category, CategoryFilter, PluginRecord, SortKey};
pub use store::{AdvancedCriteria, CatalogStatistics, CatalogStore, FilterCount, QueryState};
