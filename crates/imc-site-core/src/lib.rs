//! Core library for the InternationalMC site generator
//!
//! Holds the plugin catalog, the HTML renderers and the site builder that
//! writes the static pages.

pub mod animation;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod render;
pub mod site;
pub mod terms;

pub use catalog::{Category, CategoryFilter, CatalogStore, PluginRecord, SortKey};
pub use config::Config;
pub use error::{Result, SiteError};
pub use format::format_downloads;
pub use site::{BuildOptions, BuildReport, Site};
pub use terms::{TermsDocument, TermsSection};
