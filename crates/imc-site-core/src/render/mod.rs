//! # Render Module
//!
//! HTML fragments mounted into page templates.
//!
//! - `page`: templates with `{{mount:<id>}}` slots
//! - `card`: one plugin card, and the empty state
//! - `catalog`: plugin grid, filter bar, and the view tying them to a store
//! - `nav`, `footer`, `hero`: shared page chrome

mod card;
mod catalog;
mod footer;
mod hero;
mod nav;
mod page;

pub use card::{render_card, render_empty_state, CardStyle};
pub use catalog::{
    CatalogRenderer, CatalogView, FilterBar, RenderedGrid, DEFAULT_STAGGER, FILTER_BAR_MOUNT,
    GRID_MOUNT,
};
pub use footer::{Company, FooterData, Link, SocialLink};
pub use hero::{default_code_lines, render_code_preview, typing_sequence, CodeLine};
pub use nav::{NavBar, NavLink, PageKind};
pub use page::Page;
