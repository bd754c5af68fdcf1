//! Catalog Renderer
//!
//! Projects store queries into the `pluginsGrid` and `filterBar` mount
//! points. The renderer keeps no state of its own; the active filter lives in
//! the store's query state and in the filter bar.

use std::fmt::Write;
use std::time::Duration;

use super::card::{render_card, render_empty_state};
use super::page::Page;
use crate::animation::Sequence;
use crate::catalog::{CatalogStore, CategoryFilter, FilterCount};
use crate::format::escape_html;

pub const GRID_MOUNT: &str = "pluginsGrid";
pub const FILTER_BAR_MOUNT: &str = "filterBar";
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(50);

/// Result of one grid render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGrid {
    pub filter: CategoryFilter,
    /// Displayed plugin ids, in display order
    pub ids: Vec<String>,
    pub html: String,
}

impl RenderedGrid {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogRenderer {
    stagger: Duration,
}

impl CatalogRenderer {
    pub fn new(stagger: Duration) -> Self {
        Self { stagger }
    }

    pub fn stagger(&self) -> Duration {
        self.stagger
    }

    /// Grid markup for `filter` combined with the store's current search
    pub fn render_grid(&self, store: &CatalogStore, filter: CategoryFilter) -> RenderedGrid {
        let plugins = store.query(filter, &store.state().search);

        if plugins.is_empty() {
            return RenderedGrid {
                filter,
                ids: Vec::new(),
                html: render_empty_state(),
            };
        }

        let reveal = Sequence::staggered(plugins.iter().copied(), self.stagger);
        let html = reveal
            .schedule()
            .map(|(offset, plugin)| render_card(plugin, offset))
            .collect::<String>();

        RenderedGrid {
            filter,
            ids: plugins.iter().map(|p| p.id.clone()).collect(),
            html,
        }
    }

    /// Render into the page's grid mount point. Returns `None` when the page
    /// has no grid.
    pub fn render(
        &self,
        store: &CatalogStore,
        page: &mut Page,
        filter: CategoryFilter,
    ) -> Option<RenderedGrid> {
        if !page.has_mount(GRID_MOUNT) {
            return None;
        }
        let grid = self.render_grid(store, filter);
        page.mount(GRID_MOUNT, grid.html.clone());
        tracing::debug!(filter = %filter, cards = grid.ids.len(), "rendered catalog grid");
        Some(grid)
    }
}

impl Default for CatalogRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_STAGGER)
    }
}

/// Single-select filter buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterBar {
    active: CategoryFilter,
}

impl FilterBar {
    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    /// Activate `filter`, deactivating the others. Returns whether the
    /// selection changed.
    pub fn select(&mut self, filter: CategoryFilter) -> bool {
        let changed = self.active != filter;
        self.active = filter;
        changed
    }

    /// Buttons as links; `href` maps a filter to the page showing it
    pub fn render(&self, counts: &[FilterCount], href: impl Fn(CategoryFilter) -> String) -> String {
        let mut html = String::from(r#"<div class="plugin-filters">"#);
        for entry in counts {
            let class = if entry.filter == self.active {
                "filter-btn active"
            } else {
                "filter-btn"
            };
            let _ = write!(
                html,
                r#"<a class="{class}" data-filter="{filter}" href="{href}">{label} <span class="filter-count">{count}</span></a>"#,
                filter = entry.filter,
                href = escape_html(&href(entry.filter)),
                label = entry.label,
                count = entry.count,
            );
        }
        html.push_str("</div>");
        html
    }
}

/// The catalog section of a page: store, renderer and filter bar wired
/// together.
#[derive(Debug, Clone)]
pub struct CatalogView {
    store: CatalogStore,
    renderer: CatalogRenderer,
    filter_bar: FilterBar,
}

impl CatalogView {
    pub fn new(store: CatalogStore, renderer: CatalogRenderer) -> Self {
        Self {
            store,
            renderer,
            filter_bar: FilterBar::default(),
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn filter_bar(&self) -> &FilterBar {
        &self.filter_bar
    }

    /// Initial render with the store's current filter
    pub fn init(&mut self, page: &mut Page, href: impl Fn(CategoryFilter) -> String) -> Option<RenderedGrid> {
        let filter = self.store.state().filter;
        self.select_filter(page, filter, href)
    }

    /// Change the active filter without drawing anything
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.store.set_filter(filter);
        self.filter_bar.select(filter);
    }

    /// Filter button activation: update state, redraw the bar and the grid
    pub fn select_filter(
        &mut self,
        page: &mut Page,
        filter: CategoryFilter,
        href: impl Fn(CategoryFilter) -> String,
    ) -> Option<RenderedGrid> {
        self.set_filter(filter);

        let bar = self.filter_bar.render(&self.store.filter_counts(), href);
        page.mount(FILTER_BAR_MOUNT, bar);

        self.renderer.render(&self.store, page, filter)
    }

    /// Update the search term and redraw the grid for the active filter
    pub fn search(&mut self, page: &mut Page, term: &str) -> Option<RenderedGrid> {
        self.store.set_search(term);
        self.renderer.render(&self.store, page, self.store.state().filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_page() -> Page {
        Page::new(r#"<nav>{{mount:filterBar}}</nav><div id="pluginsGrid">{{mount:pluginsGrid}}</div>"#)
    }

    fn href(filter: CategoryFilter) -> String {
        format!("/{}.html", filter)
    }

    #[test]
    fn test_render_grid_order_and_stagger() {
        let store = CatalogStore::builtin();
        let renderer = CatalogRenderer::default();
        let grid = renderer.render_grid(&store, CategoryFilter::All);

        assert_eq!(grid.ids, vec!["valentines", "reviews", "mobstatus"]);
        assert!(grid.html.contains("animation-delay: 0ms"));
        assert!(grid.html.contains("animation-delay: 50ms"));
        assert!(grid.html.contains("animation-delay: 100ms"));
        let first = grid.html.find("valentines").unwrap();
        let last = grid.html.find("mobstatus").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_render_is_idempotent() {
        let store = CatalogStore::builtin();
        let renderer = CatalogRenderer::default();
        let mut page = grid_page();

        let first = renderer.render(&store, &mut page, CategoryFilter::Active).unwrap();
        let second = renderer.render(&store, &mut page, CategoryFilter::Active).unwrap();
        assert_eq!(first.ids, second.ids);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_empty_state() {
        let mut store = CatalogStore::builtin();
        store.set_search("nothing matches this");
        let grid = CatalogRenderer::default().render_grid(&store, CategoryFilter::All);

        assert!(grid.is_empty());
        assert!(grid.html.contains("No plugins found"));
    }

    #[test]
    fn test_render_without_mount_point() {
        let store = CatalogStore::builtin();
        let mut page = Page::new("<main></main>");
        assert!(CatalogRenderer::default()
            .render(&store, &mut page, CategoryFilter::All)
            .is_none());
        assert_eq!(page.render(), "<main></main>");
    }

    #[test]
    fn test_filter_bar_single_select() {
        let store = CatalogStore::builtin();
        let mut bar = FilterBar::default();
        assert!(!bar.select(CategoryFilter::All));
        assert!(bar.select(CategoryFilter::Archived));

        let html = bar.render(&store.filter_counts(), href);
        assert_eq!(html.matches("filter-btn active").count(), 1);
        assert!(html.contains(r#"class="filter-btn active" data-filter="archived""#));
        assert!(html.contains(r#"data-filter="all" href="/all.html""#));
        assert!(html.contains(r#"Everything <span class="filter-count">3</span>"#));
    }

    #[test]
    fn test_view_select_filter_updates_store_and_page() {
        let mut view = CatalogView::new(CatalogStore::builtin(), CatalogRenderer::default());
        let mut page = grid_page();

        let initial = view.init(&mut page, href).unwrap();
        assert_eq!(initial.ids.len(), 3);

        let archived = view
            .select_filter(&mut page, CategoryFilter::Archived, href)
            .unwrap();
        assert_eq!(archived.ids, vec!["mobstatus"]);
        assert_eq!(view.store().state().filter, CategoryFilter::Archived);
        assert_eq!(view.filter_bar().active(), CategoryFilter::Archived);

        let html = page.render();
        assert!(html.contains("mobstatus"));
        assert!(!html.contains(r#"data-id="valentines""#));
    }

    #[test]
    fn test_view_search_keeps_filter() {
        let mut view = CatalogView::new(CatalogStore::builtin(), CatalogRenderer::default());
        let mut page = grid_page();
        view.select_filter(&mut page, CategoryFilter::Active, href);

        let grid = view.search(&mut page, "social").unwrap();
        assert_eq!(grid.filter, CategoryFilter::Active);
        assert_eq!(grid.ids, vec!["valentines", "reviews"]);

        let grid = view.search(&mut page, "mobs").unwrap();
        assert!(grid.is_empty());
    }
}
