//! Site builder
//!
//! Renders every page into memory, then writes the output directory:
//!
//! | Output | Content |
//! |--------|---------|
//! | `index.html` | home page, catalog filtered to everything |
//! | `plugins/active.html` | home page, active plugins only |
//! | `plugins/archived.html` | home page, archived plugins only |
//! | `terms.html` | Terms of Service |
//! | `catalog.json` | the full catalog |
//! | `assets/animations.css` | animation keyframes and classes |
//! | `assets/**` | files copied from `site.assets_dir` |
//!
//! Filter buttons link to the pre-rendered filter pages. Files whose content
//! did not change are left untouched, and files a previous build produced
//! that this build no longer does are removed (tracked in
//! `.imc-site-manifest.toml`).

mod assets;
mod manifest;
mod templates;

use std::collections::BTreeMap;
use std::fmt::Write;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use chrono::{Datelike, NaiveDate};

use crate::animation::{animations_css, TypingTiming, ANIMATIONS_CSS_PATH};
use crate::catalog::{CatalogStore, CategoryFilter};
use crate::config::Config;
use crate::error::Result;
use crate::format::{escape_html, format_downloads};
use crate::render::{
    default_code_lines, render_code_preview, CatalogRenderer, CatalogView, FooterData, NavBar,
    Page, PageKind,
};
use crate::terms::TermsDocument;

pub use assets::{collect_assets, compile_patterns, CollectedAssets, ASSETS_PREFIX};
pub use manifest::{compute_file_hash, compute_hash, BuildManifest, MANIFEST_FILENAME};
pub use templates::{INDEX_TEMPLATE, TERMS_TEMPLATE};

pub const CATALOG_JSON_PATH: &str = "catalog.json";
pub const TERMS_PATH: &str = "terms.html";

/// Output path of the home page variant showing `filter`
pub fn filter_page_path(filter: CategoryFilter) -> &'static str {
    match filter {
        CategoryFilter::All => "index.html",
        CategoryFilter::Active => "plugins/active.html",
        CategoryFilter::Archived => "plugins/archived.html",
    }
}

/// Link target of a filter button
pub fn filter_href(filter: CategoryFilter) -> String {
    format!("/{}#plugins", filter_page_path(filter))
}

/// Terms file written by `import_terms` when `terms.source` is unset
pub const DEFAULT_TERMS_SOURCE: &str = "terms.json";

/// Replace the project's terms document with the JSON in `file`.
///
/// The document is written to `terms.source` (default `terms.json`). When the
/// config had no source it is updated only after the write succeeded.
pub fn import_terms(project_dir: &Path, file: &Path) -> Result<(PathBuf, TermsDocument)> {
    let content = fs::read_to_string(file)?;
    let mut terms = TermsDocument::builtin();
    terms.import_json(&content)?;

    let mut config = Config::load(project_dir)?;
    let (source, configured) = match &config.terms.source {
        Some(source) => (source.clone(), true),
        None => (PathBuf::from(DEFAULT_TERMS_SOURCE), false),
    };

    let dest = Config::resolve(project_dir, &source);
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&dest, terms.export_json()?)?;

    if !configured {
        config.terms.source = Some(source);
        config.save(project_dir)?;
    }

    tracing::info!(path = %dest.display(), sections = terms.sections.len(), "terms imported");
    Ok((dest, terms))
}

/// Whether a manifest path stays below the output directory
fn is_inside_out_dir(relative: &str) -> bool {
    let path = Path::new(relative);
    !relative.is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Overrides `site.out_dir`
    pub out_dir: Option<PathBuf>,
    /// Rewrite files even when unchanged
    pub force: bool,
    /// Date used for the copyright year and the terms badge
    pub today: NaiveDate,
}

impl BuildOptions {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            out_dir: None,
            force: false,
            today,
        }
    }
}

/// One rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub path: String,
    pub filter: Option<CategoryFilter>,
    /// Plugins shown, in display order
    pub plugin_ids: Vec<String>,
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    pub pages: Vec<PageSummary>,
    pub written: Vec<String>,
    pub unchanged: Vec<String>,
    pub removed: Vec<String>,
    pub excluded_assets: Vec<String>,
}

pub struct Site {
    project_dir: PathBuf,
    config: Config,
    view: CatalogView,
    terms: TermsDocument,
    footer: FooterData,
    nav: NavBar,
    timing: TypingTiming,
}

impl Site {
    pub fn new(
        project_dir: PathBuf,
        config: Config,
        store: CatalogStore,
        terms: TermsDocument,
        footer: FooterData,
    ) -> Self {
        let renderer = CatalogRenderer::new(Duration::from_millis(config.catalog.stagger_ms));
        let nav = NavBar::builtin(&config.site.title);
        Self {
            project_dir,
            config,
            view: CatalogView::new(store, renderer),
            terms,
            footer,
            nav,
            timing: TypingTiming::default(),
        }
    }

    /// Site with the catalog and terms named in `config`, or the builtin ones
    pub fn from_config(project_dir: &Path, config: Config) -> Result<Self> {
        let store = match &config.catalog.source {
            Some(source) => CatalogStore::from_file(&Config::resolve(project_dir, source))?,
            None => CatalogStore::builtin(),
        };

        let mut terms = TermsDocument::builtin();
        if let Some(source) = &config.terms.source {
            let content = fs::read_to_string(Config::resolve(project_dir, source))?;
            terms.import_json(&content)?;
        }

        Ok(Self::new(
            project_dir.to_path_buf(),
            config,
            store,
            terms,
            FooterData::builtin(),
        ))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &CatalogStore {
        self.view.store()
    }

    pub fn terms(&self) -> &TermsDocument {
        &self.terms
    }

    pub fn out_dir(&self, options: &BuildOptions) -> PathBuf {
        match &options.out_dir {
            Some(dir) => dir.clone(),
            None => Config::resolve(&self.project_dir, &self.config.site.out_dir),
        }
    }

    /// Render all pages and data files, keyed by output path
    pub fn render(&mut self, today: NaiveDate) -> Result<(BTreeMap<String, Vec<u8>>, Vec<PageSummary>)> {
        let mut outputs = BTreeMap::new();
        let mut pages = Vec::new();

        for filter in CategoryFilter::ALL {
            let mut page = Page::new(INDEX_TEMPLATE);
            self.mount_chrome(&mut page, PageKind::Home, today);
            self.mount_home(&mut page);

            let grid = self.view.select_filter(&mut page, filter, filter_href);
            let path = filter_page_path(filter).to_string();
            tracing::debug!(page = %path, "rendered home page");

            pages.push(PageSummary {
                path: path.clone(),
                filter: Some(filter),
                plugin_ids: grid.map(|g| g.ids).unwrap_or_default(),
            });
            outputs.insert(path, page.render().into_bytes());
        }
        self.view.set_filter(CategoryFilter::All);

        let mut terms_page = Page::new(TERMS_TEMPLATE);
        self.mount_chrome(&mut terms_page, PageKind::Terms, today);
        self.mount_terms(&mut terms_page, today)?;
        pages.push(PageSummary {
            path: TERMS_PATH.to_string(),
            filter: None,
            plugin_ids: Vec::new(),
        });
        outputs.insert(TERMS_PATH.to_string(), terms_page.render().into_bytes());

        outputs.insert(
            CATALOG_JSON_PATH.to_string(),
            self.view.store().to_json()?.into_bytes(),
        );
        outputs.insert(ANIMATIONS_CSS_PATH.to_string(), animations_css().into_bytes());

        Ok((outputs, pages))
    }

    /// Render and write the site
    pub fn build(&mut self, options: &BuildOptions) -> Result<BuildReport> {
        let out_dir = self.out_dir(options);
        let mut report = BuildReport {
            out_dir: out_dir.clone(),
            ..Default::default()
        };

        let mut outputs = BTreeMap::new();
        if let Some(assets_dir) = &self.config.site.assets_dir {
            let patterns = compile_patterns(&self.config.site.assets_exclude)?;
            let collected = collect_assets(&Config::resolve(&self.project_dir, assets_dir), &patterns)?;
            report.excluded_assets = collected.excluded;
            outputs.extend(collected.files);
        }

        // Generated files win over copied assets with the same path
        let (rendered, pages) = self.render(options.today)?;
        outputs.extend(rendered);
        report.pages = pages;

        fs::create_dir_all(&out_dir)?;
        let previous = BuildManifest::load(&out_dir)?;
        let mut manifest = BuildManifest::new();

        for (relative, content) in &outputs {
            let hash = compute_hash(content);
            let dest = out_dir.join(relative);

            let unchanged = !options.force && dest.is_file() && compute_file_hash(&dest)? == hash;
            if unchanged {
                report.unchanged.push(relative.clone());
            } else {
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&dest, content)?;
                tracing::debug!(file = %relative, "written");
                report.written.push(relative.clone());
            }
            manifest.add_file(relative, &hash);
        }

        if let Some(previous) = previous {
            for relative in previous.files.keys() {
                if outputs.contains_key(relative) {
                    continue;
                }
                if !is_inside_out_dir(relative) {
                    tracing::warn!(file = %relative, "manifest entry escapes the output directory, not removed");
                    continue;
                }
                let stale = out_dir.join(relative);
                if stale.is_file() {
                    fs::remove_file(&stale)?;
                    tracing::debug!(file = %relative, "removed stale output");
                    report.removed.push(relative.clone());
                }
            }
        }

        manifest.save(&out_dir)?;

        tracing::info!(
            out_dir = %out_dir.display(),
            written = report.written.len(),
            unchanged = report.unchanged.len(),
            removed = report.removed.len(),
            "site built"
        );
        Ok(report)
    }

    fn mount_chrome(&self, page: &mut Page, kind: PageKind, today: NaiveDate) {
        let title = match kind {
            PageKind::Home => self.config.site.title.clone(),
            PageKind::Terms => format!("{} - {}", self.terms.meta.title, self.config.site.title),
        };
        page.mount("title", escape_html(&title));
        page.mount("navbar", self.nav.render(kind));
        page.mount("footer", self.footer.render(today.year()));
    }

    fn mount_home(&self, page: &mut Page) {
        page.mount("heroTitle", escape_html(&self.config.site.title));

        let lines = default_code_lines(&self.footer.company.name);
        page.mount("codeContent", render_code_preview(&lines, self.timing));

        let stats = self.view.store().statistics();
        let mut html = String::new();
        let _ = write!(
            html,
            r#"<div class="stat-item"><strong>{}</strong><span>Plugins</span></div><div class="stat-item"><strong>{}</strong><span>Downloads</span></div>"#,
            stats.total_plugins,
            format_downloads(stats.total_downloads)
        );
        if let Some(top) = stats.most_downloaded {
            let _ = write!(
                html,
                r#"<div class="stat-item"><strong>{}</strong><span>Most downloaded</span></div>"#,
                escape_html(&top.name)
            );
        }
        page.mount("pluginStats", html);

        page.mount("about", escape_html(&self.footer.company.description));

        let mut contact = String::from(r#"<div class="contact-links">"#);
        for item in &self.footer.social {
            let _ = write!(
                contact,
                r#"<a class="btn btn-secondary ripple" href="{}" target="_blank" rel="noopener noreferrer"><i class="{}"></i> {}</a>"#,
                escape_html(&item.url),
                escape_html(&item.icon),
                escape_html(&item.name)
            );
        }
        contact.push_str("</div>");
        page.mount("contact", contact);
    }

    fn mount_terms(&self, page: &mut Page, today: NaiveDate) -> Result<()> {
        page.mount(
            "lastUpdated",
            format!("Last updated: {}", self.terms.formatted_last_updated()?),
        );
        if self
            .terms
            .is_recently_updated(self.config.terms.recent_days, today)?
        {
            page.mount(
                "termsBadge",
                r#"<span class="terms-badge"><i class="fas fa-bell"></i> Recently updated</span>"#,
            );
        }
        page.mount("termsNav", self.terms.render_nav());
        page.mount("termsContent", self.terms.render_html()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 20).unwrap()
    }

    fn site() -> Site {
        Site::new(
            PathBuf::from("."),
            Config::default(),
            CatalogStore::builtin(),
            TermsDocument::builtin(),
            FooterData::builtin(),
        )
    }

    #[test]
    fn test_manifest_paths_must_stay_inside_out_dir() {
        assert!(is_inside_out_dir("index.html"));
        assert!(is_inside_out_dir("assets/img/logo.png"));
        assert!(!is_inside_out_dir("../victim.txt"));
        assert!(!is_inside_out_dir("assets/../../victim.txt"));
        assert!(!is_inside_out_dir("/etc/passwd"));
        assert!(!is_inside_out_dir(""));
    }

    #[test]
    fn test_filter_paths() {
        assert_eq!(filter_href(CategoryFilter::All), "/index.html#plugins");
        assert_eq!(
            filter_href(CategoryFilter::Archived),
            "/plugins/archived.html#plugins"
        );
    }

    #[test]
    fn test_render_outputs() {
        let mut site = site();
        let (outputs, pages) = site.render(today()).unwrap();

        let keys: Vec<_> = outputs.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "assets/animations.css",
                "catalog.json",
                "index.html",
                "plugins/active.html",
                "plugins/archived.html",
                "terms.html",
            ]
        );

        assert_eq!(pages[0].plugin_ids, vec!["valentines", "reviews", "mobstatus"]);
        assert_eq!(pages[1].plugin_ids, vec!["valentines", "reviews"]);
        assert_eq!(pages[2].plugin_ids, vec!["mobstatus"]);
        assert_eq!(site.store().state().filter, CategoryFilter::All);
    }

    #[test]
    fn test_home_page_markup() {
        let mut site = site();
        let (outputs, _) = site.render(today()).unwrap();
        let archived = String::from_utf8(outputs["plugins/archived.html"].clone()).unwrap();

        assert!(!archived.contains("{{mount:"));
        assert!(archived.contains("<title>InternationalMC</title>"));
        assert!(archived.contains(r#"class="filter-btn active" data-filter="archived""#));
        assert!(archived.contains(r#"data-id="mobstatus""#));
        assert!(!archived.contains(r#"data-id="reviews""#));
        assert!(archived.contains("&copy; 2025 InternationalMC"));
        assert!(archived.contains("<strong>303</strong>"));
        assert!(archived.contains(r#"class="code-line""#));
    }

    #[test]
    fn test_terms_page_badge() {
        let mut site = site();
        let (outputs, _) = site.render(today()).unwrap();
        let terms = String::from_utf8(outputs["terms.html"].clone()).unwrap();
        assert!(terms.contains("Recently updated"));
        assert!(terms.contains("Last updated: September 13, 2025"));
        assert!(terms.contains(r#"<a href="/terms.html" class="nav-link active">Terms</a>"#));

        let later = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let (outputs, _) = site.render(later).unwrap();
        let terms = String::from_utf8(outputs["terms.html"].clone()).unwrap();
        assert!(!terms.contains("Recently updated"));
    }
}
