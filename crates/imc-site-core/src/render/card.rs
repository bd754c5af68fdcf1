use std::fmt::Write;
use std::time::Duration;

use crate::catalog::{Category, PluginRecord};
use crate::format::{escape_html, format_downloads};

/// CSS classes that differ between active and archived cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub icon: &'static str,
    pub version: &'static str,
    pub tag: &'static str,
    pub download_button: &'static str,
}

impl CardStyle {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Active => Self {
                icon: "plugin-icon",
                version: "plugin-version",
                tag: "tag-active",
                download_button: "btn-primary",
            },
            Category::Archived => Self {
                icon: "plugin-icon-archive",
                version: "plugin-version-archive",
                tag: "tag-archive",
                download_button: "btn-archive",
            },
        }
    }
}

/// Markup for one catalog card.
///
/// `delay` staggers the entrance animation. Buttons carry the `ripple` class
/// and cards the `hover-lift` class; both effects live in the stylesheet.
pub fn render_card(plugin: &PluginRecord, delay: Duration) -> String {
    let style = CardStyle::for_category(plugin.category);
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<div class="plugin-card hover-lift animate-in" data-id="{id}" data-category="{category}" style="animation-delay: {delay}ms">"#,
        id = escape_html(&plugin.id),
        category = plugin.category,
        delay = delay.as_millis(),
    );

    let _ = write!(
        html,
        r#"<div class="plugin-header"><div class="{icon_class}"><i class="{icon}"></i></div><div class="plugin-info"><h3>{name}</h3><span class="{version_class}">{version}</span></div></div>"#,
        icon_class = style.icon,
        icon = escape_html(&plugin.icon),
        name = escape_html(&plugin.name),
        version_class = style.version,
        version = escape_html(&plugin.version),
    );

    // description is trusted rich text
    let _ = write!(html, r#"<p class="plugin-description">{}</p>"#, plugin.description);

    html.push_str(r#"<div class="plugin-meta">"#);
    for tag in &plugin.tags {
        let _ = write!(
            html,
            r#"<span class="plugin-tag {}">{}</span>"#,
            style.tag,
            escape_html(tag)
        );
    }
    html.push_str("</div>");

    let _ = write!(
        html,
        r#"<div class="plugin-stats"><div class="plugin-stat"><i class="fas fa-download"></i><span>{downloads}</span></div><div class="plugin-stat"><i class="fas fa-code-branch"></i><span>{versions}</span></div></div>"#,
        downloads = format_downloads(plugin.downloads),
        versions = escape_html(&plugin.supported_versions.join(", ")),
    );

    let _ = write!(
        html,
        r#"<div class="plugin-actions"><a class="btn {button} btn-sm ripple" href="{download}" target="_blank" rel="noopener noreferrer"><i class="fas fa-download"></i> Download</a><a class="btn btn-secondary btn-sm ripple" href="{docs}" target="_blank" rel="noopener noreferrer"><i class="fas fa-book"></i> Docs</a></div>"#,
        button = style.download_button,
        download = escape_html(&plugin.download_url),
        docs = escape_html(&plugin.documentation_url),
    );

    html.push_str("</div>");
    html
}

/// Placeholder shown when a query matches nothing
pub fn render_empty_state() -> String {
    r#"<div class="no-plugins"><i class="fas fa-search"></i><h3>No plugins found</h3><p>Try adjusting your filter criteria.</p></div>"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    #[test]
    fn test_card_contents() {
        let store = CatalogStore::builtin();
        let plugin = store.find_by_id("valentines").unwrap();
        let html = render_card(plugin, Duration::from_millis(100));

        assert!(html.contains(r#"data-id="valentines""#));
        assert!(html.contains(r#"data-category="active""#));
        assert!(html.contains("animation-delay: 100ms"));
        assert!(html.contains("<h3>Valentines</h3>"));
        assert!(html.contains(r#"<span class="plugin-version">v3.0.0</span>"#));
        assert!(html.contains(r#"<span class="plugin-tag tag-active">friends</span>"#));
        assert!(html.contains("<span>156</span>"));
        assert!(html.contains("<span>1.21, 1.20, 1.19</span>"));
        assert!(html.contains(r#"href="https://modrinth.com/plugin/valentines#download" target="_blank""#));
        assert!(html.contains("btn-primary"));
        // rich text kept
        assert!(html.contains("and more.<br>"));
    }

    #[test]
    fn test_archived_card_style() {
        let store = CatalogStore::builtin();
        let plugin = store.find_by_id("mobstatus").unwrap();
        let html = render_card(plugin, Duration::ZERO);

        assert!(html.contains("plugin-icon-archive"));
        assert!(html.contains("plugin-version-archive"));
        assert!(html.contains("tag-archive"));
        assert!(html.contains("btn-archive"));
        assert!(!html.contains("tag-active"));
    }

    #[test]
    fn test_empty_state() {
        assert!(render_empty_state().contains("No plugins found"));
    }
}
