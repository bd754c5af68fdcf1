//! Navigation bar
//!
//! Static pages have no scroll position, so the active link is chosen by the
//! page being rendered.

use std::fmt::Write;

use crate::format::escape_html;

/// Pages produced by the site build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    Terms,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    /// Page on which this link is marked active
    pub active_on: Option<PageKind>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    pub brand: String,
    pub logo: String,
    pub links: Vec<NavLink>,
}

impl NavBar {
    pub fn builtin(brand: &str) -> Self {
        let link = |label: &str, href: &str, active_on: Option<PageKind>| NavLink {
            label: label.to_string(),
            href: href.to_string(),
            active_on,
        };
        Self {
            brand: brand.to_string(),
            logo: "fas fa-cube".to_string(),
            links: vec![
                link("Home", "/index.html", Some(PageKind::Home)),
                link("Plugins", "/index.html#plugins", None),
                link("About", "/index.html#about", None),
                link("Contact", "/index.html#contact", None),
                link("Terms", "/terms.html", Some(PageKind::Terms)),
            ],
        }
    }

    pub fn render(&self, current: PageKind) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            r#"<nav class="navbar" id="navbar"><div class="nav-container"><a class="nav-brand" href="/index.html"><i class="{logo}"></i><span>{brand}</span></a><ul class="nav-menu" id="navMenu">"#,
            logo = escape_html(&self.logo),
            brand = escape_html(&self.brand),
        );
        for link in &self.links {
            let class = if link.active_on == Some(current) {
                "nav-link active"
            } else {
                "nav-link"
            };
            let _ = write!(
                html,
                r#"<li><a href="{}" class="{}">{}</a></li>"#,
                escape_html(&link.href),
                class,
                escape_html(&link.label)
            );
        }
        html.push_str(r#"</ul><button class="nav-toggle" id="navToggle" aria-label="Toggle navigation"><span></span><span></span><span></span></button></div></nav>"#);
        html
    }
}
