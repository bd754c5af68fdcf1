//! Shared footer

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::format::escape_html;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

impl Link {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub icon: String,
    pub url: String,
    /// Hover colour, any CSS colour value
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub description: String,
    pub founded: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterData {
    pub company: Company,
    pub main_links: Vec<Link>,
    pub resources: Vec<Link>,
    pub support: Vec<Link>,
    pub legal: Vec<Link>,
    pub social: Vec<SocialLink>,
    pub tagline: String,
    pub maker: Link,
}

impl FooterData {
    pub fn builtin() -> Self {
        let social = |name: &str, icon: &str, url: &str, color: &str| SocialLink {
            name: name.to_string(),
            icon: icon.to_string(),
            url: url.to_string(),
            color: color.to_string(),
        };

        Self {
            company: Company {
                name: "InternationalMC".to_string(),
                description: "Minecraft plugin development team creating original plugins for servers."
                    .to_string(),
                founded: "2025".to_string(),
                logo: "fas fa-cube".to_string(),
            },
            main_links: vec![
                Link::new("Home", "/index.html"),
                Link::new("Plugins", "/index.html#plugins"),
                Link::new("About", "/index.html#about"),
                Link::new("Contact", "/index.html#contact"),
            ],
            resources: vec![
                Link::new("Modrinth", "https://modrinth.com/user/International"),
                Link::new("Github", "https://github.com/internationalmc"),
            ],
            support: vec![Link::new("PayPal", "https://paypal.me/rewejkem")],
            legal: vec![
                Link::new("Terms", "/terms.html"),
                Link::new("License", "/terms.html#license"),
            ],
            social: vec![
                social("Discord", "fab fa-discord", "https://internationalmc.pages.dev/discord", "#5865F2"),
                social("GitHub", "fab fa-github", "https://github.com/InternationalMC", "#333"),
                social("Modrinth", "fa-solid fa-wrench", "https://modrinth.com/user/International", "#1BD96A"),
                social("Mail", "fa fa-envelope", "mailto:rewejkem@proton.me", "#E94234"),
                social("PayPal", "fa-brands fa-paypal", "https://www.paypal.com/paypalme/rewejkem", "#0197DA"),
            ],
            tagline: "Not affiliated with Mojang or Microsoft. Statistics are not automatically updated."
                .to_string(),
            maker: Link::new("Wejkey", "https://wejkey.github.io/"),
        }
    }

    /// Footer markup; `year` goes into the copyright line
    pub fn render(&self, year: i32) -> String {
        let mut html = String::from(r#"<div class="footer-content"><div class="container"><div class="footer-main">"#);
        html.push_str(&self.render_company());
        html.push_str(&render_column("Quick Links", &self.main_links));
        html.push_str(&render_column("Resources", &self.resources));
        html.push_str(&render_column("Support Us", &self.support));
        html.push_str(r#"</div><div class="footer-divider"></div><div class="footer-bottom">"#);
        html.push_str(&self.render_bottom(year));
        html.push_str("</div></div></div>");
        html
    }

    fn render_company(&self) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            r#"<div class="footer-section footer-company"><div class="footer-logo"><i class="{logo}"></i><span>{name}</span></div><p class="footer-description">{description}</p><div class="footer-social">"#,
            logo = escape_html(&self.company.logo),
            name = escape_html(&self.company.name),
            description = escape_html(&self.company.description),
        );
        for item in &self.social {
            let _ = write!(
                html,
                r#"<a href="{url}" class="social-link" target="_blank" rel="noopener noreferrer" data-tooltip="{name}" aria-label="{name}" style="--social-color: {color}"><i class="{icon}"></i></a>"#,
                url = escape_html(&item.url),
                name = escape_html(&item.name),
                color = escape_html(&item.color),
                icon = escape_html(&item.icon),
            );
        }
        html.push_str("</div></div>");
        html
    }

    fn render_bottom(&self, year: i32) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            r#"<div class="footer-bottom-content"><div class="footer-copyright"><p>&copy; {year} {name}. All rights reserved.</p><p class="footer-tagline">{tagline}</p></div><div class="footer-legal">"#,
            name = escape_html(&self.company.name),
            tagline = escape_html(&self.tagline),
        );
        for link in &self.legal {
            let _ = write!(
                html,
                r#"<a href="{}" class="legal-link">{}</a>"#,
                escape_html(&link.url),
                escape_html(&link.name)
            );
        }
        let _ = write!(
            html,
            r#"</div><div class="footer-badge"><i class="fas fa-heart"></i><span>Made by <a href="{}">{}</a></span></div></div>"#,
            escape_html(&self.maker.url),
            escape_html(&self.maker.name)
        );
        html
    }
}

impl Default for FooterData {
    fn default() -> Self {
        Self::builtin()
    }
}

fn render_column(title: &str, links: &[Link]) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="footer-section"><h4 class="footer-title">{}</h4><ul class="footer-links">"#,
        escape_html(title)
    );
    for link in links {
        let _ = write!(
            html,
            r#"<li><a href="{}" class="footer-link">{}</a></li>"#,
            escape_html(&link.url),
            escape_html(&link.name)
        );
    }
    html.push_str("</ul></div>");
    html
}
