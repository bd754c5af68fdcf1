//! Terms of Service document
//!
//! Sections keep their insertion order; the key doubles as the HTML anchor,
//! so `/terms.html#license` jumps to the license section.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};
use crate::format::escape_html;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsMeta {
    pub title: String,
    /// `YYYY-MM-DD`
    pub last_updated: String,
    pub version: String,
    /// `YYYY-MM-DD`
    pub effective_date: String,
    pub company_name: String,
    pub jurisdiction: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermsSection {
    pub key: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// One paragraph per entry; empty entries are spacing
    pub content: Vec<String>,
}

impl TermsSection {
    pub fn new(key: &str, title: &str, icon: Option<&str>, content: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            icon: icon.map(|s| s.to_string()),
            content: content.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermsDocument {
    pub meta: TermsMeta,
    pub sections: Vec<TermsSection>,
}

impl TermsDocument {
    pub fn builtin() -> Self {
        Self {
            meta: TermsMeta {
                title: "Terms of Service".to_string(),
                last_updated: "2025-09-13".to_string(),
                version: "2.0".to_string(),
                effective_date: "2025-09-14".to_string(),
                company_name: "InternationalMC".to_string(),
                jurisdiction: "International".to_string(),
            },
            sections: vec![
                TermsSection::new(
                    "acceptance",
                    "Acceptance of Terms",
                    Some("fas fa-handshake"),
                    &[
                        "By using InternationalMC plugins or website, you accept and agree with terms below.",
                        "If you do not agree, do not use this service.",
                    ],
                ),
                TermsSection::new(
                    "serviceDescription",
                    "Service Description",
                    Some("fas fa-cogs"),
                    &[
                        "InternationalMC provides Minecraft plugins, including but not limited to:",
                        "• Custom Minecraft server plugins",
                        "• Plugin installation and configuration support",
                        "• Technical documentation and guides",
                        "• Support through Discord and other platforms",
                        "Our services are provided \"as is\" without warranty of any kind.",
                    ],
                ),
                TermsSection::new(
                    "userResponsibilities",
                    "User Responsibilities",
                    Some("fas fa-user-shield"),
                    &[
                        "Users are responsible for:",
                        "• Providing accurate information when using our plugins",
                        "• Using our plugins in accordance with Minecraft Terms of Service (+EULA)",
                        "• Not using our plugins for any illegal or unauthorized purposes",
                        "• Following community guidelines",
                    ],
                ),
                TermsSection::new(
                    "restrictions",
                    "Usage Restrictions",
                    Some("fas fa-ban"),
                    &[
                        "The following activities are strictly prohibited:",
                        "• Reverse engineering, decompiling, or disassembling our plugins",
                        "• Redistributing or reselling our plugins without explicit permission",
                        "• Engaging in any form of harassment or abuse",
                        "• Violating any applicable local, state, national, or international law",
                    ],
                ),
                TermsSection::new(
                    "support",
                    "Support and Maintenance",
                    Some("fas fa-life-ring"),
                    &[
                        "We do not guarantee response times or resolution of issues.",
                        "We reserve the right to refuse support.",
                    ],
                ),
                TermsSection::new(
                    "liability",
                    "Limitation of Liability",
                    Some("fas fa-exclamation-triangle"),
                    &[
                        "InternationalMC shall not be liable for any indirect, incidental, special, consequential, or punitive damages.",
                        "We are not responsible for any loss of data, profits, or business interruption.",
                        "Users acknowledge that they use our services at their own risk.",
                    ],
                ),
                TermsSection::new(
                    "termination",
                    "Termination",
                    Some("fas fa-times-circle"),
                    &["We reserve the right to terminate or suspend access to our services at any time, with or without cause."],
                ),
                TermsSection::new(
                    "modifications",
                    "Modifications to Terms",
                    Some("fas fa-edit"),
                    &[
                        "We reserve the right to modify these terms at any time without prior notice.",
                        "Changes will be effective immediately upon posting on our website.",
                        "Continued use of our services after changes constitutes acceptance of new terms.",
                        "Users are encouraged to review these terms periodically.",
                        "Significant changes may be announced through our community channels.",
                    ],
                ),
                TermsSection::new(
                    "license",
                    "IMCCL",
                    None,
                    &[
                        "InternationalMC Core License",
                        "Copyright © 2025 InternationalMC. All rights reserved.",
                        "",
                        "Permission is granted to use this software on your own Minecraft server(s) in accordance with InternationalMC Terms of Service.",
                        "",
                        "You may NOT:",
                        "- Copy, redistribute, or re-upload this software to any other platform.",
                        "- Modify, decompile, or create derivative works of this software.",
                        "- Share this software with third parties without explicit written permission.",
                        "- Claim ownership of this software or misrepresent it as your own.",
                        "",
                        "This software is provided \"as is,\" without warranty of any kind, express or implied.",
                    ],
                ),
            ],
        }
    }

    pub fn section(&self, key: &str) -> Option<&TermsSection> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Insert or replace a section; new keys are appended
    pub fn add_section(&mut self, section: TermsSection) {
        match self.sections.iter_mut().find(|s| s.key == section.key) {
            Some(existing) => *existing = section,
            None => self.sections.push(section),
        }
    }

    pub fn remove_section(&mut self, key: &str) -> Result<TermsSection> {
        let index = self
            .sections
            .iter()
            .position(|s| s.key == key)
            .ok_or_else(|| SiteError::SectionNotFound {
                key: key.to_string(),
            })?;
        Ok(self.sections.remove(index))
    }

    pub fn last_updated(&self) -> Result<NaiveDate> {
        parse_date(&self.meta.last_updated)
    }

    pub fn effective_date(&self) -> Result<NaiveDate> {
        parse_date(&self.meta.effective_date)
    }

    /// e.g. "September 13, 2025"
    pub fn formatted_last_updated(&self) -> Result<String> {
        Ok(format_long_date(self.last_updated()?))
    }

    /// Whether `last_updated` is within `days` of `today`, in either direction
    pub fn is_recently_updated(&self, days: i64, today: NaiveDate) -> Result<bool> {
        let diff = (today - self.last_updated()?).num_days().abs();
        Ok(diff <= days)
    }

    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Replace the whole document. On error the current document is kept.
    pub fn import_json(&mut self, json: &str) -> Result<()> {
        let doc: TermsDocument = serde_json::from_str(json)?;
        parse_date(&doc.meta.last_updated)?;
        parse_date(&doc.meta.effective_date)?;
        *self = doc;
        Ok(())
    }

    /// Sidebar with one anchor per section
    pub fn render_nav(&self) -> String {
        let mut html = String::from(r#"<ul class="terms-nav">"#);
        for (index, section) in self.sections.iter().enumerate() {
            let class = if index == 0 {
                "terms-nav-item active"
            } else {
                "terms-nav-item"
            };
            let _ = write!(
                html,
                r##"<li><a class="{class}" data-section="{key}" href="#{key}">{title}</a></li>"##,
                key = escape_html(&section.key),
                title = escape_html(&section.title),
            );
        }
        html.push_str("</ul>");
        html
    }

    /// Document body; sections reveal with a 50 ms stagger
    pub fn render_html(&self) -> Result<String> {
        let mut html = String::new();
        let _ = write!(
            html,
            r#"<div class="terms-document"><div class="terms-section-header"><h2><i class="fas fa-file-contract"></i> {title}</h2><div class="terms-meta"><span class="meta-item"><i class="fas fa-calendar"></i> Last Updated: {updated}</span><span class="meta-item"><i class="fas fa-tag"></i> Version: {version}</span><span class="meta-item"><i class="fas fa-clock"></i> Effective: {effective}</span></div></div>"#,
            title = escape_html(&self.meta.title),
            updated = self.formatted_last_updated()?,
            version = escape_html(&self.meta.version),
            effective = format_long_date(self.effective_date()?),
        );

        for (index, section) in self.sections.iter().enumerate() {
            let _ = write!(
                html,
                r#"<div class="terms-content-section scroll-reveal" id="{key}" style="animation-delay: {delay}ms"><div class="section-header"><h3>"#,
                key = escape_html(&section.key),
                delay = index * 50,
            );
            if let Some(icon) = &section.icon {
                let _ = write!(html, r#"<i class="{}"></i> "#, escape_html(icon));
            }
            let _ = write!(
                html,
                r#"{}</h3></div><div class="section-content">"#,
                escape_html(&section.title)
            );
            for paragraph in &section.content {
                let _ = write!(html, "<p>{}</p>", escape_html(paragraph));
            }
            html.push_str("</div></div>");
        }

        html.push_str("</div>");
        Ok(html)
    }
}

impl Default for TermsDocument {
    fn default() -> Self {
        Self::builtin()
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| SiteError::InvalidDate {
        value: value.to_string(),
    })
}

fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
