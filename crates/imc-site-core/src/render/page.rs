//! Page templates with named mount points
//!
//! A template marks each mount point with `{{mount:<id>}}`. Mounting into an
//! id the template does not contain is a no-op, so renderers can run against
//! any page without checking its layout first.

use std::collections::BTreeMap;

const MOUNT_OPEN: &str = "{{mount:";
const MOUNT_CLOSE: &str = "}}";

#[derive(Debug, Clone)]
pub struct Page {
    template: String,
    mounts: BTreeMap<String, String>,
}

impl Page {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            mounts: BTreeMap::new(),
        }
    }

    pub fn has_mount(&self, id: &str) -> bool {
        self.template.contains(&slot(id))
    }

    /// Replace the content of a mount point. Returns false when the template
    /// has no such mount point.
    pub fn mount(&mut self, id: &str, content: impl Into<String>) -> bool {
        if !self.has_mount(id) {
            tracing::debug!(mount = id, "mount point missing, skipped");
            return false;
        }
        self.mounts.insert(id.to_string(), content.into());
        true
    }

    /// Current content of a mount point
    pub fn content(&self, id: &str) -> Option<&str> {
        self.mounts.get(id).map(|s| s.as_str())
    }

    /// Final HTML; mount points never filled are left empty
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find(MOUNT_OPEN) {
            let after_open = &rest[start + MOUNT_OPEN.len()..];
            let Some(end) = after_open.find(MOUNT_CLOSE) else {
                break;
            };
            out.push_str(&rest[..start]);
            let id = &after_open[..end];
            if let Some(content) = self.mounts.get(id) {
                out.push_str(content);
            }
            rest = &after_open[end + MOUNT_CLOSE.len()..];
        }
        out.push_str(rest);
        out
    }
}

fn slot(id: &str) -> String {
    format!("{}{}{}", MOUNT_OPEN, id, MOUNT_CLOSE)
}
