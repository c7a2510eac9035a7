//! Shared diagram shell
//!
//! Every diagram aggregate embeds a [`BaseDiagram`] holding the settings
//! that do not depend on the diagram kind. The shell turns them into a
//! front-matter block placed before the rendered body.

use super::{ConfigurationProperties, PropertyKey, Theme};
use crate::core::yaml_scalar;

const FRONT_MATTER_DELIMITER: &str = "---\n";

/// Kind-independent diagram configuration
#[derive(Debug, Clone, PartialEq)]
pub struct BaseDiagram<K: PropertyKey> {
    title: Option<String>,
    theme: Option<Theme>,
    properties: ConfigurationProperties<K>,
}

impl<K: PropertyKey> Default for BaseDiagram<K> {
    fn default() -> Self {
        Self {
            title: None,
            theme: None,
            properties: ConfigurationProperties::new(),
        }
    }
}

impl<K: PropertyKey> BaseDiagram<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn clear_title(&mut self) -> &mut Self {
        self.title = None;
        self
    }

    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> &mut Self {
        self.theme = Some(theme);
        self
    }

    pub fn properties(&self) -> &ConfigurationProperties<K> {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut ConfigurationProperties<K> {
        &mut self.properties
    }

    /// True when nothing would be emitted as front-matter
    pub fn is_unconfigured(&self) -> bool {
        self.title.is_none() && self.theme.is_none() && self.properties.is_empty()
    }

    /// The front-matter block, or an empty string when unconfigured
    pub fn front_matter(&self) -> String {
        if self.is_unconfigured() {
            return String::new();
        }

        let mut out = String::from(FRONT_MATTER_DELIMITER);
        if let Some(title) = &self.title {
            out.push_str(&format!("title: {}\n", yaml_scalar(title)));
        }
        if self.theme.is_some() || !self.properties.is_empty() {
            out.push_str("config:\n");
            if let Some(theme) = self.theme {
                out.push_str(&format!("  theme: {}\n", theme));
            }
            out.push_str(&self.properties.render("  "));
        }
        out.push_str(FRONT_MATTER_DELIMITER);
        out
    }

    /// Prefix `body` with the front-matter block. The body is not altered.
    pub fn wrap(&self, body: &str) -> String {
        let mut out = self.front_matter();
        out.push_str(body);
        out
    }
}
