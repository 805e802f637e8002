//! Page configuration
//!
//! Every field has a default matching the stylesheet the page ships with, so
//! an absent or partial config block is fine.

use crate::error::LogbookError;
use serde::Deserialize;
use std::borrow::Cow;

/// How caption markup is written into the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionPolicy {
    /// Authored captions are trusted markup and inserted verbatim
    #[default]
    Markup,
    /// Captions are inserted as plain text
    Text,
}

impl CaptionPolicy {
    /// Markup to write into the caption element.
    pub fn to_html<'a>(&self, caption: &'a str) -> Cow<'a, str> {
        match self {
            Self::Markup => Cow::Borrowed(caption),
            Self::Text => Cow::Owned(escape_html(caption)),
        }
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    /// Wait before applying the shown state, matching the fade-in
    pub reveal_delay_ms: u32,
    /// Wait before hiding the overlay, matching the fade-out
    pub conceal_delay_ms: u32,
    pub caption_policy: CaptionPolicy,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 10,
            conceal_delay_ms: 300,
            caption_policy: CaptionPolicy::Markup,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    /// Fraction of the viewport height a section top must pass to become active
    pub activation_ratio: f64,
    /// Fraction of the viewport height a section top must pass to fade in
    pub reveal_ratio: f64,
    /// The dot nav appears once the header's bottom edge is above this offset
    pub header_offset_px: f64,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            activation_ratio: 0.3,
            reveal_ratio: 0.85,
            header_offset_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LazyVideoConfig {
    pub root_margin: String,
    pub threshold: f64,
}

impl Default for LazyVideoConfig {
    fn default() -> Self {
        Self {
            root_margin: "100px 0px".to_string(),
            threshold: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub lightbox: LightboxConfig,
    pub sections: SectionConfig,
    pub lazy_video: LazyVideoConfig,
}

impl PageConfig {
    /// Element id of the optional JSON config block.
    pub const ELEMENT_ID: &'static str = "logbook-config";

    pub fn from_json(json: &str) -> Result<Self, LogbookError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = PageConfig::from_json(
            r#"{"lightbox": {"conceal_delay_ms": 500, "caption_policy": "text"}}"#,
        )
        .unwrap();
        assert_eq!(config.lightbox.conceal_delay_ms, 500);
        assert_eq!(config.lightbox.reveal_delay_ms, 10);
        assert_eq!(config.lightbox.caption_policy, CaptionPolicy::Text);
        assert_eq!(config.sections, SectionConfig::default());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = PageConfig::from_json("{lightbox").unwrap_err();
        assert!(matches!(err, LogbookError::Config(_)));
    }

    #[test]
    fn test_markup_caption_is_verbatim() {
        let html = CaptionPolicy::Markup.to_html("<em>Summit</em> &amp; ridge");
        assert_eq!(html, "<em>Summit</em> &amp; ridge");
    }

    #[test]
    fn test_text_caption_is_escaped() {
        let html = CaptionPolicy::Text.to_html(r#"<img src=x onerror="boom"> & Ma's"#);
        assert_eq!(
            html,
            "&lt;img src=x onerror=&quot;boom&quot;&gt; &amp; Ma&#39;s"
        );
    }

    #[test]
    fn test_unknown_caption_policy_rejected() {
        assert!(PageConfig::from_json(r#"{"lightbox": {"caption_policy": "html"}}"#).is_err());
    }
}
