/// What kind of element a thumbnail is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// A displayable thumbnail the lightbox can show.
///
/// Equality is identity: two items are the same member of a group only if they
/// refer to the same thumbnail. For DOM elements that means the same node, not
/// the same URL.
pub trait MediaSource: Clone + PartialEq {
    fn kind(&self) -> MediaKind;

    /// Playable locator. Videos read it from their nested `source` element.
    fn source_url(&self) -> Option<String>;

    /// The explicit `data-caption` attribute, if present and non-empty.
    fn caption_attr(&self) -> Option<String>;

    fn alt_text(&self) -> Option<String>;

    /// Caption shown under the enlarged item.
    ///
    /// Explicit caption first, then alt text for images only. Videos never fall
    /// back to alt.
    fn resolved_caption(&self) -> String {
        if let Some(caption) = self.caption_attr().filter(|c| !c.is_empty()) {
            return caption;
        }
        match self.kind() {
            MediaKind::Image => self.alt_text().unwrap_or_default(),
            MediaKind::Video => String::new(),
        }
    }
}

/// Playable locator of a video thumbnail.
///
/// The nested `source` element wins; a bare `src` on the video is the fallback.
/// Empty values count as missing.
pub fn video_source(nested: Option<String>, own: Option<String>) -> Option<String> {
    nested
        .filter(|src| !src.is_empty())
        .or(own)
        .filter(|src| !src.is_empty())
}

/// Plain value form of a thumbnail, used off the DOM.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub source: String,
    pub caption: Option<String>,
    pub alt: Option<String>,
}

impl MediaItem {
    pub fn image(source: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            source: source.into(),
            caption: None,
            alt: None,
        }
    }

    pub fn video(source: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            source: source.into(),
            caption: None,
            alt: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

impl MediaSource for MediaItem {
    fn kind(&self) -> MediaKind {
        self.kind
    }

    fn source_url(&self) -> Option<String> {
        Some(self.source.clone())
    }

    fn caption_attr(&self) -> Option<String> {
        self.caption.clone()
    }

    fn alt_text(&self) -> Option<String> {
        self.alt.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_caption_prefers_explicit() {
        let item = MediaItem::image("a.jpg")
            .with_caption("Day 1")
            .with_alt("beach");
        assert_eq!(item.resolved_caption(), "Day 1");
    }

    #[test]
    fn test_image_caption_falls_back_to_alt() {
        let item = MediaItem::image("a.jpg").with_alt("sunset");
        assert_eq!(item.resolved_caption(), "sunset");
    }

    #[test]
    fn test_empty_explicit_caption_falls_back_to_alt() {
        let item = MediaItem::image("a.jpg").with_caption("").with_alt("sunset");
        assert_eq!(item.resolved_caption(), "sunset");
    }

    #[test]
    fn test_image_without_caption_or_alt_is_empty() {
        assert_eq!(MediaItem::image("a.jpg").resolved_caption(), "");
    }

    #[test]
    fn test_video_source_prefers_nested() {
        let src = video_source(Some("nested.mp4".into()), Some("own.mp4".into()));
        assert_eq!(src.as_deref(), Some("nested.mp4"));
    }

    #[test]
    fn test_video_source_falls_back_to_own() {
        assert_eq!(
            video_source(None, Some("own.mp4".into())).as_deref(),
            Some("own.mp4")
        );
        assert_eq!(
            video_source(Some(String::new()), Some("own.mp4".into())).as_deref(),
            Some("own.mp4")
        );
    }

    #[test]
    fn test_video_source_missing() {
        assert_eq!(video_source(None, None), None);
        assert_eq!(video_source(Some(String::new()), Some(String::new())), None);
    }

    #[test]
    fn test_video_never_uses_alt() {
        let item = MediaItem::video("b.mp4").with_alt("ignored");
        assert_eq!(item.resolved_caption(), "");

        let item = MediaItem::video("b.mp4").with_caption("Whales");
        assert_eq!(item.resolved_caption(), "Whales");
    }
}
