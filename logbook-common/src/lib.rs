//! logbook-common - Page behavior for the travel journal, without the DOM
//!
//! Holds the lightbox controller, media grouping, the scroll palette and
//! section tracking. The web crate binds these to live elements.

mod config;
mod error;
mod group;
mod lightbox;
mod media;
pub mod palette;
pub mod sections;

pub use config::{CaptionPolicy, LazyVideoConfig, LightboxConfig, PageConfig, SectionConfig};
pub use error::LogbookError;
pub use group::{derive_group, GroupScope, MediaGroup};
pub use lightbox::{
    Lightbox, LightboxKey, LightboxSurface, MediaFrame, Transition, TransitionKind,
};
pub use media::{video_source, MediaItem, MediaKind, MediaSource};
