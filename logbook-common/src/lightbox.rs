//! Lightbox controller
//!
//! Owns the overlay surface, the active media group and the current index.
//! Every operation is synchronous; the fade in and fade out are split into a
//! first step performed immediately and a [`Transition`] the caller completes
//! once the stylesheet's animation delay has elapsed.

use crate::config::LightboxConfig;
use crate::group::MediaGroup;
use crate::media::{MediaKind, MediaSource};
use tracing::debug;

/// Everything the surface needs to display one item.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaFrame {
    pub kind: MediaKind,
    pub source: String,
    pub caption: String,
    pub show_previous: bool,
    pub show_next: bool,
}

/// The overlay the controller draws into.
pub trait LightboxSurface {
    /// Whether the overlay takes part in layout at all.
    fn set_displayed(&mut self, displayed: bool);

    /// The visual state the fade transition is keyed on.
    fn set_shown(&mut self, shown: bool);

    fn present(&mut self, frame: &MediaFrame);

    /// Drop both media sources and stop playback.
    fn clear(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Apply the shown state after opening
    Reveal,
    /// Hide the overlay and clear sources after closing
    Conceal,
}

/// Deferred second phase of an open or close.
///
/// Tagged with the generation of the call that produced it. Completing a
/// transition after a newer open or close has happened does nothing.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    kind: TransitionKind,
    generation: u64,
}

impl Transition {
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// How long to wait before completing this transition.
    pub fn delay_ms(&self, config: &LightboxConfig) -> u32 {
        match self.kind {
            TransitionKind::Reveal => config.reveal_delay_ms,
            TransitionKind::Conceal => config.conceal_delay_ms,
        }
    }
}

/// Keys the lightbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl LightboxKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Escape),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }
}

pub struct Lightbox<S, M> {
    surface: S,
    group: MediaGroup<M>,
    index: Option<usize>,
    displayed: bool,
    generation: u64,
}

impl<S: LightboxSurface, M: MediaSource> Lightbox<S, M> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            group: MediaGroup::default(),
            index: None,
            displayed: false,
            generation: 0,
        }
    }

    /// Whether the overlay is displayed. Stays true until a close completes.
    pub fn is_open(&self) -> bool {
        self.displayed
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn group(&self) -> &MediaGroup<M> {
        &self.group
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Open on `item` within `group`.
    ///
    /// If `item` is not a member the index is `None` and nothing is
    /// presented, leaving the surface blank.
    pub fn open(&mut self, item: &M, group: MediaGroup<M>) -> Transition {
        self.index = group.position_of(item);
        self.group = group;
        self.displayed = true;
        self.surface.set_displayed(true);
        debug!(index = ?self.index, len = self.group.len(), "Opening lightbox");

        if let Some(index) = self.index {
            self.render(index);
        }
        self.begin(TransitionKind::Reveal)
    }

    /// Present the item at `index`. No-op if there is none.
    pub fn render(&mut self, index: usize) {
        let Some(media) = self.group.get(index) else {
            return;
        };

        let frame = MediaFrame {
            kind: media.kind(),
            source: media.source_url().unwrap_or_default(),
            caption: media.resolved_caption(),
            show_previous: index > 0,
            show_next: index + 1 < self.group.len(),
        };
        self.surface.present(&frame);
    }

    pub fn next(&mut self) {
        let Some(index) = self.index else {
            return;
        };
        if index + 1 < self.group.len() {
            self.index = Some(index + 1);
            self.render(index + 1);
        }
    }

    pub fn previous(&mut self) {
        let Some(index) = self.index else {
            return;
        };
        if index > 0 {
            self.index = Some(index - 1);
            self.render(index - 1);
        }
    }

    /// Start fading out. The overlay stays displayed until the returned
    /// transition is completed.
    pub fn close(&mut self) -> Transition {
        self.surface.set_shown(false);
        debug!("Closing lightbox");
        self.begin(TransitionKind::Conceal)
    }

    /// Apply the second phase of an open or close, unless superseded.
    pub fn complete(&mut self, transition: Transition) {
        if transition.generation != self.generation {
            debug!(kind = ?transition.kind, "Skipping superseded transition");
            return;
        }

        match transition.kind {
            TransitionKind::Reveal => self.surface.set_shown(true),
            TransitionKind::Conceal => {
                self.surface.clear();
                self.surface.set_displayed(false);
                self.displayed = false;
                self.group = MediaGroup::default();
                self.index = None;
            }
        }
    }

    /// Route a key press. Ignored while the overlay is not displayed.
    pub fn handle_key(&mut self, key: LightboxKey) -> Option<Transition> {
        if !self.displayed {
            return None;
        }
        match key {
            LightboxKey::Escape => return Some(self.close()),
            LightboxKey::ArrowLeft => self.previous(),
            LightboxKey::ArrowRight => self.next(),
        }
        None
    }

    fn begin(&mut self, kind: TransitionKind) -> Transition {
        self.generation += 1;
        Transition {
            kind,
            generation: self.generation,
        }
    }
}
