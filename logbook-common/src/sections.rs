//! Section tracking for the dot navigator

use crate::config::SectionConfig;

/// Visual state of one navigation dot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotState {
    Active,
    Passed,
    Upcoming,
}

impl DotState {
    /// Class to add after clearing `active` and `passed`.
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Self::Active => Some("active"),
            Self::Passed => Some("passed"),
            Self::Upcoming => None,
        }
    }
}

/// Result of measuring every section against the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    /// Last section whose top has passed the activation line
    pub active: Option<usize>,
    /// Sections that should fade in
    pub revealed: Vec<usize>,
}

impl SectionLayout {
    /// Measure sections given their top edges relative to the viewport, in
    /// document order.
    pub fn measure(section_tops: &[f64], viewport_height: f64, config: &SectionConfig) -> Self {
        let activation_line = viewport_height * config.activation_ratio;
        let reveal_line = viewport_height * config.reveal_ratio;

        let active = section_tops
            .iter()
            .rposition(|&top| top <= activation_line);
        let revealed = section_tops
            .iter()
            .enumerate()
            .filter(|&(_, &top)| top < reveal_line)
            .map(|(i, _)| i)
            .collect();

        Self { active, revealed }
    }

    pub fn dot_state(&self, dot: usize) -> DotState {
        match self.active {
            Some(active) if dot == active => DotState::Active,
            Some(active) if dot < active => DotState::Passed,
            _ => DotState::Upcoming,
        }
    }
}

/// Whether the dot navigator should be visible for a header bottom edge.
pub fn dot_nav_visible(header_bottom: f64, config: &SectionConfig) -> bool {
    header_bottom < config.header_offset_px
}

/// Label of a read-more toggle.
pub fn read_more_label(expanded: bool) -> &'static str {
    if expanded {
        "Read less"
    } else {
        "Read more"
    }
}
