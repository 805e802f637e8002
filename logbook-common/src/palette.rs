//! Scroll-driven color theme
//!
//! The page walks through four palettes from top to bottom. Scroll progress
//! picks a pair of adjacent palettes and a blend factor between them; the
//! blended colors are published as CSS custom properties on the root element.

/// An sRGB color, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Channel-wise blend, rounding to the nearest integer.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }

    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }

    pub fn css_alpha(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_color: Rgb,
    pub card_bg: Rgb,
    pub card_border: Rgb,
    pub accent_color: Rgb,
    pub accent_light: Rgb,
    pub text_primary: Rgb,
    pub text_secondary: Rgb,
    pub text_muted: Rgb,
    pub timeline_line: Rgb,
    pub bird_link_color: Rgb,
    pub bird_link_hover: Rgb,
}

impl Palette {
    fn lerp(&self, other: &Palette, t: f64) -> Palette {
        Palette {
            bg_color: self.bg_color.lerp(other.bg_color, t),
            card_bg: self.card_bg.lerp(other.card_bg, t),
            card_border: self.card_border.lerp(other.card_border, t),
            accent_color: self.accent_color.lerp(other.accent_color, t),
            accent_light: self.accent_light.lerp(other.accent_light, t),
            text_primary: self.text_primary.lerp(other.text_primary, t),
            text_secondary: self.text_secondary.lerp(other.text_secondary, t),
            text_muted: self.text_muted.lerp(other.text_muted, t),
            timeline_line: self.timeline_line.lerp(other.timeline_line, t),
            bird_link_color: self.bird_link_color.lerp(other.bird_link_color, t),
            bird_link_hover: self.bird_link_hover.lerp(other.bird_link_hover, t),
        }
    }

    /// Custom properties to set on the document root, in a fixed order.
    pub fn css_properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--bg-color", self.bg_color.css()),
            ("--card-bg", self.card_bg.css_alpha(0.92)),
            ("--card-border", self.card_border.css_alpha(0.2)),
            ("--accent-color", self.accent_color.css()),
            ("--accent-light", self.accent_light.css()),
            ("--accent-glow", self.accent_color.css_alpha(0.35)),
            ("--text-primary", self.text_primary.css()),
            ("--text-secondary", self.text_secondary.css()),
            ("--text-muted", self.text_muted.css()),
            ("--timeline-line", self.timeline_line.css_alpha(0.4)),
            ("--bird-link-color", self.bird_link_color.css()),
            ("--bird-link-hover", self.bird_link_hover.css()),
        ]
    }
}

/// Ocean, forest, midnight and desert, top of the page to bottom.
pub const PALETTES: [Palette; 4] = [
    Palette {
        bg_color: Rgb(10, 22, 40),
        card_bg: Rgb(16, 32, 52),
        card_border: Rgb(100, 180, 180),
        accent_color: Rgb(95, 179, 179),
        accent_light: Rgb(141, 208, 208),
        text_primary: Rgb(240, 244, 248),
        text_secondary: Rgb(160, 180, 196),
        text_muted: Rgb(92, 112, 128),
        timeline_line: Rgb(95, 179, 179),
        bird_link_color: Rgb(230, 192, 123),
        bird_link_hover: Rgb(240, 212, 138),
    },
    Palette {
        bg_color: Rgb(13, 26, 20),
        card_bg: Rgb(24, 40, 32),
        card_border: Rgb(140, 160, 120),
        accent_color: Rgb(143, 174, 123),
        accent_light: Rgb(184, 212, 160),
        text_primary: Rgb(244, 242, 236),
        text_secondary: Rgb(184, 196, 168),
        text_muted: Rgb(106, 120, 96),
        timeline_line: Rgb(143, 174, 123),
        bird_link_color: Rgb(212, 165, 116),
        bird_link_hover: Rgb(232, 192, 148),
    },
    Palette {
        bg_color: Rgb(18, 16, 26),
        card_bg: Rgb(32, 28, 48),
        card_border: Rgb(160, 140, 180),
        accent_color: Rgb(168, 144, 192),
        accent_light: Rgb(200, 184, 216),
        text_primary: Rgb(244, 242, 248),
        text_secondary: Rgb(184, 168, 200),
        text_muted: Rgb(106, 92, 120),
        timeline_line: Rgb(168, 144, 192),
        bird_link_color: Rgb(232, 168, 160),
        bird_link_hover: Rgb(244, 192, 184),
    },
    Palette {
        bg_color: Rgb(26, 21, 18),
        card_bg: Rgb(40, 32, 28),
        card_border: Rgb(180, 140, 100),
        accent_color: Rgb(200, 149, 108),
        accent_light: Rgb(224, 184, 144),
        text_primary: Rgb(248, 244, 240),
        text_secondary: Rgb(192, 176, 160),
        text_muted: Rgb(120, 104, 88),
        timeline_line: Rgb(200, 149, 108),
        bird_link_color: Rgb(124, 184, 144),
        bird_link_hover: Rgb(152, 208, 168),
    },
];

/// Fraction of the page scrolled, clamped to `[0, 1]`.
///
/// A page that cannot scroll reports 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// Blended palette for a scroll progress in `[0, 1]`.
///
/// Non-finite progress is treated as the top of the page.
pub fn palette_at(progress: f64) -> Palette {
    let progress = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let last = PALETTES.len() - 1;
    let scaled = progress * PALETTES.len() as f64;
    let index = (scaled.floor() as usize).min(last);
    let next = (index + 1).min(last);
    let t = scaled - index as f64;
    PALETTES[index].lerp(&PALETTES[next], t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps() {
        assert_eq!(scroll_progress(-20.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(1500.0, 2000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_unscrollable_page_is_top() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn test_top_is_first_palette() {
        assert_eq!(palette_at(0.0), PALETTES[0]);
    }

    #[test]
    fn test_bottom_is_last_palette() {
        assert_eq!(palette_at(1.0), PALETTES[3]);
    }

    #[test]
    fn test_quarter_boundaries_hit_palettes_exactly() {
        assert_eq!(palette_at(0.25), PALETTES[1]);
        assert_eq!(palette_at(0.5), PALETTES[2]);
        assert_eq!(palette_at(0.75), PALETTES[3]);
    }

    #[test]
    fn test_non_finite_progress_is_top() {
        assert_eq!(palette_at(f64::NAN), PALETTES[0]);
        assert_eq!(palette_at(f64::INFINITY), PALETTES[0]);
        assert_eq!(palette_at(f64::NEG_INFINITY), PALETTES[0]);
    }

    #[test]
    fn test_out_of_range_progress_clamps() {
        assert_eq!(palette_at(-0.5), PALETTES[0]);
        assert_eq!(palette_at(3.0), PALETTES[3]);
    }

    #[test]
    fn test_midway_blend_rounds() {
        // halfway between ocean and forest backgrounds: (11.5, 24, 30)
        let palette = palette_at(0.125);
        assert_eq!(palette.bg_color, Rgb(12, 24, 30));
    }

    #[test]
    fn test_css_properties() {
        let props = PALETTES[0].css_properties();
        assert_eq!(props.len(), 12);
        assert_eq!(props[0], ("--bg-color", "rgb(10, 22, 40)".to_string()));
        assert_eq!(props[1], ("--card-bg", "rgba(16, 32, 52, 0.92)".to_string()));
        assert_eq!(props[5], ("--accent-glow", "rgba(95, 179, 179, 0.35)".to_string()));
        assert_eq!(props[9], ("--timeline-line", "rgba(95, 179, 179, 0.4)".to_string()));
    }
}
