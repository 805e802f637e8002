use logbook_common::{
    Lightbox, LightboxKey, LightboxSurface, MediaFrame, MediaGroup, MediaItem, MediaKind,
};

/// Surface that mirrors the overlay's DOM state
#[derive(Default)]
struct Overlay {
    displayed: bool,
    shown: bool,
    image_src: String,
    video_src: String,
    image_visible: bool,
    video_visible: bool,
    caption: String,
    prev_visible: bool,
    next_visible: bool,
    video_paused: bool,
}

impl LightboxSurface for Overlay {
    fn set_displayed(&mut self, displayed: bool) {
        self.displayed = displayed;
    }

    fn set_shown(&mut self, shown: bool) {
        self.shown = shown;
    }

    fn present(&mut self, frame: &MediaFrame) {
        match frame.kind {
            MediaKind::Video => {
                self.image_visible = false;
                self.video_visible = true;
                self.video_src = frame.source.clone();
            }
            MediaKind::Image => {
                self.video_visible = false;
                self.image_visible = true;
                self.image_src = frame.source.clone();
            }
        }
        self.caption = frame.caption.clone();
        self.prev_visible = frame.show_previous;
        self.next_visible = frame.show_next;
    }

    fn clear(&mut self) {
        self.video_paused = true;
        self.image_src.clear();
        self.video_src.clear();
    }
}

fn day_one() -> Vec<MediaItem> {
    vec![
        MediaItem::image("media/day1/harbor.jpg").with_caption("Day 1"),
        MediaItem::video("media/day1/whales.mp4"),
        MediaItem::image("media/day1/dusk.jpg").with_alt("sunset"),
    ]
}

#[test]
fn test_walk_through_mixed_group() {
    let group = day_one();
    let mut lightbox = Lightbox::new(Overlay::default());

    let reveal = lightbox.open(&group[0], MediaGroup::new(group.clone()));
    lightbox.complete(reveal);
    assert_eq!(lightbox.index(), Some(0));
    let overlay = lightbox.surface();
    assert!(overlay.displayed && overlay.shown);
    assert!(overlay.image_visible && !overlay.video_visible);
    assert_eq!(overlay.image_src, "media/day1/harbor.jpg");
    assert_eq!(overlay.caption, "Day 1");
    assert!(!overlay.prev_visible);
    assert!(overlay.next_visible);

    lightbox.next();
    assert_eq!(lightbox.index(), Some(1));
    let overlay = lightbox.surface();
    assert!(overlay.video_visible && !overlay.image_visible);
    assert_eq!(overlay.video_src, "media/day1/whales.mp4");
    assert_eq!(overlay.caption, "");
    assert!(overlay.prev_visible);
    assert!(overlay.next_visible);

    lightbox.next();
    assert_eq!(lightbox.index(), Some(2));
    let overlay = lightbox.surface();
    assert_eq!(overlay.caption, "sunset");
    assert!(overlay.prev_visible);
    assert!(!overlay.next_visible);

    lightbox.next();
    assert_eq!(lightbox.index(), Some(2));
    assert_eq!(lightbox.surface().image_src, "media/day1/dusk.jpg");
}

#[test]
fn test_identical_sources_are_distinct_members() {
    // identity is element identity; value items with equal fields collapse,
    // so give them distinct captions the way real thumbnails differ by node
    let group = vec![
        MediaItem::image("same.jpg").with_caption("first"),
        MediaItem::image("same.jpg").with_caption("second"),
    ];
    let mut lightbox = Lightbox::new(Overlay::default());
    let _ = lightbox.open(&group[1], MediaGroup::new(group.clone()));
    assert_eq!(lightbox.index(), Some(1));
    assert_eq!(lightbox.surface().caption, "second");
}

#[test]
fn test_previous_and_next_bounds_for_every_start() {
    let group = day_one();
    for start in 0..group.len() {
        let mut lightbox = Lightbox::new(Overlay::default());
        let _ = lightbox.open(&group[start], MediaGroup::new(group.clone()));

        lightbox.previous();
        assert_eq!(lightbox.index(), Some(start.saturating_sub(1)));
        let i = lightbox.index().unwrap();
        assert_eq!(lightbox.surface().prev_visible, i > 0);
        assert_eq!(lightbox.surface().next_visible, i < group.len() - 1);

        let _ = lightbox.open(&group[start], MediaGroup::new(group.clone()));
        lightbox.next();
        assert_eq!(lightbox.index(), Some((start + 1).min(group.len() - 1)));
        let i = lightbox.index().unwrap();
        assert_eq!(lightbox.surface().prev_visible, i > 0);
        assert_eq!(lightbox.surface().next_visible, i < group.len() - 1);
    }
}

#[test]
fn test_close_then_reopen_other_group() {
    let first = day_one();
    let second = vec![
        MediaItem::image("media/day2/trail.jpg").with_alt("trailhead"),
        MediaItem::image("media/day2/summit.jpg").with_caption("<em>Summit</em>"),
    ];
    let mut lightbox = Lightbox::new(Overlay::default());

    let reveal = lightbox.open(&first[1], MediaGroup::new(first.clone()));
    lightbox.complete(reveal);
    let conceal = lightbox.close();
    let reveal = lightbox.open(&second[1], MediaGroup::new(second.clone()));
    lightbox.complete(reveal);
    lightbox.complete(conceal);

    assert!(lightbox.is_open());
    assert_eq!(lightbox.index(), Some(1));
    assert_eq!(lightbox.group().len(), 2);
    let overlay = lightbox.surface();
    assert!(overlay.displayed && overlay.shown);
    assert!(!overlay.video_paused);
    assert_eq!(overlay.image_src, "media/day2/summit.jpg");
    assert_eq!(overlay.caption, "<em>Summit</em>");
}

#[test]
fn test_close_stops_video() {
    let group = day_one();
    let mut lightbox = Lightbox::new(Overlay::default());
    let _ = lightbox.open(&group[1], MediaGroup::new(group.clone()));
    let conceal = lightbox.close();
    lightbox.complete(conceal);

    let overlay = lightbox.surface();
    assert!(overlay.video_paused);
    assert!(overlay.video_src.is_empty());
    assert!(overlay.image_src.is_empty());
    assert!(!overlay.displayed);
}

#[test]
fn test_keyboard_inert_when_closed() {
    let group = day_one();
    let mut lightbox = Lightbox::new(Overlay::default());
    let _ = lightbox.open(&group[1], MediaGroup::new(group.clone()));
    let conceal = lightbox.close();
    lightbox.complete(conceal);

    for key in [LightboxKey::ArrowLeft, LightboxKey::ArrowRight, LightboxKey::Escape] {
        assert!(lightbox.handle_key(key).is_none());
    }
    assert_eq!(lightbox.index(), None);
    assert!(!lightbox.surface().displayed);
}
