/// Fraction of a section that must be on screen before it slides in.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.3;

/// Scroll offset past which the fixed header gets its solid background.
pub const DEFAULT_HEADER_ELEVATION: f64 = 50.0;

/// Slide-in state of one page section.
///
/// Not once-only: scrolling a section back out hides it again.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    threshold: f64,
    visible: bool,
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

impl Reveal {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Updates from the visible ratio of the section; returns true on change.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        let visible = visible_ratio >= self.threshold && visible_ratio > 0.0;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    /// Animation variant name for the current state.
    pub fn variant(&self) -> &'static str {
        if self.visible { "visible" } else { "hidden" }
    }
}

/// Visible ratio of a section spanning `top..top + height` in a viewport
/// spanning `scroll_y..scroll_y + viewport_height`.
pub fn visible_ratio(top: f64, height: f64, scroll_y: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }

    let start = top.max(scroll_y);
    let end = (top + height).min(scroll_y + viewport_height);

    ((end - start).max(0.0) / height).min(1.0)
}

pub fn header_elevated(scroll_y: f64, offset: f64) -> bool {
    scroll_y > offset
}
