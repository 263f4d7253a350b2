use std::fmt;

/// Scroll state reported by the host pager.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollState {
    #[default]
    Idle,
    Dragging,
    Settling,
}

impl fmt::Display for ScrollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Dragging => write!(f, "Dragging"),
            Self::Settling => write!(f, "Settling"),
        }
    }
}

/// Observer for pager events, notified after the parallax geometry has
/// been updated. All methods have default no-op implementations.
pub trait PageChangeListener {
    /// The pager scrolled. `offset` is the fraction of the next page
    /// shown and `offset_pixels` the same distance in pixels.
    fn on_page_scrolled(&mut self, _position: usize, _offset: f32, _offset_pixels: i32) {}

    /// A new page became the selected one.
    fn on_page_selected(&mut self, _position: usize) {}

    fn on_page_scroll_state_changed(&mut self, _state: ScrollState) {}
}
