use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use parallax_core::config::ScaleMode;
use parallax_core::engine::ParallaxEngine;
use parallax_core::geometry::Rect;
use parallax_core::listener::{PageChangeListener, ScrollState};
use parallax_core::pager::BackgroundCanvas;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Build an engine with every input set, before any recompute.
pub fn configured_engine(
    image: (u32, u32),
    viewport: (u32, u32),
    pages: usize,
    mode: ScaleMode,
    overlap: f32,
) -> ParallaxEngine {
    let mut engine = ParallaxEngine::new();
    engine
        .set_scale_mode(mode)
        .set_overlap_factor(overlap)
        .expect("valid overlap")
        .set_background_image(image.0, image.1)
        .expect("valid image")
        .set_viewport_size(viewport.0, viewport.1)
        .expect("valid viewport")
        .set_page_count(pages)
        .expect("valid page count");
    engine
}

/// The 3000x1000 image behind a 1000x500 viewport with four pages.
pub fn reference_engine() -> ParallaxEngine {
    let mut engine = configured_engine((3000, 1000), (1000, 500), 4, ScaleMode::FitHeight, 0.5);
    engine.recompute_chunk_parameters().expect("recompute");
    engine
}

#[derive(Clone, Debug, PartialEq)]
pub enum PagerEvent {
    Scrolled(usize, f32, i32),
    Selected(usize),
    StateChanged(ScrollState),
}

/// Listener that appends every event to a shared log.
#[derive(Clone, Default)]
pub struct RecordingListener {
    pub events: Rc<RefCell<Vec<PagerEvent>>>,
}

impl PageChangeListener for RecordingListener {
    fn on_page_scrolled(&mut self, position: usize, offset: f32, offset_pixels: i32) {
        self.events
            .borrow_mut()
            .push(PagerEvent::Scrolled(position, offset, offset_pixels));
    }

    fn on_page_selected(&mut self, position: usize) {
        self.events.borrow_mut().push(PagerEvent::Selected(position));
    }

    fn on_page_scroll_state_changed(&mut self, state: ScrollState) {
        self.events
            .borrow_mut()
            .push(PagerEvent::StateChanged(state));
    }
}

/// Canvas that records each draw call.
#[derive(Default)]
pub struct RecordingCanvas {
    pub draws: Vec<(Rect, Rect)>,
}

impl BackgroundCanvas for RecordingCanvas {
    fn draw_image_region(&mut self, source: Rect, destination: Rect) {
        self.draws.push((source, destination));
    }
}

/// Layer that keeps the level and message of every event it sees.
#[derive(Clone, Default)]
pub struct EventLog {
    pub events: Arc<Mutex<Vec<(Level, String)>>>,
}

#[derive(Default)]
struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for EventLog {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.events
            .lock()
            .unwrap()
            .push((*event.metadata().level(), visitor.0));
    }
}

/// Run `f` with a thread-local subscriber and return the warnings it logged.
pub fn collect_warnings<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let log = EventLog::default();
    let subscriber = tracing_subscriber::registry().with(log.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    let warnings = log
        .events
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::WARN)
        .map(|(_, message)| message.clone())
        .collect();
    (out, warnings)
}
