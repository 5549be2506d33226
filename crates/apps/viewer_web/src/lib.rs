use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use console_error_panic_hook::set_once;
use formats::StreetRecord;
use gloo_timers::callback::Timeout;
use layers::MapOverlay;
use runtime::{Debouncer, PlaybackController};
use timeline::{TimelineDataset, cutoff_year, visible_blocks};
use tracing::{debug, error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub mod config;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod leaflet;
pub mod logging;
pub mod playback;

use config::ViewerConfig;
use dom::{TimelineDom, listen};
use error::ViewerError;
use leaflet::{LeafletCanvas, LeafletLayer};
use playback::PlaybackRun;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Viewer state shared by every event callback.
pub struct App {
    pub config: ViewerConfig,
    pub dom: TimelineDom,
    canvas: RefCell<LeafletCanvas>,
    overlay: RefCell<MapOverlay<LeafletLayer>>,
    dataset: RefCell<TimelineDataset>,
    debouncer: RefCell<Debouncer>,
    scroll_timer: RefCell<Option<Timeout>>,
    playback: RefCell<PlaybackController>,
    run: RefCell<Option<PlaybackRun>>,
}

impl App {
    fn new(config: ViewerConfig) -> Result<Rc<Self>, ViewerError> {
        let window = web_sys::window().ok_or(ViewerError::MissingElement("window"))?;
        let dom = TimelineDom::from_window(window)?;
        let canvas = LeafletCanvas::init(&config)?;

        Ok(Rc::new(Self {
            canvas: RefCell::new(canvas),
            overlay: RefCell::new(MapOverlay::new(config.line_style.clone())),
            dataset: RefCell::new(TimelineDataset::default()),
            debouncer: RefCell::new(Debouncer::new(config.debounce_ms)),
            scroll_timer: RefCell::new(None),
            playback: RefCell::new(PlaybackController::new(
                config.scroll_time_multiplier,
                config.refresh_divisions,
            )),
            run: RefCell::new(None),
            dom,
            config,
        }))
    }

    /// Mark visible blocks and redraw every line up to the cutoff year.
    fn refresh_map(&self) {
        let visibility = visible_blocks(
            &self.dom.block_offsets(),
            self.dom.scroll_top(),
            self.dom.viewport_height(),
        );
        self.dom.apply_visibility(&visibility);

        let dataset = self.dataset.borrow();
        let cutoff = cutoff_year(&dataset.blocks, &visibility);
        self.overlay
            .borrow_mut()
            .refresh(&mut *self.canvas.borrow_mut(), &dataset.lines, cutoff);
    }

    fn auto_fit(&self) {
        let fitted = self
            .overlay
            .borrow()
            .auto_fit(&mut *self.canvas.borrow_mut());
        if let Some(bounds) = fitted {
            debug!(?bounds, "viewport fitted");
        }
    }

    pub fn update_map(&self) {
        self.refresh_map();
        self.auto_fit();
    }

    /// Scroll handler: slide the indicator out and debounce the map update.
    fn on_scroll(self: &Rc<Self>) {
        self.dom.hide_scroll_indicator();

        let ticket = self.debouncer.borrow_mut().schedule();
        let weak = Rc::downgrade(self);
        let timer = Timeout::new(self.config.debounce_ms, move || {
            if let Some(app) = weak.upgrade()
                && app.debouncer.borrow_mut().fire(ticket)
            {
                app.update_map();
            }
        });
        // Replacing the slot drops, and so cancels, the previous timer.
        *self.scroll_timer.borrow_mut() = Some(timer);
    }

    fn render(&self, records: &[StreetRecord]) -> Result<(), ViewerError> {
        let dataset = TimelineDataset::build(records);
        self.dom.render_blocks(&dataset.blocks)?;
        *self.dataset.borrow_mut() = dataset;

        self.update_map();
        self.dom.set_loading(false);
        Ok(())
    }

    fn bind_events(self: &Rc<Self>) -> Result<(), ViewerError> {
        let app = self.clone();
        listen(self.dom.sidebar(), "scroll", move |_| app.on_scroll())?;

        let app = self.clone();
        listen(&self.dom.play_button, "click", move |_| playback::play(&app))?;

        let app = self.clone();
        listen(&self.dom.pause_button, "click", move |_| playback::pause(&app))?;
        Ok(())
    }

    fn load(self: &Rc<Self>) {
        let app = self.clone();
        spawn_local(async move {
            let endpoint = app.config.endpoint.clone();
            let records = match fetch::fetch_streets(&endpoint).await {
                Ok(records) => records,
                Err(err) => {
                    error!(%err, endpoint = %endpoint, "failed to load streets");
                    return;
                }
            };
            if let Err(err) = app.render(&records) {
                error!(%err, "failed to render timeline");
            }
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let loaded = ViewerConfig::from_window();
    let filter = loaded
        .as_ref()
        .map(|c| c.log_filter.clone())
        .unwrap_or_else(|_| ViewerConfig::default().log_filter);
    logging::init(&filter);

    let config = loaded.unwrap_or_else(|err| {
        warn!(%err, global = config::CONFIG_GLOBAL, "ignoring malformed viewer config");
        ViewerConfig::default()
    });
    info!(endpoint = %config.endpoint, "starting street timeline");

    let app = App::new(config)?;
    app.bind_events()?;
    app.load();
    Ok(())
}
