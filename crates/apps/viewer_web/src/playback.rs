//! Browser side of timeline playback: the animation-frame scroll loop and
//! the refresh/stop timers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use runtime::{PlaybackToken, ScrollAnimation};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::App;
use crate::error::ViewerError;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` loop. `on_frame` returns whether to keep going.
/// Dropping the loop cancels the pending frame.
pub struct FrameLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    _callback: FrameCallback,
}

impl FrameLoop {
    pub fn start(
        window: Window,
        mut on_frame: impl FnMut(f64) -> bool + 'static,
    ) -> Result<Self, ViewerError> {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let holder = Rc::downgrade(&callback);
        let frame_pending = pending.clone();
        let frame_window = window.clone();
        *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            frame_pending.set(None);
            if !on_frame(timestamp) {
                return;
            }
            let Some(holder) = holder.upgrade() else {
                return;
            };
            if let Some(next) = holder.borrow().as_ref() {
                match frame_window.request_animation_frame(next.as_ref().unchecked_ref()) {
                    Ok(id) => frame_pending.set(Some(id)),
                    Err(err) => warn!(err = ?err, "requestAnimationFrame failed"),
                }
            }
        }));

        let id = match callback.borrow().as_ref() {
            Some(first) => window.request_animation_frame(first.as_ref().unchecked_ref())?,
            None => return Err(ViewerError::Js("frame callback missing".into())),
        };
        pending.set(Some(id));

        Ok(Self {
            window,
            pending,
            _callback: callback,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

/// Host resources of one playback run. Dropping it stops the run.
pub struct PlaybackRun {
    _frames: FrameLoop,
    _refresh: Interval,
    _stop: Timeout,
}

pub fn play(app: &Rc<App>) {
    if let Err(err) = start_run(app) {
        warn!(%err, "cannot start playback");
        app.playback.borrow_mut().pause();
        app.run.borrow_mut().take();
        app.dom.show_playing(false);
    }
}

fn start_run(app: &Rc<App>) -> Result<(), ViewerError> {
    app.dom.set_scroll_top(0.0);
    app.update_map();

    let plan = app.playback.borrow_mut().play(app.dom.last_block_offset())?;
    // Superseded runs hold a stale token; drop their timers right away.
    app.run.borrow_mut().take();
    let token = plan.token;

    let mut animation = ScrollAnimation::new(0.0, plan.distance_px, plan.duration_ms);
    let weak = Rc::downgrade(app);
    let frames = FrameLoop::start(app.dom.window().clone(), move |timestamp| {
        let Some(app) = weak.upgrade() else {
            return false;
        };
        if !app.playback.borrow().is_current(token) {
            return false;
        }
        let frame = animation.step(timestamp);
        app.dom.set_scroll_top(frame.position);
        animation.wants_next_frame(&frame)
    })?;

    let weak = Rc::downgrade(app);
    let refresh = Interval::new(plan.refresh_interval_ms_u32(), move || {
        if let Some(app) = weak.upgrade()
            && app.playback.borrow().is_current(token)
        {
            app.update_map();
        }
    });

    let weak = Rc::downgrade(app);
    let stop = Timeout::new(plan.duration_ms_u32(), move || {
        if let Some(app) = weak.upgrade() {
            finish(&app, token);
        }
    });

    *app.run.borrow_mut() = Some(PlaybackRun {
        _frames: frames,
        _refresh: refresh,
        _stop: stop,
    });
    app.dom.show_playing(true);
    Ok(())
}

pub fn pause(app: &App) {
    app.playback.borrow_mut().pause();
    app.run.borrow_mut().take();
    app.dom.show_playing(false);
}

fn finish(app: &App, token: PlaybackToken) {
    if !app.playback.borrow_mut().finish(token) {
        return;
    }
    app.run.borrow_mut().take();
    app.update_map();
    app.dom.show_playing(false);
    debug!("playback run complete");
}
