//! Page elements the viewer reads from and renders into.

use std::cell::RefCell;

use timeline::{TimelineBlock, Visibility};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::ViewerError;

const HIDDEN: &str = "hidden";
const ACTIVE: &str = "active";
const TOGGLED: &str = "toggled";
const SLIDE_OUT: &str = "slide-out";

/// Attach `handler` for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), ViewerError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn required(document: &Document, selector: &'static str) -> Result<Element, ViewerError> {
    document
        .query_selector(selector)?
        .ok_or(ViewerError::MissingElement(selector))
}

fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

pub struct TimelineDom {
    window: Window,
    document: Document,
    sidebar: HtmlElement,
    timeline: Element,
    pub play_button: Element,
    pub pause_button: Element,
    scroll_indicator: Option<Element>,
    preloader: Option<Element>,
    blocks: RefCell<Vec<HtmlElement>>,
}

impl TimelineDom {
    pub fn from_window(window: Window) -> Result<Self, ViewerError> {
        let document = window
            .document()
            .ok_or(ViewerError::MissingElement("document"))?;

        let sidebar = required(&document, "aside")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ViewerError::MissingElement("aside"))?;
        let timeline = required(&document, ".timeline")?;
        let play_button = required(&document, "#play")?;
        let pause_button = required(&document, "#pause")?;
        let scroll_indicator = document.query_selector(".scroll-indicator")?;
        let preloader = document.query_selector(".preloader")?;

        Ok(Self {
            window,
            document,
            sidebar,
            timeline,
            play_button,
            pause_button,
            scroll_indicator,
            preloader,
            blocks: RefCell::new(Vec::new()),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn sidebar(&self) -> &HtmlElement {
        &self.sidebar
    }

    fn element(&self, tag: &str, class: &str) -> Result<Element, ViewerError> {
        let el = self.document.create_element(tag)?;
        if !class.is_empty() {
            el.set_class_name(class);
        }
        Ok(el)
    }

    /// Append one `.timeline-part` per block. Street names are inserted as text.
    pub fn render_blocks(&self, blocks: &[TimelineBlock]) -> Result<(), ViewerError> {
        let mut rendered = self.blocks.borrow_mut();
        for block in blocks {
            let part = self.element(
                "div",
                &format!("timeline-part year-{}", block.year.css_token()),
            )?;
            let graph = self.element("div", "timeline-graph")?;
            let meta = self.element("div", "timeline-meta")?;

            let heading = self.element("h3", "year")?;
            heading.set_text_content(Some(block.year.label()));

            let streets = self.element("ul", "streets")?;
            for name in &block.streets {
                let item = self.element("li", "")?;
                item.set_text_content(Some(name));
                streets.append_child(&item)?;
            }

            let toggled = streets.clone();
            listen(&streets, "click", move |_| {
                let _ = toggled.class_list().toggle(TOGGLED);
            })?;

            meta.append_child(&heading)?;
            meta.append_child(&streets)?;
            part.append_child(&graph)?;
            part.append_child(&meta)?;
            self.timeline.append_child(&part)?;

            rendered.push(part.unchecked_into::<HtmlElement>());
        }
        Ok(())
    }

    pub fn block_offsets(&self) -> Vec<f64> {
        self.blocks
            .borrow()
            .iter()
            .map(|el| el.offset_top() as f64)
            .collect()
    }

    pub fn last_block_offset(&self) -> Option<f64> {
        self.blocks.borrow().last().map(|el| el.offset_top() as f64)
    }

    pub fn apply_visibility(&self, visibility: &Visibility) {
        for (el, &active) in self.blocks.borrow().iter().zip(&visibility.active) {
            set_class(el, ACTIVE, active);
        }
    }

    pub fn scroll_top(&self) -> f64 {
        self.sidebar.scroll_top() as f64
    }

    pub fn set_scroll_top(&self, position: f64) {
        self.sidebar.set_scroll_top(position.round() as i32);
    }

    pub fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    pub fn set_loading(&self, loading: bool) {
        if let Some(preloader) = &self.preloader {
            set_class(preloader, HIDDEN, !loading);
        }
    }

    pub fn hide_scroll_indicator(&self) {
        if let Some(indicator) = &self.scroll_indicator {
            set_class(indicator, SLIDE_OUT, true);
        }
    }

    /// Swap the play and pause buttons.
    pub fn show_playing(&self, playing: bool) {
        set_class(&self.play_button, HIDDEN, playing);
        set_class(&self.pause_button, HIDDEN, !playing);
    }
}
