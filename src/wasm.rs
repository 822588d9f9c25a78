//! WASM bindings for driving a page from JavaScript.
//!
//! The page lives on the Rust side; JavaScript forwards events to it and
//! reads back the resulting markup.

use wasm_bindgen::prelude::*;

use crate::page::{Page, initialize};
use crate::runtime::Environment;
use crate::viewer::{ViewerId, thumb_page_index};
use crate::{ViewerOptions, parse_html};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub struct FolioPage {
    page: Page,
    /// Wall-clock time `pump` last advanced to.
    last_pump: f64,
}

#[wasm_bindgen]
impl FolioPage {
    /// Parse `html` and attach the widgets for a viewport `width` wide.
    #[wasm_bindgen(constructor)]
    pub fn new(html: &str, width: f64) -> FolioPage {
        let page = initialize(
            parse_html(html),
            Environment::with_width(width),
            ViewerOptions::default(),
        );
        FolioPage {
            page,
            last_pump: js_sys::Date::now(),
        }
    }

    #[wasm_bindgen(js_name = viewerCount)]
    pub fn viewer_count(&self) -> usize {
        self.page.viewers().len()
    }

    /// Left page index of a viewer, or -1 for an unknown viewer.
    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self, viewer: usize) -> i32 {
        self.page
            .viewer(ViewerId(viewer))
            .map_or(-1, |v| v.index() as i32)
    }

    pub fn next(&mut self, viewer: usize) -> bool {
        self.page.turn_forward(ViewerId(viewer))
    }

    pub fn prev(&mut self, viewer: usize) -> bool {
        self.page.turn_backward(ViewerId(viewer))
    }

    /// Click the thumbnail at `position` in a viewer's strip.
    pub fn thumb(&mut self, viewer: usize, position: usize) -> bool {
        let id = ViewerId(viewer);
        let Some(&thumb) = self.page.viewer(id).and_then(|v| v.thumbs().get(position)) else {
            return false;
        };
        let page_index = thumb_page_index(self.page.dom(), thumb);
        self.page.thumbnail_click(id, page_index)
    }

    pub fn resize(&mut self, width: f64) {
        self.page.resize(width);
    }

    /// Report elements matching `selector` as `ratio` visible.
    pub fn reveal(&mut self, selector: &str, ratio: f64) -> Result<usize, JsValue> {
        self.page
            .scroll_into_view(selector, ratio)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Advance page time by `ms`.
    pub fn advance(&mut self, ms: u32) -> usize {
        self.page.advance(u64::from(ms))
    }

    /// Advance page time by the wall-clock time since the last pump.
    pub fn pump(&mut self) -> usize {
        let elapsed = (js_sys::Date::now() - self.last_pump).max(0.0).floor();
        self.last_pump += elapsed;
        self.page.advance(elapsed as u64)
    }

    pub fn html(&self) -> String {
        self.page.to_html()
    }
}
