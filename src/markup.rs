//! Selectors, attributes and classes of the declarative markup contract.

// Page data
pub const PAGES: &str = "[data-viewer-pages]";
pub const PAGE_MARKER: &str = "span";
pub const PAGE_SRC: &str = "data-src";
pub const PAGE_ALT: &str = "data-alt";

// Scroll reveal
pub const ANIMATE: &str = "[data-animate]";
pub const IN_VIEW: &str = "in-view";

// Viewer anchors
pub const VIEWER: &str = ".book-viewer";
pub const LEFT_IMG: &str = ".book-page-left img";
pub const RIGHT_IMG: &str = ".book-page-right img";
pub const RIGHT_PAGE: &str = ".book-page-right";
pub const PREV: &str = ".book-nav.prev";
pub const NEXT: &str = ".book-nav.next";
pub const INDICATOR: &str = "[data-book-current]";
pub const THUMBS: &str = "[data-viewer-thumbs]";
pub const THUMB: &str = "[data-thumb]";
pub const MOBILE_GRID: &str = "[data-mobile-grid]";

pub const THUMB_FLAG: &str = "data-thumb";
pub const PAGE_INDEX: &str = "data-page-index";
pub const THUMB_CLASS: &str = "book-thumb";

// Viewer state classes
pub const TURNING_FORWARD: &str = "turning-forward";
pub const TURNING_BACK: &str = "turning-back";
pub const IS_EMPTY: &str = "is-empty";
pub const IS_ACTIVE: &str = "is-active";
