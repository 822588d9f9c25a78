//! # folio
//!
//! Progressive-enhancement widgets for picture-book pages: a two-page
//! spread viewer with thumbnails and a mobile fallback grid, plus a one-shot
//! scroll reveal.
//!
//! The widgets run against an HTML document parsed into an arena [`Dom`].
//! The host feeds them clicks, viewport changes, intersection reports and
//! clock ticks; they update the markup exactly as the page script would.
//!
//! ## Quick Start
//!
//! ```
//! use folio::{Environment, ViewerId, ViewerOptions, initialize, parse_html};
//!
//! let html = r#"
//!   <section class="book-viewer">
//!     <div data-viewer-pages>
//!       <span data-src="p1.jpg" data-alt="Cover"></span>
//!       <span data-src="p2.jpg"></span>
//!       <span data-src="p3.jpg"></span>
//!     </div>
//!     <div class="book-page-left"><img></div>
//!     <div class="book-page-right"><img></div>
//!     <button class="book-nav prev"></button>
//!     <button class="book-nav next"></button>
//!     <span data-book-current></span>
//!   </section>"#;
//!
//! let mut page = initialize(parse_html(html), Environment::default(), ViewerOptions::default());
//! assert!(page.turn_forward(ViewerId(0)));
//! page.advance(520);
//! assert_eq!(page.viewers()[0].index(), 2);
//! assert!(page.to_html().contains(r#"<span data-book-current="">3</span>"#));
//! ```
//!
//! Nothing in the widget layer fails: markup that is missing expected
//! anchors simply leaves that widget inert.

pub mod action;
pub mod dom;
pub mod error;
pub mod markup;
pub mod options;
pub mod page;
pub mod pages;
pub mod reveal;
pub mod runtime;
pub mod scheduler;
pub(crate) mod util;
pub mod viewer;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::path::Path;

pub use action::Action;
pub use dom::{Dom, NodeId, Selector, parse_html, parse_html_bytes};
pub use error::{Error, Result};
pub use options::ViewerOptions;
pub use page::{Page, initialize};
pub use pages::{PageDescriptor, collect_page_data};
pub use reveal::{IntersectionEntry, ScrollReveal};
pub use runtime::{ChangeApi, Environment, MediaSupport};
pub use scheduler::{Millis, Schedule, Timeline};
pub use viewer::{BookViewer, Direction, TurnState, ViewerId};

/// Read and parse an HTML file, detecting its encoding.
pub fn read_html(path: impl AsRef<Path>) -> Result<Dom> {
    let bytes = std::fs::read(path)?;
    Ok(parse_html_bytes(&bytes))
}
