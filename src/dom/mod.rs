//! HTML document model the widgets operate on.
//!
//! Markup is parsed by html5ever into an arena [`Dom`], queried with CSS
//! selectors, mutated in place and serialized back to HTML.
//!
//! ```
//! use folio::dom::parse_html;
//!
//! let mut dom = parse_html(r#"<div class="book-page-right"><img></div>"#);
//! let page = dom.query(dom.document(), ".book-page-right").unwrap();
//! dom.add_class(page, "is-empty");
//! assert!(dom.to_html().contains(r#"class="book-page-right is-empty""#));
//! ```

mod arena;
mod element_ref;
mod select;
mod serialize;
mod tree_sink;

pub use arena::{Attribute, Children, Descendants, Dom, Node, NodeData, NodeId};
pub use element_ref::{ElementRef, FolioSelectors};
pub use select::Selector;
pub use serialize::SerializableNode;

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

use tree_sink::DomSink;

/// Parse an HTML document.
///
/// Parsing is lenient the way browsers are; malformed markup never fails.
pub fn parse_html(html: &str) -> Dom {
    parse_document(DomSink::new(), ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_dom()
}

/// Parse HTML bytes of unknown encoding.
pub fn parse_html_bytes(html: &[u8]) -> Dom {
    let hint = crate::util::sniff_meta_charset(html);
    parse_html(&crate::util::decode_text(html, hint))
}
