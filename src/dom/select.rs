//! CSS selector queries over [`Dom`].

use std::fmt;

use cssparser::{Parser, ParserInput};
use selectors::context::{MatchingContext, SelectorCaches};
use selectors::matching::{MatchingForInvalidation, MatchingMode, NeedsSelectorFlags};
use selectors::parser::{ParseRelative, SelectorList};

use super::arena::{Dom, NodeId};
use super::element_ref::{ElementRef, FolioSelectors};
use crate::error::{Error, Result};

/// A parsed selector list, e.g. `.book-nav.prev, [data-thumb]`.
#[derive(Clone)]
pub struct Selector {
    source: String,
    list: SelectorList<FolioSelectors>,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self> {
        let mut input = ParserInput::new(source);
        let mut parser = Parser::new(&mut input);
        let list = SelectorList::parse(&FolioSelectors, &mut parser, ParseRelative::No)
            .map_err(|_| Error::InvalidSelector(source.to_string()))?;
        Ok(Self {
            source: source.to_string(),
            list,
        })
    }

    pub fn matches(&self, dom: &Dom, id: NodeId) -> bool {
        if !dom.is_element(id) {
            return false;
        }
        let elem = ElementRef::new(dom, id);
        let mut caches = SelectorCaches::default();
        let mut context = MatchingContext::new(
            MatchingMode::Normal,
            None,
            &mut caches,
            selectors::context::QuirksMode::NoQuirks,
            NeedsSelectorFlags::No,
            MatchingForInvalidation::No,
        );
        self.list.slice().iter().any(|selector| {
            selectors::matching::matches_selector(selector, 0, None, &elem, &mut context)
        })
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Selector").field(&self.source).finish()
    }
}

impl Dom {
    /// All descendants of `scope` matching `selector`, in document order.
    pub fn select_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .filter(|&id| selector.matches(self, id))
            .collect()
    }

    /// First descendant of `scope` matching `selector`.
    pub fn select_first(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .find(|&id| selector.matches(self, id))
    }

    /// [`Dom::select_all`] from a selector string.
    ///
    /// An unparsable selector matches nothing.
    pub fn query_all(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        match Selector::parse(selector) {
            Ok(selector) => self.select_all(scope, &selector),
            Err(e) => {
                log::warn!("{e}");
                Vec::new()
            }
        }
    }

    /// [`Dom::select_first`] from a selector string.
    pub fn query(&self, scope: NodeId, selector: &str) -> Option<NodeId> {
        match Selector::parse(selector) {
            Ok(selector) => self.select_first(scope, &selector),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::parse_html;

    use super::*;

    #[test]
    fn test_descendant_and_compound_selectors() {
        let dom = parse_html(
            r#"<section class="book-viewer">
                 <div class="book-page book-page-left"><img id="left"></div>
                 <button class="book-nav prev" id="prev"></button>
                 <button class="book-nav next" id="next"></button>
               </section>"#,
        );
        let doc = dom.document();

        assert_eq!(dom.query(doc, ".book-page-left img"), dom.get_by_id("left"));
        assert_eq!(dom.query(doc, ".book-nav.next"), dom.get_by_id("next"));
        assert_eq!(dom.query_all(doc, ".book-nav").len(), 2);
    }

    #[test]
    fn test_attribute_presence_selector() {
        let dom = parse_html(
            r#"<div data-viewer-pages>
                 <span data-src="a.jpg"></span><span></span><i data-src="b.jpg"></i>
               </div>"#,
        );
        let root = dom.query(dom.document(), "[data-viewer-pages]").unwrap();

        assert_eq!(dom.query_all(root, "span").len(), 2);
        assert_eq!(dom.query_all(root, "[data-src]").len(), 2);
    }

    #[test]
    fn test_scope_is_exclusive() {
        let dom = parse_html(r#"<div class="box"><div class="box" id="inner"></div></div>"#);
        let outer = dom.query(dom.document(), ".box").unwrap();

        assert_eq!(dom.query_all(outer, ".box"), vec![dom.get_by_id("inner").unwrap()]);
    }

    #[test]
    fn test_pseudo_classes_are_rejected() {
        assert!(matches!(Selector::parse("button:disabled"), Err(Error::InvalidSelector(_))));
        assert!(matches!(Selector::parse("a:hover"), Err(Error::InvalidSelector(_))));
    }

    #[test]
    fn test_invalid_selector() {
        assert!(matches!(Selector::parse("[[nope"), Err(Error::InvalidSelector(_))));

        let dom = parse_html("<p></p>");
        assert!(dom.query_all(dom.document(), "[[nope").is_empty());
    }
}
