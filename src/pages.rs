//! Page descriptors read from declarative markup.

use crate::dom::{Dom, NodeId};
use crate::markup;

/// One page image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    pub source: String,
    pub alt: String,
}

impl PageDescriptor {
    pub fn new(source: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt: alt.into(),
        }
    }
}

/// Read one descriptor per `span` marker under `root`, in document order.
///
/// Markers without a `data-src` (or with an empty one) are skipped and a
/// missing `data-alt` becomes "". No root means no pages.
pub fn collect_page_data(dom: &Dom, root: Option<NodeId>) -> Vec<PageDescriptor> {
    let Some(root) = root else {
        return Vec::new();
    };

    dom.query_all(root, markup::PAGE_MARKER)
        .into_iter()
        .filter_map(|marker| {
            let source = dom.get_attr(marker, markup::PAGE_SRC).filter(|s| !s.is_empty())?;
            let alt = dom.get_attr(marker, markup::PAGE_ALT).unwrap_or_default();
            Some(PageDescriptor::new(source, alt))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn collect(html: &str) -> Vec<PageDescriptor> {
        let dom = parse_html(html);
        let root = dom.query(dom.document(), markup::PAGES);
        collect_page_data(&dom, root)
    }

    #[test]
    fn test_collects_in_document_order() {
        let pages = collect(
            r#"<div data-viewer-pages>
                 <span data-src="p1.jpg" data-alt="Cover"></span>
                 <p><span data-src="p2.jpg" data-alt="Inside"></span></p>
               </div>"#,
        );

        assert_eq!(
            pages,
            vec![
                PageDescriptor::new("p1.jpg", "Cover"),
                PageDescriptor::new("p2.jpg", "Inside"),
            ]
        );
    }

    #[test]
    fn test_skips_markers_without_source() {
        let pages = collect(
            r#"<div data-viewer-pages>
                 <span data-alt="no source"></span>
                 <span data-src="" data-alt="empty source"></span>
                 <span data-src="p3.jpg"></span>
               </div>"#,
        );

        assert_eq!(pages, vec![PageDescriptor::new("p3.jpg", "")]);
    }

    #[test]
    fn test_missing_root_or_markers() {
        assert!(collect("<div></div>").is_empty());
        assert!(collect("<div data-viewer-pages><i data-src=\"x.jpg\"></i></div>").is_empty());

        let dom = parse_html("<div></div>");
        assert!(collect_page_data(&dom, None).is_empty());
    }
}
