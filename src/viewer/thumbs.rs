//! Thumbnail strip setup.

use crate::dom::{Dom, NodeId};
use crate::markup;
use crate::pages::PageDescriptor;
use crate::util::js_number;

/// Prepare thumbnails under `root` and return them in order.
///
/// Existing `[data-thumb]` markers are reused: a missing index is filled
/// from the marker's position and an image without a source is backfilled
/// from the page at that position. With no markers, one button per page is
/// generated.
pub fn init_thumbs(dom: &mut Dom, root: Option<NodeId>, pages: &[PageDescriptor]) -> Vec<NodeId> {
    let Some(root) = root else {
        return Vec::new();
    };

    let existing = dom.query_all(root, markup::THUMB);
    if existing.is_empty() {
        for (idx, page) in pages.iter().enumerate() {
            let index = idx.to_string();
            let button = dom.create_html_element(
                "button",
                &[
                    ("type", "button"),
                    ("class", markup::THUMB_CLASS),
                    (markup::THUMB_FLAG, ""),
                    (markup::PAGE_INDEX, index.as_str()),
                ],
            );
            let img = lazy_image(dom, page);
            dom.append(button, img);
            dom.append(root, button);
        }
        return dom.query_all(root, markup::THUMB);
    }

    for (idx, &thumb) in existing.iter().enumerate() {
        if dom.get_attr(thumb, markup::PAGE_INDEX).is_none_or(str::is_empty) {
            dom.set_attr(thumb, markup::PAGE_INDEX, &idx.to_string());
        }
        let Some(img) = dom.query(thumb, "img") else {
            continue;
        };
        let has_src = dom.get_attr(img, "src").is_some_and(|s| !s.is_empty());
        if let (false, Some(page)) = (has_src, pages.get(idx)) {
            dom.set_attr(img, "src", &page.source);
            dom.set_attr(img, "alt", &page.alt);
        }
    }
    existing
}

/// `<img src alt loading="lazy">` for a page, detached.
pub fn lazy_image(dom: &mut Dom, page: &PageDescriptor) -> NodeId {
    dom.create_html_element(
        "img",
        &[
            ("src", page.source.as_str()),
            ("alt", page.alt.as_str()),
            ("loading", "lazy"),
        ],
    )
}

/// The page index a thumbnail is tagged with, NaN when untagged.
pub fn thumb_page_index(dom: &Dom, thumb: NodeId) -> f64 {
    dom.get_attr(thumb, markup::PAGE_INDEX)
        .map_or(f64::NAN, js_number)
}
