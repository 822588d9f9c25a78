//! Book viewer tests.
//!
//! Drive whole pages through `folio::initialize` and check the markup the
//! viewers leave behind after turns, thumbnail jumps and clicks.

use folio::markup;
use folio::{Dom, Environment, NodeId, Page, TurnState, ViewerId, ViewerOptions, initialize, parse_html};

const FIRST: ViewerId = ViewerId(0);

fn spans(pages: usize) -> String {
    (1..=pages)
        .map(|i| format!(r#"<span data-src="p{i}.jpg" data-alt="Page {i}"></span>"#))
        .collect()
}

fn viewer_section(id: &str) -> String {
    section_with_pages(id, "")
}

/// A complete viewer section whose own page list holds `own_pages`.
fn section_with_pages(id: &str, own_pages: &str) -> String {
    format!(
        r#"<section class="book-viewer" id="{id}">
             <div data-viewer-pages hidden>{own_pages}</div>
             <div class="book-page book-page-left"><img id="{id}-left"></div>
             <div class="book-page book-page-right" id="{id}-right-page"><img id="{id}-right"></div>
             <button class="book-nav prev" id="{id}-prev">Prev</button>
             <button class="book-nav next" id="{id}-next">Next</button>
             <p>Pages <span data-book-current id="{id}-current"></span></p>
             <div data-viewer-thumbs id="{id}-thumbs"></div>
           </section>"#
    )
}

fn book(pages: usize) -> Page {
    let html = format!(
        "<main><div data-viewer-pages hidden>{}</div>{}</main>",
        spans(pages),
        viewer_section("v")
    );
    initialize(parse_html(&html), Environment::default(), ViewerOptions::default())
}

fn node(page: &Page, id: &str) -> NodeId {
    page.dom()
        .get_by_id(id)
        .unwrap_or_else(|| panic!("no element #{id}"))
}

fn attr<'a>(dom: &'a Dom, id: NodeId, name: &str) -> Option<&'a str> {
    dom.get_attr(id, name)
}

fn index(page: &Page) -> usize {
    page.viewer(FIRST).unwrap().index()
}

// ============================================================================
// Page Turn Tests
// ============================================================================

#[test]
fn test_forward_walks_even_spreads() {
    let mut page = book(6);

    for expected in [2, 4] {
        assert!(page.turn_forward(FIRST));
        page.settle();
        assert_eq!(index(&page), expected);
    }

    let dom = page.dom();
    assert_eq!(attr(dom, node(&page, "v-left"), "src"), Some("p5.jpg"));
    assert_eq!(attr(dom, node(&page, "v-right"), "src"), Some("p6.jpg"));
    assert_eq!(dom.text(node(&page, "v-current")), "5\u{2013}6");
    assert!(dom.has_attr(node(&page, "v-next"), "disabled"));
    assert!(!dom.has_attr(node(&page, "v-prev"), "disabled"));
}

#[test]
fn test_forward_at_last_spread_is_rejected() {
    let mut page = book(6);
    page.turn_forward(FIRST);
    page.settle();
    page.turn_forward(FIRST);
    page.settle();
    let before = page.to_html();

    assert!(!page.turn_forward(FIRST));
    assert_eq!(page.pending_tasks(), 0);
    assert!(!page.dom().has_class(node(&page, "v-right-page"), markup::TURNING_FORWARD));
    assert_eq!(page.to_html(), before);
}

#[test]
fn test_backward_mirrors_forward() {
    let mut page = book(6);
    page.turn_forward(FIRST);
    page.settle();
    page.turn_forward(FIRST);
    page.settle();

    for expected in [2, 0] {
        assert!(page.turn_backward(FIRST));
        assert!(page.dom().has_class(node(&page, "v-right-page"), markup::TURNING_BACK));
        page.settle();
        assert_eq!(index(&page), expected);
        assert!(!page.dom().has_class(node(&page, "v-right-page"), markup::TURNING_BACK));
    }

    assert!(!page.turn_backward(FIRST));
    assert!(page.dom().has_attr(node(&page, "v-prev"), "disabled"));
    assert_eq!(page.dom().text(node(&page, "v-current")), "1\u{2013}2");
}

#[test]
fn test_odd_count_ends_on_lone_page() {
    let mut page = book(5);
    page.turn_forward(FIRST);
    page.settle();
    page.turn_forward(FIRST);
    page.settle();

    assert_eq!(index(&page), 4);
    let dom = page.dom();
    let right_page = node(&page, "v-right-page");
    let right = node(&page, "v-right");
    assert!(dom.has_class(right_page, markup::IS_EMPTY));
    assert_eq!(attr(dom, right, "src"), None);
    assert_eq!(attr(dom, right, "alt"), Some(""));
    assert_eq!(dom.text(node(&page, "v-current")), "5");
    assert!(dom.has_attr(node(&page, "v-next"), "disabled"));

    page.turn_backward(FIRST);
    page.settle();
    assert!(!page.dom().has_class(right_page, markup::IS_EMPTY));
    assert_eq!(attr(page.dom(), right, "src"), Some("p4.jpg"));
}

#[test]
fn test_single_page_book() {
    let page = book(1);
    let dom = page.dom();

    assert_eq!(dom.text(node(&page, "v-current")), "1");
    assert!(dom.has_attr(node(&page, "v-prev"), "disabled"));
    assert!(dom.has_attr(node(&page, "v-next"), "disabled"));
    assert!(dom.has_class(node(&page, "v-right-page"), markup::IS_EMPTY));
}

#[test]
fn test_turn_timing() {
    let mut page = book(6);
    let right_page = node(&page, "v-right-page");
    page.turn_forward(FIRST);

    page.advance(259);
    assert_eq!(index(&page), 0);

    page.advance(1);
    assert_eq!(index(&page), 2);
    assert!(page.dom().has_class(right_page, markup::TURNING_FORWARD));
    assert_eq!(page.viewer(FIRST).unwrap().state(), TurnState::Turning(folio::Direction::Forward));

    page.advance(259);
    assert!(page.viewer(FIRST).unwrap().is_animating());

    page.advance(1);
    assert_eq!(page.viewer(FIRST).unwrap().state(), TurnState::Idle);
    assert!(!page.dom().has_class(right_page, markup::TURNING_FORWARD));
    assert_eq!(page.now(), 520);
}

#[test]
fn test_requests_during_turn_are_dropped() {
    let mut page = book(8);
    page.turn_forward(FIRST);

    assert!(!page.turn_forward(FIRST));
    assert!(!page.turn_backward(FIRST));
    assert!(!page.thumbnail_click(FIRST, 6.0));
    assert_eq!(page.pending_tasks(), 2);

    page.advance(300);
    assert!(!page.turn_forward(FIRST));

    page.settle();
    assert_eq!(index(&page), 2);
    assert!(page.turn_forward(FIRST));
}

#[test]
fn test_custom_delays() {
    let html = format!("<div data-viewer-pages>{}</div>{}", spans(4), viewer_section("v"));
    let options = ViewerOptions {
        turn_update_delay_ms: 10,
        turn_reset_delay_ms: 20,
        ..ViewerOptions::default()
    };
    let mut page = initialize(parse_html(&html), Environment::default(), options);

    page.turn_forward(FIRST);
    page.advance(10);
    assert_eq!(index(&page), 2);
    page.advance(10);
    assert!(!page.viewer(FIRST).unwrap().is_animating());
}

// ============================================================================
// Thumbnail Tests
// ============================================================================

#[test]
fn test_thumbnails_generated_per_page() {
    let page = book(4);
    let viewer = page.viewer(FIRST).unwrap();
    let dom = page.dom();

    assert_eq!(viewer.thumbs().len(), 4);
    for (i, &thumb) in viewer.thumbs().iter().enumerate() {
        assert_eq!(attr(dom, thumb, "type"), Some("button"));
        assert!(dom.has_class(thumb, markup::THUMB_CLASS));
        assert_eq!(attr(dom, thumb, markup::PAGE_INDEX), Some(i.to_string().as_str()));
        let img = dom.query(thumb, "img").unwrap();
        assert_eq!(attr(dom, img, "src"), Some(format!("p{}.jpg", i + 1).as_str()));
        assert_eq!(attr(dom, img, "loading"), Some("lazy"));
    }
}

#[test]
fn test_thumbnail_jump_has_no_animation() {
    let mut page = book(6);

    assert!(page.thumbnail_click(FIRST, 3.0));
    assert_eq!(index(&page), 2);
    assert_eq!(page.pending_tasks(), 0);
    assert!(!page.viewer(FIRST).unwrap().is_animating());

    let viewer = page.viewer(FIRST).unwrap();
    let active: Vec<bool> = viewer
        .thumbs()
        .iter()
        .map(|&t| page.dom().has_class(t, markup::IS_ACTIVE))
        .collect();
    assert_eq!(active, vec![false, false, true, true, false, false]);

    // No lock: a turn can follow immediately.
    assert!(page.turn_forward(FIRST));
}

#[test]
fn test_thumbnail_to_current_spread_is_noop() {
    let mut page = book(6);
    let before = page.to_html();

    assert!(!page.thumbnail_click(FIRST, 1.0));
    assert_eq!(page.to_html(), before);
}

#[test]
fn test_existing_thumbnails_are_reused() {
    let html = format!(
        r#"<div data-viewer-pages>{}</div>
           <section class="book-viewer">
             <div data-viewer-pages></div>
             <div class="book-page-left"><img></div>
             <div class="book-page-right"><img></div>
             <button class="book-nav prev"></button>
             <button class="book-nav next"></button>
             <div data-viewer-thumbs>
               <button data-thumb data-page-index="0"><img src="custom.jpg"></button>
               <button data-thumb><img></button>
               <button data-thumb data-page-index="4"><img></button>
             </div>
           </section>"#,
        spans(6)
    );
    let mut page = initialize(parse_html(&html), Environment::default(), ViewerOptions::default());
    let thumbs = page.viewer(FIRST).unwrap().thumbs().to_vec();
    let dom = page.dom();

    assert_eq!(thumbs.len(), 3);
    assert_eq!(attr(dom, dom.query(thumbs[0], "img").unwrap(), "src"), Some("custom.jpg"));
    assert_eq!(attr(dom, thumbs[1], markup::PAGE_INDEX), Some("1"));
    assert_eq!(attr(dom, dom.query(thumbs[1], "img").unwrap(), "src"), Some("p2.jpg"));
    assert_eq!(attr(dom, thumbs[2], markup::PAGE_INDEX), Some("4"));

    let img = dom.query(thumbs[2], "img").unwrap();
    assert!(page.click(img));
    assert_eq!(index(&page), 4);
}

#[test]
fn test_thumbnail_index_with_radix_prefix() {
    let html = format!(
        r#"<section class="book-viewer">
             <div data-viewer-pages>{}</div>
             <div class="book-page-left"><img></div>
             <div class="book-page-right"><img></div>
             <button class="book-nav prev"></button>
             <button class="book-nav next"></button>
             <div data-viewer-thumbs>
               <button data-thumb data-page-index="0x2"><img></button>
             </div>
           </section>"#,
        spans(4)
    );
    let mut page = initialize(parse_html(&html), Environment::default(), ViewerOptions::default());
    let thumb = page.viewer(FIRST).unwrap().thumbs()[0];

    assert!(page.click(thumb));
    assert_eq!(index(&page), 2);
}

// ============================================================================
// Click Routing Tests
// ============================================================================

#[test]
fn test_click_routes_to_controls() {
    let mut page = book(6);
    let next = node(&page, "v-next");
    let prev = node(&page, "v-prev");
    let left = node(&page, "v-left");

    assert!(!page.click(left));
    assert!(!page.click(prev));

    assert!(page.click(next));
    assert!(!page.click(next));
    page.settle();
    assert_eq!(index(&page), 2);

    let last_thumb = page.viewer(FIRST).unwrap().thumbs()[5];
    assert!(page.click(last_thumb));
    assert_eq!(index(&page), 4);

    assert!(page.click(prev));
    page.settle();
    assert_eq!(index(&page), 2);
}

// ============================================================================
// Page Sharing Tests
// ============================================================================

#[test]
fn test_viewers_share_document_pages() {
    let html = format!(
        "<div data-viewer-pages>{}</div>{}{}",
        spans(4),
        viewer_section("a"),
        viewer_section("b")
    );
    let mut page = initialize(parse_html(&html), Environment::default(), ViewerOptions::default());

    assert_eq!(page.viewers().len(), 2);
    let (a, b) = (&page.viewers()[0], &page.viewers()[1]);
    assert!(std::ptr::eq(a.pages().as_ptr(), b.pages().as_ptr()));

    page.turn_forward(ViewerId(1));
    page.settle();
    assert_eq!(page.viewers()[0].index(), 0);
    assert_eq!(page.viewers()[1].index(), 2);
    assert_eq!(attr(page.dom(), node(&page, "a-left"), "src"), Some("p1.jpg"));
    assert_eq!(attr(page.dom(), node(&page, "b-left"), "src"), Some("p3.jpg"));
}

#[test]
fn test_viewer_falls_back_to_own_pages() {
    let html = format!(
        "<div data-viewer-pages></div>{}",
        section_with_pages("v", &spans(3))
    );
    let page = initialize(parse_html(&html), Environment::default(), ViewerOptions::default());

    assert!(page.shared_pages().is_empty());
    assert_eq!(page.viewer(FIRST).unwrap().pages().len(), 3);
}

#[test]
fn test_viewer_needs_its_own_pages_root() {
    let section = viewer_section("v").replace("<div data-viewer-pages hidden></div>", "");
    let html = format!("<div data-viewer-pages>{}</div>{section}", spans(4));
    let page = initialize(parse_html(&html), Environment::default(), ViewerOptions::default());

    assert_eq!(page.shared_pages().len(), 4);
    assert!(page.viewers().is_empty());
    assert_eq!(page.dom().text(node(&page, "v-current")), "");
}

#[test]
fn test_incomplete_viewer_is_skipped() {
    let broken = viewer_section("a").replace(r#"<img id="a-right">"#, "");
    let html = format!("<div data-viewer-pages>{}</div>{broken}{}", spans(4), viewer_section("b"));
    let page = initialize(parse_html(&html), Environment::default(), ViewerOptions::default());

    assert_eq!(page.viewers().len(), 1);
    assert_eq!(page.viewers()[0].section(), node(&page, "b"));
    assert_eq!(page.dom().text(node(&page, "a-current")), "");
    assert_eq!(page.dom().text(node(&page, "b-current")), "1\u{2013}2");
}

#[test]
fn test_no_pages_leaves_page_untouched() {
    let html = format!("<main>{}</main>", viewer_section("v"));
    let dom = parse_html(&html);
    let before = dom.to_html();
    let page = initialize(dom, Environment::default(), ViewerOptions::default());

    assert!(page.viewers().is_empty());
    assert_eq!(page.to_html(), before);
}
