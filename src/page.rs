//! A document with its widgets attached.

use std::rc::Rc;

use crate::dom::{Dom, NodeId, Selector};
use crate::error::Result;
use crate::markup;
use crate::options::ViewerOptions;
use crate::pages::{PageDescriptor, collect_page_data};
use crate::reveal::{IntersectionEntry, ScrollReveal};
use crate::runtime::Environment;
use crate::scheduler::{Millis, Schedule, Timeline};
use crate::viewer::{BookViewer, ViewerId, ViewerTask};

/// Attach every widget to `dom`.
///
/// Page data is collected once from the first `[data-viewer-pages]` in the
/// document and shared by all viewers; scroll reveal starts independently;
/// each `.book-viewer` section that has what it needs becomes a viewer.
pub fn initialize(mut dom: Dom, env: Environment, options: ViewerOptions) -> Page {
    let doc = dom.document();
    let shared_root = dom.query(doc, markup::PAGES);
    let shared_pages: Rc<[PageDescriptor]> = Rc::from(collect_page_data(&dom, shared_root));

    let reveal = ScrollReveal::init(&mut dom, env.intersection_observer, options.reveal_threshold);

    let mut viewers = Vec::new();
    for section in dom.query_all(doc, markup::VIEWER) {
        let id = ViewerId(viewers.len());
        if let Some(viewer) = BookViewer::attach(&mut dom, section, &shared_pages, &env, &options, id)
        {
            viewers.push(viewer);
        }
    }
    log::debug!(
        "initialized {} viewers, {} shared pages, {} reveal targets",
        viewers.len(),
        shared_pages.len(),
        reveal.observed().len()
    );

    Page {
        dom,
        env,
        shared_pages,
        reveal,
        viewers,
        timeline: Timeline::new(),
    }
}

pub struct Page {
    dom: Dom,
    env: Environment,
    shared_pages: Rc<[PageDescriptor]>,
    reveal: ScrollReveal,
    viewers: Vec<BookViewer>,
    timeline: Timeline<ViewerTask>,
}

impl Page {
    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn into_dom(self) -> Dom {
        self.dom
    }

    pub fn to_html(&self) -> String {
        self.dom.to_html()
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn shared_pages(&self) -> &[PageDescriptor] {
        &self.shared_pages
    }

    pub fn viewers(&self) -> &[BookViewer] {
        &self.viewers
    }

    pub fn viewer(&self, id: ViewerId) -> Option<&BookViewer> {
        self.viewers.get(id.0)
    }

    pub fn reveal(&self) -> &ScrollReveal {
        &self.reveal
    }

    /// Milliseconds of page time elapsed.
    pub fn now(&self) -> Millis {
        self.timeline.now()
    }

    /// Turn phases still waiting on the clock.
    pub fn pending_tasks(&self) -> usize {
        self.timeline.pending()
    }

    pub fn turn_forward(&mut self, id: ViewerId) -> bool {
        match self.viewers.get_mut(id.0) {
            Some(viewer) => viewer.turn_forward(&mut self.dom, &mut self.timeline),
            None => false,
        }
    }

    pub fn turn_backward(&mut self, id: ViewerId) -> bool {
        match self.viewers.get_mut(id.0) {
            Some(viewer) => viewer.turn_backward(&mut self.dom, &mut self.timeline),
            None => false,
        }
    }

    pub fn thumbnail_click(&mut self, id: ViewerId, page_index: f64) -> bool {
        match self.viewers.get_mut(id.0) {
            Some(viewer) => viewer.thumbnail_click(&mut self.dom, page_index),
            None => false,
        }
    }

    /// Deliver a click on `node` to the viewer control it lands on.
    pub fn click(&mut self, node: NodeId) -> bool {
        let Page {
            dom,
            viewers,
            timeline,
            ..
        } = self;
        for viewer in viewers.iter_mut() {
            if let Some(target) = viewer.click_target(dom, node) {
                return viewer.click(dom, timeline, target);
            }
        }
        false
    }

    /// Advance page time, running every turn phase that falls due.
    /// Returns how many phases ran.
    pub fn advance(&mut self, delta: Millis) -> usize {
        let deadline = self.timeline.now().saturating_add(delta);
        let mut ran = 0;
        while let Some(task) = self.timeline.pop_due(deadline) {
            if let Some(viewer) = self.viewers.get_mut(task.viewer.0) {
                viewer.run_step(&mut self.dom, task.step);
                ran += 1;
            }
        }
        self.timeline.settle_at(deadline);
        ran
    }

    /// Advance until no turn phase is pending.
    pub fn settle(&mut self) -> usize {
        let mut ran = 0;
        while let Some(due) = self.timeline.next_due() {
            ran += self.advance(due.saturating_sub(self.timeline.now()));
        }
        ran
    }

    /// The viewport was resized.
    pub fn resize(&mut self, width: f64) {
        self.env.viewport_width = width;
        for viewer in &mut self.viewers {
            viewer.viewport_changed(&mut self.dom, width);
        }
    }

    /// Deliver intersection reports to scroll reveal.
    pub fn report_intersections(&mut self, entries: &[IntersectionEntry]) -> usize {
        self.reveal.on_intersection(&mut self.dom, entries)
    }

    /// Report every element matching `selector` as `ratio` visible.
    pub fn scroll_into_view(&mut self, selector: &str, ratio: f64) -> Result<usize> {
        let selector = Selector::parse(selector)?;
        let entries: Vec<IntersectionEntry> = self
            .dom
            .select_all(self.dom.document(), &selector)
            .into_iter()
            .map(|target| IntersectionEntry::new(target, ratio))
            .collect();
        Ok(self.report_intersections(&entries))
    }
}
