//! Two-page book viewer.
//!
//! Each `.book-viewer` section becomes one [`BookViewer`]: it shows the
//! spread starting at `index`, keeps the indicator, navigation buttons and
//! thumbnails in sync, and animates page turns in two timed phases. While a
//! turn is in flight every navigation request is dropped.
//!
//! A section missing any required anchor (its own `[data-viewer-pages]`
//! included, even when the document shares a page list), or with no pages
//! to show, is left alone entirely.

mod mobile;
mod spread;
mod thumbs;

pub use mobile::MobileGrid;
pub use spread::{Direction, indicator_text, max_index, spread_start, turn_target};
pub use thumbs::{init_thumbs, thumb_page_index};

use std::rc::Rc;

use crate::dom::{Dom, NodeId};
use crate::markup;
use crate::options::ViewerOptions;
use crate::pages::{PageDescriptor, collect_page_data};
use crate::runtime::Environment;
use crate::scheduler::{Millis, Schedule};

/// Position of a viewer within its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewerId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    Turning(Direction),
}

/// The two phases of a page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStep {
    /// Move the index and re-render.
    Update(Direction),
    /// Drop the animation class and unlock.
    Reset(Direction),
}

/// A turn phase addressed to one viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerTask {
    pub viewer: ViewerId,
    pub step: TurnStep,
}

/// What a click inside a viewer lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Prev,
    Next,
    Thumb(NodeId),
}

#[derive(Debug, Clone, Copy)]
struct Anchors {
    section: NodeId,
    pages_root: NodeId,
    left_img: NodeId,
    right_img: NodeId,
    right_page: NodeId,
    prev: NodeId,
    next: NodeId,
    indicator: Option<NodeId>,
}

impl Anchors {
    fn resolve(dom: &Dom, section: NodeId) -> Option<Self> {
        Some(Self {
            section,
            pages_root: dom.query(section, markup::PAGES)?,
            left_img: dom.query(section, markup::LEFT_IMG)?,
            right_img: dom.query(section, markup::RIGHT_IMG)?,
            right_page: dom.query(section, markup::RIGHT_PAGE)?,
            prev: dom.query(section, markup::PREV)?,
            next: dom.query(section, markup::NEXT)?,
            indicator: dom.query(section, markup::INDICATOR),
        })
    }
}

#[derive(Debug, Clone)]
pub struct BookViewer {
    id: ViewerId,
    anchors: Anchors,
    pages: Rc<[PageDescriptor]>,
    index: usize,
    state: TurnState,
    thumbs: Vec<NodeId>,
    mobile: MobileGrid,
    update_delay: Millis,
    reset_delay: Millis,
}

impl BookViewer {
    /// Set up the viewer for `section`, or `None` if it cannot run.
    pub fn attach(
        dom: &mut Dom,
        section: NodeId,
        shared_pages: &Rc<[PageDescriptor]>,
        env: &Environment,
        options: &ViewerOptions,
        id: ViewerId,
    ) -> Option<Self> {
        let Some(anchors) = Anchors::resolve(dom, section) else {
            log::debug!("viewer {}: required markup missing, skipped", id.0);
            return None;
        };

        let pages = if shared_pages.is_empty() {
            Rc::from(collect_page_data(dom, Some(anchors.pages_root)))
        } else {
            Rc::clone(shared_pages)
        };
        if pages.is_empty() {
            log::debug!("viewer {}: no pages, skipped", id.0);
            return None;
        }

        let grid = dom.query(section, markup::MOBILE_GRID);
        let mobile = MobileGrid::init(
            dom,
            grid,
            &pages,
            env.media,
            options.mobile_max_width,
            env.viewport_width,
        );

        let thumbs_root = dom.query(section, markup::THUMBS);
        let thumbs = init_thumbs(dom, thumbs_root, &pages);

        let viewer = Self {
            id,
            anchors,
            pages,
            index: 0,
            state: TurnState::Idle,
            thumbs,
            mobile,
            update_delay: options.turn_update_delay_ms,
            reset_delay: options.turn_reset_delay_ms,
        };
        viewer.render(dom);
        log::debug!(
            "viewer {}: {} pages, {} thumbnails",
            id.0,
            viewer.pages.len(),
            viewer.thumbs.len()
        );
        Some(viewer)
    }

    pub fn id(&self) -> ViewerId {
        self.id
    }

    pub fn section(&self) -> NodeId {
        self.anchors.section
    }

    pub fn pages(&self) -> &[PageDescriptor] {
        &self.pages
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn max_index(&self) -> usize {
        max_index(self.pages.len())
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state != TurnState::Idle
    }

    pub fn thumbs(&self) -> &[NodeId] {
        &self.thumbs
    }

    pub fn mobile_grid_populated(&self) -> bool {
        self.mobile.is_populated()
    }

    /// Show the spread at the current index.
    pub fn render(&self, dom: &mut Dom) {
        let a = self.anchors;

        if let Some(left) = self.pages.get(self.index) {
            dom.set_attr(a.left_img, "src", &left.source);
            dom.set_attr(a.left_img, "alt", &left.alt);
        }

        match self.pages.get(self.index + 1) {
            Some(right) => {
                dom.set_attr(a.right_img, "src", &right.source);
                dom.set_attr(a.right_img, "alt", &right.alt);
                dom.remove_class(a.right_page, markup::IS_EMPTY);
            }
            None => {
                dom.remove_attr(a.right_img, "src");
                dom.set_attr(a.right_img, "alt", "");
                dom.add_class(a.right_page, markup::IS_EMPTY);
            }
        }

        if let Some(indicator) = a.indicator {
            dom.set_text_content(indicator, &indicator_text(self.index, self.pages.len()));
        }

        dom.set_flag(a.prev, "disabled", self.index == 0);
        dom.set_flag(a.next, "disabled", self.index >= self.max_index());

        let left = self.index as f64;
        for &thumb in &self.thumbs {
            let page = thumb_page_index(dom, thumb);
            dom.toggle_class(thumb, markup::IS_ACTIVE, page == left || page == left + 1.0);
        }
    }

    /// Request the next spread. Returns whether a turn started.
    pub fn turn_forward(&mut self, dom: &mut Dom, scheduler: &mut impl Schedule<ViewerTask>) -> bool {
        if self.is_animating() || self.index >= self.max_index() {
            return false;
        }
        self.start_turn(dom, scheduler, Direction::Forward);
        true
    }

    /// Request the previous spread. Returns whether a turn started.
    pub fn turn_backward(&mut self, dom: &mut Dom, scheduler: &mut impl Schedule<ViewerTask>) -> bool {
        if self.is_animating() || self.index == 0 {
            return false;
        }
        self.start_turn(dom, scheduler, Direction::Back);
        true
    }

    fn start_turn(
        &mut self,
        dom: &mut Dom,
        scheduler: &mut impl Schedule<ViewerTask>,
        direction: Direction,
    ) {
        self.state = TurnState::Turning(direction);
        dom.remove_class(self.anchors.right_page, direction.opposite().class());
        dom.add_class(self.anchors.right_page, direction.class());

        let viewer = self.id;
        scheduler.schedule(
            self.update_delay,
            ViewerTask {
                viewer,
                step: TurnStep::Update(direction),
            },
        );
        scheduler.schedule(
            self.reset_delay,
            ViewerTask {
                viewer,
                step: TurnStep::Reset(direction),
            },
        );
        log::trace!(
            "viewer {}: turning {direction:?} at {}ms",
            viewer.0,
            scheduler.now()
        );
    }

    /// Run a scheduled turn phase.
    pub fn run_step(&mut self, dom: &mut Dom, step: TurnStep) {
        match step {
            TurnStep::Update(direction) => {
                self.index = turn_target(self.index, self.pages.len(), direction);
                self.render(dom);
            }
            TurnStep::Reset(direction) => {
                dom.remove_class(self.anchors.right_page, direction.class());
                self.state = TurnState::Idle;
            }
        }
    }

    /// Jump to the spread holding `page_index`. Returns whether the index
    /// changed.
    pub fn thumbnail_click(&mut self, dom: &mut Dom, page_index: f64) -> bool {
        if self.is_animating() {
            return false;
        }
        let Some(start) = spread_start(page_index) else {
            log::debug!("viewer {}: thumbnail without a page index", self.id.0);
            return false;
        };
        if start == self.index {
            return false;
        }
        if start > self.max_index() {
            log::debug!("viewer {}: page {page_index} is past the last spread", self.id.0);
            return false;
        }
        self.index = start;
        self.render(dom);
        true
    }

    /// Which control of this viewer, if any, a click on `node` reaches.
    ///
    /// Clicks bubble, so a click on a thumbnail's image lands on the
    /// thumbnail.
    pub fn click_target(&self, dom: &Dom, node: NodeId) -> Option<ClickTarget> {
        let mut current = node;
        while current.is_some() && current != self.anchors.section {
            if current == self.anchors.prev {
                return Some(ClickTarget::Prev);
            }
            if current == self.anchors.next {
                return Some(ClickTarget::Next);
            }
            if self.thumbs.contains(&current) {
                return Some(ClickTarget::Thumb(current));
            }
            current = dom.get(current).map_or(NodeId::NONE, |n| n.parent);
        }
        None
    }

    /// Dispatch a click. Returns whether it changed anything.
    pub fn click(
        &mut self,
        dom: &mut Dom,
        scheduler: &mut impl Schedule<ViewerTask>,
        target: ClickTarget,
    ) -> bool {
        match target {
            ClickTarget::Prev => self.turn_backward(dom, scheduler),
            ClickTarget::Next => self.turn_forward(dom, scheduler),
            ClickTarget::Thumb(thumb) => {
                let page_index = thumb_page_index(dom, thumb);
                self.thumbnail_click(dom, page_index)
            }
        }
    }

    pub fn viewport_changed(&mut self, dom: &mut Dom, width: f64) {
        self.mobile.viewport_changed(dom, &self.pages, width);
    }
}
