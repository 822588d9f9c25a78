//! Flat image grid shown below the mobile breakpoint.

use crate::dom::{Dom, NodeId};
use crate::pages::PageDescriptor;
use crate::runtime::{MaxWidthQuery, MediaSupport};

use super::thumbs::lazy_image;

/// Populated at most once, either at setup or when the viewport first
/// enters the breakpoint.
#[derive(Debug, Clone)]
pub struct MobileGrid {
    container: Option<NodeId>,
    query: Option<MaxWidthQuery>,
    populated: bool,
}

impl MobileGrid {
    pub fn init(
        dom: &mut Dom,
        container: Option<NodeId>,
        pages: &[PageDescriptor],
        media: MediaSupport,
        max_width: f64,
        viewport_width: f64,
    ) -> Self {
        let query = match media {
            MediaSupport::Unavailable => None,
            MediaSupport::Available(_) => Some(MaxWidthQuery::new(max_width, viewport_width)),
        };
        let mut grid = Self {
            container,
            query,
            populated: false,
        };

        if grid.query.as_ref().is_none_or(MaxWidthQuery::matches) {
            grid.populate(dom, pages);
        }

        if let (Some(_), Some(query), MediaSupport::Available(api)) =
            (grid.container, grid.query.as_mut(), media)
        {
            let subscribed = query.subscribe(api);
            if !subscribed {
                log::debug!("media query changes cannot be observed; mobile grid stays as set up");
            }
        }
        grid
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    pub fn populate(&mut self, dom: &mut Dom, pages: &[PageDescriptor]) {
        let Some(container) = self.container else {
            return;
        };
        if self.populated {
            return;
        }
        for page in pages {
            let img = lazy_image(dom, page);
            dom.append(container, img);
        }
        self.populated = true;
    }

    /// Re-evaluate the breakpoint; entering it populates the grid.
    pub fn viewport_changed(&mut self, dom: &mut Dom, pages: &[PageDescriptor], width: f64) {
        let Some(query) = self.query.as_mut() else {
            return;
        };
        if query.update(width) == Some(true) {
            self.populate(dom, pages);
        }
    }
}
