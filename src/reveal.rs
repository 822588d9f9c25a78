//! One-shot scroll reveal for `[data-animate]` elements.
//!
//! Each flagged element gets `in-view` the first time at least the
//! threshold fraction of it is visible, and is then dropped from
//! observation. Without intersection observation every element is revealed
//! up front.

use crate::dom::{Dom, NodeId};
use crate::markup;

/// One visibility report for an observed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: NodeId,
    /// Visible fraction of the element, 0.0 to 1.0.
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn new(target: NodeId, ratio: f64) -> Self {
        Self { target, ratio }
    }
}

#[derive(Debug, Clone)]
pub struct ScrollReveal {
    threshold: f64,
    observed: Vec<NodeId>,
}

impl ScrollReveal {
    /// Start revealing flagged elements of `dom`.
    pub fn init(dom: &mut Dom, intersection_observer: bool, threshold: f64) -> Self {
        let targets = dom.query_all(dom.document(), markup::ANIMATE);
        let mut reveal = Self {
            threshold,
            observed: Vec::new(),
        };
        if targets.is_empty() {
            return reveal;
        }

        if intersection_observer {
            reveal.observed = targets;
        } else {
            log::debug!(
                "no intersection observer; revealing {} elements",
                targets.len()
            );
            for target in targets {
                dom.add_class(target, markup::IN_VIEW);
            }
        }
        reveal
    }

    /// Elements still waiting to be revealed.
    pub fn observed(&self) -> &[NodeId] {
        &self.observed
    }

    pub fn is_observing(&self, target: NodeId) -> bool {
        self.observed.contains(&target)
    }

    /// Handle a batch of intersection reports. Returns how many elements were
    /// revealed.
    pub fn on_intersection(&mut self, dom: &mut Dom, entries: &[IntersectionEntry]) -> usize {
        let mut revealed = 0;
        for entry in entries {
            if entry.ratio.is_nan() || entry.ratio < self.threshold {
                continue;
            }
            let Some(pos) = self.observed.iter().position(|&id| id == entry.target) else {
                continue;
            };
            self.observed.remove(pos);
            dom.add_class(entry.target, markup::IN_VIEW);
            revealed += 1;
        }
        revealed
    }
}
