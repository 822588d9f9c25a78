//! What the hosting runtime can do.
//!
//! Browsers differ in which observation APIs they ship. The widgets check
//! these capabilities the same way a page script feature-detects them and
//! degrade when one is missing.

/// How a media query list delivers change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeApi {
    /// `addEventListener("change", ..)`.
    EventListener,
    /// The older `addListener(..)`.
    LegacyListener,
    /// Neither; the query can be evaluated but not watched.
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSupport {
    /// No `matchMedia` at all.
    Unavailable,
    Available(ChangeApi),
}

/// Runtime capabilities and the viewport the page starts with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub viewport_width: f64,
    pub media: MediaSupport,
    pub intersection_observer: bool,
}

impl Default for Environment {
    /// A desktop browser with every capability.
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            media: MediaSupport::Available(ChangeApi::EventListener),
            intersection_observer: true,
        }
    }
}

impl Environment {
    pub fn with_width(viewport_width: f64) -> Self {
        Self {
            viewport_width,
            ..Self::default()
        }
    }
}

/// A `(max-width: N)` media query list bound to one listener.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxWidthQuery {
    max_width: f64,
    matches: bool,
    subscribed: bool,
}

impl MaxWidthQuery {
    pub fn new(max_width: f64, viewport_width: f64) -> Self {
        Self {
            max_width,
            matches: viewport_width <= max_width,
            subscribed: false,
        }
    }

    pub fn matches(&self) -> bool {
        self.matches
    }

    /// Subscribe through whichever mechanism `api` offers. Returns whether a
    /// subscription was made.
    pub fn subscribe(&mut self, api: ChangeApi) -> bool {
        self.subscribed = matches!(api, ChangeApi::EventListener | ChangeApi::LegacyListener);
        self.subscribed
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Re-evaluate against a new viewport width.
    ///
    /// Returns the new `matches` value when it flipped and a listener is
    /// subscribed, which is when a browser fires `change`.
    pub fn update(&mut self, viewport_width: f64) -> Option<bool> {
        let matches = viewport_width <= self.max_width;
        if matches == self.matches {
            return None;
        }
        self.matches = matches;
        self.subscribed.then_some(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_boundary_is_inclusive() {
        assert!(MaxWidthQuery::new(900.0, 900.0).matches());
        assert!(!MaxWidthQuery::new(900.0, 900.5).matches());
    }

    #[test]
    fn test_change_fires_only_on_flip_when_subscribed() {
        let mut query = MaxWidthQuery::new(900.0, 1200.0);
        assert_eq!(query.update(800.0), None);
        assert!(query.matches());

        assert!(query.subscribe(ChangeApi::LegacyListener));
        assert_eq!(query.update(700.0), None);
        assert_eq!(query.update(1000.0), Some(false));
        assert_eq!(query.update(600.0), Some(true));
    }

    #[test]
    fn test_unsupported_change_api_does_not_subscribe() {
        let mut query = MaxWidthQuery::new(900.0, 1200.0);
        assert!(!query.subscribe(ChangeApi::Unsupported));
        assert_eq!(query.update(500.0), None);
    }
}
