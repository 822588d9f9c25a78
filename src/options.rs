//! Tunable timings and thresholds.

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Delay between a page-turn request and the index update.
pub const TURN_UPDATE_DELAY_MS: u64 = 260;
/// Delay between a page-turn request and the end of its animation.
pub const TURN_RESET_DELAY_MS: u64 = 520;
/// Viewports at most this wide get the flat mobile grid.
pub const MOBILE_MAX_WIDTH: f64 = 900.0;
/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ViewerOptions {
    pub turn_update_delay_ms: u64,
    /// Measured from the request, not from the index update.
    pub turn_reset_delay_ms: u64,
    pub mobile_max_width: f64,
    pub reveal_threshold: f64,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            turn_update_delay_ms: TURN_UPDATE_DELAY_MS,
            turn_reset_delay_ms: TURN_RESET_DELAY_MS,
            mobile_max_width: MOBILE_MAX_WIDTH,
            reveal_threshold: REVEAL_THRESHOLD,
        }
    }
}

impl ViewerOptions {
    /// The media query the mobile grid is gated on.
    pub fn mobile_query(&self) -> String {
        format!("(max-width: {}px)", self.mobile_max_width)
    }

    /// Read options from JSON; missing fields keep their defaults.
    #[cfg(feature = "cli")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        if options.turn_reset_delay_ms < options.turn_update_delay_ms {
            log::warn!(
                "turn_reset_delay_ms ({}) is shorter than turn_update_delay_ms ({}); the animation class will clear before the page changes",
                options.turn_reset_delay_ms,
                options.turn_update_delay_ms
            );
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ViewerOptions::default();
        assert_eq!(options.turn_update_delay_ms, 260);
        assert_eq!(options.turn_reset_delay_ms, 520);
        assert_eq!(options.mobile_query(), "(max-width: 900px)");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_partial_json_keeps_defaults() {
        let options = ViewerOptions::from_json(r#"{ "turn_update_delay_ms": 100 }"#).unwrap();
        assert_eq!(options.turn_update_delay_ms, 100);
        assert_eq!(options.turn_reset_delay_ms, 520);
        assert_eq!(options.reveal_threshold, 0.15);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(matches!(
            ViewerOptions::from_json(r#"{ "speed": 2 }"#),
            Err(crate::Error::Config(_))
        ));
    }
}
