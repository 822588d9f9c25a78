//! Scripted host events, as accepted by the `folio` CLI.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::page::Page;
use crate::scheduler::Millis;
use crate::viewer::{ViewerId, thumb_page_index};

/// One event the host delivers to a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Click the first viewer's next button.
    Next,
    /// Click the first viewer's previous button.
    Prev,
    /// Click the first viewer's thumbnail at this position.
    Thumb(usize),
    /// Let page time pass.
    Wait(Millis),
    /// Resize the viewport.
    Resize(f64),
    /// Scroll elements matching the selector this far into view.
    Reveal { selector: String, ratio: f64 },
    /// Let every pending page turn finish.
    Settle,
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidAction(s.to_string());
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        match (name, arg) {
            ("next", None) => Ok(Action::Next),
            ("prev", None) => Ok(Action::Prev),
            ("settle", None) => Ok(Action::Settle),
            ("thumb", Some(n)) => n.parse().map(Action::Thumb).map_err(|_| invalid()),
            ("wait", Some(ms)) => ms.parse().map(Action::Wait).map_err(|_| invalid()),
            ("resize", Some(w)) => match w.parse::<f64>() {
                Ok(width) if width.is_finite() && width >= 0.0 => Ok(Action::Resize(width)),
                _ => Err(invalid()),
            },
            ("reveal", Some(target)) => {
                let (selector, ratio) = match target.rsplit_once('@') {
                    Some((selector, ratio)) => {
                        (selector, ratio.parse::<f64>().map_err(|_| invalid())?)
                    }
                    None => (target, 1.0),
                };
                if selector.is_empty() || !(0.0..=1.0).contains(&ratio) {
                    return Err(invalid());
                }
                Ok(Action::Reveal {
                    selector: selector.to_string(),
                    ratio,
                })
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Next => f.write_str("next"),
            Action::Prev => f.write_str("prev"),
            Action::Settle => f.write_str("settle"),
            Action::Thumb(n) => write!(f, "thumb:{n}"),
            Action::Wait(ms) => write!(f, "wait:{ms}"),
            Action::Resize(width) => write!(f, "resize:{width}"),
            Action::Reveal { selector, ratio } => write!(f, "reveal:{selector}@{ratio}"),
        }
    }
}

impl Action {
    /// Deliver this action to `page`.
    pub fn apply(&self, page: &mut Page) -> Result<()> {
        const FIRST: ViewerId = ViewerId(0);
        match self {
            Action::Next => {
                page.turn_forward(FIRST);
            }
            Action::Prev => {
                page.turn_backward(FIRST);
            }
            Action::Thumb(position) => {
                let Some(&thumb) = page.viewer(FIRST).and_then(|v| v.thumbs().get(*position))
                else {
                    log::warn!("{self}: no such thumbnail");
                    return Ok(());
                };
                let page_index = thumb_page_index(page.dom(), thumb);
                page.thumbnail_click(FIRST, page_index);
            }
            Action::Wait(ms) => {
                page.advance(*ms);
            }
            Action::Resize(width) => page.resize(*width),
            Action::Reveal { selector, ratio } => {
                page.scroll_into_view(selector, *ratio)?;
            }
            Action::Settle => {
                page.settle();
            }
        }
        Ok(())
    }
}
