//! Index arithmetic for two-page spreads.

/// Which way a page turn goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Back,
}

impl Direction {
    /// State class applied to the right page while turning.
    pub fn class(self) -> &'static str {
        match self {
            Direction::Forward => crate::markup::TURNING_FORWARD,
            Direction::Back => crate::markup::TURNING_BACK,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Forward => Direction::Back,
            Direction::Back => Direction::Forward,
        }
    }
}

/// Largest left-page index that can be shown.
///
/// Even page counts end on a full spread; odd counts end on a lone left
/// page.
pub fn max_index(page_count: usize) -> usize {
    if page_count <= 1 {
        0
    } else if page_count % 2 == 0 {
        page_count - 2
    } else {
        page_count - 1
    }
}

/// Index after a completed turn from `index`.
pub fn turn_target(index: usize, page_count: usize, direction: Direction) -> usize {
    match direction {
        Direction::Forward => (index + 2).min(page_count.saturating_sub(1)),
        Direction::Back => index.saturating_sub(2),
    }
}

/// Even-aligned spread start for a page index, or `None` when the index is
/// not a finite number.
///
/// Negative indices clamp to the first spread; fractional ones fall to the
/// spread they sit in.
pub fn spread_start(page_index: f64) -> Option<usize> {
    if !page_index.is_finite() {
        return None;
    }
    let start = page_index - page_index % 2.0;
    Some(start.max(0.0) as usize)
}

/// Text for the page indicator: `"3"` for a lone page, `"3–4"` otherwise.
pub fn indicator_text(index: usize, page_count: usize) -> String {
    let start = index + 1;
    let end = (index + 2).min(page_count);
    if start == end {
        start.to_string()
    } else {
        format!("{start}\u{2013}{end}")
    }
}
