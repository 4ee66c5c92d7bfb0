use crate::config::HEADER_ELEVATION_THRESHOLD;

/// Visual treatment of the fixed header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderTone {
    #[default]
    Transparent,
    Elevated,
}

impl HeaderTone {
    pub fn class(self) -> &'static str {
        match self {
            HeaderTone::Transparent => "site-header--transparent",
            HeaderTone::Elevated => "site-header--elevated",
        }
    }
}

/// Last vertical scroll offset reported by the page, rounded up to whole
/// pixels so any reading past the threshold elevates the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: u32,
}

impl ScrollState {
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Stores the raw reading from the host. Fractions round up; negative
    /// values (overscroll bounce) and non-finite values collapse to zero.
    pub fn record(&mut self, raw_offset: f64) {
        self.offset = if raw_offset.is_finite() && raw_offset > 0.0 {
            raw_offset.min(u32::MAX as f64).ceil() as u32
        } else {
            0
        };
    }

    pub fn is_elevated(&self) -> bool {
        self.offset > HEADER_ELEVATION_THRESHOLD
    }

    pub fn tone(&self) -> HeaderTone {
        if self.is_elevated() {
            HeaderTone::Elevated
        } else {
            HeaderTone::Transparent
        }
    }
}
