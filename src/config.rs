use log::Level;

/// Scroll offset, in pixels, past which the header switches to its elevated look.
pub const HEADER_ELEVATION_THRESHOLD: u32 = 50;

pub const ENTRANCE_DURATION_MS: u32 = 600;
pub const ENTRANCE_OFFSET_PX: u32 = 60;
pub const ENTRANCE_STAGGER_MS: u32 = 100;

pub const DRAWER_OFFSET_PX: u32 = 20;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
