/// Height of the sticky navigation bar, subtracted from every scroll target
/// so section headings land below the nav instead of underneath it.
pub const NAV_HEIGHT_PX: f64 = 64.0;

/// Viewport width below which the page renders its reduced decoration counts.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// localStorage key holding the explicit dark-mode choice ("true"/"false").
/// Absent means the visitor never toggled and the OS preference decides.
pub const DARK_MODE_KEY: &str = "darkMode";
