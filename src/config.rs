/// How long each testimonial stays on screen before the carousel
/// auto-advances.
pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;

/// Simulated round trip for the newsletter signup. There is no real
/// mail-list backend yet.
pub const NEWSLETTER_SUBMIT_DELAY_MS: u32 = 1_000;

/// How long the confirmation message stays visible before the form
/// returns to idle.
pub const NEWSLETTER_RESET_DELAY_MS: u32 = 3_000;

/// Vertical scroll offset past which the navbar switches to its
/// condensed style.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 20.0;
