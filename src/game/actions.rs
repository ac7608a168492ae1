//! Semantic action IDs for Neon Clicker click targets.
//!
//! Each constant represents a distinct clickable action in the UI.
//! These IDs are registered during render and dispatched via `InputEvent::Click`.

// ── Core actions ────────────────────────────────────────────────
pub const CLICK_ORB: u16 = 0;

// ── Overlay navigation ──────────────────────────────────────────
pub const OPEN_STORE: u16 = 10;
pub const CLOSE_STORE: u16 = 11;
pub const OPEN_SETTINGS: u16 = 12;
pub const CLOSE_SETTINGS: u16 = 13;

// ── Store tier tabs ─────────────────────────────────────────────
pub const TAB_BASIC: u16 = 20;
pub const TAB_PREMIUM: u16 = 21;

// ── Settings actions ────────────────────────────────────────────
pub const RESET_GAME: u16 = 30;

// ── Boost purchase (base + catalog index) ───────────────────────
pub const BUY_BOOST_BASE: u16 = 100;
