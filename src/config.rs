use log::Level;

/// Passphrase that opens every locked item for the rest of the session.
/// It ships with the client, so it gates content casually and nothing more.
pub const MASTER_CODE: &str = "beautyxedu";

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/beautyX.io/";
pub const INSTAGRAM_HANDLE: &str = "@beautyX.io";

pub const NOTIFY_DURATION_MS: u32 = 3_000;

// Entrance animations
pub const HERO_REVEAL_DELAY_MS: u32 = 0;
pub const CATEGORY_REVEAL_DELAY_MS: u32 = 300;
pub const CATEGORY_STAGGER_MS: u32 = 100;
pub const INSTRUCTION_REVEAL_DELAY_MS: u32 = 600;
pub const FOOTER_REVEAL_DELAY_MS: u32 = 800;
pub const GRID_REVEAL_DELAY_MS: u32 = 50;
pub const GRID_STAGGER_MS: u32 = 80;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
