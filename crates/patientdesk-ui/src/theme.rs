//! Colors and spacing shared by all views.

use gpui::{Rgba, rgb, rgba};

pub const SPACE_1: f32 = 4.0;
pub const SPACE_2: f32 = 8.0;
pub const SPACE_3: f32 = 12.0;
pub const SPACE_4: f32 = 16.0;
pub const SPACE_6: f32 = 24.0;

pub const TEXT_SM: f32 = 13.0;
pub const TEXT_BASE: f32 = 15.0;
pub const TEXT_LG: f32 = 18.0;
pub const TEXT_XL: f32 = 22.0;

pub const RADIUS_MD: f32 = 8.0;
pub const RADIUS_LG: f32 = 14.0;

pub const MODAL_WIDTH: f32 = 384.0;
pub const TILE_SIZE: f32 = 144.0;

pub fn void() -> Rgba {
    rgb(0x1b2430)
}

pub fn header() -> Rgba {
    rgb(0x111821)
}

pub fn surface() -> Rgba {
    rgb(0xffffff)
}

pub fn input_bg() -> Rgba {
    rgb(0xf7f8fa)
}

pub fn border() -> Rgba {
    rgb(0xd0d5dd)
}

/// Accent of tiles and primary buttons.
pub fn brand() -> Rgba {
    rgb(0x1e5aa8)
}

pub fn brand_hover() -> Rgba {
    rgb(0x2b6fc4)
}

pub fn focus_ring() -> Rgba {
    rgb(0x4a9eff)
}

pub fn text_white() -> Rgba {
    rgb(0xffffff)
}

pub fn text_dark() -> Rgba {
    rgb(0x1f2937)
}

pub fn text_muted() -> Rgba {
    rgb(0x6b7280)
}

pub fn placeholder() -> Rgba {
    rgb(0x9ca3af)
}

pub fn success() -> Rgba {
    rgb(0x15803d)
}

pub fn warning() -> Rgba {
    rgb(0xb45309)
}

pub fn ember() -> Rgba {
    rgb(0xdc2626)
}

/// Dimmed backdrop behind modals.
pub fn overlay() -> Rgba {
    rgba(0x00000080)
}

pub fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    Rgba { a: alpha, ..color }
}
