//! The two built-in palettes.
//!
//! Grayscale values lifted from the reference page: white/black grounds
//! with a ramp of neutral grays for secondary text and borders.

use super::Palette;
use crate::types::Rgb;

/// Light palette - the classic variant's boot theme.
pub fn light() -> Palette {
    Palette {
        background: Rgb::WHITE,
        surface: Rgb::from_rgb_int(0xf9fafb),
        text: Rgb::BLACK,
        text_muted: Rgb::from_rgb_int(0x4b5563),
        text_dim: Rgb::from_rgb_int(0x6b7280),
        border: Rgb::from_rgb_int(0xe5e7eb),
        border_strong: Rgb::from_rgb_int(0x9ca3af),
    }
}

/// Dark palette - the studio variant's boot theme.
pub fn dark() -> Palette {
    Palette {
        background: Rgb::BLACK,
        surface: Rgb::from_rgb_int(0x111827),
        text: Rgb::WHITE,
        text_muted: Rgb::from_rgb_int(0x9ca3af),
        text_dim: Rgb::from_rgb_int(0x6b7280),
        border: Rgb::from_rgb_int(0x1f2937),
        border_strong: Rgb::from_rgb_int(0x374151),
    }
}
