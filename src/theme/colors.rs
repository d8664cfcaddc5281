//! Colors - Demo Theme Colors

use gpui::{rgb, Rgba};

/// Demo color palette - All colors are accessed via associated functions
pub struct DemoColors;

impl DemoColors {
    // Background colors
    /// Page background
    pub fn background() -> Rgba { rgb(0xf3f4f6) }
    /// Card background
    pub fn card_bg() -> Rgba { rgb(0xffffff) }
    /// Greeting row background
    pub fn row_bg() -> Rgba { rgb(0xf9fafb) }
    /// Benefits card background
    pub fn highlight_bg() -> Rgba { rgb(0xeff6ff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x4b5563) }
    /// Benefits heading text
    pub fn highlight_heading() -> Rgba { rgb(0x1e40af) }
    /// Benefits body text
    pub fn highlight_text() -> Rgba { rgb(0x1d4ed8) }

    // Accent colors
    /// Stateless demo heading - Blue
    pub fn accent_blue() -> Rgba { rgb(0x2563eb) }
    /// Stateful demo heading - Green
    pub fn accent_green() -> Rgba { rgb(0x16a34a) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x2563eb) }
    /// Primary button hover background
    pub fn button_primary_hover() -> Rgba { rgb(0x1d4ed8) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Outline button border
    pub fn button_outline_border() -> Rgba { rgb(0xd1d5db) }
    /// Outline/ghost button hover background
    pub fn button_subtle_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x4b5563) }
}
