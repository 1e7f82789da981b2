//! Color Constants for the CampanhasPro Theme
//!
//! Deep indigo chrome with a violet accent, matching the product's
//! gradient branding. All colors live here so the views never hardcode
//! an RGB value.

use eframe::egui::Color32;

/// Main window background - near-black indigo
pub const BG_DARK: Color32 = Color32::from_rgb(0x17, 0x14, 0x24);

/// Sidebar background - dark indigo
pub const SIDEBAR_BG: Color32 = Color32::from_rgb(0x1E, 0x1A, 0x2E);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x22, 0x1D, 0x35);

/// Card / panel surface
pub const CARD_BG: Color32 = Color32::from_rgb(0x26, 0x21, 0x3B);

/// Hovered list or nav item
pub const HOVER_ITEM: Color32 = Color32::from_rgb(0x32, 0x2B, 0x4D);

/// Selected nav item
pub const SELECTED_ITEM: Color32 = Color32::from_rgb(0x3D, 0x33, 0x5E);

/// Input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x2D, 0x27, 0x45);

/// Input border
pub const INPUT_BORDER: Color32 = Color32::from_rgb(0x4A, 0x42, 0x6B);

/// Primary accent - violet
pub const ACCENT: Color32 = Color32::from_rgb(0x8B, 0x5C, 0xF6);

/// Accent hover - lighter violet
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0xA7, 0x8B, 0xFA);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF4, 0xF1, 0xFB);

/// Primary body text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xE6, 0xE1, 0xF2);

/// Secondary text (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9B, 0x93, 0xB5);

/// Links and email values
pub const LINK: Color32 = Color32::from_rgb(0x7D, 0xB8, 0xFF);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Warning color - Orange
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Skeleton placeholder bars
pub const SKELETON: Color32 = Color32::from_rgb(0x3A, 0x33, 0x55);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0x3A, 0x33, 0x55);
