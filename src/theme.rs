//! Centralized color theme for the application.
//!
//! Modify values here to change the application's color scheme.

use bevy_egui::egui;

// ============================================================================
// Brand
// ============================================================================

/// Lavender accent used by the logo and the active navbar entry
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(184, 160, 230);

/// Soft accent fill behind the active navbar entry
pub const ACCENT_SOFT: egui::Color32 = egui::Color32::from_rgb(70, 60, 95);

/// Text on top of the accent color
pub const ON_ACCENT: egui::Color32 = egui::Color32::BLACK;

// ============================================================================
// Text
// ============================================================================

/// Grey for secondary text (subtitles, ids, empty state)
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(170, 170, 175);

/// Red for error messages
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(255, 100, 100);

/// Green "Copied" acknowledgement
pub const COPIED_TEXT: egui::Color32 = egui::Color32::from_rgb(0, 200, 0);

// ============================================================================
// Cards
// ============================================================================

/// Card background
pub const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(38, 38, 44);

/// Badge background (date, vector format)
pub const BADGE_FILL: egui::Color32 = egui::Color32::from_rgb(60, 60, 70);

/// Background of the id row
pub const ID_ROW_FILL: egui::Color32 = egui::Color32::from_rgb(30, 30, 34);
