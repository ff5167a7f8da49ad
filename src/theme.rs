//! Midnight neon theme module.
//!
//! Dark background with the portfolio's cyan/violet accent palette,
//! tuned for low glare in a terminal.

#![allow(dead_code)]

use ratatui::style::Color;

/// Midnight neon color palette
pub mod colors {
    use super::Color;

    // === Background Colors ===
    /// Near-black blue - primary background
    pub const BG_DARK: Color = Color::Rgb(0x0B, 0x0E, 0x14);
    /// Slightly lighter background for panels
    pub const BG_MEDIUM: Color = Color::Rgb(0x11, 0x15, 0x1D);
    /// Background for highlighted/selected areas
    pub const BG_HIGHLIGHT: Color = Color::Rgb(0x1A, 0x21, 0x2E);
    /// Background for dimmed/overlay areas
    pub const BG_DIM: Color = Color::Rgb(0x07, 0x09, 0x0E);

    // === Foreground Colors ===
    /// Primary text color
    pub const FG_PRIMARY: Color = Color::Rgb(0xD6, 0xDE, 0xE7);
    /// Dimmed text for secondary information
    pub const FG_DIM: Color = Color::Rgb(0x6E, 0x7A, 0x8A);
    /// Very dim text for hints and placeholders
    pub const FG_HINT: Color = Color::Rgb(0x46, 0x50, 0x5E);

    // === Accent Colors ===
    /// Electric cyan - the primary accent of the portfolio
    pub const CYAN: Color = Color::Rgb(0x00, 0xD4, 0xFF);
    /// Softer cyan for fills and secondary accents
    pub const CYAN_DIM: Color = Color::Rgb(0x0E, 0x7D, 0x96);
    /// Violet - secondary accent
    pub const VIOLET: Color = Color::Rgb(0xA7, 0x8B, 0xFA);
    /// Magenta - highlight accent
    pub const MAGENTA: Color = Color::Rgb(0xE8, 0x7B, 0xB8);

    /// Success green
    pub const GREEN: Color = Color::Rgb(0x7E, 0xC9, 0x9B);
    /// Warning amber
    pub const AMBER: Color = Color::Rgb(0xE5, 0xB5, 0x67);
    /// Error red
    pub const RED: Color = Color::Rgb(0xE5, 0x6E, 0x6E);

    // === UI Element Colors ===
    /// Borders and separators
    pub const BORDER: Color = Color::Rgb(0x2B, 0x34, 0x42);
    /// Dim border for less important separators
    pub const BORDER_DIM: Color = Color::Rgb(0x1C, 0x22, 0x2C);
    /// Accent border for focused elements
    pub const BORDER_ACCENT: Color = CYAN;

    // === Journey Rail Colors ===
    /// Unfilled track
    pub const RAIL_TRACK: Color = BORDER;
    /// Filled progress portion
    pub const RAIL_FILL: Color = CYAN;
    /// Inactive node
    pub const RAIL_NODE: Color = FG_DIM;
    /// Reached/active node
    pub const RAIL_NODE_LIT: Color = CYAN;

    // === Particle Colors ===
    /// Drifting star particles
    pub const PARTICLE_STAR: Color = Color::Rgb(0x9A, 0xB8, 0xC8);
    /// Rising orb particles
    pub const PARTICLE_ORB: Color = Color::Rgb(0x5A, 0x8E, 0xB0);
}

/// Accent cycle for skill and project cards
pub const CARD_COLORS: &[Color] = &[
    Color::Rgb(0x00, 0xD4, 0xFF), // cyan
    Color::Rgb(0xA7, 0x8B, 0xFA), // violet
    Color::Rgb(0x7E, 0xC9, 0x9B), // green
    Color::Rgb(0xE5, 0xB5, 0x67), // amber
    Color::Rgb(0xE8, 0x7B, 0xB8), // magenta
    Color::Rgb(0x6C, 0xB8, 0xE5), // sky
];

/// Get a card accent color by index (cycles through available colors)
pub fn card_color(index: usize) -> Color {
    CARD_COLORS[index % CARD_COLORS.len()]
}

/// Semantic styling helpers
pub mod styles {
    use super::colors;
    use ratatui::style::{Modifier, Style};

    /// Style for primary text
    pub fn text() -> Style {
        Style::default().fg(colors::FG_PRIMARY)
    }

    /// Style for dimmed/secondary text
    pub fn text_dim() -> Style {
        Style::default().fg(colors::FG_DIM)
    }

    /// Style for hint text
    pub fn text_hint() -> Style {
        Style::default().fg(colors::FG_HINT)
    }

    /// Style for the cyan accent
    pub fn accent() -> Style {
        Style::default().fg(colors::CYAN)
    }

    /// Style for success messages
    pub fn success() -> Style {
        Style::default().fg(colors::GREEN)
    }

    /// Style for error messages
    pub fn error() -> Style {
        Style::default().fg(colors::RED)
    }

    /// Style for warning messages
    pub fn warning() -> Style {
        Style::default().fg(colors::AMBER)
    }

    /// Style for section headings
    pub fn heading() -> Style {
        Style::default()
            .fg(colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the small uppercase kicker above headings
    pub fn kicker() -> Style {
        Style::default()
            .fg(colors::CYAN)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for block titles
    pub fn title() -> Style {
        Style::default()
            .fg(colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unfocused borders
    pub fn border() -> Style {
        Style::default().fg(colors::BORDER)
    }

    /// Style for dim borders
    pub fn border_dim() -> Style {
        Style::default().fg(colors::BORDER_DIM)
    }

    /// Style for focused borders
    pub fn border_focused() -> Style {
        Style::default().fg(colors::BORDER_ACCENT)
    }

    /// Style for form labels
    pub fn form_label() -> Style {
        Style::default().fg(colors::FG_DIM)
    }

    /// Style for form input (focused)
    pub fn form_input_focused() -> Style {
        Style::default()
            .fg(colors::FG_PRIMARY)
            .bg(colors::BG_HIGHLIGHT)
    }

    /// Style for form input (unfocused)
    pub fn form_input() -> Style {
        Style::default()
            .fg(colors::FG_PRIMARY)
            .bg(colors::BG_MEDIUM)
    }

    /// Style for buttons
    pub fn button() -> Style {
        Style::default()
            .fg(colors::FG_PRIMARY)
            .bg(colors::BG_MEDIUM)
    }

    /// Style for focused buttons
    pub fn button_focused() -> Style {
        Style::default()
            .fg(colors::BG_DARK)
            .bg(colors::CYAN)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for modal content background
    pub fn modal_content_bg() -> Style {
        Style::default().bg(colors::BG_MEDIUM)
    }
}
