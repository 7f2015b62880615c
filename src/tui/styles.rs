//! Clinic-themed color palette and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::RiskLevel;

/// Clinic theme color palette.
pub struct ClinicTheme;

impl ClinicTheme {
    /// Cardiac red - primary accent
    pub const PRIMARY: Color = Color::Rgb(225, 29, 72); // #E11D48

    /// Lighter accent for focus highlights
    pub const PRIMARY_LIGHT: Color = Color::Rgb(251, 113, 133); // #FB7185

    /// Steel blue - secondary, borders
    pub const SECONDARY: Color = Color::Rgb(100, 116, 139); // #64748B

    /// Emerald - low risk / ok
    pub const SUCCESS: Color = Color::Rgb(52, 211, 153); // #34D399

    /// Amber - moderate risk
    pub const WARNING: Color = Color::Rgb(251, 191, 36); // #FBBF24

    /// Red - high risk / errors
    pub const DANGER: Color = Color::Rgb(248, 113, 113); // #F87171

    /// Sky blue - neutral gauges
    pub const INFO: Color = Color::Rgb(56, 189, 248); // #38BDF8

    /// Primary text
    pub const TEXT: Color = Color::Rgb(241, 245, 249); // #F1F5F9

    /// Secondary text
    pub const TEXT_DIM: Color = Color::Rgb(148, 163, 184); // #94A3B8

    /// Muted text
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // #64748B

    #[must_use]
    pub fn title() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    #[must_use]
    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    #[must_use]
    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    #[must_use]
    pub fn info() -> Style {
        Style::default().fg(Self::INFO)
    }

    /// Style for focused elements
    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Style for key hints
    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    /// Get risk level style
    #[must_use]
    pub fn risk_level(level: RiskLevel) -> Style {
        match level {
            RiskLevel::Low => Self::success(),
            RiskLevel::Moderate => Self::warning(),
            RiskLevel::High => Self::danger(),
        }
    }

    /// Background color for a correlation cell, diverging around zero.
    #[must_use]
    pub fn correlation_cell(r: f64) -> Color {
        let t = r.clamp(-1.0, 1.0);
        if t >= 0.0 {
            // Towards warm red as correlation rises
            let s = (t * 200.0) as u8;
            Color::Rgb(55 + s, 40, 60)
        } else {
            // Towards cool blue as correlation falls
            let s = (-t * 200.0) as u8;
            Color::Rgb(40, 45, 55 + s)
        }
    }
}
