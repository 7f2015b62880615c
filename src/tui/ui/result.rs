//! Screening result view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::domain::{RiskAssessment, RiskLevel};
use crate::tui::styles::ClinicTheme;

/// Render the screening result view
pub fn render_result(f: &mut Frame, area: Rect, assessment: &RiskAssessment) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_result_header(f, chunks[0]);
    render_result_content(f, chunks[1], assessment);
    render_result_footer(f, chunks[2]);
}

fn render_result_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicTheme::text()),
        Span::styled("Screening Result", ClinicTheme::title()),
        Span::styled(" │ Heart Disease Risk", ClinicTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_result_content(f: &mut Frame, area: Rect, assessment: &RiskAssessment) {
    let block = Block::default()
        .title(Span::styled(" Assessment ", ClinicTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(ClinicTheme::border_focused());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Risk level
            Constraint::Length(4), // Probability
            Constraint::Length(3), // Confidence
            Constraint::Length(2), // Advice
            Constraint::Min(0),    // Padding
        ])
        .margin(1)
        .split(inner);

    let risk_style = ClinicTheme::risk_level(assessment.risk_level);
    let risk_icon = match assessment.risk_level {
        RiskLevel::Low => "OK",
        RiskLevel::Moderate | RiskLevel::High => "!",
    };

    let risk_display = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} {} RISK", risk_icon, assessment.risk_level),
            risk_style.add_modifier(ratatui::style::Modifier::BOLD),
        )),
        Line::from(Span::styled(
            assessment.risk_level.description(),
            ClinicTheme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(risk_display, chunks[0]);

    let prob_gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(
                    " Disease Probability ",
                    ClinicTheme::text_secondary(),
                ))
                .borders(Borders::ALL)
                .border_style(ClinicTheme::border()),
        )
        .gauge_style(risk_style)
        .percent((assessment.probability * 100.0).clamp(0.0, 100.0) as u16)
        .label(format!("{:.2}%", assessment.probability * 100.0));
    f.render_widget(prob_gauge, chunks[1]);

    let confidence = Paragraph::new(Line::from(vec![
        Span::styled("Confidence: ", ClinicTheme::text_secondary()),
        Span::styled(
            format!("{:.1}%", assessment.confidence * 100.0),
            ClinicTheme::text(),
        ),
        Span::styled("   Assessed: ", ClinicTheme::text_secondary()),
        Span::styled(
            assessment.created_at.format("%H:%M:%S UTC").to_string(),
            ClinicTheme::text_muted(),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(confidence, chunks[2]);

    let advice = Paragraph::new(Line::from(Span::styled(
        assessment.risk_level.advice(),
        risk_style,
    )))
    .alignment(Alignment::Center);
    f.render_widget(advice, chunks[3]);
}

fn render_result_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("[T] ", ClinicTheme::key_hint()),
        Span::styled("Statistics ", ClinicTheme::key_desc()),
        Span::styled("[N] ", ClinicTheme::key_hint()),
        Span::styled("New Screening ", ClinicTheme::key_desc()),
        Span::styled("[Esc] ", ClinicTheme::key_hint()),
        Span::styled("Dashboard", ClinicTheme::key_desc()),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(footer, area);
}
