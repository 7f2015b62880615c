//! Dashboard view: Main overview screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::domain::RiskAssessment;
use crate::tui::styles::ClinicTheme;

/// Dashboard state for rendering.
#[derive(Default)]
pub struct DashboardState {
    pub model_loaded: bool,
    pub model_input_width: usize,
    pub dataset_path: String,
}

/// Render the main dashboard view.
pub fn render_dashboard(
    f: &mut Frame,
    area: Rect,
    state: &DashboardState,
    assessment: Option<&RiskAssessment>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_main_content(f, chunks[1], state, assessment);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicTheme::text()),
        Span::styled("Cardioscope", ClinicTheme::title()),
        Span::styled(" │ ", ClinicTheme::text_muted()),
        Span::styled(
            "Heart Disease Risk Screening",
            ClinicTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_main_content(
    f: &mut Frame,
    area: Rect,
    state: &DashboardState,
    assessment: Option<&RiskAssessment>,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_status_panels(f, chunks[0], state);
    render_last_screening(f, chunks[1], assessment);
}

fn render_status_panels(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // System status
            Constraint::Min(0),    // Quick actions
        ])
        .margin(1)
        .split(area);

    let status_items = vec![
        format_status_item("Model Loaded", state.model_loaded),
        Line::from(vec![
            Span::styled("  Model inputs: ", ClinicTheme::text_secondary()),
            Span::styled(state.model_input_width.to_string(), ClinicTheme::text()),
        ]),
        Line::from(vec![
            Span::styled("  Dataset: ", ClinicTheme::text_secondary()),
            Span::styled(state.dataset_path.clone(), ClinicTheme::text_muted()),
        ]),
    ];

    let status_block = Block::default()
        .title(Span::styled(" System Status ", ClinicTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(ClinicTheme::border());

    let status_list = Paragraph::new(status_items).block(status_block);
    f.render_widget(status_list, chunks[0]);

    let actions = vec![
        Line::from(vec![
            Span::styled("[N] ", ClinicTheme::key_hint()),
            Span::styled("New Screening", ClinicTheme::key_desc()),
        ]),
        Line::from(vec![
            Span::styled("[T] ", ClinicTheme::key_hint()),
            Span::styled(
                "Statistics (after a screening)",
                ClinicTheme::key_desc(),
            ),
        ]),
        Line::from(vec![
            Span::styled("[Q] ", ClinicTheme::key_hint()),
            Span::styled("Quit", ClinicTheme::key_desc()),
        ]),
    ];

    let actions_block = Block::default()
        .title(Span::styled(" Quick Actions ", ClinicTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(ClinicTheme::border());

    let actions_list = Paragraph::new(actions).block(actions_block);
    f.render_widget(actions_list, chunks[1]);
}

fn format_status_item(label: &str, ok: bool) -> Line<'static> {
    let (icon, style) = if ok {
        ("OK", ClinicTheme::success())
    } else {
        ("FAIL", ClinicTheme::danger())
    };

    Line::from(vec![
        Span::styled(format!("  {icon} "), style),
        Span::styled(label.to_string(), ClinicTheme::text()),
    ])
}

fn render_last_screening(f: &mut Frame, area: Rect, assessment: Option<&RiskAssessment>) {
    let block = Block::default()
        .title(Span::styled(" Last Screening ", ClinicTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(ClinicTheme::border());

    let Some(assessment) = assessment else {
        let empty_msg = Paragraph::new(Line::from(vec![Span::styled(
            "No screening yet. Press [N] to start.",
            ClinicTheme::text_muted(),
        )]))
        .block(block);
        f.render_widget(empty_msg, area);
        return;
    };

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(4), Constraint::Min(0)])
        .margin(1)
        .split(inner);

    let summary = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Risk: ", ClinicTheme::text_secondary()),
            Span::styled(
                assessment.risk_level.to_string(),
                ClinicTheme::risk_level(assessment.risk_level),
            ),
            Span::styled("   at ", ClinicTheme::text_secondary()),
            Span::styled(
                assessment.created_at.format("%H:%M:%S UTC").to_string(),
                ClinicTheme::text_muted(),
            ),
        ]),
        Line::from(Span::styled(
            assessment.risk_level.description(),
            ClinicTheme::text_secondary(),
        )),
    ]);
    f.render_widget(summary, chunks[0]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(
                    " Disease Probability ",
                    ClinicTheme::text_secondary(),
                ))
                .borders(Borders::ALL)
                .border_style(ClinicTheme::border()),
        )
        .gauge_style(ClinicTheme::risk_level(assessment.risk_level))
        .percent((assessment.probability * 100.0).clamp(0.0, 100.0) as u16)
        .label(format!("{:.1}%", assessment.probability * 100.0));
    f.render_widget(gauge, chunks[1]);
}
