//! Statistics view: Descriptive charts over the reference dataset.
//!
//! Terminal rendition of the original report charts: class distribution,
//! age distribution by disease status, feature correlation heatmap, and
//! the outcome of the current session's screening.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::application::DatasetSummary;
use crate::domain::RiskAssessment;
use crate::tui::styles::ClinicTheme;

/// Statistics screen state
#[derive(Default)]
pub struct StatisticsState {
    pub summary: Option<DatasetSummary>,
    pub error: Option<String>,
}

/// Render the statistics view
pub fn render_statistics(
    f: &mut Frame,
    area: Rect,
    state: &StatisticsState,
    assessment: Option<&RiskAssessment>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_statistics_header(f, chunks[0]);

    if let Some(err) = &state.error {
        render_statistics_error(f, chunks[1], err);
    } else if let Some(summary) = &state.summary {
        render_statistics_content(f, chunks[1], summary, assessment);
    } else {
        render_statistics_empty(f, chunks[1]);
    }

    render_statistics_footer(f, chunks[2]);
}

fn render_statistics_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicTheme::text()),
        Span::styled("Statistics", ClinicTheme::title()),
        Span::styled(" │ Reference Dataset", ClinicTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_statistics_empty(f: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Loading statistics...",
            ClinicTheme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(content, area);
}

fn render_statistics_error(f: &mut Frame, area: Rect, message: &str) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "! Cannot Load Statistics",
            ClinicTheme::danger(),
        )),
        Line::from(""),
        Line::from(Span::styled(message, ClinicTheme::text())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(ClinicTheme::danger()),
    );

    f.render_widget(content, area);
}

fn render_statistics_content(
    f: &mut Frame,
    area: Rect,
    summary: &DatasetSummary,
    assessment: Option<&RiskAssessment>,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[1]);

    render_class_distribution(f, top[0], summary);
    render_age_distribution(f, top[1], summary);
    render_correlation_heatmap(f, bottom[0], summary);
    render_outcome(f, bottom[1], assessment);
}

fn render_class_distribution(f: &mut Frame, area: Rect, summary: &DatasetSummary) {
    let data = [
        ("No disease", summary.negative_count),
        ("Disease", summary.positive_count),
    ];

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" Disease Distribution ({} records) ", summary.total_rows),
                    ClinicTheme::subtitle(),
                ))
                .borders(Borders::ALL)
                .border_style(ClinicTheme::border()),
        )
        .data(&data)
        .bar_width(10)
        .bar_gap(3)
        .bar_style(ClinicTheme::info())
        .value_style(ClinicTheme::text())
        .label_style(ClinicTheme::text_secondary());

    f.render_widget(chart, area);
}

fn render_age_distribution(f: &mut Frame, area: Rect, summary: &DatasetSummary) {
    let block = Block::default()
        .title(Span::styled(
            " Age Distribution by Status ",
            ClinicTheme::subtitle(),
        ))
        .borders(Borders::ALL)
        .border_style(ClinicTheme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    if summary.age_bins.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Dataset has no age column",
            ClinicTheme::text_muted(),
        )))
        .alignment(Alignment::Center);
        f.render_widget(empty, inner);
        return;
    }

    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    // Bin labels double as the x axis; one bar per bin.
    let labels: Vec<String> = summary
        .age_bins
        .iter()
        .map(|bin| format!("{:.0}", bin.lo))
        .collect();

    let negative: Vec<(&str, u64)> = labels
        .iter()
        .zip(&summary.age_bins)
        .map(|(label, bin)| (label.as_str(), bin.negative))
        .collect();
    let positive: Vec<(&str, u64)> = labels
        .iter()
        .zip(&summary.age_bins)
        .map(|(label, bin)| (label.as_str(), bin.positive))
        .collect();

    let healthy = BarChart::default()
        .block(Block::default().title(Span::styled(" no disease ", ClinicTheme::success())))
        .data(negative.as_slice())
        .bar_width(3)
        .bar_gap(1)
        .bar_style(ClinicTheme::success())
        .value_style(ClinicTheme::text_muted())
        .label_style(ClinicTheme::text_muted());
    f.render_widget(healthy, halves[0]);

    let diseased = BarChart::default()
        .block(Block::default().title(Span::styled(" disease ", ClinicTheme::danger())))
        .data(positive.as_slice())
        .bar_width(3)
        .bar_gap(1)
        .bar_style(ClinicTheme::danger())
        .value_style(ClinicTheme::text_muted())
        .label_style(ClinicTheme::text_muted());
    f.render_widget(diseased, halves[1]);
}

fn render_correlation_heatmap(f: &mut Frame, area: Rect, summary: &DatasetSummary) {
    let block = Block::default()
        .title(Span::styled(
            " Feature Correlation ",
            ClinicTheme::subtitle(),
        ))
        .borders(Borders::ALL)
        .border_style(ClinicTheme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let n = summary.columns.len();
    if n == 0 || summary.correlations.len() != n {
        return;
    }

    // Truncate column names to keep the grid compact.
    let short = |name: &str| -> String { name.chars().take(4).collect() };
    let cell_width = 5usize;

    let mut lines: Vec<Line> = Vec::with_capacity(n + 1);

    let mut header_spans = vec![Span::styled(
        format!("{:<6}", ""),
        ClinicTheme::text_muted(),
    )];
    for name in &summary.columns {
        header_spans.push(Span::styled(
            format!("{:^cell_width$}", short(name)),
            ClinicTheme::text_muted(),
        ));
    }
    lines.push(Line::from(header_spans));

    for (i, name) in summary.columns.iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!("{:<6}", short(name)),
            ClinicTheme::text_muted(),
        )];
        for j in 0..n {
            let r = summary.correlations[i][j];
            spans.push(Span::styled(
                format!("{r:^+cell_width$.1}"),
                ratatui::style::Style::default()
                    .fg(ClinicTheme::TEXT)
                    .bg(ClinicTheme::correlation_cell(r)),
            ));
        }
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines);
    f.render_widget(grid, inner);
}

fn render_outcome(f: &mut Frame, area: Rect, assessment: Option<&RiskAssessment>) {
    let block = Block::default()
        .title(Span::styled(" This Screening ", ClinicTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(ClinicTheme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(assessment) = assessment else {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No screening this session",
            ClinicTheme::text_muted(),
        )))
        .alignment(Alignment::Center);
        f.render_widget(empty, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let verdict = Paragraph::new(Line::from(vec![
        Span::styled("Outcome: ", ClinicTheme::text_secondary()),
        Span::styled(
            if assessment.prediction == 1 {
                "disease indicated"
            } else {
                "no disease indicated"
            },
            ClinicTheme::risk_level(assessment.risk_level),
        ),
    ]));
    f.render_widget(verdict, chunks[0]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(" Probability ", ClinicTheme::text_secondary()))
                .borders(Borders::ALL)
                .border_style(ClinicTheme::border()),
        )
        .gauge_style(ClinicTheme::risk_level(assessment.risk_level))
        .percent((assessment.probability * 100.0).clamp(0.0, 100.0) as u16)
        .label(format!("{:.1}%", assessment.probability * 100.0));
    f.render_widget(gauge, chunks[1]);
}

fn render_statistics_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("[R] ", ClinicTheme::key_hint()),
        Span::styled("Reload dataset ", ClinicTheme::key_desc()),
        Span::styled("[Esc] ", ClinicTheme::key_hint()),
        Span::styled("Back", ClinicTheme::key_desc()),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(footer, area);
}
