//! Patient measurement entry form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use zeroize::Zeroize;

use crate::domain::{
    ChestPainType, ClinicalRecord, RestingEcg, Sex, StSlope, Thalassemia,
};
use crate::tui::styles::ClinicTheme;

/// How a field's text is interpreted on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Integer,
    Float,
    /// Categorical code; converted through the matching enum on submit
    Code,
}

/// Form field definition
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub hint: &'static str,
    pub value: String,
    pub min: f64,
    pub max: f64,
    kind: FieldKind,
}

impl FormField {
    fn new(label: &'static str, hint: &'static str, min: f64, max: f64, kind: FieldKind) -> Self {
        Self {
            label,
            hint,
            value: String::new(),
            min,
            max,
            kind,
        }
    }

    /// Parse and range-check this field's raw text.
    fn parse(&self) -> Result<f64, String> {
        let value: f64 = self
            .value
            .trim()
            .parse()
            .map_err(|_| format!("{}: Invalid number", self.label))?;

        if self.kind != FieldKind::Float && value.fract() != 0.0 {
            return Err(format!("{}: Must be a whole number", self.label));
        }

        if value < self.min || value > self.max {
            return Err(format!(
                "{}: Value must be between {} and {}",
                self.label, self.min, self.max
            ));
        }

        Ok(value)
    }
}

// Field positions, in entry order.
const AGE: usize = 0;
const SEX: usize = 1;
const CHEST_PAIN: usize = 2;
const RESTING_BP: usize = 3;
const CHOLESTEROL: usize = 4;
const BLOOD_SUGAR: usize = 5;
const RESTING_ECG: usize = 6;
const MAX_HEART_RATE: usize = 7;
const ST_SLOPE: usize = 8;
const EXERCISE_ANGINA: usize = 9;
const THALASSEMIA: usize = 10;
const ST_DEPRESSION: usize = 11;
const MAJOR_VESSELS: usize = 12;

/// Patient form state
pub struct PatientFormState {
    pub fields: Vec<FormField>,
    pub selected_field: usize,
    pub error_message: Option<String>,
}

impl Default for PatientFormState {
    fn default() -> Self {
        Self {
            fields: vec![
                FormField::new("Age", "years (0-200)", 0.0, 200.0, FieldKind::Integer),
                FormField::new("Sex", "0=female, 1=male", 0.0, 1.0, FieldKind::Code),
                FormField::new(
                    "Chest Pain Type",
                    "1=typical, 2=atypical, 3=non-anginal, 4=asymptomatic",
                    1.0,
                    4.0,
                    FieldKind::Code,
                ),
                FormField::new(
                    "Resting BP",
                    "mm Hg (80-200)",
                    80.0,
                    200.0,
                    FieldKind::Integer,
                ),
                FormField::new(
                    "Cholesterol",
                    "mg/dl (100-600)",
                    100.0,
                    600.0,
                    FieldKind::Integer,
                ),
                FormField::new(
                    "Fasting Blood Sugar",
                    "mg/dl (50-400)",
                    50.0,
                    400.0,
                    FieldKind::Integer,
                ),
                FormField::new(
                    "Resting ECG",
                    "0=normal, 1=ST-T abnormality, 2=LV hypertrophy",
                    0.0,
                    2.0,
                    FieldKind::Code,
                ),
                FormField::new(
                    "Max Heart Rate",
                    "bpm (70-220)",
                    70.0,
                    220.0,
                    FieldKind::Integer,
                ),
                FormField::new(
                    "ST Slope",
                    "1=upsloping, 2=flat, 3=downsloping",
                    1.0,
                    3.0,
                    FieldKind::Code,
                ),
                FormField::new(
                    "Exercise Angina",
                    "0=no, 1=yes",
                    0.0,
                    1.0,
                    FieldKind::Code,
                ),
                FormField::new(
                    "Thalassemia",
                    "3=normal, 6=fixed defect, 7=reversible defect",
                    3.0,
                    7.0,
                    FieldKind::Code,
                ),
                FormField::new(
                    "ST Depression",
                    "oldpeak (0.0-7.0)",
                    0.0,
                    7.0,
                    FieldKind::Float,
                ),
                FormField::new(
                    "Major Vessels",
                    "vessels (0-3)",
                    0.0,
                    3.0,
                    FieldKind::Integer,
                ),
            ],
            selected_field: 0,
            error_message: None,
        }
    }
}

impl PatientFormState {
    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Add a character to the current field
    pub fn input_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' {
            self.fields[self.selected_field].value.push(c);
            self.error_message = None;
        }
    }

    /// Delete the last character
    pub fn delete_char(&mut self) {
        self.fields[self.selected_field].value.pop();
    }

    /// Clear the current field
    pub fn clear_field(&mut self) {
        self.fields[self.selected_field].value.clear();
    }

    /// Wipe all field buffers from memory and reset selection.
    ///
    /// Called after a screening starts so raw measurements do not linger in
    /// the UI state.
    pub fn clear_sensitive(&mut self) {
        for field in self.fields.iter_mut() {
            field.value.zeroize();
        }
        self.error_message = None;
        self.selected_field = 0;
    }

    /// Parse the form into a typed record.
    ///
    /// Range violations and out-of-domain categorical codes (e.g. a
    /// thalassemia code of 4) are both rejected here, before anything
    /// reaches the encoder.
    ///
    /// # Errors
    /// Returns the first problem found, as a display-ready message.
    pub fn to_clinical_record(&self) -> Result<ClinicalRecord, String> {
        let mut values = [0.0f64; 13];
        for (i, field) in self.fields.iter().enumerate() {
            values[i] = field.parse()?;
        }

        let code = |idx: usize| values[idx] as u8;

        Ok(ClinicalRecord {
            age: values[AGE] as u16,
            sex: Sex::try_from(code(SEX)).map_err(|e| e.to_string())?,
            chest_pain: ChestPainType::try_from(code(CHEST_PAIN)).map_err(|e| e.to_string())?,
            resting_bp: values[RESTING_BP] as u16,
            cholesterol: values[CHOLESTEROL] as u16,
            fasting_blood_sugar: values[BLOOD_SUGAR] as u16,
            resting_ecg: RestingEcg::try_from(code(RESTING_ECG)).map_err(|e| e.to_string())?,
            max_heart_rate: values[MAX_HEART_RATE] as u16,
            st_slope: StSlope::try_from(code(ST_SLOPE)).map_err(|e| e.to_string())?,
            exercise_angina: values[EXERCISE_ANGINA] == 1.0,
            thalassemia: Thalassemia::try_from(code(THALASSEMIA)).map_err(|e| e.to_string())?,
            st_depression: values[ST_DEPRESSION],
            major_vessels: values[MAJOR_VESSELS] as u8,
        })
    }

    /// Load sample data (typical symptomatic patient).
    pub fn load_sample_data(&mut self) {
        let sample = [
            "63",  // age
            "1",   // sex (male)
            "4",   // chest pain (asymptomatic)
            "145", // resting bp
            "233", // cholesterol
            "150", // fasting blood sugar
            "2",   // resting ecg (LV hypertrophy)
            "150", // max heart rate
            "3",   // st slope (downsloping)
            "0",   // exercise angina (no)
            "6",   // thalassemia (fixed defect)
            "2.3", // st depression
            "0",   // major vessels
        ];
        for (i, val) in sample.iter().enumerate() {
            self.fields[i].value = (*val).to_string();
        }
    }
}

/// Render the patient data entry form
pub fn render_form(f: &mut Frame, area: Rect, state: &PatientFormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_form_header(f, chunks[0]);
    render_form_fields(f, chunks[1], state);
    render_form_footer(f, chunks[2], state);
}

fn render_form_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicTheme::text()),
        Span::styled("Patient Measurements", ClinicTheme::title()),
        Span::styled(" │ Cleveland Feature Set", ClinicTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &PatientFormState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = state.fields.len().div_ceil(2);

    render_field_column(f, columns[0], &state.fields[..mid], 0, state.selected_field);
    render_field_column(
        f,
        columns[1],
        &state.fields[mid..],
        mid,
        state.selected_field,
    );
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    fields: &[FormField],
    offset: usize,
    selected: usize,
) {
    let field_height = 3;
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(field_height))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_selected = offset + i == selected;
        let border_style = if is_selected {
            ClinicTheme::border_focused()
        } else {
            ClinicTheme::border()
        };

        let title_style = if is_selected {
            ClinicTheme::focused()
        } else {
            ClinicTheme::text_secondary()
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let value_display = if field.value.is_empty() {
            Span::styled(field.hint, ClinicTheme::text_muted())
        } else {
            Span::styled(&field.value, ClinicTheme::text())
        };

        let content = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            value_display,
            if is_selected {
                Span::styled("▌", ClinicTheme::focused())
            } else {
                Span::raw("")
            },
        ]))
        .block(block);

        f.render_widget(content, chunks[i]);
    }
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &PatientFormState) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", ClinicTheme::danger()),
            Span::styled(err.clone(), ClinicTheme::danger()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", ClinicTheme::key_hint()),
            Span::styled("Navigate ", ClinicTheme::key_desc()),
            Span::styled("[Enter] ", ClinicTheme::key_hint()),
            Span::styled("Screen ", ClinicTheme::key_desc()),
            Span::styled("[S] ", ClinicTheme::key_hint()),
            Span::styled("Sample Data ", ClinicTheme::key_desc()),
            Span::styled("[Esc] ", ClinicTheme::key_hint()),
            Span::styled("Cancel", ClinicTheme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> PatientFormState {
        let mut state = PatientFormState::default();
        state.load_sample_data();
        state
    }

    #[test]
    fn sample_data_parses_into_a_record() {
        let record = filled_form().to_clinical_record().expect("should parse");

        assert_eq!(record.age, 63);
        assert_eq!(record.sex, Sex::Male);
        assert_eq!(record.chest_pain, ChestPainType::Asymptomatic);
        assert_eq!(record.fasting_blood_sugar, 150);
        assert_eq!(record.thalassemia, Thalassemia::FixedDefect);
        assert!(!record.exercise_angina);
        assert!((record.st_depression - 2.3).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_field_is_reported_by_label() {
        let mut state = filled_form();
        state.fields[CHOLESTEROL].value.clear();

        let err = state.to_clinical_record().expect_err("must fail");
        assert!(err.contains("Cholesterol"));
    }

    #[test]
    fn out_of_range_field_is_rejected() {
        let mut state = filled_form();
        state.fields[RESTING_BP].value = "300".to_string();

        let err = state.to_clinical_record().expect_err("must fail");
        assert!(err.contains("between 80 and 200"));
    }

    #[test]
    fn out_of_domain_categorical_code_is_rejected() {
        // 4 passes the min/max band for thalassemia (3-7) but is not a
        // valid code; the enum boundary must catch it.
        let mut state = filled_form();
        state.fields[THALASSEMIA].value = "4".to_string();

        let err = state.to_clinical_record().expect_err("must fail");
        assert!(err.contains("thalassemia code 4"));
    }

    #[test]
    fn fractional_code_is_rejected() {
        let mut state = filled_form();
        state.fields[CHEST_PAIN].value = "2.5".to_string();

        let err = state.to_clinical_record().expect_err("must fail");
        assert!(err.contains("whole number"));
    }

    #[test]
    fn clearing_sensitive_data_wipes_every_field() {
        let mut state = filled_form();
        state.clear_sensitive();

        assert!(state.fields.iter().all(|field| field.value.is_empty()));
        assert_eq!(state.selected_field, 0);
    }

    #[test]
    fn input_rejects_non_numeric_characters() {
        let mut state = PatientFormState::default();
        state.input_char('a');
        state.input_char('-');
        state.input_char('4');
        state.input_char('2');

        assert_eq!(state.fields[0].value, "42");
    }
}
