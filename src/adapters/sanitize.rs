//! Log sanitization for patient-identifying text.
//!
//! Screening runs locally, but log files can still travel (bug reports,
//! support bundles). This writer scrubs identifier-shaped substrings from
//! every log line before it reaches disk. Clinical measurements themselves
//! are never logged; this is a fallback for free-text that sneaks into
//! error messages.

use std::io;
use std::sync::OnceLock;

use regex::Regex;
use tracing_subscriber::fmt::MakeWriter;

struct Rule {
    regex: Regex,
    replacement: &'static str,
}

static RULES: OnceLock<Vec<Rule>> = OnceLock::new();

fn rules() -> &'static [Rule] {
    RULES.get_or_init(|| {
        let sources: [(&str, &str); 4] = [
            // SSN-like patterns (xxx-xx-xxxx)
            (r"\b\d{3}-\d{2}-\d{4}\b", "[REDACTED-SSN]"),
            // Medical record numbers in common formats
            (r"\bMRN[:\s]?\d{6,10}\b", "[REDACTED-MRN]"),
            // Email addresses
            (
                r"(?i)\b[a-z0-9][a-z0-9._%+-]*@[a-z0-9][a-z0-9.-]*\.[a-z]{2,}\b",
                "[REDACTED-EMAIL]",
            ),
            // Phone numbers
            (
                r"\b(?:\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}\b",
                "[REDACTED-PHONE]",
            ),
        ];

        sources
            .iter()
            .map(|(pattern, replacement)| Rule {
                regex: Regex::new(pattern).expect("sanitizer pattern must compile"),
                replacement,
            })
            .collect()
    })
}

/// Scrub identifier-shaped substrings from `input`.
#[must_use]
pub fn sanitize(input: &str) -> String {
    let mut out = input.to_string();
    for rule in rules() {
        if rule.regex.is_match(&out) {
            out = rule.regex.replace_all(&out, rule.replacement).into_owned();
        }
    }
    out
}

/// `MakeWriter` wrapper that sanitizes every buffer before delegating.
pub struct SanitizingMakeWriter<M> {
    inner: M,
}

impl<M> SanitizingMakeWriter<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<'a, M> MakeWriter<'a> for SanitizingMakeWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = SanitizingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        SanitizingWriter {
            inner: self.inner.make_writer(),
        }
    }
}

/// Writer that sanitizes each chunk it receives.
pub struct SanitizingWriter<W: io::Write> {
    inner: W,
}

impl<W: io::Write> io::Write for SanitizingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        let clean = sanitize(&text);
        self.inner.write_all(clean.as_bytes())?;
        // Report the original length so tracing never re-sends a partial
        // buffer after the replacement changed its size.
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_ssn_patterns() {
        assert_eq!(
            sanitize("patient 123-45-6789 screened"),
            "patient [REDACTED-SSN] screened"
        );
    }

    #[test]
    fn redacts_mrn_patterns() {
        assert_eq!(sanitize("chart MRN:12345678"), "chart [REDACTED-MRN]");
    }

    #[test]
    fn redacts_email_addresses() {
        assert_eq!(
            sanitize("contact pat.doe@clinic.example.org today"),
            "contact [REDACTED-EMAIL] today"
        );
    }

    #[test]
    fn redacts_phone_numbers() {
        assert_eq!(sanitize("call 555-867-5309"), "call [REDACTED-PHONE]");
    }

    #[test]
    fn leaves_clinical_text_alone() {
        let line = "screening complete: probability=0.82, risk=HIGH";
        assert_eq!(sanitize(line), line);
    }

    #[test]
    fn writer_sanitizes_in_transit() {
        use std::io::Write;

        let mut sink: Vec<u8> = Vec::new();
        {
            let mut writer = SanitizingWriter { inner: &mut sink };
            writer.write_all(b"id 987-65-4321 done").expect("write");
        }
        assert_eq!(String::from_utf8_lossy(&sink), "id [REDACTED-SSN] done");
    }
}
