//! Markup helpers shared by the normalizers: confidence tiers, timestamps
//! and text escaping.

/// Scores below this are rendered as `confidence-poor`.
pub const POOR_CONFIDENCE_THRESHOLD: f64 = 0.2;
/// Scores below this (and not poor) are rendered as `confidence-low`.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.4;

/// Visual bucket for a per-word confidence score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    Poor,
    Low,
    Plain,
}

impl ConfidenceTier {
    pub fn from_score(score: f64) -> Self {
        if score < POOR_CONFIDENCE_THRESHOLD {
            ConfidenceTier::Poor
        } else if score < LOW_CONFIDENCE_THRESHOLD {
            ConfidenceTier::Low
        } else {
            ConfidenceTier::Plain
        }
    }

    pub fn class_name(self) -> Option<&'static str> {
        match self {
            ConfidenceTier::Poor => Some("confidence-poor"),
            ConfidenceTier::Low => Some("confidence-low"),
            ConfidenceTier::Plain => None,
        }
    }

    /// Escapes `word` and wraps it in the tier's span, if the tier has one.
    pub fn wrap(self, word: &str) -> String {
        let word = escape_text(word);
        match self.class_name() {
            Some(class) => format!(r#"<span class="{class}">{word}</span>"#),
            None => word,
        }
    }
}

pub fn render_word(word: &str, confidence: f64) -> String {
    ConfidenceTier::from_score(confidence).wrap(word)
}

/// Formats a seconds offset as `hh:mm:ss`. Ties round to even; the hours
/// field grows past two digits instead of wrapping.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0).round_ties_even() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

pub fn paragraph(text: &str) -> String {
    format!("<p>{}</p>", escape_text(text))
}

pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
