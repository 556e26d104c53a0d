use thiserror::Error;

pub type ParseResult<T> = Result<T, FormatError>;

/// Fatal parse failure. The caller's current document is never touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("Missing '#' separator between header and objects")]
    MissingSeparator,

    #[error("Header has no 'version' directive")]
    MissingVersion,

    #[error("Line {line}: root object must be a Block, found '{snippet}'")]
    InvalidRoot { line: usize, snippet: String },

    #[error("No root Block after the '#' separator")]
    MissingRoot,

    #[error("Line {line}: malformed {field} '{token}'")]
    MalformedField {
        line: usize,
        field: &'static str,
        token: String,
    },

    #[error("Line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },
}

impl FormatError {
    pub fn invalid_root(line: usize, snippet: impl Into<String>) -> Self {
        Self::InvalidRoot {
            line,
            snippet: snippet.into(),
        }
    }

    pub fn malformed(line: usize, field: &'static str, token: impl Into<String>) -> Self {
        Self::MalformedField {
            line,
            field,
            token: token.into(),
        }
    }

    pub fn missing(line: usize, field: &'static str) -> Self {
        Self::MissingField { line, field }
    }

    /// 1-based source line, if the error is tied to one
    pub fn line(&self) -> Option<usize> {
        match self {
            FormatError::InvalidRoot { line, .. }
            | FormatError::MalformedField { line, .. }
            | FormatError::MissingField { line, .. } => Some(*line),
            FormatError::MissingSeparator
            | FormatError::MissingVersion
            | FormatError::MissingRoot => None,
        }
    }
}

/// Non-fatal condition recorded while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// Object keyword not recognised; the line was skipped
    UnknownVariant { line: usize, keyword: String },

    /// Indentation jumped more than one level; clamped to `to`
    DepthClamped { line: usize, from: usize, to: usize },

    /// A second depth-0 Block replaced the previous root
    RootReplaced { line: usize },

    /// Header directive not recognised; ignored
    UnknownDirective { line: usize, directive: String },
}

impl ParseWarning {
    pub fn line(&self) -> usize {
        match self {
            ParseWarning::UnknownVariant { line, .. }
            | ParseWarning::DepthClamped { line, .. }
            | ParseWarning::RootReplaced { line }
            | ParseWarning::UnknownDirective { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseWarning::UnknownVariant { line, keyword } => {
                write!(f, "Line {}: unknown object '{}' skipped", line, keyword)
            }
            ParseWarning::DepthClamped { line, from, to } => {
                write!(f, "Line {}: indentation {} clamped to {}", line, from, to)
            }
            ParseWarning::RootReplaced { line } => {
                write!(f, "Line {}: second root Block replaces the first", line)
            }
            ParseWarning::UnknownDirective { line, directive } => {
                write!(f, "Line {}: unknown header directive '{}' ignored", line, directive)
            }
        }
    }
}

/// Pretty-print a format error with source context using ariadne
#[cfg(feature = "pretty-errors")]
pub fn format_error(source: &str, filename: &str, error: &FormatError) -> String {
    use ariadne::{Color, Label, Report, ReportKind, Source};

    let span = error
        .line()
        .and_then(|line| line_span(source, line))
        .unwrap_or_else(|| source.len().saturating_sub(1)..source.len());

    let label = match error {
        FormatError::MalformedField { field, .. } => format!("expected a valid {}", field),
        FormatError::MissingField { field, .. } => format!("{} is missing here", field),
        FormatError::InvalidRoot { .. } => "only a Block may sit at depth 0".to_string(),
        FormatError::MissingSeparator => "expected a '#' line before objects".to_string(),
        FormatError::MissingVersion => "add 'version 4' to the header".to_string(),
        FormatError::MissingRoot => "expected a root Block".to_string(),
    };

    let mut output = Vec::new();
    let report = Report::build(ReportKind::Error, filename, span.start)
        .with_message(error.to_string())
        .with_label(
            Label::new((filename, span))
                .with_color(Color::Red)
                .with_message(label),
        )
        .finish();

    if report
        .write((filename, Source::from(source)), &mut output)
        .is_err()
    {
        return error.to_string();
    }

    String::from_utf8(output).unwrap_or_else(|_| error.to_string())
}

/// Byte range of a 1-based line (without its newline)
#[cfg(feature = "pretty-errors")]
fn line_span(source: &str, line: usize) -> Option<std::ops::Range<usize>> {
    let mut start = 0;
    for (index, text) in source.split('\n').enumerate() {
        if index + 1 == line {
            return Some(start..start + text.len());
        }
        start += text.len() + 1;
    }
    None
}
