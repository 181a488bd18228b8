//! Minimal CSV record codec.
//!
//! Handles the grouped transaction files this pipeline reads and writes:
//! quoted fields with embedded commas, doubled quotes inside quoted
//! fields, and CRLF line endings. Fields never span lines; a newline
//! inside quotes is malformed input.

use thiserror::Error;

/// Parse failure with the 1-based line it occurred on.
#[derive(Debug, Error)]
#[error("line {line}: {message}")]
pub struct CsvError {
    pub line: usize,
    pub message: String,
}

/// One parsed record and the line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Parse CSV content into records. Blank lines are skipped.
pub fn parse(content: &str) -> Result<Vec<Record>, CsvError> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut field_was_quoted = false;
    let mut saw_content = false;
    let mut line = 1;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' | '\r' => {
                    return Err(CsvError {
                        line,
                        message: "newline inside quoted field".to_string(),
                    });
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() && !field_was_quoted => {
                in_quotes = true;
                field_was_quoted = true;
                saw_content = true;
            }
            '"' => {
                return Err(CsvError {
                    line,
                    message: "quote inside unquoted field".to_string(),
                });
            }
            ',' => {
                fields.push(std::mem::take(&mut field));
                field_was_quoted = false;
                saw_content = true;
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    // CRLF: let the '\n' arm terminate the record
                } else {
                    field.push('\r');
                    saw_content = true;
                }
            }
            '\n' => {
                if saw_content {
                    fields.push(std::mem::take(&mut field));
                    records.push(Record {
                        line,
                        fields: std::mem::take(&mut fields),
                    });
                }
                field_was_quoted = false;
                saw_content = false;
                line += 1;
            }
            _ if field_was_quoted => {
                return Err(CsvError {
                    line,
                    message: "unexpected character after closing quote".to_string(),
                });
            }
            _ => {
                field.push(c);
                saw_content = true;
            }
        }
    }

    if in_quotes {
        return Err(CsvError {
            line,
            message: "unterminated quoted field".to_string(),
        });
    }
    if saw_content {
        fields.push(field);
        records.push(Record { line, fields });
    }

    Ok(records)
}

/// Quote a field when it contains a comma, quote, or line break.
pub fn escape(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render one record line, fields escaped as needed. No trailing newline.
pub fn format_record<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| escape(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}
