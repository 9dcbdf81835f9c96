//! Response checks.
//!
//! Assertions decide whether a decoded response body has the expected shape.
//! Observations only produce informational notes and never change a verdict.

use std::fmt;

use serde_json::Value;

/// A shape assertion run against a decoded JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assertion {
    /// Object field equals the expected JSON value.
    FieldEquals {
        /// Field name at the top level of the object.
        field: String,
        /// Expected value.
        expected: Value,
    },
    /// Every listed field is present and not null; string fields must not be empty.
    FieldsPresent {
        /// Required field names.
        fields: Vec<String>,
    },
    /// Field is a string that is not empty once whitespace is trimmed.
    NonEmptyText {
        /// Field name.
        field: String,
    },
    /// Body is a JSON array.
    IsArray,
}

impl Assertion {
    /// Shorthand for [`Assertion::FieldEquals`].
    #[must_use]
    pub fn field_equals(field: impl Into<String>, expected: impl Into<Value>) -> Self {
        Self::FieldEquals {
            field: field.into(),
            expected: expected.into(),
        }
    }

    /// Shorthand for [`Assertion::FieldsPresent`].
    #[must_use]
    pub fn fields_present(fields: &[&str]) -> Self {
        Self::FieldsPresent {
            fields: fields.iter().map(ToString::to_string).collect(),
        }
    }

    /// Shorthand for [`Assertion::NonEmptyText`].
    #[must_use]
    pub fn non_empty_text(field: impl Into<String>) -> Self {
        Self::NonEmptyText {
            field: field.into(),
        }
    }

    /// Runs this assertion against a decoded body.
    ///
    /// # Errors
    ///
    /// Returns the diagnostic message when the body does not have the
    /// asserted shape.
    pub fn check(&self, body: &Value) -> Result<(), String> {
        match self {
            Self::FieldEquals { field, expected } => match body.get(field) {
                Some(actual) if actual == expected => Ok(()),
                Some(_) => Err(format!("Expected {field}: {expected}, got: {body}")),
                None => Err(format!("Missing field '{field}' in response: {body}")),
            },
            Self::FieldsPresent { fields } => {
                let missing: Vec<&str> = fields
                    .iter()
                    .filter(|field| !is_present(body.get(field.as_str())))
                    .map(String::as_str)
                    .collect();
                if missing.is_empty() {
                    Ok(())
                } else {
                    Err(format!(
                        "Missing required fields [{}] in response: {body}",
                        missing.join(", ")
                    ))
                }
            }
            Self::NonEmptyText { field } => match body.get(field) {
                Some(Value::String(text)) if !text.trim().is_empty() => Ok(()),
                _ => Err(format!("Invalid response format: {body}")),
            },
            Self::IsArray => match body {
                Value::Array(_) => Ok(()),
                other => Err(format!("Expected list, got: {}", json_type_name(other))),
            },
        }
    }
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Returns the JSON type name of a value, for diagnostics.
#[must_use]
pub const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// An informational look at a response body. Never affects pass/fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// Report how many entries an array body holds.
    Length {
        /// Plural noun for the entries, e.g. "status checks".
        label: String,
    },
    /// Count array entries whose `field` equals `value`.
    CountMatching {
        /// Field compared on each entry.
        field: String,
        /// Value the field must equal.
        value: Value,
    },
    /// Echo the start of a text field.
    Snippet {
        /// Field holding the text.
        field: String,
        /// Maximum number of characters echoed.
        max_chars: usize,
    },
}

impl Observation {
    /// Inspect a decoded body. Returns `None` when the body does not have the
    /// shape this observation looks at.
    #[must_use]
    pub fn observe(&self, body: &Value) -> Option<Note> {
        match self {
            Self::Length { label } => body
                .as_array()
                .map(|items| Note::info(format!("Retrieved {} {label}", items.len()))),
            Self::CountMatching { field, value } => {
                let items = body.as_array()?;
                let count = items
                    .iter()
                    .filter(|item| item.get(field) == Some(value))
                    .count();
                Some(if count > 0 {
                    Note::info(format!("Found {count} entries with {field} == {value}"))
                } else {
                    Note::warn(format!(
                        "No entries with {field} == {value} found, the store may have been cleared"
                    ))
                })
            }
            Self::Snippet { field, max_chars } => {
                body.get(field).and_then(Value::as_str).map(|text| {
                    Note::info(format!("Generated response: {}...", snippet(text, *max_chars)))
                })
            }
        }
    }
}

/// Returns at most the first `max_chars` characters of `text`.
#[must_use]
pub fn snippet(text: &str, max_chars: usize) -> &str {
    text.char_indices()
        .nth(max_chars)
        .map_or(text, |(idx, _)| &text[..idx])
}

/// Severity of a [`Note`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteLevel {
    /// Purely informational.
    Info,
    /// Worth a look, but not a failure.
    Warn,
}

/// An informational line attached to a test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Severity.
    pub level: NoteLevel,
    /// Message text.
    pub message: String,
}

impl Note {
    /// Create an informational note.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoteLevel::Info,
            message: message.into(),
        }
    }

    /// Create a warning note.
    #[must_use]
    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            level: NoteLevel::Warn,
            message: message.into(),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
