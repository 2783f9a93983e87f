// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

#[derive(Debug, PartialEq)]
pub struct ErrorReport {
    message: String,
}

impl ErrorReport {
    pub fn new(msg: impl Into<String>) -> Self {
        ErrorReport {
            message: msg.into(),
        }
    }
}

impl From<std::io::Error> for ErrorReport {
    fn from(value: std::io::Error) -> Self {
        ErrorReport {
            message: format!("I/O error: {value}"),
        }
    }
}

impl From<serde_json::Error> for ErrorReport {
    fn from(value: serde_json::Error) -> Self {
        ErrorReport {
            message: format!("JSON error: {value}"),
        }
    }
}

impl From<ImportError> for ErrorReport {
    fn from(value: ImportError) -> Self {
        ErrorReport {
            message: format!("import error: {value}"),
        }
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

impl Error for ErrorReport {}

pub type Fallible<T> = Result<T, ErrorReport>;

pub fn fail<T>(msg: impl Into<String>) -> Fallible<T> {
    Err(ErrorReport {
        message: msg.into(),
    })
}

/// Why an imported deck was rejected. Either way the deck is left as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The text is not JSON, or not an array of card objects.
    Parse { message: String },
    /// A record lacks one of its two faces.
    Validation { index: usize, field: &'static str },
}

impl ImportError {
    pub fn parse(message: impl Into<String>) -> Self {
        ImportError::Parse {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(value: serde_json::Error) -> Self {
        ImportError::parse(value.to_string())
    }
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Parse { message } => write!(f, "malformed deck: {message}"),
            ImportError::Validation { index, field } => {
                write!(f, "card {} is missing its `{field}` field", index + 1)
            }
        }
    }
}

impl Error for ImportError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display() {
        let err: Fallible<()> = fail("no deck file given.");
        assert_eq!(err.unwrap_err().to_string(), "error: no deck file given.");
    }

    #[test]
    fn test_validation_display_is_one_based() {
        let err = ImportError::Validation {
            index: 1,
            field: "back",
        };
        assert_eq!(err.to_string(), "card 2 is missing its `back` field");
        let report: ErrorReport = err.into();
        assert_eq!(
            report.to_string(),
            "error: import error: card 2 is missing its `back` field"
        );
    }
}
