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

use serde::Deserialize;
use serde::Deserializer;
use serde_json::Value;

use crate::error::ImportError;
use crate::types::card::Card;

/// A candidate card read from an imported deck, before it is checked.
///
/// Only `front` and `back` are read; anything else in the object, including
/// `isFlipped`, is ignored. A face is missing only when its key is absent:
/// `null` and non-string values are present.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CardRecord {
    #[serde(default, deserialize_with = "present")]
    pub front: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub back: Option<Value>,
}

/// Keeps `null` as `Some(Value::Null)`. Only `#[serde(default)]` yields `None`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl CardRecord {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: Some(Value::String(front.into())),
            back: Some(Value::String(back.into())),
        }
    }

    /// Build the card this record describes. `index` is the record's
    /// position in the import, for error reporting.
    ///
    /// Empty faces are accepted here: only presence is checked.
    pub fn into_card(self, index: usize) -> Result<Card, ImportError> {
        let front = self.front.ok_or(ImportError::Validation {
            index,
            field: "front",
        })?;
        let back = self.back.ok_or(ImportError::Validation {
            index,
            field: "back",
        })?;
        Ok(Card::new(face_text(front), face_text(back)))
    }
}

/// The text a face value shows as. `null` shows nothing.
fn face_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_complete_record() -> Result<(), ImportError> {
        let card = CardRecord::new("a", "b").into_card(0)?;
        assert_eq!(card.front(), "a");
        assert_eq!(card.back(), "b");
        assert!(!card.is_flipped());
        Ok(())
    }

    #[test]
    fn test_empty_faces_are_present() -> Result<(), ImportError> {
        let card = CardRecord::new("", "").into_card(0)?;
        assert_eq!(card.front(), "");
        Ok(())
    }

    #[test]
    fn test_non_string_faces_are_present() -> Result<(), ImportError> {
        let record = CardRecord {
            front: Some(Value::Null),
            back: Some(json!(5)),
        };
        let card = record.into_card(0)?;
        assert_eq!(card.front(), "");
        assert_eq!(card.back(), "5");

        let record = CardRecord {
            front: Some(json!(true)),
            back: Some(json!(2.5)),
        };
        let card = record.into_card(0)?;
        assert_eq!(card.front(), "true");
        assert_eq!(card.back(), "2.5");
        Ok(())
    }

    #[test]
    fn test_missing_front() {
        let record = CardRecord {
            front: None,
            back: Some(json!("b")),
        };
        assert_eq!(
            record.into_card(3),
            Err(ImportError::Validation {
                index: 3,
                field: "front"
            })
        );
    }

    #[test]
    fn test_missing_back() {
        let record = CardRecord {
            front: Some(json!("a")),
            back: None,
        };
        assert_eq!(
            record.into_card(0),
            Err(ImportError::Validation {
                index: 0,
                field: "back"
            })
        );
    }
}
