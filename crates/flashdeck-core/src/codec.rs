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

//! The export format: a JSON array of `{"isFlipped", "front", "back"}`
//! objects, in deck order.

use crate::deck::Deck;
use crate::error::Fallible;
use crate::error::ImportError;
use crate::types::record::CardRecord;
use crate::view::CardView;

pub const EXPORT_FILE_NAME: &str = "Flashcards.txt";
pub const EXPORT_MIME_TYPE: &str = "text/plain;charset=utf-8";

/// Read the candidate records out of an exported deck.
///
/// Fails if the text is not JSON, the top level is not an array, or an
/// element is not an object. Whether each record has both faces is checked
/// later, by [`Deck::replace_all`].
pub fn parse_records(text: &str) -> Result<Vec<CardRecord>, ImportError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_array() {
        return Err(ImportError::parse("expected a JSON array of cards"));
    }
    let records: Vec<CardRecord> = serde_json::from_value(value)?;
    Ok(records)
}

impl Deck {
    /// Serialize every card, flip state included, in deck order.
    pub fn export_json(&self) -> Fallible<String> {
        Ok(serde_json::to_string(self.cards())?)
    }

    /// Replace the deck with the one in `text`.
    ///
    /// On failure the deck is untouched and listeners are shown the
    /// upload-failed view instead of the current card.
    pub fn import_json(&mut self, text: &str) -> Result<usize, ImportError> {
        let result = parse_records(text).and_then(|records| self.replace_all(records));
        if result.is_err() {
            self.broadcast(&CardView::UploadFailed);
        }
        result
    }
}
