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

//! What the page shows: a label line and a content line.

use crate::types::card::Card;
use crate::types::card::Face;

pub const EMPTY_LABEL: &str = "No Flashcards Found";
pub const EMPTY_CONTENT: &str = "Use the below tools to add new cards!";
pub const UPLOAD_FAILED_LABEL: &str = "Upload Failed";
pub const UPLOAD_FAILED_CONTENT: &str =
    "Please try uploading again or use the Add Flashcard tool to add cards";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardView {
    /// The deck has no cards.
    Empty,
    /// The current card, showing `face`.
    Showing { face: Face, text: String },
    /// The last import was rejected. The deck itself is unchanged.
    UploadFailed,
}

impl CardView {
    pub fn of(card: Option<&Card>) -> Self {
        match card {
            Some(card) => CardView::Showing {
                face: card.face(),
                text: card.visible_text().to_string(),
            },
            None => CardView::Empty,
        }
    }

    pub fn label(&self) -> String {
        match self {
            CardView::Empty => EMPTY_LABEL.to_string(),
            CardView::Showing { face, .. } => face.to_string(),
            CardView::UploadFailed => UPLOAD_FAILED_LABEL.to_string(),
        }
    }

    pub fn content(&self) -> &str {
        match self {
            CardView::Empty => EMPTY_CONTENT,
            CardView::Showing { text, .. } => text,
            CardView::UploadFailed => UPLOAD_FAILED_CONTENT,
        }
    }
}
