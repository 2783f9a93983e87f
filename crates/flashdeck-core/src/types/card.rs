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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

/// Which side of a card is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

impl Display for Face {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Front => write!(f, "Front"),
            Face::Back => write!(f, "Back"),
        }
    }
}

/// A two-sided study card.
///
/// Cards have no identity beyond their position in a deck: two cards with
/// the same text are still two cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    is_flipped: bool,
    front: String,
    back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            is_flipped: false,
            front: front.into(),
            back: back.into(),
        }
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    pub fn face(&self) -> Face {
        if self.is_flipped {
            Face::Back
        } else {
            Face::Front
        }
    }

    /// The text on the side that is currently showing.
    pub fn visible_text(&self) -> &str {
        match self.face() {
            Face::Front => &self.front,
            Face::Back => &self.back,
        }
    }

    /// Turn the card over, returning the side now showing.
    pub fn flip(&mut self) -> Face {
        self.is_flipped = !self.is_flipped;
        self.face()
    }

    pub fn show_front(&mut self) {
        self.is_flipped = false;
    }
}
