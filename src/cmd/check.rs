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

use flashdeck_core::Deck;
use flashdeck_core::Fallible;

use crate::deck_file::load_deck;

/// What `check` found in a deck file.
#[derive(Debug, PartialEq)]
pub struct DeckSummary {
    pub path: String,
    pub cards: usize,
    /// Cards with an empty front or back.
    pub blank: usize,
}

impl DeckSummary {
    fn of(path: &str, deck: &Deck) -> Self {
        let blank = deck
            .cards()
            .iter()
            .filter(|card| card.front().is_empty() || card.back().is_empty())
            .count();
        Self {
            path: path.to_string(),
            cards: deck.len(),
            blank,
        }
    }
}

impl Display for DeckSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} cards.", self.path, self.cards)?;
        if self.blank > 0 {
            write!(f, "\n{} cards have a blank side.", self.blank)?;
        }
        Ok(())
    }
}

pub fn summarize_deck(path: &str) -> Fallible<DeckSummary> {
    let deck = load_deck(path)?;
    Ok(DeckSummary::of(path, &deck))
}

pub fn check_deck(path: &str) -> Fallible<()> {
    println!("{}", summarize_deck(path)?);
    Ok(())
}
