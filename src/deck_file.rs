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

use std::path::Path;

use flashdeck_core::Deck;
use flashdeck_core::Fallible;
use flashdeck_core::fail;

/// Load a deck from a file written by the page's export.
pub fn load_deck(path: &str) -> Fallible<Deck> {
    if !Path::new(path).is_file() {
        return fail("deck file does not exist.");
    }
    let text = std::fs::read_to_string(path)?;
    let mut deck = Deck::new();
    let count = deck.import_json(&text)?;
    log::debug!("Loaded {count} cards from {path}");
    Ok(deck)
}
