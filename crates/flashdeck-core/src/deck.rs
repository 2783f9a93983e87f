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

use crate::error::ImportError;
use crate::types::card::Card;
use crate::types::record::CardRecord;
use crate::view::CardView;

/// Called with the new view whenever the deck changes.
pub type Listener = Box<dyn FnMut(&CardView) + Send>;

/// An ordered deck of cards and a cursor pointing at the current one.
///
/// The deck is the only thing allowed to mutate its cards. The cursor is
/// always a valid index, or zero when the deck is empty.
#[derive(Default)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
    listeners: Vec<Listener>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback to run after every change to the deck.
    pub fn subscribe(&mut self, listener: impl FnMut(&CardView) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.cursor)
    }

    pub fn view(&self) -> CardView {
        CardView::of(self.current())
    }

    /// Append a card to the end of the deck. Does nothing if either side is
    /// empty. The cursor does not move.
    pub fn create_card(&mut self, front: &str, back: &str) -> bool {
        let created = !front.is_empty() && !back.is_empty();
        if created {
            self.cards.push(Card::new(front, back));
        }
        self.notify();
        created
    }

    /// Flip the current card and return the text now showing.
    pub fn toggle_flip(&mut self) -> Option<&str> {
        let card = self.cards.get_mut(self.cursor)?;
        card.flip();
        self.notify();
        self.current().map(Card::visible_text)
    }

    /// Remove the current card. The cursor is wrapped into the smaller
    /// deck, so deleting the last card moves it back to the first.
    pub fn delete_current(&mut self) -> Option<Card> {
        let removed = if self.cursor < self.cards.len() {
            Some(self.cards.remove(self.cursor))
        } else {
            None
        };
        self.cursor = wrap(self.cursor, self.cards.len());
        self.notify();
        removed
    }

    /// Move to the next card, going around to the first after the last.
    pub fn advance(&mut self) {
        let len = self.cards.len();
        if len == 0 {
            return;
        }
        self.leave_current();
        self.cursor = (self.cursor + 1) % len;
        self.notify();
    }

    /// Move to the previous card, going around to the last before the first.
    pub fn retreat(&mut self) {
        let len = self.cards.len();
        if len == 0 {
            return;
        }
        self.leave_current();
        self.cursor = (self.cursor + len - 1) % len;
        self.notify();
    }

    /// Replace every card with ones built from `records`, in order.
    ///
    /// Every record is checked before anything changes: if one is missing
    /// a face the deck is left exactly as it was. New cards start on their
    /// front. The cursor keeps its index, wrapped into the new length.
    pub fn replace_all(
        &mut self,
        records: impl IntoIterator<Item = CardRecord>,
    ) -> Result<usize, ImportError> {
        let cards = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_card(index))
            .collect::<Result<Vec<Card>, ImportError>>()?;
        self.cards = cards;
        self.cursor = wrap(self.cursor, self.cards.len());
        self.notify();
        Ok(self.cards.len())
    }

    /// A card that is navigated away from shows its front next time.
    fn leave_current(&mut self) {
        if let Some(card) = self.cards.get_mut(self.cursor) {
            card.show_front();
        }
    }

    fn notify(&mut self) {
        let view = self.view();
        self.broadcast(&view);
    }

    pub(crate) fn broadcast(&mut self, view: &CardView) {
        for listener in self.listeners.iter_mut() {
            listener(view);
        }
    }
}

fn wrap(cursor: usize, len: usize) -> usize {
    if len == 0 { 0 } else { cursor % len }
}
