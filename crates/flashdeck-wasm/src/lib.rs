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

//! WASM bindings for flashdeck - runs the deck manager in the browser page.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Blob;
use web_sys::BlobPropertyBag;
use web_sys::Document;
use web_sys::Element;
use web_sys::HtmlAnchorElement;
use web_sys::Url;
use web_sys::console;

use flashdeck_core::CardView;
use flashdeck_core::Deck;
use flashdeck_core::EXPORT_FILE_NAME;
use flashdeck_core::EXPORT_MIME_TYPE;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console::log_1(&"flashdeck WASM initialized".into());
}

/// The page's deck, driven from JavaScript.
#[wasm_bindgen]
pub struct FlashdeckApp {
    deck: Deck,
    /// The last view the deck announced, waiting to be painted.
    screen: Arc<Mutex<CardView>>,
    /// Where the "Front"/"Back" label goes.
    label_element: Option<Element>,
    /// Where the visible text goes.
    content_element: Option<Element>,
}

#[wasm_bindgen]
impl FlashdeckApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let mut deck = Deck::new();
        let screen = Arc::new(Mutex::new(deck.view()));
        let sink = screen.clone();
        deck.subscribe(move |view| *lock(&sink) = view.clone());
        Self {
            deck,
            screen,
            label_element: None,
            content_element: None,
        }
    }

    /// Bind the two display elements by id and paint the current view.
    #[wasm_bindgen]
    pub fn attach(&mut self, label_id: &str, content_id: &str) -> Result<(), JsValue> {
        let document = document()?;
        self.label_element = Some(element_by_id(&document, label_id)?);
        self.content_element = Some(element_by_id(&document, content_id)?);
        self.paint();
        Ok(())
    }

    /// Add a card. Returns false, adding nothing, if either side is empty.
    #[wasm_bindgen]
    pub fn create_card(&mut self, front: &str, back: &str) -> bool {
        let created = self.deck.create_card(front, back);
        self.paint();
        created
    }

    /// Flip the current card, returning the text now showing.
    #[wasm_bindgen]
    pub fn toggle_flip(&mut self) -> Option<String> {
        let text = self.deck.toggle_flip().map(str::to_string);
        self.paint();
        text
    }

    #[wasm_bindgen]
    pub fn delete_current(&mut self) -> bool {
        let deleted = self.deck.delete_current().is_some();
        self.paint();
        deleted
    }

    #[wasm_bindgen]
    pub fn next(&mut self) {
        self.deck.advance();
        self.paint();
    }

    #[wasm_bindgen]
    pub fn previous(&mut self) {
        self.deck.retreat();
        self.paint();
    }

    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    #[wasm_bindgen]
    pub fn cursor(&self) -> usize {
        self.deck.cursor()
    }

    /// The label line of what is on screen.
    #[wasm_bindgen]
    pub fn label(&self) -> String {
        lock(&self.screen).label()
    }

    /// The content line of what is on screen.
    #[wasm_bindgen]
    pub fn content(&self) -> String {
        lock(&self.screen).content().to_string()
    }

    #[wasm_bindgen]
    pub fn export_json(&self) -> Result<String, JsValue> {
        self.deck
            .export_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace the deck with the contents of an uploaded file.
    /// On failure the deck is unchanged and the failure message is shown.
    #[wasm_bindgen]
    pub fn import_json(&mut self, text: &str) -> Result<usize, JsValue> {
        let result = self.deck.import_json(text);
        self.paint();
        result.map_err(|e| JsValue::from_str(&format!("Failed to import cards: {e}")))
    }

    /// Save the deck as a text file download.
    #[wasm_bindgen]
    pub fn download(&self) -> Result<(), JsValue> {
        let json = self.export_json()?;
        let parts = js_sys::Array::of1(&JsValue::from_str(&json));
        let options = BlobPropertyBag::new();
        options.set_type(EXPORT_MIME_TYPE);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let url = Url::create_object_url_with_blob(&blob)?;

        let document = document()?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("Document has no body"))?;
        let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
        link.set_download(EXPORT_FILE_NAME);
        link.set_href(&url);
        body.append_child(&link)?;
        link.click();
        body.remove_child(&link)?;
        Url::revoke_object_url(&url)
    }

    fn paint(&self) {
        let screen = lock(&self.screen);
        if let Some(element) = &self.label_element {
            element.set_text_content(Some(&screen.label()));
        }
        if let Some(element) = &self.content_element {
            element.set_text_content(Some(screen.content()));
        }
    }
}

impl Default for FlashdeckApp {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("No element with id {id:?}")))
}
