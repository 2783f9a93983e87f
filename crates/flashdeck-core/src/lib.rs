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

//! flashdeck-core: Core library for flashdeck.
//!
//! This library is WASM-compatible and provides:
//! - The deck manager: an ordered deck of two-sided cards and a cursor
//! - The JSON export/import format
//! - The view model the page renders

pub mod codec;
pub mod deck;
pub mod error;
pub mod types;
pub mod view;

// Re-exports for convenience
pub use codec::{EXPORT_FILE_NAME, EXPORT_MIME_TYPE, parse_records};
pub use deck::Deck;
pub use error::{ErrorReport, Fallible, ImportError, fail};
pub use types::card::{Card, Face};
pub use types::record::CardRecord;
pub use view::CardView;
