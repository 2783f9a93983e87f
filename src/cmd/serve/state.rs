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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use flashdeck_core::CardView;
use flashdeck_core::Deck;
use tokio::sync::oneshot::Sender;

#[derive(Clone)]
pub struct ServerState {
    pub deck: Arc<Mutex<Deck>>,
    /// The last view the deck announced. This is what the page shows.
    pub screen: Arc<Mutex<CardView>>,
    pub shutdown_tx: Arc<Mutex<Option<Sender<()>>>>,
}

/// Lock a mutex, carrying on if a handler panicked while holding it.
pub fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
