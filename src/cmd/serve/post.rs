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

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::cmd::serve::state::ServerState;
use crate::cmd::serve::state::lock;

#[derive(Deserialize)]
pub struct FormData {
    action: String,
    #[serde(default)]
    front: String,
    #[serde(default)]
    back: String,
}

enum Action {
    Add,
    Flip,
    Delete,
    Previous,
    Next,
    Shutdown,
}

impl TryFrom<&str> for Action {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Add" => Ok(Action::Add),
            "Flip" => Ok(Action::Flip),
            "Delete" => Ok(Action::Delete),
            "Previous" => Ok(Action::Previous),
            "Next" => Ok(Action::Next),
            "Shutdown" => Ok(Action::Shutdown),
            _ => Err(()),
        }
    }
}

pub async fn post_handler(State(state): State<ServerState>, Form(form): Form<FormData>) -> Redirect {
    let Ok(action) = Action::try_from(form.action.as_str()) else {
        log::debug!("Ignoring unknown action {:?}", form.action);
        return Redirect::to("/");
    };
    match action {
        Action::Add => {
            if !lock(&state.deck).create_card(&form.front, &form.back) {
                log::debug!("Not adding a card with a blank side");
            }
        }
        Action::Flip => {
            lock(&state.deck).toggle_flip();
        }
        Action::Delete => {
            if let Some(card) = lock(&state.deck).delete_current() {
                log::debug!("Deleted card {:?}", card.front());
            }
        }
        Action::Previous => lock(&state.deck).retreat(),
        Action::Next => lock(&state.deck).advance(),
        Action::Shutdown => {
            if let Some(tx) = lock(&state.shutdown_tx).take() {
                let _ = tx.send(());
            }
        }
    }
    Redirect::to("/")
}
