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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use flashdeck_core::CardView;
use flashdeck_core::EXPORT_FILE_NAME;
use maud::Markup;
use maud::html;

use crate::cmd::serve::state::ServerState;
use crate::cmd::serve::state::lock;
use crate::cmd::serve::template::page_template;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let view: CardView = lock(&state.screen).clone();
    let body = render_page(&view);
    (StatusCode::OK, Html(page_template(body).into_string()))
}

fn render_page(view: &CardView) -> Markup {
    html! {
        div.root {
            div.card-container {
                div.card {
                    div.card-header {
                        h1 #card-type { (view.label()) }
                    }
                    div.card-content {
                        p #card-content { (view.content()) }
                    }
                }
            }
            div.controls {
                form action="/" method="post" {
                    input id="previous" type="submit" name="action" value="Previous" title="Show the previous card. Shortcut: left arrow.";
                    input id="flip" type="submit" name="action" value="Flip" title="Turn the card over. Shortcut: space.";
                    input id="next" type="submit" name="action" value="Next" title="Show the next card. Shortcut: right arrow.";
                    input id="delete" type="submit" name="action" value="Delete" title="Delete this card.";
                }
            }
            div.tools {
                form.tool action="/" method="post" {
                    h2 { "Add Flashcard" }
                    input id="front" type="text" name="front" placeholder="Word" autocomplete="off";
                    input id="back" type="text" name="back" placeholder="Definition" autocomplete="off";
                    input id="add" type="submit" name="action" value="Add";
                }
                div.tool {
                    h2 { "Upload Flashcards" }
                    input id="upload-file" type="file" accept=".txt,.json,text/plain,application/json";
                    button id="upload" type="button" { "Upload" }
                }
                div.tool {
                    h2 { "Download Flashcards" }
                    a #download href={ "/" (EXPORT_FILE_NAME) } download=(EXPORT_FILE_NAME) { "Download" }
                }
            }
            div.shutdown-container {
                form action="/" method="post" {
                    input #shutdown .shutdown-button type="submit" name="action" value="Shutdown" title="Shut down the server";
                }
            }
        }
    }
}
