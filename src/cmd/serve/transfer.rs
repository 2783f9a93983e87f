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

//! Moving the whole deck in and out of the page as a file.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CONTENT_DISPOSITION;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::response::Response;
use flashdeck_core::EXPORT_FILE_NAME;
use flashdeck_core::EXPORT_MIME_TYPE;
use flashdeck_core::view::UPLOAD_FAILED_CONTENT;

use crate::cmd::serve::state::ServerState;
use crate::cmd::serve::state::lock;

/// Replace the deck with an uploaded file. The body is the file's text.
pub async fn upload_handler(State(state): State<ServerState>, body: Bytes) -> (StatusCode, String) {
    let text = String::from_utf8_lossy(&body);
    let result = lock(&state.deck).import_json(&text);
    match result {
        Ok(count) => {
            log::info!("Imported {count} cards");
            (StatusCode::OK, format!("Imported {count} cards."))
        }
        Err(e) => {
            log::warn!("Rejected upload: {e}");
            (StatusCode::BAD_REQUEST, UPLOAD_FAILED_CONTENT.to_string())
        }
    }
}

pub async fn export_handler(State(state): State<ServerState>) -> Response {
    let result = lock(&state.deck).export_json();
    match result {
        Ok(json) => {
            let headers: [(HeaderName, String); 2] = [
                (CONTENT_TYPE, EXPORT_MIME_TYPE.to_string()),
                (
                    CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
                ),
            ];
            (StatusCode::OK, headers, json).into_response()
        }
        Err(e) => {
            log::error!("Failed to export deck: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
