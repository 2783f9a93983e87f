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

use std::error::Error;

use flashdeck_core::EXPORT_FILE_NAME;
use flashdeck_core::Fallible;
use tempfile::tempdir;

/// For tests that mix deck errors with HTTP client errors.
pub type TestResult = Result<(), Box<dyn Error>>;

/// Write `contents` to a deck file in a fresh temporary directory, and
/// return its path.
pub fn create_tmp_deck_file(contents: &str) -> Fallible<String> {
    let directory = tempdir()?.keep();
    let path = directory.join(EXPORT_FILE_NAME);
    std::fs::write(&path, contents)?;
    Ok(path.display().to_string())
}
