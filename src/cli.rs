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

use clap::Parser;
use flashdeck_core::Fallible;
use tokio::spawn;

use crate::cmd::check::check_deck;
use crate::cmd::serve::server::ServerConfig;
use crate::cmd::serve::server::start_server;
use crate::utils::wait_for_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Serve the flashcard page.
    Serve {
        /// Deck file to load at startup, in the format the page exports. By default, the deck starts empty.
        #[arg(long)]
        deck: Option<String>,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server. Default is 8000.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Whether to open the browser automatically. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
    },
    /// Check that a deck file can be imported.
    Check {
        /// Path to the deck file.
        file: String,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve {
            deck,
            host,
            port,
            open_browser,
        } => {
            if open_browser.unwrap_or(true) {
                // Open the browser once the server accepts connections.
                let browser_host = host.clone();
                spawn(async move {
                    match wait_for_server(&browser_host, port).await {
                        Ok(()) => {
                            let url = format!("http://{browser_host}:{port}/");
                            if let Err(e) = open::that(&url) {
                                log::warn!("Failed to open {url}: {e}");
                            }
                        }
                        Err(e) => log::error!("Failed to connect to server: {e}"),
                    }
                });
            }
            let config = ServerConfig {
                deck_path: deck,
                host,
                port,
            };
            start_server(config).await
        }
        Command::Check { file } => check_deck(&file),
    }
}
