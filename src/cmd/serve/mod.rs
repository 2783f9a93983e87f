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

mod get;
mod post;
pub mod server;
mod state;
mod template;
mod transfer;

#[cfg(test)]
mod tests {
    use portpicker::pick_unused_port;
    use reqwest::StatusCode;
    use tokio::spawn;

    use crate::cmd::serve::server::ServerConfig;
    use crate::cmd::serve::server::start_server;
    use crate::helper::TestResult;
    use crate::helper::create_tmp_deck_file;
    use crate::utils::wait_for_server;

    const TEST_HOST: &str = "127.0.0.1";

    const SAMPLE_DECK: &str = r#"[{"isFlipped":false,"front":"foo","back":"FOO"},{"isFlipped":true,"front":"bar","back":"BAR"},{"isFlipped":false,"front":"baz","back":"BAZ"}]"#;

    async fn serve(deck_path: Option<String>) -> Result<u16, Box<dyn std::error::Error>> {
        let port = pick_unused_port().ok_or("no free port")?;
        let config = ServerConfig {
            deck_path,
            host: TEST_HOST.to_string(),
            port,
        };
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;
        Ok(port)
    }

    async fn act(port: u16, action: &str) -> Result<String, reqwest::Error> {
        let response = reqwest::Client::new()
            .post(format!("http://{TEST_HOST}:{port}/"))
            .form(&[("action", action)])
            .send()
            .await?;
        assert!(response.status().is_success());
        response.text().await
    }

    async fn export(port: u16) -> Result<String, reqwest::Error> {
        reqwest::get(format!("http://{TEST_HOST}:{port}/Flashcards.txt"))
            .await?
            .text()
            .await
    }

    #[tokio::test]
    async fn test_start_server_on_non_existent_deck() -> TestResult {
        let config = ServerConfig {
            deck_path: Some("./derpherp.txt".to_string()),
            host: TEST_HOST.to_string(),
            port: pick_unused_port().ok_or("no free port")?,
        };
        let err = start_server(config).await.err().map(|e| e.to_string());
        assert_eq!(err.as_deref(), Some("error: deck file does not exist."));
        Ok(())
    }

    #[tokio::test]
    async fn test_start_server_on_rejected_deck() -> TestResult {
        let path = create_tmp_deck_file(r#"[{"front":"foo","back":"bar"},{"back":"baz"}]"#)?;
        let config = ServerConfig {
            deck_path: Some(path),
            host: TEST_HOST.to_string(),
            port: pick_unused_port().ok_or("no free port")?,
        };
        assert!(start_server(config).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_static_endpoints() -> TestResult {
        let port = serve(None).await?;

        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/style.css")).await?;
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");

        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/script.js")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/javascript"
        );

        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/herp-derp")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_deck() -> TestResult {
        let port = serve(None).await?;

        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        let html = response.text().await?;
        assert!(html.contains("No Flashcards Found"));

        // Navigation on an empty deck changes nothing.
        let html = act(port, "Next").await?;
        assert!(html.contains("No Flashcards Found"));
        let html = act(port, "Flip").await?;
        assert!(html.contains("No Flashcards Found"));
        assert_eq!(export(port).await?, "[]");
        Ok(())
    }

    #[tokio::test]
    async fn test_e2e() -> TestResult {
        let path = create_tmp_deck_file(SAMPLE_DECK)?;
        let port = serve(Some(path)).await?;

        // Imported cards start on their front.
        let html = reqwest::get(format!("http://{TEST_HOST}:{port}/"))
            .await?
            .text()
            .await?;
        assert!(html.contains("<h1 id=\"card-type\">Front</h1>"));
        assert!(html.contains("<p id=\"card-content\">foo</p>"));

        let html = act(port, "Flip").await?;
        assert!(html.contains("<h1 id=\"card-type\">Back</h1>"));
        assert!(html.contains("<p id=\"card-content\">FOO</p>"));

        let html = act(port, "Next").await?;
        assert!(html.contains("<p id=\"card-content\">bar</p>"));

        let html = act(port, "Previous").await?;
        assert!(html.contains("<h1 id=\"card-type\">Front</h1>"));
        assert!(html.contains("<p id=\"card-content\">foo</p>"));

        let html = act(port, "Previous").await?;
        assert!(html.contains("<p id=\"card-content\">baz</p>"));

        // Deleting the last card goes back to the first.
        let html = act(port, "Delete").await?;
        assert!(html.contains("<p id=\"card-content\">foo</p>"));

        let response = reqwest::Client::new()
            .post(format!("http://{TEST_HOST}:{port}/"))
            .form(&[("action", "Add"), ("front", "quux"), ("back", "QUUX")])
            .send()
            .await?;
        assert!(response.status().is_success());

        // A card with a blank side is not added.
        let response = reqwest::Client::new()
            .post(format!("http://{TEST_HOST}:{port}/"))
            .form(&[("action", "Add"), ("front", "blank"), ("back", "")])
            .send()
            .await?;
        assert!(response.status().is_success());

        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/Flashcards.txt")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-disposition").unwrap(),
            "attachment; filename=\"Flashcards.txt\""
        );
        assert_eq!(
            response.text().await?,
            r#"[{"isFlipped":false,"front":"foo","back":"FOO"},{"isFlipped":false,"front":"bar","back":"BAR"},{"isFlipped":false,"front":"quux","back":"QUUX"}]"#
        );

        // Unknown actions are ignored.
        let html = act(port, "Derp").await?;
        assert!(html.contains("<p id=\"card-content\">foo</p>"));
        Ok(())
    }

    #[tokio::test]
    async fn test_upload() -> TestResult {
        let path = create_tmp_deck_file(SAMPLE_DECK)?;
        let port = serve(Some(path)).await?;
        let before = export(port).await?;

        // A record without a back rejects the whole file.
        let response = reqwest::Client::new()
            .post(format!("http://{TEST_HOST}:{port}/upload"))
            .body(r#"[{"front":"a","back":"b"},{"front":"c"}]"#)
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = reqwest::get(format!("http://{TEST_HOST}:{port}/"))
            .await?
            .text()
            .await?;
        assert!(html.contains("Upload Failed"));
        assert_eq!(export(port).await?, before);

        let response = reqwest::Client::new()
            .post(format!("http://{TEST_HOST}:{port}/upload"))
            .body("this is not json")
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(export(port).await?, before);

        let response = reqwest::Client::new()
            .post(format!("http://{TEST_HOST}:{port}/upload"))
            .body(r#"[{"front":"a","back":"b","isFlipped":true}]"#)
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = reqwest::get(format!("http://{TEST_HOST}:{port}/"))
            .await?
            .text()
            .await?;
        assert!(html.contains("<h1 id=\"card-type\">Front</h1>"));
        assert!(html.contains("<p id=\"card-content\">a</p>"));
        assert_eq!(
            export(port).await?,
            r#"[{"isFlipped":false,"front":"a","back":"b"}]"#
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_shutdown() -> TestResult {
        let port = pick_unused_port().ok_or("no free port")?;
        let config = ServerConfig {
            deck_path: None,
            host: TEST_HOST.to_string(),
            port,
        };
        let server = spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        let response = client
            .post(format!("http://{TEST_HOST}:{port}/"))
            .form(&[("action", "Shutdown")])
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        drop(client);

        server.await??;
        Ok(())
    }
}
