//! Session operations against a live remote browser.

use reqwest::Client;
use tracing::debug;
use uuid::Uuid;

use crate::error::{ClientError, Result};
use crate::transport::{drain, execute};
use crate::types::{ContentResponse, Empty, GotoRequest, ImplicitWaitRequest, ScrollRequest, SelectorRequest};

/// Handle for one server-side browser session.
///
/// The id and base URL are fixed for the lifetime of the handle; every
/// operation addresses `{base}/Session/{id}/{Action}` with one HTTP round
/// trip. The client tracks no session state locally: operations issued after
/// [`Session::delete`] are sent as-is and it is the server's job to reject
/// them.
///
/// Cloning is cheap (the HTTP client is reference-counted) and a `Session`
/// may be shared across tasks; `reqwest::Client` is safe for concurrent use.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    base_url: String,
    client: Client,
}

impl Session {
    pub(crate) fn new(id: Uuid, base_url: String, client: Client) -> Self {
        Self {
            id,
            base_url,
            client,
        }
    }

    /// The server-assigned session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/Session/{}/{}", self.base_url, self.id, action)
    }

    fn root_endpoint(&self) -> String {
        format!("{}/Session/{}", self.base_url, self.id)
    }

    /// Navigate the remote browser to `url`.
    pub async fn goto(&self, url: &str) -> Result<()> {
        debug!(session = %self.id, url, "goto");

        let body = GotoRequest {
            url,
            page_height: None,
            page_weight: None,
        };
        let response = execute(
            &self.client,
            self.client.post(self.endpoint("Goto")).json(&body),
        )
        .await?;
        drain(response).await
    }

    /// Navigate the remote browser to `url` with an explicit page size.
    ///
    /// Later server revisions accept a viewport hint alongside the URL. The
    /// wire field names (`pageHeight`, `pageWeight`) are the server's own.
    pub async fn goto_with_page_size(
        &self,
        url: &str,
        page_height: i64,
        page_weight: i64,
    ) -> Result<()> {
        debug!(session = %self.id, url, page_height, page_weight, "goto");

        let body = GotoRequest {
            url,
            page_height: Some(page_height),
            page_weight: Some(page_weight),
        };
        let response = execute(
            &self.client,
            self.client.post(self.endpoint("Goto")).json(&body),
        )
        .await?;
        drain(response).await
    }

    /// Fetch the content of the current page.
    pub async fn page_content(&self) -> Result<String> {
        debug!(session = %self.id, "fetching page content");

        let response = execute(&self.client, self.client.get(self.endpoint("Content"))).await?;
        let body = response.text().await.map_err(ClientError::Transport)?;
        let parsed: ContentResponse = serde_json::from_str(&body)?;
        Ok(parsed.content)
    }

    /// Set the server-side implicit wait, in seconds.
    pub async fn implicit_wait(&self, seconds: i32) -> Result<()> {
        debug!(session = %self.id, seconds, "implicit wait");

        let body = ImplicitWaitRequest { seconds };
        let response = execute(
            &self.client,
            self.client.post(self.endpoint("ImplicitWait")).json(&body),
        )
        .await?;
        drain(response).await
    }

    /// Scroll the page by `x` / `y` pixels.
    pub async fn scroll(&self, x: i64, y: i64) -> Result<()> {
        debug!(session = %self.id, x, y, "scroll");

        let body = ScrollRequest { x, y };
        let response = execute(
            &self.client,
            self.client.post(self.endpoint("Scroll")).json(&body),
        )
        .await?;
        drain(response).await
    }

    /// Ask the server to clean the current page state.
    pub async fn clean(&self) -> Result<()> {
        debug!(session = %self.id, "clean");

        let response = execute(
            &self.client,
            self.client.post(self.endpoint("Clean")).json(&Empty {}),
        )
        .await?;
        drain(response).await
    }

    /// Click the element matching `selector`.
    pub async fn click(&self, selector: &str) -> Result<()> {
        debug!(session = %self.id, selector, "click");

        let body = SelectorRequest { selector };
        let response = execute(
            &self.client,
            self.client.post(self.endpoint("Click")).json(&body),
        )
        .await?;
        drain(response).await
    }

    /// Block until an element matching `selector` is present.
    pub async fn wait_for_selector(&self, selector: &str) -> Result<()> {
        debug!(session = %self.id, selector, "wait for selector");

        let body = SelectorRequest { selector };
        let response = execute(
            &self.client,
            self.client.post(self.endpoint("Wait")).json(&body),
        )
        .await?;
        drain(response).await
    }

    /// Capture a screenshot of the current page.
    ///
    /// Returns the raw image bytes exactly as the server sent them.
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        debug!(session = %self.id, "screenshot");

        let response = execute(&self.client, self.client.get(self.endpoint("Screenshot"))).await?;
        let bytes = response.bytes().await.map_err(ClientError::Transport)?;
        Ok(bytes.to_vec())
    }

    /// Delete the session on the server.
    ///
    /// The local handle needs no teardown; a failed delete is an ordinary
    /// error for the caller to handle.
    pub async fn delete(&self) -> Result<()> {
        debug!(session = %self.id, "deleting session");

        let response = execute(&self.client, self.client.delete(self.root_endpoint())).await?;
        drain(response).await
    }
}
