//! Shared request plumbing.
//!
//! Every operation funnels through [`execute`], which maps the failure modes
//! onto the crate's error taxonomy: send/read failures become
//! [`ClientError::Transport`], non-success statuses [`ClientError::Remote`].

use reqwest::{Client, RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Send a request and check the response status.
pub(crate) async fn execute(client: &Client, builder: RequestBuilder) -> Result<Response> {
    let request = builder.build().map_err(ClientError::Transport)?;
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    debug!(%method, %path, "dispatching request");

    let response = client
        .execute(request)
        .await
        .map_err(ClientError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Remote {
            status,
            method,
            path,
        });
    }
    Ok(response)
}

/// Consume and discard an ack body so the connection returns to the pool.
pub(crate) async fn drain(response: Response) -> Result<()> {
    response.bytes().await.map_err(ClientError::Transport)?;
    Ok(())
}
