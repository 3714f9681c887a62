//! # remora-client
//!
//! Typed HTTP client for a remote browser-automation server.
//!
//! The server owns every browser: this crate only issues one HTTP round trip
//! per operation and decodes the JSON replies. A [`Connector`] holds the
//! server's base URL and mints [`Session`] handles; each session method maps
//! to one `{base}/Session/{id}/{Action}` endpoint.
//!
//! ## Example
//!
//! ```no_run
//! use remora_client::Connector;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), remora_client::ClientError> {
//!     let connector = Connector::new("http://localhost:8081");
//!     let session = connector.create_session().await?;
//!
//!     session.goto("https://example.com").await?;
//!     session.implicit_wait(10).await?;
//!     let content = session.page_content().await?;
//!     println!("{content}");
//!
//!     session.delete().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! [`Connector`] and [`Session`] are cheap to clone and safe to share across
//! tasks; the underlying `reqwest::Client` multiplexes requests over a
//! connection pool and is safe for concurrent use. No retries, caching, or
//! background work happen inside the crate, and errors always propagate to
//! the caller rather than being logged internally.

mod connector;
mod error;
mod session;
mod transport;
mod types;

pub use connector::{Connector, ConnectorBuilder};
pub use error::{ClientError, Result};
pub use session::Session;
