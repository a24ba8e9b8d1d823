//! # postmark-rs
//!
//! An async Rust client for the [Postmark](https://postmarkapp.com) email
//! delivery API.
//!
//! The crate covers sending (single, batch, and templated), bounces,
//! templates, domains, sender signatures, server management, message
//! activity, message streams, suppressions, statistics, inbound rules,
//! webhooks, and data removals.
//!
//! ## Features
//!
//! - **Two credential scopes**: server and account tokens, selected per
//!   call so a request can never go out with the wrong one
//! - **Typed models**: every request and response is a concrete struct
//!   with Postmark's wire names handled by serde
//! - **Uniform errors**: remote failures arrive as a stable
//!   `(error_code, message)` pair; everything else keeps its cause
//! - **Async-first**: built on `reqwest`, runs on Tokio
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use postmark_rs::{Email, PostmarkClient};
//!
//! #[tokio::main]
//! async fn main() -> postmark_rs::Result<()> {
//!     let client = PostmarkClient::new("server-token", "account-token")?;
//!
//!     let response = client.email().send(&Email {
//!         from: "sender@example.com".into(),
//!         to: "receiver@example.com".into(),
//!         subject: "Hello".into(),
//!         html_body: "<b>Hello</b>".into(),
//!         ..Default::default()
//!     }).await?;
//!     println!("queued as {}", response.message_id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Filtering and pagination
//!
//! List endpoints take a [`Query`] options bag on top of their explicit
//! `count`/`offset` parameters:
//!
//! ```rust,no_run
//! use postmark_rs::{PostmarkClient, Query};
//!
//! # async fn example(client: PostmarkClient) -> postmark_rs::Result<()> {
//! let bounces = client.bounces()
//!     .list(50, 0, Query::new().with("type", "HardBounce"))
//!     .await?;
//! println!("{} hard bounces", bounces.total_count);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error handling
//!
//! ```rust,no_run
//! use postmark_rs::{Error, PostmarkClient};
//!
//! # async fn example(client: PostmarkClient) -> postmark_rs::Result<()> {
//! match client.templates().get("missing").await {
//!     Ok(template) => println!("{}", template.name),
//!     Err(Error::Api { error_code: 1101, .. }) => println!("no such template"),
//!     Err(err) => return Err(err),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use client::{ClientConfig, PostmarkClient, Query, QueryValue, POSTMARK_API_URL};
pub use error::{Error, Result};
pub use models::{Email, EmailResponse, Header, TemplatedEmail};

/// Prelude module for convenient imports.
///
/// ```rust
/// use postmark_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{ClientConfig, PostmarkClient, Query, QueryValue};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        Attachment, Bounce, DeliveryStats, Domain, Email, EmailResponse, Header, InboundMessage,
        LinkTracking, MessageStream, OutboundMessage, SenderSignature, Server, Suppression,
        Template, TemplatedEmail, Webhook,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url() {
        assert_eq!(POSTMARK_API_URL, "https://api.postmarkapp.com");
    }

    #[test]
    fn client_is_cloneable_and_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<PostmarkClient>();
    }
}
