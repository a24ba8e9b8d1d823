//! HTTP client and service layer for the Postmark API.
//!
//! This module provides the main entry point [`PostmarkClient`] for
//! interacting with the Postmark API.
//!
//! # Example
//!
//! ```no_run
//! use postmark_rs::PostmarkClient;
//!
//! # async fn example() -> postmark_rs::Result<()> {
//! let client = PostmarkClient::new("server-token", "account-token")?;
//!
//! let stats = client.bounces().delivery_stats().await?;
//! println!("{} inactive addresses", stats.inactive_mails);
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod query;

pub use config::{ClientConfig, POSTMARK_API_URL};
pub use http::PostmarkClient;
pub use query::{Query, QueryValue};
pub(crate) use http::{ClientInner, TokenScope};
pub(crate) use query::build_url;
