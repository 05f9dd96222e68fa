#![deny(clippy::all, clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
//! # miki-api
//!
//! miki-api is a thin wrapper library around two Miki web APIs.
//!
//! This library can:
//! - list, search, fetch and upload [`Image`]s on an Imghoard instance
//! - fetch paged [`LeaderboardsObject`]s and [`UserInventory`]s
//!
//! Uploads are checked for a png, jpeg or gif header before they are sent.
//! Images under 1MB are posted inline as a base64 data URI; larger images
//! are sent as multipart form data and need experimental mode.
//!
//! ## Example: Walking two pages of a tag search.
//!
//! ```rust,no_run
//! # type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
//! use miki_api::{Config, Imghoard, ImghoardClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ImghoardClient::new(Config::default())?;
//!     let first = client.images(&["cat", "cute"]).await?;
//!     for image in first.iter() {
//!         println!("{}: {}", image.id(), image.url());
//!     }
//!
//!     // same tags, page 1
//!     let second = client.next_page(&first).await?;
//!     println!("page {} has {} images", second.page(), second.len());
//!     Ok(())
//! }
//! ```
//!
//! [`Image`]: crate::image::Image
//! [`LeaderboardsObject`]: crate::leaderboards::LeaderboardsObject
//! [`UserInventory`]: crate::leaderboards::UserInventory

pub(crate) mod client;

/// Contains [`Error`]s that can be thrown by the libary.
///
/// [`Error`]: crate::error::Error
pub mod error;

/// Image header sniffing used to validate uploads.
pub mod headers;

/// Imghoard client: [`ImghoardClient`], its [`Config`] and the [`Imghoard`] trait.
pub mod imghoard;

/// Leaderboards client: [`MikiApiClient`].
pub mod miki;

pub(crate) mod models;

pub(crate) mod result;

pub use imghoard::{Config, Imghoard, ImghoardClient};
pub use miki::MikiApiClient;
pub use models::*;
