//! Rust SDK for the mem.ai API.
//!
//! Mem is an AI-powered note taking service. This crate wraps its REST API
//! with typed requests and responses, bearer-token authentication, and
//! automatic retries with exponential backoff when rate limited.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use memai::{Client, CreateNoteRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), memai::Error> {
//!     let client = Client::builder("your-api-key").build()?;
//!
//!     let note = client.create_note(CreateNoteRequest {
//!         content: "# Meeting Notes\n- Discussed project X".into(),
//!         auto_organize: Some("Add to 'Project X' collection".into()),
//!         ..Default::default()
//!     }).await?;
//!
//!     println!("Created {} at {}", note.title, note.url);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;
mod version;

pub use client::{Client, ClientBuilder};
pub use error::{Error, Result};
pub use types::*;
pub use version::SDK_VERSION;
