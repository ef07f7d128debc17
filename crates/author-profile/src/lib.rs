//! Author Profile Analysis
//!
//! Retrieves a researcher's complete publication record from OpenAlex and
//! derives two rankings from it:
//!
//! - **Papers by citation rate**: `citations / (1 + age)`, with a total,
//!   deterministic tie-break order
//! - **Co-authors by joint articles**: authorships merged by normalized
//!   display name, so one person split across several OpenAlex IDs is
//!   counted once
//!
//! Author search results are tagged with topical concepts from each
//! candidate's most-cited works to help tell namesakes apart.
//!
//! # Example
//!
//! ```no_run
//! use author_profile::{config::Config, service::ProfileService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let service = ProfileService::from_config(&config)?;
//!
//!     let report = service.ranking("A5023888391").await?;
//!     println!("{} works, top paper: {:?}", report.count_works_total, report.paper_ranking.items.first());
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod service;

pub use client::{OpenAlexClient, WorksSource};
pub use config::Config;
pub use error::{ClientError, ProfileError};
pub use service::ProfileService;
