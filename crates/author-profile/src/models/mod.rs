//! Data models for OpenAlex entities and derived rankings.
//!
//! Raw models mirror the API and keep every field optional; derived models
//! in [`report`] are fully populated.

mod author;
mod identity;
mod report;
mod work;

pub use author::{Author, AuthorSearchPage, Institution};
pub use identity::AuthorId;
pub use report::{
    AuthorSearchResponse, CandidateIdentity, CoauthorAggregate, CoauthorRanking, NormalizedWork,
    PaperRanking, ProfileReport, RankedWork, SOURCE_NAME,
};
pub use work::{AuthorRef, Authorship, Concept, Location, PageMeta, Source, Work, WorksPage};
