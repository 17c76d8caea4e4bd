//! Profile reconstruction: postmeta rows in, one normalized `CandidateProfile` out.
//!
//! Flow: rows → `fields::classify` → identity / skills / family buffers →
//!       `assemble::assemble` per family → `builder::build`.
//!
//! Everything except `handlers` is pure and synchronous. Row fetching and
//! resume generation live in `db` and `generation`.

pub mod assemble;
pub mod builder;
pub mod dates;
pub mod decode;
pub mod fields;
pub mod handlers;
pub mod models;
pub mod sanitize;

pub use builder::{extract_profile, ProfileOutcome};
pub use models::CandidateProfile;
