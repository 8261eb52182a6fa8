//! Entity model
//!
//! `Snippet`, `Tag` and `Language` with their validation and normalization
//! rules. Everything here is storage-agnostic; the repository backends
//! persist these types as they are.

pub mod error;
pub mod language;
pub mod snippet;
pub mod tag;

pub use error::ModelError;
pub use language::Language;
pub use snippet::Snippet;
pub use tag::{MAX_TAG_LEN, Tag, normalize_name};
