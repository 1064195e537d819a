//! Foundation types for the Wikibase toolkit.
//!
//! This crate provides the identifier and language types used throughout the
//! toolkit. Every other `wbtk` crate depends on `wbtk-types`.
//!
//! # Key Types
//!
//! - [`Qid`], [`Pid`], [`Lid`] — validated item / property / lexeme ids
//! - [`FormId`], [`SenseId`] — composite ids decomposing into a lexeme id
//!   and a local [`Fid`] / [`Sid`] suffix
//! - [`EntityId`] — any id, classified by [`EntityKind`]
//! - [`Language`] — a language code bound to the item representing it
//! - [`LanguageRegistry`] — immutable code↔item lookup built once at
//!   construction; [`registry()`] memoizes the default Wikidata table

pub mod error;
pub mod id;
pub mod language;
pub mod registry;

pub use error::{IdError, IdResult};
pub use id::{EntityId, EntityKind, Fid, FormId, Lid, Pid, Qid, SenseId, Sid};
pub use language::Language;
pub use registry::{registry, LanguageRegistry};
