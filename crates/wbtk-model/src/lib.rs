//! Immutable Wikibase entity model for the Wikibase toolkit.
//!
//! This crate models entities (items, lexemes, forms, senses) and the
//! statement structure they share (claims, qualifiers, references, ranks),
//! together with a bidirectional codec for the Wikibase wire JSON format.
//!
//! # Design Rules
//!
//! 1. Every edit operator returns a new value; nothing mutates in place.
//! 2. Published settings (server ids, revisions, timestamps) are an
//!    all-or-nothing bundle, preserved verbatim across every edit.
//! 3. Equality is structural over content; wire-only metadata (statement
//!    ids, reference hashes, form/sense ids) never participates.
//! 4. Add/remove that matches nothing is a no-op, never an error, so edit
//!    chains compose without caller-side existence checks.
//!
//! # Key Types
//!
//! - [`ClaimValue`] — the closed value union (sentinels, string, text,
//!   quantity, coordinate, time, entity reference)
//! - [`Claim`] — property + value, datatype-checked at construction
//! - [`ClaimSet`] / [`Reference`] — multi-valued claim storage by property
//! - [`Statement`] / [`Rank`] — a claim with rank, qualifiers, references
//! - [`StatementHolder`] — the statement collection shared by entities
//! - [`MonolingualText`] / [`MonolingualTextHolder`] — language-tagged text
//! - [`LexemeForm`] / [`LexemeSense`] / [`Lexeme`] / [`Item`] — entities
//! - [`DatatypeSource`] — where property datatype declarations come from

pub mod claim;
pub mod datatype;
pub mod error;
pub mod form;
pub mod holder;
pub mod item;
pub mod lexeme;
pub mod reference;
pub mod sense;
pub mod statement;
pub mod text;
pub mod value;
mod wire;

pub use claim::Claim;
pub use datatype::{Datatype, DatatypeSource, InMemoryDatatypes, ValueKind};
pub use error::{ModelError, ModelResult};
pub use form::{FormEdit, FormRemoval, LexemeForm};
pub use holder::StatementHolder;
pub use item::{Item, ItemMeta, Sitelink};
pub use lexeme::{Lexeme, LexemeEdit, LexemeMeta, LexemeRemoval};
pub use reference::{ClaimSet, Reference};
pub use sense::{LexemeSense, SenseEdit, SenseRemoval};
pub use statement::{Rank, Statement, StatementEdit};
pub use text::{MonolingualText, MonolingualTextHolder, TextSelector};
pub use value::{ClaimValue, CoordinateValue, QuantityValue, TimePrecision, TimeValue};
