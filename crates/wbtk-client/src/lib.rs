//! Synchronous Wikibase API client for the Wikibase toolkit.
//!
//! Reads are anonymous bulk fetches ([`fetch_entities`]); writes go through
//! an authenticated [`Session`] whose `push` decides create-vs-update from
//! the document itself and retries on server replication lag.
//! [`EntityLoader`] layers the entity cache over fetching and doubles as
//! the network-backed [`wbtk_model::DatatypeSource`].

pub mod config;
pub mod error;
pub mod loader;
pub mod session;

pub use config::{ClientConfig, DEFAULT_USER_AGENT, WIKIDATA_API_URL};
pub use error::{ClientError, ClientResult};
pub use loader::EntityLoader;
pub use session::{fetch_entities, infer_new_kind, Session};
