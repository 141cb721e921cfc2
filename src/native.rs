//! Driver collaborators backed by `rusqlite`.
//!
//! Two front-ends over the same engine, one per native calling convention,
//! so both sides of every adapter bridge are real:
//!
//! - [`CollectionDriver`]: execution operations take one ordered collection
//!   of values; the integer-width toggle is named `safe_integers`.
//! - [`PositionalDriver`]: every binding is bound separately at its 1-based
//!   ordinal; the integer-width toggle is named `set_read_big_ints`.
//!
//! Blocking rusqlite work runs on `spawn_blocking` behind a shared async
//! mutex; both front-ends delegate to the same connection core.

pub mod collection;
mod connection;
pub mod positional;
mod statement;
mod values;

pub use collection::CollectionDriver;
pub use positional::PositionalDriver;
