//! In-process host for the item engine.
//!
//! This crate implements every collaborator [`item_core`] expects from its
//! host and bundles them into a [`Session`]. Consumers load content, build a
//! session, and drive the engine through [`Session::context`].
//!
//! Modules are organized by responsibility:
//! - [`repository`] holds the variable store and its JSON save files
//! - [`events`] provides the coordinate-indexed trigger table
//! - [`oracle`] provides the text table
//! - [`decor`] and [`stats`] implement the map layer and the stat engine
pub mod decor;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod session;
pub mod stats;

pub use decor::DecorLayer;
pub use events::{FiredEvent, TriggerTable};
pub use oracle::TextTable;
pub use repository::{MemoryVariableStore, SaveError, SaveFile};
pub use session::Session;
pub use stats::BasicStatEngine;
