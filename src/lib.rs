//! Map annotation engine.
//!
//! Exposes the drawing core (geometry, tool state machine, drawing store) together with
//! markers, geographic import, the geocoding/routing collaborators and the session glue
//! that ties them to user-facing notices. The `mapscriber` binary and the schema dumper
//! are thin layers on top of this crate.

pub mod config;
pub mod draw;
pub mod geo;
pub mod import;
pub mod input;
pub mod markers;
pub mod notification;
pub mod services;
pub mod session;
pub mod util;

pub use config::Config;
pub use session::MapSession;
