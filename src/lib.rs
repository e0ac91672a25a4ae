//! A tiny HTTP relay that stores the latest announced game instance ID and
//! hands it out to anyone polling for it.

pub mod config;
pub mod page;
pub mod relay;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::create_router;
pub use state::{RelayState, SharedState};
