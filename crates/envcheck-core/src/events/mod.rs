//! Check lifecycle events.

pub mod handler;
pub mod types;

pub use handler::{CheckEventHandler, NoOpHandler};
