//! Strip engine crate.
//!
//! Platform + GPU runtime pieces and the line-strip scene they draw.

pub mod core;
pub mod device;
pub mod error;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;

pub use error::SetupError;
