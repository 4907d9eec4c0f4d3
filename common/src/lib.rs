//! Shared building blocks for the `till` workspace.
//!
//! * [`config`]: runtime options collected from the command line.
//! * [`money`]: parsing and formatting of currency amounts.
//! * [`logging`]: status macros (`info!`, `success!`, `warn!`, `error!`).

pub mod config;
pub mod logging;
pub mod money;

#[doc(hidden)]
pub use tracing;
