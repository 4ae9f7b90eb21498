//! Tor exit-node registry.
//!
//! A single [`TorRegistry`] is shared by every report an engine produces. It
//! loads the public bulk exit list on first use and again whenever the cached
//! copy is older than the configured interval.

mod clock;
mod registry;

pub use clock::{Clock, SystemClock};
pub use registry::{fetch_exit_list, parse_exit_list, TorRegistry};
