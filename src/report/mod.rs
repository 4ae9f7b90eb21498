//! Report assembly: the engine entry point and the report it produces.

mod engine;
mod types;

pub use engine::ReconEngine;
pub use types::{RiskReport, SourceTimings};
