mod engine;
pub mod filter;

pub use engine::{LookupEngine, LookupOutcome};
