pub mod classifier;
pub mod config;
pub mod detector;
pub mod engine;
pub mod keywords;
pub mod seed;
pub mod selector;

pub use buddy_schema::normalize;
pub use classifier::*;
pub use config::*;
pub use detector::*;
pub use engine::*;
pub use seed::{seed_scenarios, SeedReport, SeedScenario, SEED_SCENARIOS};
pub use selector::*;
