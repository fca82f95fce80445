pub mod config;
pub mod cycle_engine;

pub use config::EngineConfig;
pub use cycle_engine::CycleEngine;
