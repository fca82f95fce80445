pub mod core;

// Re-export commonly used types
pub use crate::core::components::memory_module::{CapturedTransaction, MemoryModel, MemoryPorts};
pub use crate::core::components::traits::{BlackBox, BlackBoxFactory, Clocked};
pub use crate::core::execution::cycle_engine::CycleEngine;
pub use crate::core::memory::config::MemoryConfig;
pub use crate::core::memory::errors::MemoryError;
pub use crate::core::types::CellId;
