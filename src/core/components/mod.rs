pub mod memory_module;
pub mod port_specs;
pub mod traits;

// Re-export commonly used types
pub use memory_module::{
    CapturedTransaction, MemoryModel, MemoryPorts, MEMSIM_CELL_TYPE, WORD_WIDTH,
};
pub use port_specs::{Direction, PortSpec};
pub use traits::{BlackBox, BlackBoxFactory, Clocked};
