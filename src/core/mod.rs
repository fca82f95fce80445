pub mod components;
pub mod execution;
pub mod memory;
pub mod types;
pub mod values;
