pub mod config;
pub mod errors;
pub mod init;

// Re-export commonly used types
pub use config::MemoryConfig;
pub use errors::MemoryError;
