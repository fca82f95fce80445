pub mod metadata;
pub mod signal;

pub use metadata::{MetadataMap, MetadataValue};
pub use signal::{ClockInput, Signal};
