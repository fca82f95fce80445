use crate::core::values::metadata::MetadataMap;
use crate::core::values::signal::ClockInput;

/// Callback interface a host simulator drives a black-box cell through
///
/// The host calls `eval()` once per evaluation step after updating the cell's
/// input ports; a `true` return asks for another evaluation pass within the
/// same step.
pub trait BlackBox {
    /// Bring the cell to its reset state
    fn reset(&mut self);

    /// Evaluate the cell for the current step
    fn eval(&mut self) -> bool;
}

/// Two-phase timing contract for clocked cells
///
/// `sample` latches inputs and `commit` produces outputs and updates state.
/// A host that tracks its own edges may call them directly instead of going
/// through [`BlackBox::eval`].
pub trait Clocked {
    /// Clock input snapshot for the current step
    fn clock(&self) -> &ClockInput;

    /// Mutable clock input, updated by the host once per step
    fn clock_mut(&mut self) -> &mut ClockInput;

    /// Sampling phase: latch the current input ports
    fn sample(&mut self);

    /// Commit phase: drive outputs and update state from the latched inputs
    fn commit(&mut self);
}

/// Factory used by a host to instantiate a black-box cell
///
/// Parameters and attributes come from the netlist cell; `name` is the
/// hierarchical instance name.
pub trait BlackBoxFactory: BlackBox {
    /// Cell type name this factory is registered under
    const CELL_TYPE: &'static str;

    /// Construction failure reported to the host
    type Error: std::error::Error;

    fn create(
        name: &str,
        parameters: &MetadataMap,
        attributes: &MetadataMap,
    ) -> Result<Self, Self::Error>
    where
        Self: Sized;
}
