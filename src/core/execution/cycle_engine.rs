use crate::core::components::traits::{BlackBox, Clocked};
use crate::core::execution::config::EngineConfig;
use log::{debug, warn};

/// Minimal host driver for a single clocked black box
///
/// Each cycle is two evaluation steps: the clock is driven low (falling
/// step) and then high (rising step). The clock rests high between cycles,
/// so inputs set up through [`CycleEngine::cell_mut`] before a cycle are
/// sampled by that cycle's falling step.
pub struct CycleEngine<B> {
    cell: B,
    config: EngineConfig,
    /// Completed clock cycles
    current_cycle: u64,
}

impl<B: BlackBox + Clocked> CycleEngine<B> {
    /// Create a new engine around `cell` with the default configuration
    pub fn new(cell: B) -> Self {
        Self::with_config(cell, EngineConfig::default())
    }

    pub fn with_config(mut cell: B, config: EngineConfig) -> Self {
        cell.clock_mut().hold(true);
        Self {
            cell,
            config,
            current_cycle: 0,
        }
    }

    pub fn cell(&self) -> &B {
        &self.cell
    }

    pub fn cell_mut(&mut self) -> &mut B {
        &mut self.cell
    }

    /// Give the cell back to the caller
    pub fn into_cell(self) -> B {
        self.cell
    }

    pub fn current_cycle(&self) -> u64 {
        self.current_cycle
    }

    /// Reset the cell and the cycle counter
    pub fn reset(&mut self) {
        self.cell.reset();
        self.current_cycle = 0;
    }

    /// Run one evaluation step with the clock at `level`, returns the passes used
    ///
    /// `eval()` is repeated while the cell asks for it, up to the configured limit.
    pub fn step(&mut self, level: bool) -> u32 {
        self.cell.clock_mut().set(level);

        let mut passes = 1;
        while self.cell.eval() {
            if passes >= self.config.max_settle_passes {
                warn!(
                    "Cell did not settle after {} passes in cycle {}",
                    passes, self.current_cycle
                );
                break;
            }
            // The edge is consumed by the first pass
            let level = self.cell.clock().curr();
            self.cell.clock_mut().hold(level);
            passes += 1;
        }
        passes
    }

    /// Run one full clock cycle: falling step then rising step
    pub fn cycle(&mut self) {
        self.current_cycle += 1;
        debug!("=== Simulation Cycle {} ===", self.current_cycle);
        self.step(false);
        self.step(true);
    }

    /// Run `cycles` full clock cycles, returns the final cycle count
    pub fn run(&mut self, cycles: u64) -> u64 {
        for _ in 0..cycles {
            self.cycle();
        }
        self.current_cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::values::signal::ClockInput;

    /// Counts edges and optionally asks for extra passes
    struct EdgeCounter {
        clk: ClockInput,
        samples: u32,
        commits: u32,
        evals: u32,
        extra_passes: u32,
    }

    impl EdgeCounter {
        fn new(extra_passes: u32) -> Self {
            Self {
                clk: ClockInput::new(),
                samples: 0,
                commits: 0,
                evals: 0,
                extra_passes,
            }
        }
    }

    impl Clocked for EdgeCounter {
        fn clock(&self) -> &ClockInput {
            &self.clk
        }

        fn clock_mut(&mut self) -> &mut ClockInput {
            &mut self.clk
        }

        fn sample(&mut self) {
            self.samples += 1;
        }

        fn commit(&mut self) {
            self.commits += 1;
        }
    }

    impl BlackBox for EdgeCounter {
        fn reset(&mut self) {
            self.samples = 0;
            self.commits = 0;
        }

        fn eval(&mut self) -> bool {
            self.evals += 1;
            if self.clk.negedge() {
                self.sample();
            }
            if self.clk.posedge() {
                self.commit();
            }
            if self.extra_passes > 0 {
                self.extra_passes -= 1;
                return true;
            }
            false
        }
    }

    #[test]
    fn test_cycle_sequence() {
        let mut engine = CycleEngine::new(EdgeCounter::new(0));
        assert_eq!(engine.run(3), 3);
        assert_eq!(engine.cell().samples, 3);
        assert_eq!(engine.cell().commits, 3);
        assert_eq!(engine.cell().evals, 6);
    }

    #[test]
    fn test_settle_passes_do_not_repeat_edges() {
        let mut engine = CycleEngine::new(EdgeCounter::new(2));
        assert_eq!(engine.step(false), 3);
        assert_eq!(engine.cell().samples, 1);
        assert_eq!(engine.step(true), 1);
        assert_eq!(engine.cell().commits, 1);
    }

    #[test]
    fn test_settle_limit() {
        let config = EngineConfig::new().with_max_settle_passes(2);
        let mut engine = CycleEngine::with_config(EdgeCounter::new(10), config);
        assert_eq!(engine.step(true), 2);
    }

    #[test]
    fn test_reset() {
        let mut engine = CycleEngine::new(EdgeCounter::new(0));
        engine.run(2);
        engine.reset();
        assert_eq!(engine.current_cycle(), 0);
        assert_eq!(engine.cell().commits, 0);
        assert_eq!(engine.into_cell().evals, 4);
    }
}
