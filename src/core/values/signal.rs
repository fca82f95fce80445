/// A port value of fixed bit width
///
/// Every value driven onto the signal is truncated to the declared width,
/// the way a narrower bus drops the high bits of whatever is put on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signal {
    width: u32,
    value: u32,
}

impl Signal {
    /// Create a zero-valued signal of the given width (0..=32 bits)
    pub fn new(width: u32) -> Self {
        debug_assert!(width <= 32, "signal width {} out of range", width);
        Self { width, value: 0 }
    }

    /// Declared width in bits
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Bit mask covering the declared width
    pub fn mask(&self) -> u32 {
        if self.width >= 32 {
            u32::MAX
        } else {
            (1u32 << self.width) - 1
        }
    }

    /// Current value
    pub fn get(&self) -> u32 {
        self.value
    }

    /// Current value as a single bit
    pub fn is_high(&self) -> bool {
        self.value & 1 != 0
    }

    /// Drive a new value, masked to the declared width
    pub fn set(&mut self, value: u32) {
        self.value = value & self.mask();
    }

    /// Drive a single bit
    pub fn set_bool(&mut self, level: bool) {
        self.set(u32::from(level));
    }
}

/// One-bit clock input with the previous/current snapshot used for edge detection
///
/// The host updates the snapshot once per evaluation step with [`ClockInput::set`];
/// the edge predicates then describe the transition that happened in that step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockInput {
    prev: bool,
    curr: bool,
}

impl ClockInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the snapshot: the current level becomes the previous one
    pub fn set(&mut self, level: bool) {
        self.prev = self.curr;
        self.curr = level;
    }

    /// Hold the clock at `level` with no edge pending
    pub fn hold(&mut self, level: bool) {
        self.prev = level;
        self.curr = level;
    }

    /// Level seen in the previous step
    pub fn prev(&self) -> bool {
        self.prev
    }

    /// Level seen in this step
    pub fn curr(&self) -> bool {
        self.curr
    }

    /// Rising transition (previous low, current high)
    pub fn posedge(&self) -> bool {
        !self.prev && self.curr
    }

    /// Falling transition (previous high, current low)
    pub fn negedge(&self) -> bool {
        self.prev && !self.curr
    }
}
