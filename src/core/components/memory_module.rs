use crate::core::components::port_specs::PortSpec;
use crate::core::components::traits::{BlackBox, BlackBoxFactory, Clocked};
use crate::core::memory::config::{validate_address_width, MemoryConfig};
use crate::core::memory::errors::MemoryError;
use crate::core::memory::init;
use crate::core::types::CellId;
use crate::core::values::metadata::MetadataMap;
use crate::core::values::signal::{ClockInput, Signal};
use log::{debug, info, trace};
use std::io::Read;

/// Cell type name of the memory black box
pub const MEMSIM_CELL_TYPE: &str = "memsim_data";
/// Width of a stored word in bits
pub const WORD_WIDTH: u32 = 32;

/// Inputs latched on the most recent sampling edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapturedTransaction {
    pub addr: u32,
    pub wdata: u32,
    pub we: bool,
}

/// Port set of the memory cell
#[derive(Debug, Clone)]
pub struct MemoryPorts {
    pub clk: ClockInput,
    pub mem_addr: Signal,
    pub mem_wdata: Signal,
    pub mem_we: Signal,
    pub mem_rdata: Signal,
}

impl MemoryPorts {
    fn new(address_width: u32) -> Self {
        Self {
            clk: ClockInput::new(),
            mem_addr: Signal::new(address_width),
            mem_wdata: Signal::new(WORD_WIDTH),
            mem_we: Signal::new(1),
            mem_rdata: Signal::new(WORD_WIDTH),
        }
    }
}

/// Single-port synchronous RAM
///
/// Inputs are sampled on the falling clock edge; on the rising edge the word
/// at the sampled address is driven on `mem_rdata` and then, if write enable
/// was sampled high, overwritten with the sampled write data. A read and a
/// write to the same address in one cycle therefore returns the old word.
pub struct MemoryModel {
    id: CellId,
    address_width: u32,
    mem: Vec<u32>,
    captured: CapturedTransaction,
    ports: MemoryPorts,
}

impl MemoryModel {
    /// Create a memory and load it from the configured init file
    pub fn new(id: CellId, config: &MemoryConfig) -> Result<Self, MemoryError> {
        config.validate()?;
        let mut model = Self::blank(id, config.address_width);
        let loaded = init::load_file(&config.init_file, &mut model.mem)?;
        model.log_loaded(loaded, &config.init_file.display().to_string());
        Ok(model)
    }

    /// Create a memory and load it from an already open source
    pub fn from_reader<R: Read>(
        id: CellId,
        address_width: u32,
        reader: R,
    ) -> Result<Self, MemoryError> {
        validate_address_width(address_width)?;
        let mut model = Self::blank(id, address_width);
        let loaded = init::load_words(reader, &mut model.mem);
        model.log_loaded(loaded, "reader");
        Ok(model)
    }

    fn blank(id: CellId, address_width: u32) -> Self {
        Self {
            id,
            address_width,
            mem: vec![0; 1usize << address_width],
            captured: CapturedTransaction::default(),
            ports: MemoryPorts::new(address_width),
        }
    }

    fn log_loaded(&self, loaded: usize, source: &str) {
        if loaded < self.mem.len() {
            debug!(
                "[Memory {}] {} supplied {} of {} words, rest left zero",
                self.id.name(),
                source,
                loaded,
                self.mem.len()
            );
        }
        info!(
            "[Memory {}] Loaded {} words from {} (depth {})",
            self.id.name(),
            loaded,
            source,
            self.mem.len()
        );
    }

    /// Port table of a memory cell with the given address width
    pub fn port_specs(address_width: u32) -> Vec<PortSpec> {
        vec![
            PortSpec::input("clk", 1)
                .with_description("sampling on falling, commit on rising edge"),
            PortSpec::input("mem_addr", address_width),
            PortSpec::input("mem_wdata", WORD_WIDTH),
            PortSpec::input("mem_we", 1),
            PortSpec::output("mem_rdata", WORD_WIDTH),
        ]
    }

    pub fn id(&self) -> &CellId {
        &self.id
    }

    pub fn address_width(&self) -> u32 {
        self.address_width
    }

    /// Number of words in the array
    pub fn depth(&self) -> usize {
        self.mem.len()
    }

    /// Whole array contents
    pub fn words(&self) -> &[u32] {
        &self.mem
    }

    /// Read a word without simulating a transaction; the address is masked to the address width
    pub fn peek(&self, addr: u32) -> u32 {
        self.mem[self.index(addr)]
    }

    /// Backdoor write, bypassing the ports and the clock
    pub fn poke(&mut self, addr: u32, word: u32) {
        let index = self.index(addr);
        self.mem[index] = word;
    }

    /// Transaction latched on the last sampling edge
    pub fn captured(&self) -> CapturedTransaction {
        self.captured
    }

    pub fn ports(&self) -> &MemoryPorts {
        &self.ports
    }

    pub fn ports_mut(&mut self) -> &mut MemoryPorts {
        &mut self.ports
    }

    /// Array index for `addr`; the array is always 2^address_width long
    fn index(&self, addr: u32) -> usize {
        addr as usize & (self.mem.len() - 1)
    }
}

impl Clocked for MemoryModel {
    fn clock(&self) -> &ClockInput {
        &self.ports.clk
    }

    fn clock_mut(&mut self) -> &mut ClockInput {
        &mut self.ports.clk
    }

    fn sample(&mut self) {
        self.captured = CapturedTransaction {
            addr: self.ports.mem_addr.get(),
            wdata: self.ports.mem_wdata.get(),
            we: self.ports.mem_we.is_high(),
        };
        trace!("[Memory {}] Sampled {:?}", self.id.name(), self.captured);
    }

    fn commit(&mut self) {
        let index = self.index(self.captured.addr);

        // Read first so a same-cycle write returns the old word
        let rdata = self.mem[index];
        self.ports.mem_rdata.set(rdata);

        if self.captured.we {
            self.mem[index] = self.captured.wdata;
        }
        trace!(
            "[Memory {}] Commit addr={:#x} rdata={:#010x} we={}",
            self.id.name(),
            self.captured.addr,
            rdata,
            self.captured.we
        );
    }
}

impl BlackBox for MemoryModel {
    /// Memory contents survive reset, as on real synchronous RAM
    fn reset(&mut self) {}

    fn eval(&mut self) -> bool {
        if self.ports.clk.negedge() {
            self.sample();
        }
        if self.ports.clk.posedge() {
            self.commit();
        }
        false
    }
}

impl BlackBoxFactory for MemoryModel {
    const CELL_TYPE: &'static str = MEMSIM_CELL_TYPE;

    type Error = MemoryError;

    fn create(
        name: &str,
        parameters: &MetadataMap,
        attributes: &MetadataMap,
    ) -> Result<Self, MemoryError> {
        let config = MemoryConfig::from_parameters(parameters)?;
        if !attributes.is_empty() {
            trace!("[Memory {}] Ignoring {} attributes", name, attributes.len());
        }
        Self::new(CellId::new(name, Self::CELL_TYPE), &config)
    }
}
