use serde::Deserialize;

/// Port specification for a black-box cell interface
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PortSpec {
    /// Port name as it appears in the netlist
    pub name: String,
    /// Signal direction seen from the cell
    pub direction: Direction,
    /// Width in bits
    pub width: u32,
    /// Optional description for documentation
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
}

impl PortSpec {
    /// Create a new input port
    pub fn input(name: &str, width: u32) -> Self {
        Self {
            name: name.to_string(),
            direction: Direction::In,
            width,
            description: None,
        }
    }

    /// Create a new output port
    pub fn output(name: &str, width: u32) -> Self {
        Self {
            name: name.to_string(),
            direction: Direction::Out,
            width,
            description: None,
        }
    }

    /// Add a description to this port
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Check that a host-side wire of `width` bits and `direction` fits this port
    pub fn accepts(&self, direction: Direction, width: u32) -> Result<(), String> {
        if self.direction != direction {
            return Err(format!(
                "Port '{}' is {:?}, host wired it as {:?}",
                self.name, self.direction, direction
            ));
        }
        if self.width != width {
            return Err(format!(
                "Port '{}' is {} bits wide, host wire is {} bits",
                self.name, self.width, width
            ));
        }
        Ok(())
    }
}
