/// Identifier of a black-box cell instance in the host netlist
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId {
    pub(crate) name: String,
    pub(crate) cell_type: String,
}

impl CellId {
    /// Create a new cell ID
    pub fn new(name: impl Into<String>, cell_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cell_type: cell_type.into(),
        }
    }

    /// Get the hierarchical instance name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the cell type the instance was created from
    pub fn cell_type(&self) -> &str {
        &self.cell_type
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.cell_type)
    }
}
