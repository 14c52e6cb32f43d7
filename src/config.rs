//! Load configuration

use serde::{Deserialize, Serialize};

/// Which signal decides whether 16/32-bit components are swapped on read
///
/// The header byte order and the FillOrder tag are independent hints; both
/// are reported in the descriptor whatever policy is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentSwap {
    /// Swap when the file byte order differs from the host
    #[default]
    FileOrder,
    /// Swap when the FillOrder tag equals 1
    FillOrder,
    /// Swap when either of the above asks for it
    Either,
    /// Never swap; components come back in file order
    Never,
}

impl ComponentSwap {
    /// Applies the policy to the two signals
    pub fn should_swap(&self, foreign_byte_order: bool, fill_order_hint: bool) -> bool {
        match self {
            ComponentSwap::FileOrder => foreign_byte_order,
            ComponentSwap::FillOrder => fill_order_hint,
            ComponentSwap::Either => foreign_byte_order || fill_order_hint,
            ComponentSwap::Never => false,
        }
    }
}

/// Options for the directory reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    pub component_swap: ComponentSwap,
}

impl LoadOptions {
    pub fn with_component_swap(mut self, component_swap: ComponentSwap) -> Self {
        self.component_swap = component_swap;
        self
    }
}
