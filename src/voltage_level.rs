// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `VoltageLevel` struct, which classifies the nodes
//! of a grid by their nominal operating voltage.

use crate::quantity::Kilovolts;

/// The voltage level a node is operated at, e.g. "MV" at 20 kV.
///
/// Two voltage levels are equal when both their identifier and their nominal
/// voltage are equal.
#[derive(Clone, Debug, PartialEq)]
pub struct VoltageLevel {
    /// Identifier of the level, e.g. "LV", "MV" or "HV".
    pub id: String,
    /// The nominal voltage of the level.
    pub nominal_voltage: Kilovolts,
}

impl VoltageLevel {
    /// Creates a new voltage level.
    pub fn new(id: impl Into<String>, nominal_voltage: Kilovolts) -> Self {
        Self {
            id: id.into(),
            nominal_voltage,
        }
    }
}

impl std::fmt::Display for VoltageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.nominal_voltage)
    }
}
