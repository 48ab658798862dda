// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `Node` struct, the electrical connection point
//! all other assets attach to.

use uuid::Uuid;

use crate::quantity::{Kilovolts, PerUnit};
use crate::voltage_level::VoltageLevel;

/// A geographic position in WGS84 coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPosition {
    pub lat: f64,
    pub lon: f64,
}

/// An electrical node of the grid.
///
/// Nodes are immutable values; the update engines rewrite the `slack`,
/// `subnet` and `voltage_level` fields by producing a new `Node` with the
/// same uuid through the `with_*` constructors.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub uuid: Uuid,
    /// Human readable identifier.
    pub id: String,
    /// Target voltage set point, relative to the rated voltage.
    pub v_target: PerUnit,
    /// Rated voltage, equal to the nominal voltage of the voltage level.
    pub v_rated: Kilovolts,
    /// Whether this node serves as a power-flow boundary condition.
    pub slack: bool,
    pub geo_position: Option<GeoPosition>,
    pub voltage_level: VoltageLevel,
    /// The galvanically connected portion of the grid this node belongs to.
    pub subnet: i32,
}

impl Node {
    /// Creates a new node.  The rated voltage is taken from the given
    /// voltage level.
    pub fn new(
        uuid: Uuid,
        id: impl Into<String>,
        v_target: PerUnit,
        slack: bool,
        geo_position: Option<GeoPosition>,
        voltage_level: VoltageLevel,
        subnet: i32,
    ) -> Self {
        Self {
            uuid,
            id: id.into(),
            v_target,
            v_rated: voltage_level.nominal_voltage,
            slack,
            geo_position,
            voltage_level,
            subnet,
        }
    }

    /// Returns a copy of this node with the slack flag replaced.
    pub fn with_slack(mut self, slack: bool) -> Self {
        self.slack = slack;
        self
    }

    /// Returns a copy of this node with the subnet number replaced.
    pub fn with_subnet(mut self, subnet: i32) -> Self {
        self.subnet = subnet;
        self
    }

    /// Returns a copy of this node with the voltage level replaced.  The
    /// rated voltage follows the new level's nominal voltage.
    pub fn with_voltage_level(mut self, voltage_level: VoltageLevel) -> Self {
        self.v_rated = voltage_level.nominal_voltage;
        self.voltage_level = voltage_level;
        self
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_node() -> Node {
        Node::new(
            Uuid::new_v4(),
            "node_a",
            PerUnit::new(1.0),
            false,
            None,
            VoltageLevel::new("MV", Kilovolts::new(20.0)),
            1,
        )
    }

    #[test]
    fn test_with_slack() {
        let node = test_node();
        let slack = node.clone().with_slack(true);

        assert!(slack.slack);
        assert_eq!(slack.uuid, node.uuid);
        assert_eq!(slack.clone().with_slack(false), node);
    }

    #[test]
    fn test_with_voltage_level() {
        let node = test_node();
        let lv = VoltageLevel::new("LV", Kilovolts::new(0.4));
        let updated = node.clone().with_voltage_level(lv.clone());

        assert_eq!(updated.voltage_level, lv);
        assert_eq!(updated.v_rated, Kilovolts::new(0.4));
        assert_eq!(updated.uuid, node.uuid);
        assert_eq!(updated.subnet, node.subnet);
    }
}
