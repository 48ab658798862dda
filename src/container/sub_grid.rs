// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `SubGridContainer`, the whole-grid view over a
//! single subnet.

use crate::container::{GraphicElements, GridContainer, RawGridElements, SystemParticipants};
use crate::voltage_level::VoltageLevel;
use crate::Error;

/// A grid container holding exactly one subnet.
///
/// Besides the subnet's own nodes, the raw grid elements may contain
/// boundary nodes: ports of transformers whose other side belongs to a
/// different subnet.  Boundary nodes do not contribute to the predominant
/// voltage level.
#[derive(Clone, Debug, PartialEq)]
pub struct SubGridContainer {
    name: String,
    subnet: i32,
    predominant_voltage_level: VoltageLevel,
    raw_grid: RawGridElements,
    participants: SystemParticipants,
    graphics: GraphicElements,
}

impl SubGridContainer {
    /// Creates a new sub-grid container and derives its predominant voltage
    /// level.
    ///
    /// Returns an error if no node of the raw grid elements carries the
    /// given subnet number.
    pub fn try_new(
        name: impl Into<String>,
        subnet: i32,
        raw_grid: RawGridElements,
        participants: SystemParticipants,
        graphics: GraphicElements,
    ) -> Result<Self, Error> {
        let predominant_voltage_level = predominant_voltage_level(&raw_grid, subnet)?;

        Ok(Self {
            name: name.into(),
            subnet,
            predominant_voltage_level,
            raw_grid,
            participants,
            graphics,
        })
    }

    /// Returns the subnet number of the container.
    pub fn subnet(&self) -> i32 {
        self.subnet
    }

    /// Returns the voltage level the majority of the subnet's nodes carry.
    pub fn predominant_voltage_level(&self) -> &VoltageLevel {
        &self.predominant_voltage_level
    }
}

impl GridContainer for SubGridContainer {
    fn name(&self) -> &str {
        &self.name
    }

    fn raw_grid(&self) -> &RawGridElements {
        &self.raw_grid
    }

    fn participants(&self) -> &SystemParticipants {
        &self.participants
    }

    fn graphics(&self) -> &GraphicElements {
        &self.graphics
    }
}

/// Determines the voltage level carried by the majority of the nodes of the
/// given subnet.  Ties are broken towards the lowest nominal voltage, which
/// biases the result towards the more restrictive operating assumption.
fn predominant_voltage_level(
    raw_grid: &RawGridElements,
    subnet: i32,
) -> Result<VoltageLevel, Error> {
    let mut counts: Vec<(&VoltageLevel, usize)> = vec![];

    for node in raw_grid.nodes().iter().filter(|n| n.subnet == subnet) {
        match counts.iter_mut().find(|(level, _)| *level == &node.voltage_level) {
            Some((_, count)) => *count += 1,
            None => counts.push((&node.voltage_level, 1)),
        }
    }

    counts
        .into_iter()
        .max_by(|(level_a, count_a), (level_b, count_b)| {
            count_a.cmp(count_b).then_with(|| {
                level_b
                    .nominal_voltage
                    .value()
                    .total_cmp(&level_a.nominal_voltage.value())
                    .then_with(|| level_b.id.cmp(&level_a.id))
            })
        })
        .map(|(level, _)| level.clone())
        .ok_or_else(|| {
            Error::invalid_container(format!("No node found for subnet {subnet}."))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::test_utils::{
        line_between, lv, mv, test_node, three_winding_grid, two_subnet_grid,
    };
    use crate::model::RawGridElement;
    use crate::quantity::Kilovolts;

    #[test]
    fn test_predominant_voltage_level() -> Result<(), Error> {
        let (raw, participants, graphics) = two_subnet_grid();
        let container = SubGridContainer::try_new("test_grid", 1, raw, participants, graphics)?;

        assert_eq!(container.subnet(), 1);
        assert_eq!(container.predominant_voltage_level(), &mv());
        assert_eq!(container.name(), "test_grid");
        Ok(())
    }

    #[test]
    fn test_boundary_nodes_are_ignored() -> Result<(), Error> {
        // The whole three winding fixture viewed as subnet 3 has a single LV
        // node; the HV and MV nodes belong to other subnets and must not
        // outvote it.
        let (raw, participants, graphics) = three_winding_grid();
        let container = SubGridContainer::try_new("test_grid", 3, raw, participants, graphics)?;

        assert_eq!(container.predominant_voltage_level(), &lv());
        Ok(())
    }

    #[test]
    fn test_tie_breaks_towards_lowest_nominal_voltage() -> Result<(), Error> {
        let a = test_node("a", mv(), 1);
        let b = test_node("b", mv(), 1);
        let c = test_node("c", lv(), 1);
        let d = test_node("d", lv(), 1);

        let raw = RawGridElements::from_elements([
            RawGridElement::Node(a.clone()),
            RawGridElement::Node(b),
            RawGridElement::Node(c.clone()),
            RawGridElement::Node(d),
            RawGridElement::Line(line_between(&a, &c)),
        ])?;
        let container = SubGridContainer::try_new(
            "test_grid",
            1,
            raw,
            SystemParticipants::from_participants([])?,
            GraphicElements::from_graphics([])?,
        )?;

        assert_eq!(container.predominant_voltage_level(), &lv());
        assert_eq!(
            container.predominant_voltage_level().nominal_voltage,
            Kilovolts::new(0.4)
        );
        Ok(())
    }

    #[test]
    fn test_missing_subnet_is_rejected() {
        let (raw, participants, graphics) = two_subnet_grid();
        let result = SubGridContainer::try_new("test_grid", 7, raw, participants, graphics);

        assert_eq!(
            result,
            Err(Error::invalid_container("No node found for subnet 7."))
        );
    }
}
