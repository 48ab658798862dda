// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Orchestration of a voltage level change for one subnet of a grid
//! container.
//!
//! The change is applied in one sweep: the subnet's nodes are replaced,
//! every connector referencing a replaced node is rewritten (boundary
//! connectors straddle two subnets, so the substitution covers the whole
//! raw grid), the connectors inside the subnet are re-typed against the new
//! voltage while preserving their previous aggregate capacity, and the
//! substitution is propagated into participants and graphics.  The result
//! is reassembled through the container's own constructor; a failing
//! re-typing aborts the whole update.

use std::collections::HashMap;

use uuid::Uuid;

use crate::container::{
    GraphicElements, GridContainer, JointGridContainer, RawGridElements, SubGridContainer,
    SystemParticipants,
};
use crate::model::{
    GraphicElement, Line, LineType, Node, RawGridElement, SystemParticipant, Transformer2WType,
    Transformer3WType,
};
use crate::update::assets;
use crate::voltage_level::VoltageLevel;
use crate::Error;

/// The catalog of types available for re-typing connectors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeCatalog {
    pub line_types: Vec<LineType>,
    pub transformer_2w_types: Vec<Transformer2WType>,
    pub transformer_3w_types: Vec<Transformer3WType>,
}

/// Changes the voltage level of the subnet held by the given sub-grid
/// container.
pub fn update_sub_grid_voltage_level(
    container: &SubGridContainer,
    new_level: &VoltageLevel,
    catalog: &TypeCatalog,
) -> Result<SubGridContainer, Error> {
    let (raw_grid, participants, graphics) = update_parts(
        container.raw_grid(),
        container.participants(),
        container.graphics(),
        container.subnet(),
        new_level,
        catalog,
    )?;
    SubGridContainer::try_new(
        container.name(),
        container.subnet(),
        raw_grid,
        participants,
        graphics,
    )
}

/// Changes the voltage level of one subnet of the given joint grid
/// container.  The topology graph of the result is derived anew.
pub fn update_joint_grid_voltage_level(
    container: &JointGridContainer,
    subnet: i32,
    new_level: &VoltageLevel,
    catalog: &TypeCatalog,
) -> Result<JointGridContainer, Error> {
    // Reject unknown subnets up front instead of silently returning an
    // unchanged copy.
    container.topology().sub_grid(subnet)?;

    let (raw_grid, participants, graphics) = update_parts(
        container.raw_grid(),
        container.participants(),
        container.graphics(),
        subnet,
        new_level,
        catalog,
    )?;
    JointGridContainer::try_new(container.name(), raw_grid, participants, graphics)
}

fn update_parts(
    raw_grid: &RawGridElements,
    participants: &SystemParticipants,
    graphics: &GraphicElements,
    subnet: i32,
    new_level: &VoltageLevel,
    catalog: &TypeCatalog,
) -> Result<(RawGridElements, SystemParticipants, GraphicElements), Error> {
    let node_substitutions: HashMap<Uuid, Node> = raw_grid
        .nodes()
        .iter()
        .filter(|node| node.subnet == subnet)
        .map(|node| {
            (
                node.uuid,
                node.clone().with_voltage_level(new_level.clone()),
            )
        })
        .collect();

    let affected_connectors = raw_grid.connector_ids_in_subnet(subnet);

    let mut elements: Vec<RawGridElement> = raw_grid
        .nodes()
        .iter()
        .map(|node| {
            node_substitutions
                .get(&node.uuid)
                .cloned()
                .unwrap_or_else(|| node.clone())
        })
        .map(RawGridElement::Node)
        .collect();

    // Lines rewritten here are substituted into the line graphics below.
    let mut line_substitutions: HashMap<Uuid, Line> = HashMap::new();

    for line in raw_grid.lines() {
        let mut updated = line.substituted(&node_substitutions);
        if affected_connectors.contains(&line.uuid) {
            let required_current =
                line.line_type.max_current * f64::from(line.parallel_devices);
            updated = assets::update_line(
                &updated,
                &catalog.line_types,
                updated.node_a.voltage_level.nominal_voltage,
                required_current,
            )?;
        }
        if updated != *line {
            line_substitutions.insert(line.uuid, updated.clone());
        }
        elements.push(RawGridElement::Line(updated));
    }

    for transformer in raw_grid.transformers_2w() {
        let mut updated = transformer.substituted(&node_substitutions);
        if affected_connectors.contains(&transformer.uuid) {
            let required_power = transformer.transformer_type.rated_power
                * f64::from(transformer.parallel_devices);
            updated = assets::update_transformer_2w(
                &updated,
                &catalog.transformer_2w_types,
                updated.node_a.voltage_level.nominal_voltage,
                updated.node_b.voltage_level.nominal_voltage,
                required_power,
            )?;
        }
        elements.push(RawGridElement::Transformer2W(updated));
    }

    for transformer in raw_grid.transformers_3w() {
        let mut updated = transformer.substituted(&node_substitutions);
        if affected_connectors.contains(&transformer.uuid) {
            let current = &transformer.transformer_type;
            let scale = f64::from(transformer.parallel_devices);
            updated = assets::update_transformer_3w(
                &updated,
                &catalog.transformer_3w_types,
                updated.node_a.voltage_level.nominal_voltage,
                updated.node_b.voltage_level.nominal_voltage,
                updated.node_c.voltage_level.nominal_voltage,
                current.rated_power_a * scale,
                current.rated_power_b * scale,
                current.rated_power_c * scale,
            )?;
        }
        elements.push(RawGridElement::Transformer3W(updated));
    }

    for switch in raw_grid.switches() {
        elements.push(RawGridElement::Switch(switch.substituted(&node_substitutions)));
    }
    for unit in raw_grid.measurement_units() {
        elements.push(RawGridElement::MeasurementUnit(
            unit.substituted(&node_substitutions),
        ));
    }

    let updated_participants: Vec<SystemParticipant> = participants
        .all_elements()
        .into_iter()
        .map(|participant| match node_substitutions.get(&participant.node().uuid) {
            Some(node) => participant.with_node(node.clone()),
            None => participant,
        })
        .collect();

    let updated_graphics: Vec<GraphicElement> = graphics
        .all_elements()
        .into_iter()
        .map(|graphic| match graphic {
            GraphicElement::Node(graphic) => {
                GraphicElement::Node(match node_substitutions.get(&graphic.node.uuid) {
                    Some(node) => graphic.with_node(node.clone()),
                    None => graphic,
                })
            }
            GraphicElement::Line(graphic) => {
                GraphicElement::Line(match line_substitutions.get(&graphic.line.uuid) {
                    Some(line) => graphic.with_line(line.clone()),
                    None => graphic,
                })
            }
        })
        .collect();

    Ok((
        RawGridElements::from_elements(elements)?,
        SystemParticipants::from_participants(updated_participants)?,
        GraphicElements::from_graphics(updated_graphics)?,
    ))
}
