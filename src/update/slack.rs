// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Promotion of transformer-side nodes to slack nodes, producing a
//! power-flow-ready copy of a sub-grid container.
//!
//! For a two winding transformer the higher voltage side always becomes
//! the slack.  For a three winding transformer the choice depends on which
//! port the sub-grid contains: the primary port leaves the transformer
//! untouched, a secondary or tertiary port promotes the transformer's
//! internal node instead and demotes a slack-marked primary node.  In both
//! cases the internal node joins the node set, since the admittance matrix
//! of the sub-grid needs it even when it is no slack.

use std::collections::HashMap;

use uuid::Uuid;

use crate::container::{
    GraphicElements, GridContainer, RawGridElements, SubGridContainer,
};
use crate::model::{GraphicElement, Line, Node, RawGridElement, Transformer3W};
use crate::Error;

/// Produces a copy of the given sub-grid container with the appropriate
/// transformer-side nodes marked as slack.
///
/// The result keeps the subnet number, grid name and system participants of
/// the input; raw grid elements and graphics are rewritten as one atomic
/// substitution.
pub fn promote_slack_nodes(sub_grid: &SubGridContainer) -> Result<SubGridContainer, Error> {
    let raw_grid = sub_grid.raw_grid();

    let mut node_substitutions: HashMap<Uuid, Node> = HashMap::new();
    let mut internal_nodes: Vec<Node> = vec![];
    let mut transformer_3w_replacements: HashMap<Uuid, Transformer3W> = HashMap::new();

    for transformer in raw_grid.transformers_2w() {
        let high_voltage_port = if transformer.node_a.voltage_level.nominal_voltage
            >= transformer.node_b.voltage_level.nominal_voltage
        {
            &transformer.node_a
        } else {
            &transformer.node_b
        };
        if !high_voltage_port.slack {
            node_substitutions.insert(
                high_voltage_port.uuid,
                high_voltage_port.clone().with_slack(true),
            );
        }
    }

    for transformer in raw_grid.transformers_3w() {
        if transformer.node_a.subnet == sub_grid.subnet() {
            // The sub-grid contains the primary port; the internal node
            // only completes the node set.
            internal_nodes.push(transformer.internal_node.clone());
        } else {
            let promoted = transformer.clone().with_internal_slack(true);
            internal_nodes.push(promoted.internal_node.clone());
            transformer_3w_replacements.insert(transformer.uuid, promoted);

            // At most one external slack source per transformer branch.
            if transformer.node_a.slack {
                node_substitutions.insert(
                    transformer.node_a.uuid,
                    transformer.node_a.clone().with_slack(false),
                );
            }
        }
    }

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
    elements.extend(internal_nodes.into_iter().map(RawGridElement::Node));

    let mut line_substitutions: HashMap<Uuid, Line> = HashMap::new();
    for line in raw_grid.lines() {
        let updated = line.substituted(&node_substitutions);
        if updated != *line {
            line_substitutions.insert(line.uuid, updated.clone());
        }
        elements.push(RawGridElement::Line(updated));
    }
    for transformer in raw_grid.transformers_2w() {
        elements.push(RawGridElement::Transformer2W(
            transformer.substituted(&node_substitutions),
        ));
    }
    for transformer in raw_grid.transformers_3w() {
        let replaced = transformer_3w_replacements
            .get(&transformer.uuid)
            .unwrap_or(transformer);
        elements.push(RawGridElement::Transformer3W(
            replaced.substituted(&node_substitutions),
        ));
    }
    for switch in raw_grid.switches() {
        elements.push(RawGridElement::Switch(switch.substituted(&node_substitutions)));
    }
    for unit in raw_grid.measurement_units() {
        elements.push(RawGridElement::MeasurementUnit(
            unit.substituted(&node_substitutions),
        ));
    }

    let updated_graphics: Vec<GraphicElement> = sub_grid
        .graphics()
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

    SubGridContainer::try_new(
        sub_grid.name(),
        sub_grid.subnet(),
        RawGridElements::from_elements(elements)?,
        sub_grid.participants().clone(),
        GraphicElements::from_graphics(updated_graphics)?,
    )
}
