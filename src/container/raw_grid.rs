// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `RawGridElements` container, which aggregates all
//! connector-like assets of one grid model.

use std::collections::BTreeSet;

use uuid::Uuid;

use crate::container::{merge_by_uuid, MergePolicy};
use crate::model::{
    Line, MeasurementUnit, Node, RawGridElement, Switch, Transformer2W, Transformer3W,
};
use crate::Error;

/// The nodes, lines, transformers, switches and measurement units of one
/// grid model, partitioned into typed sub-sets.
///
/// Every sub-set is kept sorted by uuid, so all views over a container are
/// deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct RawGridElements {
    nodes: Vec<Node>,
    lines: Vec<Line>,
    transformers_2w: Vec<Transformer2W>,
    transformers_3w: Vec<Transformer3W>,
    switches: Vec<Switch>,
    measurement_units: Vec<MeasurementUnit>,
}

impl RawGridElements {
    /// Creates a container from a flat list of mixed-variant elements,
    /// partitioning them by variant.
    ///
    /// Elements that are equal in value are silently de-duplicated; two
    /// different elements sharing a uuid within one variant are rejected.
    pub fn from_elements(
        elements: impl IntoIterator<Item = RawGridElement>,
    ) -> Result<Self, Error> {
        let mut nodes = vec![];
        let mut lines = vec![];
        let mut transformers_2w = vec![];
        let mut transformers_3w = vec![];
        let mut switches = vec![];
        let mut measurement_units = vec![];

        for element in elements {
            match element {
                RawGridElement::Node(node) => nodes.push(node),
                RawGridElement::Line(line) => lines.push(line),
                RawGridElement::Transformer2W(transformer) => transformers_2w.push(transformer),
                RawGridElement::Transformer3W(transformer) => transformers_3w.push(transformer),
                RawGridElement::Switch(switch) => switches.push(switch),
                RawGridElement::MeasurementUnit(unit) => measurement_units.push(unit),
            }
        }

        Ok(Self {
            nodes: merge_by_uuid(nodes, |n| n.uuid, MergePolicy::Strict)?,
            lines: merge_by_uuid(lines, |l| l.uuid, MergePolicy::Strict)?,
            transformers_2w: merge_by_uuid(transformers_2w, |t| t.uuid, MergePolicy::Strict)?,
            transformers_3w: merge_by_uuid(transformers_3w, |t| t.uuid, MergePolicy::Strict)?,
            switches: merge_by_uuid(switches, |s| s.uuid, MergePolicy::Strict)?,
            measurement_units: merge_by_uuid(measurement_units, |m| m.uuid, MergePolicy::Strict)?,
        })
    }

    /// Creates a container as the union of the given containers, resolving
    /// uuid collisions according to the given policy.
    pub fn from_containers(
        containers: &[RawGridElements],
        policy: MergePolicy,
    ) -> Result<Self, Error> {
        Ok(Self {
            nodes: merge_by_uuid(
                containers.iter().flat_map(|c| c.nodes.iter().cloned()),
                |n| n.uuid,
                policy,
            )?,
            lines: merge_by_uuid(
                containers.iter().flat_map(|c| c.lines.iter().cloned()),
                |l| l.uuid,
                policy,
            )?,
            transformers_2w: merge_by_uuid(
                containers
                    .iter()
                    .flat_map(|c| c.transformers_2w.iter().cloned()),
                |t| t.uuid,
                policy,
            )?,
            transformers_3w: merge_by_uuid(
                containers
                    .iter()
                    .flat_map(|c| c.transformers_3w.iter().cloned()),
                |t| t.uuid,
                policy,
            )?,
            switches: merge_by_uuid(
                containers.iter().flat_map(|c| c.switches.iter().cloned()),
                |s| s.uuid,
                policy,
            )?,
            measurement_units: merge_by_uuid(
                containers
                    .iter()
                    .flat_map(|c| c.measurement_units.iter().cloned()),
                |m| m.uuid,
                policy,
            )?,
        })
    }

    /// Returns the nodes of the container, sorted by uuid.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the lines of the container, sorted by uuid.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns the two winding transformers of the container, sorted by uuid.
    pub fn transformers_2w(&self) -> &[Transformer2W] {
        &self.transformers_2w
    }

    /// Returns the three winding transformers of the container, sorted by
    /// uuid.
    pub fn transformers_3w(&self) -> &[Transformer3W] {
        &self.transformers_3w
    }

    /// Returns the switches of the container, sorted by uuid.
    pub fn switches(&self) -> &[Switch] {
        &self.switches
    }

    /// Returns the measurement units of the container, sorted by uuid.
    pub fn measurement_units(&self) -> &[MeasurementUnit] {
        &self.measurement_units
    }

    /// Returns the node with the given uuid, if it is part of the container.
    pub fn node(&self, uuid: Uuid) -> Result<&Node, Error> {
        self.nodes
            .binary_search_by(|n| n.uuid.cmp(&uuid))
            .map(|i| &self.nodes[i])
            .map_err(|_| Error::entity_not_found(format!("Node with uuid {uuid} not found.")))
    }

    /// Returns all elements of the container as one flattened list.
    pub fn all_elements(&self) -> Vec<RawGridElement> {
        let mut elements: Vec<RawGridElement> = self
            .nodes
            .iter()
            .cloned()
            .map(RawGridElement::Node)
            .collect();
        elements.extend(self.lines.iter().cloned().map(RawGridElement::Line));
        elements.extend(
            self.transformers_2w
                .iter()
                .cloned()
                .map(RawGridElement::Transformer2W),
        );
        elements.extend(
            self.transformers_3w
                .iter()
                .cloned()
                .map(RawGridElement::Transformer3W),
        );
        elements.extend(self.switches.iter().cloned().map(RawGridElement::Switch));
        elements.extend(
            self.measurement_units
                .iter()
                .cloned()
                .map(RawGridElement::MeasurementUnit),
        );
        elements
    }

    /// Returns the uuids of all connectors that are wholly or partially
    /// inside the given subnet, i.e. that have at least one port node
    /// carrying the given subnet number.
    pub fn connector_ids_in_subnet(&self, subnet: i32) -> BTreeSet<Uuid> {
        let mut ids = BTreeSet::new();

        for line in &self.lines {
            if line.node_a.subnet == subnet || line.node_b.subnet == subnet {
                ids.insert(line.uuid);
            }
        }
        for transformer in &self.transformers_2w {
            if transformer.node_a.subnet == subnet || transformer.node_b.subnet == subnet {
                ids.insert(transformer.uuid);
            }
        }
        for transformer in &self.transformers_3w {
            if [
                transformer.node_a.subnet,
                transformer.node_b.subnet,
                transformer.node_c.subnet,
            ]
            .contains(&subnet)
            {
                ids.insert(transformer.uuid);
            }
        }
        for switch in &self.switches {
            if switch.node_a.subnet == subnet || switch.node_b.subnet == subnet {
                ids.insert(switch.uuid);
            }
        }
        for unit in &self.measurement_units {
            if unit.node.subnet == subnet {
                ids.insert(unit.uuid);
            }
        }

        ids
    }
}
