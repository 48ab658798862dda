// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The connector assets of a grid model: lines, transformers, switches and
//! measurement units.
//!
//! Connectors own copies of the nodes they connect.  Node substitution after
//! an update is performed with the `substituted` constructors, which swap
//! every referenced node whose uuid appears in a substitution map.

use std::collections::HashMap;

use uuid::Uuid;

use crate::model::node::Node;
use crate::model::types::{LineType, Transformer2WType, Transformer3WType};

/// Replaces a referenced node with its substitute, if one is registered.
fn swapped(node: &Node, substitutions: &HashMap<Uuid, Node>) -> Node {
    substitutions
        .get(&node.uuid)
        .cloned()
        .unwrap_or_else(|| node.clone())
}

/// An electrical line between two nodes of the same subnet.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub uuid: Uuid,
    pub id: String,
    pub node_a: Node,
    pub node_b: Node,
    pub line_type: LineType,
    pub length_km: f64,
    /// Number of identical lines installed in parallel, at least 1.
    pub parallel_devices: u32,
}

impl Line {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        uuid: Uuid,
        id: impl Into<String>,
        node_a: Node,
        node_b: Node,
        line_type: LineType,
        length_km: f64,
        parallel_devices: u32,
    ) -> Self {
        Self {
            uuid,
            id: id.into(),
            node_a,
            node_b,
            line_type,
            length_km,
            parallel_devices,
        }
    }

    /// Returns a copy of this line with the type and parallel device count
    /// replaced.  The referenced nodes are untouched.
    pub fn with_type(&self, line_type: LineType, parallel_devices: u32) -> Self {
        Self {
            line_type,
            parallel_devices,
            ..self.clone()
        }
    }

    /// Returns a copy of this line with every referenced node swapped for
    /// its registered substitute.
    pub fn substituted(&self, substitutions: &HashMap<Uuid, Node>) -> Self {
        Self {
            node_a: swapped(&self.node_a, substitutions),
            node_b: swapped(&self.node_b, substitutions),
            ..self.clone()
        }
    }
}

/// A two winding transformer.  Port A is the high voltage side.
#[derive(Clone, Debug, PartialEq)]
pub struct Transformer2W {
    pub uuid: Uuid,
    pub id: String,
    pub node_a: Node,
    pub node_b: Node,
    pub transformer_type: Transformer2WType,
    pub tap_pos: i32,
    pub parallel_devices: u32,
}

impl Transformer2W {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        uuid: Uuid,
        id: impl Into<String>,
        node_a: Node,
        node_b: Node,
        transformer_type: Transformer2WType,
        tap_pos: i32,
        parallel_devices: u32,
    ) -> Self {
        Self {
            uuid,
            id: id.into(),
            node_a,
            node_b,
            transformer_type,
            tap_pos,
            parallel_devices,
        }
    }

    /// Returns a copy with the type and parallel device count replaced.
    pub fn with_type(&self, transformer_type: Transformer2WType, parallel_devices: u32) -> Self {
        Self {
            transformer_type,
            parallel_devices,
            ..self.clone()
        }
    }

    /// Returns a copy with every referenced node swapped for its registered
    /// substitute.
    pub fn substituted(&self, substitutions: &HashMap<Uuid, Node>) -> Self {
        Self {
            node_a: swapped(&self.node_a, substitutions),
            node_b: swapped(&self.node_b, substitutions),
            ..self.clone()
        }
    }
}

/// A three winding transformer.
///
/// Besides its three ports it owns a synthetic internal node that models the
/// star point of the winding arrangement.  The internal node only becomes
/// part of a container's node set when a sub-grid is prepared for power-flow
/// calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct Transformer3W {
    pub uuid: Uuid,
    pub id: String,
    pub node_a: Node,
    pub node_b: Node,
    pub node_c: Node,
    pub internal_node: Node,
    pub transformer_type: Transformer3WType,
    /// Whether the internal node serves as the slack of a sub-grid.
    pub internal_slack: bool,
    pub tap_pos: i32,
    pub parallel_devices: u32,
}

impl Transformer3W {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        uuid: Uuid,
        id: impl Into<String>,
        node_a: Node,
        node_b: Node,
        node_c: Node,
        internal_node: Node,
        transformer_type: Transformer3WType,
        tap_pos: i32,
        parallel_devices: u32,
    ) -> Self {
        Self {
            uuid,
            id: id.into(),
            node_a,
            node_b,
            node_c,
            internal_node,
            transformer_type,
            internal_slack: false,
            tap_pos,
            parallel_devices,
        }
    }

    /// Returns a copy with the type and parallel device count replaced.
    pub fn with_type(&self, transformer_type: Transformer3WType, parallel_devices: u32) -> Self {
        Self {
            transformer_type,
            parallel_devices,
            ..self.clone()
        }
    }

    /// Returns a copy with the internal slack flag replaced.  The slack flag
    /// of the owned internal node is kept consistent with it.
    pub fn with_internal_slack(mut self, internal_slack: bool) -> Self {
        self.internal_node = self.internal_node.with_slack(internal_slack);
        self.internal_slack = internal_slack;
        self
    }

    /// Returns a copy with every referenced node, including the internal
    /// node, swapped for its registered substitute.
    pub fn substituted(&self, substitutions: &HashMap<Uuid, Node>) -> Self {
        Self {
            node_a: swapped(&self.node_a, substitutions),
            node_b: swapped(&self.node_b, substitutions),
            node_c: swapped(&self.node_c, substitutions),
            internal_node: swapped(&self.internal_node, substitutions),
            ..self.clone()
        }
    }
}

/// A switch between two nodes of the same voltage level.
#[derive(Clone, Debug, PartialEq)]
pub struct Switch {
    pub uuid: Uuid,
    pub id: String,
    pub node_a: Node,
    pub node_b: Node,
    pub closed: bool,
}

impl Switch {
    pub fn new(
        uuid: Uuid,
        id: impl Into<String>,
        node_a: Node,
        node_b: Node,
        closed: bool,
    ) -> Self {
        Self {
            uuid,
            id: id.into(),
            node_a,
            node_b,
            closed,
        }
    }

    /// Returns a copy with every referenced node swapped for its registered
    /// substitute.
    pub fn substituted(&self, substitutions: &HashMap<Uuid, Node>) -> Self {
        Self {
            node_a: swapped(&self.node_a, substitutions),
            node_b: swapped(&self.node_b, substitutions),
            ..self.clone()
        }
    }
}

/// A measurement unit attached to a single node.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementUnit {
    pub uuid: Uuid,
    pub id: String,
    pub node: Node,
}

impl MeasurementUnit {
    pub fn new(uuid: Uuid, id: impl Into<String>, node: Node) -> Self {
        Self {
            uuid,
            id: id.into(),
            node,
        }
    }

    /// Returns a copy with the referenced node swapped for its registered
    /// substitute.
    pub fn substituted(&self, substitutions: &HashMap<Uuid, Node>) -> Self {
        Self {
            node: swapped(&self.node, substitutions),
            ..self.clone()
        }
    }
}
