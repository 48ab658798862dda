// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `GraphicElements` container, which aggregates all
//! visualization metadata of one grid model.

use crate::container::{merge_by_uuid, MergePolicy};
use crate::model::{GraphicElement, LineGraphic, NodeGraphic};
use crate::Error;

/// The graphic annotations of one grid model, partitioned into typed
/// sub-sets sorted by uuid.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphicElements {
    node_graphics: Vec<NodeGraphic>,
    line_graphics: Vec<LineGraphic>,
}

impl GraphicElements {
    /// Creates a container from a flat list of mixed-variant annotations.
    pub fn from_graphics(
        graphics: impl IntoIterator<Item = GraphicElement>,
    ) -> Result<Self, Error> {
        let mut node_graphics = vec![];
        let mut line_graphics = vec![];

        for graphic in graphics {
            match graphic {
                GraphicElement::Node(graphic) => node_graphics.push(graphic),
                GraphicElement::Line(graphic) => line_graphics.push(graphic),
            }
        }

        Ok(Self {
            node_graphics: merge_by_uuid(node_graphics, |g| g.uuid, MergePolicy::Strict)?,
            line_graphics: merge_by_uuid(line_graphics, |g| g.uuid, MergePolicy::Strict)?,
        })
    }

    /// Creates a container as the union of the given containers, resolving
    /// uuid collisions according to the given policy.
    pub fn from_containers(
        containers: &[GraphicElements],
        policy: MergePolicy,
    ) -> Result<Self, Error> {
        Ok(Self {
            node_graphics: merge_by_uuid(
                containers
                    .iter()
                    .flat_map(|c| c.node_graphics.iter().cloned()),
                |g| g.uuid,
                policy,
            )?,
            line_graphics: merge_by_uuid(
                containers
                    .iter()
                    .flat_map(|c| c.line_graphics.iter().cloned()),
                |g| g.uuid,
                policy,
            )?,
        })
    }

    /// Returns the node annotations of the container, sorted by uuid.
    pub fn node_graphics(&self) -> &[NodeGraphic] {
        &self.node_graphics
    }

    /// Returns the line annotations of the container, sorted by uuid.
    pub fn line_graphics(&self) -> &[LineGraphic] {
        &self.line_graphics
    }

    /// Returns all annotations of the container as one flattened list.
    pub fn all_elements(&self) -> Vec<GraphicElement> {
        let mut graphics: Vec<GraphicElement> = self
            .node_graphics
            .iter()
            .cloned()
            .map(GraphicElement::Node)
            .collect();
        graphics.extend(
            self.line_graphics
                .iter()
                .cloned()
                .map(GraphicElement::Line),
        );
        graphics
    }
}
