// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `JointGridContainer`, the whole-grid view over an
//! arbitrary number of galvanically separate subnets.

use crate::container::{GraphicElements, GridContainer, RawGridElements, SystemParticipants};
use crate::topology::SubGridTopologyGraph;
use crate::Error;

/// A grid container holding an arbitrary number of subnets together with
/// their derived topology graph.
#[derive(Clone, Debug)]
pub struct JointGridContainer {
    name: String,
    raw_grid: RawGridElements,
    participants: SystemParticipants,
    graphics: GraphicElements,
    topology: SubGridTopologyGraph,
}

impl JointGridContainer {
    /// Creates a new joint grid container and eagerly derives its sub-grid
    /// topology graph.
    ///
    /// A grid that collapses to a single subnet is accepted with a warning;
    /// it should have been modeled as a
    /// [`SubGridContainer`][crate::SubGridContainer] instead.
    pub fn try_new(
        name: impl Into<String>,
        raw_grid: RawGridElements,
        participants: SystemParticipants,
        graphics: GraphicElements,
    ) -> Result<Self, Error> {
        let name = name.into();
        let topology = SubGridTopologyGraph::try_new(&name, &raw_grid, &participants, &graphics)?;

        if topology.vertex_count() == 1 {
            tracing::warn!(
                "The grid '{}' has a single subnet and should be modeled as a sub-grid \
                 container.",
                name
            );
        }

        Ok(Self {
            name,
            raw_grid,
            participants,
            graphics,
            topology,
        })
    }

    /// Returns the sub-grid topology graph of the grid.
    pub fn topology(&self) -> &SubGridTopologyGraph {
        &self.topology
    }
}

impl GridContainer for JointGridContainer {
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
