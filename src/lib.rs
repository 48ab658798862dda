// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Frequenz Grid Asset Model

This is a library for representing the assets of an electrical distribution
grid as a typed, composable data structure, for deriving the dependency
graph between its galvanically separate subnets, and for transforming a
grid model when voltage levels or ratings change.

## Containers

Grid assets come in three families, each aggregated by its own container:
[`RawGridElements`] (nodes, lines, transformers, switches and measurement
units), [`SystemParticipants`] (demand, generation and storage assets) and
[`GraphicElements`] (visualization metadata).  The [`GridContainer`] trait
composes the three into a whole-grid view with two implementations:

- [`JointGridContainer`] holds an arbitrary number of subnets plus their
  derived [`SubGridTopologyGraph`].
- [`SubGridContainer`] holds exactly one subnet plus its derived
  predominant voltage level.

All containers and assets are immutable values; every "edit" produces a new
value.  Containers can be constructed from flat lists of mixed-variant
assets or merged from other containers of the same kind, with uuid
collisions resolved by an explicit [`MergePolicy`].

## Topology

The [`SubGridTopologyGraph`] has one vertex per subnet, each holding the
per-subnet container view, and one edge per transformer coupling two
subnets.  It is derived eagerly when a [`JointGridContainer`] is created.

## Updates

The [`update`] module contains the transformations that prepare a grid
model for changed requirements:

- [`update::assets`] selects catalog types that satisfy a required voltage
  and rating, scaling up with parallel devices when no single type
  suffices.
- [`update::update_sub_grid_voltage_level`] and
  [`update::update_joint_grid_voltage_level`] change the voltage level of
  one subnet, re-typing the affected connectors and propagating the node
  substitution consistently into participants and graphics.
- [`update::promote_slack_nodes`] produces a power-flow-ready copy of a
  sub-grid container with the appropriate transformer-side nodes marked as
  slack.

All operations are pure, synchronous functions over immutable data; a
failing transformation returns an [`Error`] and never a partial container.
*/

mod container;
mod error;
mod model;
mod quantity;
mod topology;
mod voltage_level;

pub mod update;

pub use container::{
    GraphicElements, GridContainer, GridEntity, JointGridContainer, MergePolicy, RawGridElements,
    SubGridContainer, SystemParticipants,
};
pub use error::Error;
pub use model::{
    FixedFeedIn, GeoPosition, GraphicElement, Line, LineGraphic, LineType, Load, MeasurementUnit,
    Node, NodeGraphic, RawGridElement, Storage, Switch, SystemParticipant, Transformer2W,
    Transformer2WType, Transformer3W, Transformer3WType,
};
pub use quantity::{Amperes, KilowattHours, Kilovoltamperes, Kilovolts, PerUnit};
pub use topology::{Interconnections, SubGridTopologyGraph, SubGrids, TransformerEdge};
pub use voltage_level::VoltageLevel;
