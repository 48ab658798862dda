// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The immutable asset records that make up a grid model.
//!
//! All assets are value types identified by a [`Uuid`][uuid::Uuid]: two
//! values with the same uuid describe the same logical asset.  Assets are
//! never mutated in place; every "edit" produces a new value through one of
//! the `with_*` constructors.

mod connector;
mod graphic;
mod node;
mod participant;
mod types;

pub use connector::{Line, MeasurementUnit, Switch, Transformer2W, Transformer3W};
pub use graphic::{GraphicElement, LineGraphic, NodeGraphic};
pub use node::{GeoPosition, Node};
pub use participant::{FixedFeedIn, Load, Storage, SystemParticipant};
pub use types::{LineType, Transformer2WType, Transformer3WType};

use uuid::Uuid;

/// One of the connector-like assets of a grid model, or a node.
///
/// This is the element type accepted and produced by
/// [`RawGridElements`][crate::RawGridElements].
#[derive(Clone, Debug, PartialEq)]
pub enum RawGridElement {
    Node(Node),
    Line(Line),
    Transformer2W(Transformer2W),
    Transformer3W(Transformer3W),
    Switch(Switch),
    MeasurementUnit(MeasurementUnit),
}

impl RawGridElement {
    /// Returns the uuid of the wrapped asset.
    pub fn uuid(&self) -> Uuid {
        match self {
            RawGridElement::Node(node) => node.uuid,
            RawGridElement::Line(line) => line.uuid,
            RawGridElement::Transformer2W(transformer) => transformer.uuid,
            RawGridElement::Transformer3W(transformer) => transformer.uuid,
            RawGridElement::Switch(switch) => switch.uuid,
            RawGridElement::MeasurementUnit(unit) => unit.uuid,
        }
    }
}
