// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The system participants of a grid model: demand, generation and storage
//! assets, each attached to exactly one node.

use uuid::Uuid;

use crate::model::node::Node;
use crate::quantity::{KilowattHours, Kilovoltamperes};

/// An electrical load.
#[derive(Clone, Debug, PartialEq)]
pub struct Load {
    pub uuid: Uuid,
    pub id: String,
    pub node: Node,
    pub s_rated: Kilovoltamperes,
    pub cos_phi: f64,
}

impl Load {
    pub fn new(
        uuid: Uuid,
        id: impl Into<String>,
        node: Node,
        s_rated: Kilovoltamperes,
        cos_phi: f64,
    ) -> Self {
        Self {
            uuid,
            id: id.into(),
            node,
            s_rated,
            cos_phi,
        }
    }
}

/// A generation asset feeding in with a fixed set point.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedFeedIn {
    pub uuid: Uuid,
    pub id: String,
    pub node: Node,
    pub s_rated: Kilovoltamperes,
    pub cos_phi: f64,
}

impl FixedFeedIn {
    pub fn new(
        uuid: Uuid,
        id: impl Into<String>,
        node: Node,
        s_rated: Kilovoltamperes,
        cos_phi: f64,
    ) -> Self {
        Self {
            uuid,
            id: id.into(),
            node,
            s_rated,
            cos_phi,
        }
    }
}

/// An electrical storage.
#[derive(Clone, Debug, PartialEq)]
pub struct Storage {
    pub uuid: Uuid,
    pub id: String,
    pub node: Node,
    pub s_rated: Kilovoltamperes,
    pub e_capacity: KilowattHours,
}

impl Storage {
    pub fn new(
        uuid: Uuid,
        id: impl Into<String>,
        node: Node,
        s_rated: Kilovoltamperes,
        e_capacity: KilowattHours,
    ) -> Self {
        Self {
            uuid,
            id: id.into(),
            node,
            s_rated,
            e_capacity,
        }
    }
}

/// One of the system participant assets of a grid model.
#[derive(Clone, Debug, PartialEq)]
pub enum SystemParticipant {
    Load(Load),
    FixedFeedIn(FixedFeedIn),
    Storage(Storage),
}

impl SystemParticipant {
    /// Returns the uuid of the wrapped participant.
    pub fn uuid(&self) -> Uuid {
        match self {
            SystemParticipant::Load(load) => load.uuid,
            SystemParticipant::FixedFeedIn(feed_in) => feed_in.uuid,
            SystemParticipant::Storage(storage) => storage.uuid,
        }
    }

    /// Returns the node the wrapped participant is attached to.
    pub fn node(&self) -> &Node {
        match self {
            SystemParticipant::Load(load) => &load.node,
            SystemParticipant::FixedFeedIn(feed_in) => &feed_in.node,
            SystemParticipant::Storage(storage) => &storage.node,
        }
    }

    /// Returns a copy of the participant attached to the given node.
    pub fn with_node(&self, node: Node) -> Self {
        match self {
            SystemParticipant::Load(load) => SystemParticipant::Load(Load {
                node,
                ..load.clone()
            }),
            SystemParticipant::FixedFeedIn(feed_in) => SystemParticipant::FixedFeedIn(FixedFeedIn {
                node,
                ..feed_in.clone()
            }),
            SystemParticipant::Storage(storage) => SystemParticipant::Storage(Storage {
                node,
                ..storage.clone()
            }),
        }
    }
}
