// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `SystemParticipants` container, which aggregates
//! all demand, generation and storage assets of one grid model.

use crate::container::{merge_by_uuid, MergePolicy};
use crate::model::{FixedFeedIn, Load, Storage, SystemParticipant};
use crate::Error;

/// The system participants of one grid model, partitioned into typed
/// sub-sets sorted by uuid.
#[derive(Clone, Debug, PartialEq)]
pub struct SystemParticipants {
    loads: Vec<Load>,
    fixed_feed_ins: Vec<FixedFeedIn>,
    storages: Vec<Storage>,
}

impl SystemParticipants {
    /// Creates a container from a flat list of mixed-variant participants.
    pub fn from_participants(
        participants: impl IntoIterator<Item = SystemParticipant>,
    ) -> Result<Self, Error> {
        let mut loads = vec![];
        let mut fixed_feed_ins = vec![];
        let mut storages = vec![];

        for participant in participants {
            match participant {
                SystemParticipant::Load(load) => loads.push(load),
                SystemParticipant::FixedFeedIn(feed_in) => fixed_feed_ins.push(feed_in),
                SystemParticipant::Storage(storage) => storages.push(storage),
            }
        }

        Ok(Self {
            loads: merge_by_uuid(loads, |l| l.uuid, MergePolicy::Strict)?,
            fixed_feed_ins: merge_by_uuid(fixed_feed_ins, |f| f.uuid, MergePolicy::Strict)?,
            storages: merge_by_uuid(storages, |s| s.uuid, MergePolicy::Strict)?,
        })
    }

    /// Creates a container as the union of the given containers, resolving
    /// uuid collisions according to the given policy.
    pub fn from_containers(
        containers: &[SystemParticipants],
        policy: MergePolicy,
    ) -> Result<Self, Error> {
        Ok(Self {
            loads: merge_by_uuid(
                containers.iter().flat_map(|c| c.loads.iter().cloned()),
                |l| l.uuid,
                policy,
            )?,
            fixed_feed_ins: merge_by_uuid(
                containers
                    .iter()
                    .flat_map(|c| c.fixed_feed_ins.iter().cloned()),
                |f| f.uuid,
                policy,
            )?,
            storages: merge_by_uuid(
                containers.iter().flat_map(|c| c.storages.iter().cloned()),
                |s| s.uuid,
                policy,
            )?,
        })
    }

    /// Returns the loads of the container, sorted by uuid.
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Returns the fixed feed-ins of the container, sorted by uuid.
    pub fn fixed_feed_ins(&self) -> &[FixedFeedIn] {
        &self.fixed_feed_ins
    }

    /// Returns the storages of the container, sorted by uuid.
    pub fn storages(&self) -> &[Storage] {
        &self.storages
    }

    /// Returns all participants of the container as one flattened list.
    pub fn all_elements(&self) -> Vec<SystemParticipant> {
        let mut participants: Vec<SystemParticipant> = self
            .loads
            .iter()
            .cloned()
            .map(SystemParticipant::Load)
            .collect();
        participants.extend(
            self.fixed_feed_ins
                .iter()
                .cloned()
                .map(SystemParticipant::FixedFeedIn),
        );
        participants.extend(self.storages.iter().cloned().map(SystemParticipant::Storage));
        participants
    }
}
