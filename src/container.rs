// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The container hierarchy aggregating grid assets into consistent wholes.
//!
//! [`RawGridElements`], [`SystemParticipants`] and [`GraphicElements`] each
//! aggregate one family of assets into typed sub-sets.  [`SubGridContainer`]
//! and [`JointGridContainer`] compose the three into a whole-grid view; both
//! implement the [`GridContainer`] trait.

mod graphics;
mod joint;
mod participants;
mod raw_grid;
mod sub_grid;

#[cfg(test)]
pub(crate) mod test_utils;

pub use graphics::GraphicElements;
pub use joint::JointGridContainer;
pub use participants::SystemParticipants;
pub use raw_grid::RawGridElements;
pub use sub_grid::SubGridContainer;

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use uuid::Uuid;

use crate::model::{GraphicElement, RawGridElement, SystemParticipant};
use crate::Error;

/// How colliding uuids are resolved when containers are merged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MergePolicy {
    /// Two entities sharing a uuid but differing in value are an error.
    #[default]
    Strict,
    /// The first occurrence wins; later conflicting occurrences are dropped
    /// with a warning.
    KeepFirst,
}

/// Any entity held by a grid container.
#[derive(Clone, Debug, PartialEq)]
pub enum GridEntity {
    RawGrid(RawGridElement),
    Participant(SystemParticipant),
    Graphic(GraphicElement),
}

/// The composite view over one grid model: raw grid elements, system
/// participants and graphic annotations, sharing node references between
/// them.
pub trait GridContainer {
    /// Returns the name of the grid.
    fn name(&self) -> &str;

    /// Returns the raw grid elements of the grid.
    fn raw_grid(&self) -> &RawGridElements;

    /// Returns the system participants of the grid.
    fn participants(&self) -> &SystemParticipants;

    /// Returns the graphic annotations of the grid.
    fn graphics(&self) -> &GraphicElements;

    /// Returns all entities of the grid as one flattened list.  The order is
    /// deterministic per call, but entities of different families are not
    /// interleaved in any guaranteed way.
    fn all_entities(&self) -> Vec<GridEntity> {
        let mut entities: Vec<GridEntity> = self
            .raw_grid()
            .all_elements()
            .into_iter()
            .map(GridEntity::RawGrid)
            .collect();
        entities.extend(
            self.participants()
                .all_elements()
                .into_iter()
                .map(GridEntity::Participant),
        );
        entities.extend(
            self.graphics()
                .all_elements()
                .into_iter()
                .map(GridEntity::Graphic),
        );
        entities
    }
}

/// De-duplicates entities by uuid, resolving value conflicts according to
/// the given policy.  The result is sorted by uuid, which makes every
/// container view deterministic.
pub(crate) fn merge_by_uuid<T: Clone + PartialEq>(
    items: impl IntoIterator<Item = T>,
    uuid_of: impl Fn(&T) -> Uuid,
    policy: MergePolicy,
) -> Result<Vec<T>, Error> {
    let mut merged: BTreeMap<Uuid, T> = BTreeMap::new();

    for item in items {
        let uuid = uuid_of(&item);
        match merged.entry(uuid) {
            Entry::Vacant(entry) => {
                entry.insert(item);
            }
            Entry::Occupied(entry) => {
                if *entry.get() == item {
                    continue;
                }
                match policy {
                    MergePolicy::Strict => {
                        return Err(Error::duplicate_entity(format!(
                            "Conflicting entities share the uuid {uuid}."
                        )));
                    }
                    MergePolicy::KeepFirst => {
                        tracing::warn!(
                            "Dropping a conflicting entity with uuid {} in favor of \
                             the first occurrence.",
                            uuid
                        );
                    }
                }
            }
        }
    }

    Ok(merged.into_values().collect())
}
