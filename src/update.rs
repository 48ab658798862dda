// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Transformations that prepare a grid model for changed requirements:
//! re-typing connectors after a voltage level change and promoting slack
//! nodes for power-flow calculation.
//!
//! All operations are pure: they never mutate their inputs and either
//! return a fully consistent new container or an error.

pub mod assets;

mod container;
mod slack;

pub use container::{
    update_joint_grid_voltage_level, update_sub_grid_voltage_level, TypeCatalog,
};
pub use slack::promote_slack_nodes;
