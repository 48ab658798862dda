// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Catalog entries describing the electrical ratings of connector classes.
//!
//! Types are looked up by the [asset update engine][crate::update::assets]
//! and never mutated.

use uuid::Uuid;

use crate::quantity::{Amperes, Kilovoltamperes, Kilovolts};

/// A catalog entry for a class of lines.
#[derive(Clone, Debug, PartialEq)]
pub struct LineType {
    pub uuid: Uuid,
    /// Human readable identifier, e.g. "NAYY 4x150SE".
    pub id: String,
    /// The nominal voltage the line class is built for.
    pub rated_voltage: Kilovolts,
    /// The maximum permissible current of a single line of this class.
    pub max_current: Amperes,
}

impl LineType {
    pub fn new(
        uuid: Uuid,
        id: impl Into<String>,
        rated_voltage: Kilovolts,
        max_current: Amperes,
    ) -> Self {
        Self {
            uuid,
            id: id.into(),
            rated_voltage,
            max_current,
        }
    }
}

/// A catalog entry for a class of two winding transformers.
///
/// Port A is the high voltage side, port B the low voltage side.
#[derive(Clone, Debug, PartialEq)]
pub struct Transformer2WType {
    pub uuid: Uuid,
    pub id: String,
    pub rated_voltage_a: Kilovolts,
    pub rated_voltage_b: Kilovolts,
    /// The rated apparent power of a single transformer of this class.
    pub rated_power: Kilovoltamperes,
}

impl Transformer2WType {
    pub fn new(
        uuid: Uuid,
        id: impl Into<String>,
        rated_voltage_a: Kilovolts,
        rated_voltage_b: Kilovolts,
        rated_power: Kilovoltamperes,
    ) -> Self {
        Self {
            uuid,
            id: id.into(),
            rated_voltage_a,
            rated_voltage_b,
            rated_power,
        }
    }
}

/// A catalog entry for a class of three winding transformers, with one
/// nominal voltage and one rated power per port.
#[derive(Clone, Debug, PartialEq)]
pub struct Transformer3WType {
    pub uuid: Uuid,
    pub id: String,
    pub rated_voltage_a: Kilovolts,
    pub rated_voltage_b: Kilovolts,
    pub rated_voltage_c: Kilovolts,
    pub rated_power_a: Kilovoltamperes,
    pub rated_power_b: Kilovoltamperes,
    pub rated_power_c: Kilovoltamperes,
}

impl Transformer3WType {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        uuid: Uuid,
        id: impl Into<String>,
        rated_voltage_a: Kilovolts,
        rated_voltage_b: Kilovolts,
        rated_voltage_c: Kilovolts,
        rated_power_a: Kilovoltamperes,
        rated_power_b: Kilovoltamperes,
        rated_power_c: Kilovoltamperes,
    ) -> Self {
        Self {
            uuid,
            id: id.into(),
            rated_voltage_a,
            rated_voltage_b,
            rated_voltage_c,
            rated_power_a,
            rated_power_b,
            rated_power_c,
        }
    }
}
