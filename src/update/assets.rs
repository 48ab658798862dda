// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Pure functions for selecting catalog types that satisfy a required
//! voltage and rating, and for re-typing connectors accordingly.
//!
//! Selection is a two step process: first the catalog is filtered down to
//! the entries whose nominal voltages exactly match the requirement, then
//! the smallest rating that still covers the required one wins.  When no
//! single entry covers the requirement, the largest available entry is
//! scaled up by installing devices in parallel.  Ties on rating are broken
//! lexicographically on the type identifier, so selection is deterministic
//! regardless of catalog order.

use crate::model::{Line, LineType, Transformer2W, Transformer2WType, Transformer3W, Transformer3WType};
use crate::quantity::{Amperes, Kilovoltamperes, Kilovolts};
use crate::Error;

/// Returns the catalog entries whose rated voltage exactly matches the
/// required one.
pub fn suitable_line_types(catalog: &[LineType], rated_voltage: Kilovolts) -> Vec<&LineType> {
    catalog
        .iter()
        .filter(|t| t.rated_voltage == rated_voltage)
        .collect()
}

/// Returns the catalog entries whose rated voltages exactly match the
/// required ones on both ports.
pub fn suitable_transformer_2w_types(
    catalog: &[Transformer2WType],
    rated_voltage_a: Kilovolts,
    rated_voltage_b: Kilovolts,
) -> Vec<&Transformer2WType> {
    catalog
        .iter()
        .filter(|t| t.rated_voltage_a == rated_voltage_a && t.rated_voltage_b == rated_voltage_b)
        .collect()
}

/// Returns the catalog entries whose rated voltages exactly match the
/// required ones on all three ports.
pub fn suitable_transformer_3w_types(
    catalog: &[Transformer3WType],
    rated_voltage_a: Kilovolts,
    rated_voltage_b: Kilovolts,
    rated_voltage_c: Kilovolts,
) -> Vec<&Transformer3WType> {
    catalog
        .iter()
        .filter(|t| {
            t.rated_voltage_a == rated_voltage_a
                && t.rated_voltage_b == rated_voltage_b
                && t.rated_voltage_c == rated_voltage_c
        })
        .collect()
}

/// The number of parallel devices needed for a single device rating to
/// cover the required rating, at least 1.
fn parallel_devices(required: f64, rating: f64) -> u32 {
    ((required / rating).ceil() as u32).max(1)
}

/// Selects the entry with the smallest rating that still covers the
/// required one.  Falls back to scaling the largest entry with parallel
/// devices when none does.  Returns `None` only for an empty candidate set.
fn select_by_rating<'a, T>(
    candidates: &[&'a T],
    rating: impl Fn(&T) -> f64,
    id: impl Fn(&T) -> &str,
    required: f64,
) -> Option<(&'a T, u32)> {
    let mut sorted = candidates.to_vec();
    sorted.sort_by(|a, b| rating(a).total_cmp(&rating(b)).then_with(|| id(a).cmp(id(b))));

    if let Some(&optimal) = sorted.iter().find(|t| rating(t) >= required) {
        return Some((optimal, 1));
    }

    let largest_rating = rating(sorted.last()?);
    let largest = *sorted.iter().find(|t| rating(t) == largest_rating)?;
    Some((largest, parallel_devices(required, largest_rating)))
}

/// Selects the line type covering the required current, together with the
/// number of parallel devices needed.
pub fn select_line_type<'a>(
    candidates: &[&'a LineType],
    required_current: Amperes,
) -> Option<(&'a LineType, u32)> {
    select_by_rating(
        candidates,
        |t| t.max_current.value(),
        |t| t.id.as_str(),
        required_current.value(),
    )
}

/// Selects the two winding transformer type covering the required apparent
/// power, together with the number of parallel devices needed.
pub fn select_transformer_2w_type<'a>(
    candidates: &[&'a Transformer2WType],
    required_power: Kilovoltamperes,
) -> Option<(&'a Transformer2WType, u32)> {
    select_by_rating(
        candidates,
        |t| t.rated_power.value(),
        |t| t.id.as_str(),
        required_power.value(),
    )
}

/// Selects the three winding transformer type covering the required
/// apparent power on every port.
///
/// The parallel device count of the fallback is the maximum of the three
/// per-port ratios, so every port ends up covered.
pub fn select_transformer_3w_type<'a>(
    candidates: &[&'a Transformer3WType],
    required_power_a: Kilovoltamperes,
    required_power_b: Kilovoltamperes,
    required_power_c: Kilovoltamperes,
) -> Option<(&'a Transformer3WType, u32)> {
    let mut sorted = candidates.to_vec();
    sorted.sort_by(|a, b| {
        a.rated_power_a
            .value()
            .total_cmp(&b.rated_power_a.value())
            .then_with(|| a.id.cmp(&b.id))
    });

    if let Some(&optimal) = sorted.iter().find(|t| {
        t.rated_power_a >= required_power_a
            && t.rated_power_b >= required_power_b
            && t.rated_power_c >= required_power_c
    }) {
        return Some((optimal, 1));
    }

    let largest_rating = sorted.last()?.rated_power_a.value();
    let largest = *sorted
        .iter()
        .find(|t| t.rated_power_a.value() == largest_rating)?;
    let devices = [
        parallel_devices(required_power_a.value(), largest.rated_power_a.value()),
        parallel_devices(required_power_b.value(), largest.rated_power_b.value()),
        parallel_devices(required_power_c.value(), largest.rated_power_c.value()),
    ]
    .into_iter()
    .max()?;
    Some((largest, devices))
}

/// Re-types a line against the given rated voltage and required current.
///
/// A line whose current type already matches the voltage and whose
/// aggregate capacity covers the requirement is returned unchanged.  The
/// referenced nodes are never touched.
pub fn update_line(
    line: &Line,
    catalog: &[LineType],
    rated_voltage: Kilovolts,
    required_current: Amperes,
) -> Result<Line, Error> {
    if line.line_type.rated_voltage == rated_voltage
        && line.line_type.max_current * f64::from(line.parallel_devices) >= required_current
    {
        return Ok(line.clone());
    }

    let candidates = suitable_line_types(catalog, rated_voltage);
    let (line_type, devices) =
        select_line_type(&candidates, required_current).ok_or_else(|| {
            Error::missing_type(format!(
                "No line type found for a rated voltage of {rated_voltage}."
            ))
        })?;
    Ok(line.with_type(line_type.clone(), devices))
}

/// Re-types a two winding transformer against the given port voltages and
/// required apparent power.
pub fn update_transformer_2w(
    transformer: &Transformer2W,
    catalog: &[Transformer2WType],
    rated_voltage_a: Kilovolts,
    rated_voltage_b: Kilovolts,
    required_power: Kilovoltamperes,
) -> Result<Transformer2W, Error> {
    let current = &transformer.transformer_type;
    if current.rated_voltage_a == rated_voltage_a
        && current.rated_voltage_b == rated_voltage_b
        && current.rated_power * f64::from(transformer.parallel_devices) >= required_power
    {
        return Ok(transformer.clone());
    }

    let candidates = suitable_transformer_2w_types(catalog, rated_voltage_a, rated_voltage_b);
    let (transformer_type, devices) = select_transformer_2w_type(&candidates, required_power)
        .ok_or_else(|| {
            Error::missing_type(format!(
                "No two winding transformer type found for rated voltages of {rated_voltage_a} \
                 and {rated_voltage_b}."
            ))
        })?;
    Ok(transformer.with_type(transformer_type.clone(), devices))
}

/// Re-types a three winding transformer against the given port voltages and
/// per-port required apparent powers.
#[allow(clippy::too_many_arguments)]
pub fn update_transformer_3w(
    transformer: &Transformer3W,
    catalog: &[Transformer3WType],
    rated_voltage_a: Kilovolts,
    rated_voltage_b: Kilovolts,
    rated_voltage_c: Kilovolts,
    required_power_a: Kilovoltamperes,
    required_power_b: Kilovoltamperes,
    required_power_c: Kilovoltamperes,
) -> Result<Transformer3W, Error> {
    let current = &transformer.transformer_type;
    let scale = f64::from(transformer.parallel_devices);
    if current.rated_voltage_a == rated_voltage_a
        && current.rated_voltage_b == rated_voltage_b
        && current.rated_voltage_c == rated_voltage_c
        && current.rated_power_a * scale >= required_power_a
        && current.rated_power_b * scale >= required_power_b
        && current.rated_power_c * scale >= required_power_c
    {
        return Ok(transformer.clone());
    }

    let candidates =
        suitable_transformer_3w_types(catalog, rated_voltage_a, rated_voltage_b, rated_voltage_c);
    let (transformer_type, devices) = select_transformer_3w_type(
        &candidates,
        required_power_a,
        required_power_b,
        required_power_c,
    )
    .ok_or_else(|| {
        Error::missing_type(format!(
            "No three winding transformer type found for rated voltages of {rated_voltage_a}, \
             {rated_voltage_b} and {rated_voltage_c}."
        ))
    })?;
    Ok(transformer.with_type(transformer_type.clone(), devices))
}
