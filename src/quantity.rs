// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Newtype wrappers for the physical quantities carried by grid assets.
//!
//! Ratings and voltages are treated as opaque quantities throughout the
//! library: they can be constructed, compared, scaled by a factor, and
//! divided by one another to obtain a dimensionless ratio.  Wrapping the
//! underlying `f64` values prevents accidentally mixing, say, a current
//! rating with a power rating.

/// A macro for defining a quantity newtype together with the operations the
/// library needs: construction, raw value access, scaling, ratios, ordering
/// and display.
macro_rules! quantity {
    ($(#[$meta:meta])* $name:ident, $symbol:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
        pub struct $name(f64);

        impl $name {
            /// Creates a new quantity from a raw value in the unit named by
            /// the type.
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            /// Returns the raw value in the unit named by the type.
            pub const fn value(self) -> f64 {
                self.0
            }
        }

        impl std::ops::Mul<f64> for $name {
            type Output = Self;

            fn mul(self, factor: f64) -> Self::Output {
                Self(self.0 * factor)
            }
        }

        impl std::ops::Div<$name> for $name {
            type Output = f64;

            fn div(self, other: $name) -> Self::Output {
                self.0 / other.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{} {}", self.0, $symbol)
            }
        }
    };
}

quantity!(
    /// An electric potential in kilovolts.
    Kilovolts,
    "kV"
);

quantity!(
    /// An electric current in amperes.
    Amperes,
    "A"
);

quantity!(
    /// An apparent power in kilovoltamperes.
    Kilovoltamperes,
    "kVA"
);

quantity!(
    /// An energy in kilowatt hours.
    KilowattHours,
    "kWh"
);

quantity!(
    /// A dimensionless per-unit quantity, relative to a rated value.
    PerUnit,
    "p.u."
);

impl Kilovolts {
    /// Returns the value converted to volts.
    pub fn as_volts(self) -> f64 {
        self.0 * 1e3
    }
}

impl Kilovoltamperes {
    /// Returns the value converted to voltamperes.
    pub fn as_voltamperes(self) -> f64 {
        self.0 * 1e3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Amperes::new(100.0) < Amperes::new(150.0));
        assert!(Kilovolts::new(20.0) >= Kilovolts::new(20.0));
        assert_eq!(Kilovolts::new(0.4), Kilovolts::new(0.4));
    }

    #[test]
    fn test_scaling_and_ratio() {
        assert_eq!(Amperes::new(150.0) * 2.0, Amperes::new(300.0));
        assert_eq!(Amperes::new(260.0) / Amperes::new(150.0), 260.0 / 150.0);
        assert_eq!(Kilovoltamperes::new(630.0).as_voltamperes(), 630_000.0);
        assert_eq!(Kilovolts::new(0.4).as_volts(), 400.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Kilovolts::new(20.0).to_string(), "20 kV");
        assert_eq!(Amperes::new(150.0).to_string(), "150 A");
        assert_eq!(PerUnit::new(1.0).to_string(), "1 p.u.");
    }
}
