// lm-core/src/units.rs

use thiserror::Error;
use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

pub mod constants {
    /// Universal gas constant [J/(kmol·K)]
    pub const R_UNIVERSAL: f64 = 8314.462618;

    /// Standard atmosphere [Pa]
    pub const P_ATM: f64 = 101_325.0;
}

/// Error in unit-tagged text parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit {
        unit: String,
        quantity: &'static str,
    },

    #[error("Ambiguous unit '{unit}': {reason}")]
    AmbiguousUnit { unit: String, reason: &'static str },

    #[error("Value {value} out of range: {reason}")]
    OutOfRange { value: f64, reason: &'static str },
}

/// Parse an absolute pressure such as `"101325"`, `"1 atm"` or `"2.5bar"`.
///
/// A bare number is taken as Pa.
pub fn parse_pressure(input: &str) -> Result<Pressure, UnitError> {
    use uom::si::pressure::{
        atmosphere, bar, kilopascal, megapascal, millibar, pascal, pound_force_per_square_inch,
        torr,
    };

    let (value, unit) = split_value_and_unit(input)?;

    let p = match unit.to_lowercase().as_str() {
        "" | "pa" | "pascal" => Pressure::new::<pascal>(value),
        "kpa" => Pressure::new::<kilopascal>(value),
        "mpa" => Pressure::new::<megapascal>(value),
        "bar" => Pressure::new::<bar>(value),
        "mbar" | "millibar" => Pressure::new::<millibar>(value),
        "atm" => Pressure::new::<atmosphere>(value),
        "torr" => Pressure::new::<torr>(value),
        "psia" => Pressure::new::<pound_force_per_square_inch>(value),
        "psi" => {
            return Err(UnitError::AmbiguousUnit {
                unit,
                reason: "use 'psia' for absolute pressure",
            });
        }
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: "pressure",
            });
        }
    };

    if !(p.value > 0.0) {
        return Err(UnitError::OutOfRange {
            value: p.value,
            reason: "absolute pressure must be > 0 Pa",
        });
    }

    Ok(p)
}

/// Parse a temperature such as `"300"`, `"300 K"` or `"25 C"`.
///
/// A bare number is taken as K.
pub fn parse_temperature(input: &str) -> Result<Temperature, UnitError> {
    use uom::si::thermodynamic_temperature::{
        degree_celsius, degree_fahrenheit, degree_rankine, kelvin,
    };

    let (value, unit) = split_value_and_unit(input)?;

    let t = match unit.to_lowercase().as_str() {
        "" | "k" | "kelvin" => Temperature::new::<kelvin>(value),
        "c" | "°c" | "celsius" => Temperature::new::<degree_celsius>(value),
        "f" | "°f" | "fahrenheit" => Temperature::new::<degree_fahrenheit>(value),
        "r" | "°r" | "rankine" => Temperature::new::<degree_rankine>(value),
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: "temperature",
            });
        }
    };

    if !(t.value > 0.0) {
        return Err(UnitError::OutOfRange {
            value: t.value,
            reason: "absolute temperature must be > 0 K",
        });
    }

    Ok(t)
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "25C" -> (25.0, "C")
/// - "1.5 bar" -> (1.5, "bar")
/// - "300" -> (300.0, "")
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    let split_idx = trimmed
        .find(|c: char| !c.is_ascii_digit() && !matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);

    let value: f64 = num_part
        .trim()
        .parse()
        .map_err(|_| UnitError::Parse(format!("could not parse a number from '{input}'")))?;

    Ok((value, unit_part.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pressure_units() {
        assert_eq!(parse_pressure("101325").unwrap().value, 101_325.0);
        assert_eq!(parse_pressure("2 bar").unwrap().value, 2e5);
        assert!((parse_pressure("1 atm").unwrap().value - constants::P_ATM).abs() < 1e-6);
        assert!((parse_pressure("1.5kPa").unwrap().value - 1500.0).abs() < 1e-9);
    }

    #[test]
    fn reject_plain_psi() {
        assert!(matches!(
            parse_pressure("14.7 psi"),
            Err(UnitError::AmbiguousUnit { unit, .. }) if unit == "psi"
        ));
    }

    #[test]
    fn parse_temperature_units() {
        assert_eq!(parse_temperature("300 K").unwrap().value, 300.0);
        assert!((parse_temperature("25C").unwrap().value - 298.15).abs() < 1e-9);
        assert!((parse_temperature("212 F").unwrap().value - 373.15).abs() < 1e-6);
    }

    #[test]
    fn reject_non_physical_inputs() {
        assert!(parse_temperature("-10 K").is_err());
        assert!(parse_pressure("0 Pa").is_err());
        assert!(matches!(
            parse_pressure("3 furlongs"),
            Err(UnitError::UnknownUnit { .. })
        ));
        assert!(matches!(parse_pressure("abc"), Err(UnitError::Parse(_))));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn bar_and_kpa_agree(v in 0.001_f64..1000.0) {
                let from_bar = parse_pressure(&format!("{v} bar")).unwrap().value;
                let from_kpa = parse_pressure(&format!("{} kPa", v * 100.0)).unwrap().value;
                prop_assert!((from_bar - from_kpa).abs() <= 1e-9 * from_bar);
            }

            #[test]
            fn celsius_is_offset_kelvin(c in -200.0_f64..1000.0) {
                let t = parse_temperature(&format!("{c} C")).unwrap().value;
                prop_assert!((t - (c + 273.15)).abs() < 1e-9);
            }
        }
    }
}
