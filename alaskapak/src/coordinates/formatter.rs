use std::collections::HashMap;

use crate::coordinates::{FormatOptions, OutputFormat};
use crate::error::AlaskaPakError;

const LATITUDE_LIMIT: f64 = 90.0;
const LONGITUDE_LIMIT: f64 = 360.0;

/// Formats a decimal degree value as a display string.
///
/// `is_latitude` selects the valid domain and the direction letters: latitude must be within `-90..=90` (N/S),
/// longitude within `-360..=360` (E/W). Longitude outside of `-180..=180` is brought into that range by adding or
/// subtracting 360 once. Raw output formats return the input value unchanged.
///
/// # Rounding
///
/// Printed numbers are rounded to the configured number of decimal places. When zero parts are hidden, a minutes or
/// seconds component is considered zero if it is zero after scaling by `10^decimal_places` and **truncating**. Since
/// truncation and rounding differ, a component such as `0.009` with 2 decimal places is hidden even though it would be
/// printed as `0.01`. Likewise, minutes or seconds that round up to 60 are printed as `60` and do not carry over into
/// the preceding unit.
///
/// # Errors
///
/// Returns [`AlaskaPakError::Range`] if the value is outside of its domain (NaN is always outside).
pub fn format(
    decimal_degrees: f64,
    is_latitude: bool,
    options: &FormatOptions,
) -> Result<String, AlaskaPakError> {
    check_range(decimal_degrees, is_latitude)?;

    if !options.output_format().is_formattable() {
        return Ok(decimal_degrees.to_string());
    }

    let value = if is_latitude {
        decimal_degrees
    } else {
        normalize_longitude(decimal_degrees)
    };

    let sign = if !options.show_direction() && value < 0.0 {
        "-"
    } else {
        ""
    };
    let direction = if options.show_direction() {
        Hemisphere::of(value, is_latitude).letter()
    } else {
        ""
    };

    let parts = DmsParts::new(value.abs());
    let places = options.decimal_places() as usize;

    let mut vars = HashMap::from([
        ("sign".to_string(), sign.to_string()),
        ("direction".to_string(), direction.to_string()),
    ]);

    let mut template = String::from("{sign}{degrees}° ");
    match options.output_format() {
        OutputFormat::DecimalDegrees => {
            vars.insert("degrees".into(), format!("{:.*}", places, parts.decimal_degrees));
        }
        OutputFormat::DegreesDecimalMinutes => {
            vars.insert("degrees".into(), parts.degrees.to_string());
            if options.show_zero_parts() || !is_zero_at_precision(parts.decimal_minutes, places) {
                template.push_str("{minutes}' ");
                vars.insert("minutes".into(), format!("{:.*}", places, parts.decimal_minutes));
            }
        }
        OutputFormat::DegreesMinutesSeconds => {
            vars.insert("degrees".into(), parts.degrees.to_string());
            if options.show_zero_parts() || parts.minutes != 0 {
                template.push_str("{minutes}' ");
                vars.insert("minutes".into(), parts.minutes.to_string());
            }
            if options.show_zero_parts() || !is_zero_at_precision(parts.seconds, places) {
                template.push_str("{seconds}\" ");
                vars.insert("seconds".into(), format!("{:.*}", places, parts.seconds));
            }
        }
        OutputFormat::RawDataSource | OutputFormat::RawDataFrame => {
            return Ok(decimal_degrees.to_string());
        }
    }
    template.push_str("{direction}");

    if !options.show_spaces() {
        template.retain(|c| c != ' ');
    }

    let formatted = strfmt::strfmt(&template, &vars)?;
    Ok(formatted.trim_end().to_string())
}

fn check_range(decimal_degrees: f64, is_latitude: bool) -> Result<(), AlaskaPakError> {
    let (name, limit) = if is_latitude {
        ("latitude", LATITUDE_LIMIT)
    } else {
        ("longitude", LONGITUDE_LIMIT)
    };

    if (-limit..=limit).contains(&decimal_degrees) {
        Ok(())
    } else {
        Err(AlaskaPakError::out_of_range(
            name,
            decimal_degrees,
            -limit,
            limit,
        ))
    }
}

/// Brings a longitude from `-360..=360` into `-180..=180`.
pub fn normalize_longitude(longitude: f64) -> f64 {
    if longitude < -180.0 {
        longitude + 360.0
    } else if longitude > 180.0 {
        longitude - 360.0
    } else {
        longitude
    }
}

/// Returns true if `value` truncates to zero at the given number of decimal places.
pub fn is_zero_at_precision(value: f64, decimal_places: usize) -> bool {
    (value * 10f64.powi(decimal_places as i32)).trunc() == 0.0
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    fn of(value: f64, is_latitude: bool) -> Self {
        match (is_latitude, value < 0.0) {
            (true, false) => Self::North,
            (true, true) => Self::South,
            (false, false) => Self::East,
            (false, true) => Self::West,
        }
    }

    fn letter(&self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
            Self::East => "E",
            Self::West => "W",
        }
    }
}

/// Components of a non-negative decimal degree value.
#[derive(Debug, Copy, Clone, PartialEq)]
struct DmsParts {
    decimal_degrees: f64,
    degrees: u32,
    decimal_minutes: f64,
    minutes: u32,
    seconds: f64,
}

impl DmsParts {
    fn new(decimal_degrees: f64) -> Self {
        let degrees = decimal_degrees.trunc();
        let decimal_minutes = (decimal_degrees - degrees) * 60.0;
        let minutes = decimal_minutes.trunc();
        let seconds = (decimal_minutes - minutes) * 60.0;

        Self {
            decimal_degrees,
            degrees: degrees as u32,
            decimal_minutes,
            minutes: minutes as u32,
            seconds,
        }
    }
}
