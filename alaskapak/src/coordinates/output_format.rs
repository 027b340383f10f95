use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::AlaskaPakError;

/// Style of the coordinate value written by the formatter.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OutputFormat {
    /// Unformatted value in the coordinates of the data source.
    RawDataSource,
    /// Unformatted value in the coordinates of the data frame.
    RawDataFrame,
    /// `61.217500° N`
    DecimalDegrees,
    /// `61° 13.0500' N`
    DegreesDecimalMinutes,
    /// `61° 13' 3.00" N`
    #[default]
    DegreesMinutesSeconds,
}

impl OutputFormat {
    /// All output formats in the order they are offered to a user.
    ///
    /// UI code must map a selection back to the format by value (e.g. with [`OutputFormat::from_str`]), not by the
    /// position in this list.
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::RawDataSource,
        OutputFormat::RawDataFrame,
        OutputFormat::DecimalDegrees,
        OutputFormat::DegreesDecimalMinutes,
        OutputFormat::DegreesMinutesSeconds,
    ];

    /// Identifier of the format, as accepted by [`OutputFormat::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::RawDataSource => "RawDataSource",
            OutputFormat::RawDataFrame => "RawDataFrame",
            OutputFormat::DecimalDegrees => "DecimalDegrees",
            OutputFormat::DegreesDecimalMinutes => "DegreesDecimalMinutes",
            OutputFormat::DegreesMinutesSeconds => "DegreesMinutesSeconds",
        }
    }

    /// Human readable name of the format.
    pub fn display_name(&self) -> &'static str {
        match self {
            OutputFormat::RawDataSource => "Data Source Coordinates",
            OutputFormat::RawDataFrame => "Data Frame Coordinates",
            OutputFormat::DecimalDegrees => "Decimal Degrees (formatted)",
            OutputFormat::DegreesDecimalMinutes => "Degrees Decimal Minutes (formatted)",
            OutputFormat::DegreesMinutesSeconds => "Degrees Minutes Seconds (formatted)",
        }
    }

    /// Number of decimal places suggested for the format.
    pub fn default_decimals(&self) -> u8 {
        match self {
            OutputFormat::RawDataSource | OutputFormat::RawDataFrame => 6,
            OutputFormat::DecimalDegrees => 6,
            OutputFormat::DegreesDecimalMinutes => 4,
            OutputFormat::DegreesMinutesSeconds => 2,
        }
    }

    /// Returns false for the raw formats that pass the numeric value through.
    pub fn is_formattable(&self) -> bool {
        matches!(
            self,
            OutputFormat::DecimalDegrees
                | OutputFormat::DegreesDecimalMinutes
                | OutputFormat::DegreesMinutesSeconds
        )
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AlaskaPakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| AlaskaPakError::InvalidConfiguration(format!("unknown output format: {s}")))
    }
}
