#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coordinates::formatter;
use crate::coordinates::OutputFormat;
use crate::error::AlaskaPakError;

/// Number of digits printed after the decimal point of the last component. Always within `0..=9`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct DecimalPlaces(u8);

impl DecimalPlaces {
    /// Largest supported number of decimal places.
    pub const MAX: u8 = 9;

    /// Creates a new value, failing with [`AlaskaPakError::Range`] if `places` is greater than 9.
    pub fn new(places: u8) -> Result<Self, AlaskaPakError> {
        if places > Self::MAX {
            return Err(AlaskaPakError::out_of_range(
                "decimal places",
                places as f64,
                0.0,
                Self::MAX as f64,
            ));
        }

        Ok(Self(places))
    }

    /// The number of decimal places.
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DecimalPlaces {
    type Error = AlaskaPakError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DecimalPlaces> for u8 {
    fn from(value: DecimalPlaces) -> Self {
        value.0
    }
}

/// Configuration of the coordinate formatter.
///
/// Default configuration writes degrees, minutes and seconds with 2 decimal places, direction letters, zero parts and
/// spaces between the parts: `61° 13' 3.00" N`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    output_format: OutputFormat,
    decimal_places: DecimalPlaces,
    show_direction: bool,
    show_zero_parts: bool,
    show_spaces: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::DegreesMinutesSeconds,
            decimal_places: DecimalPlaces(2),
            show_direction: true,
            show_zero_parts: true,
            show_spaces: true,
        }
    }
}

impl FormatOptions {
    /// Creates a new configuration. Fails if `decimal_places` is outside of `0..=9`.
    pub fn new(
        output_format: OutputFormat,
        decimal_places: u8,
        show_direction: bool,
        show_zero_parts: bool,
        show_spaces: bool,
    ) -> Result<Self, AlaskaPakError> {
        Ok(Self {
            output_format,
            decimal_places: DecimalPlaces::new(decimal_places)?,
            show_direction,
            show_zero_parts,
            show_spaces,
        })
    }

    /// Format of the output.
    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Number of decimals used in the last printed number.
    pub fn decimal_places(&self) -> u8 {
        self.decimal_places.get()
    }

    /// If true, a direction letter (N, S, E, W) is appended, otherwise negative values get a leading `-`.
    pub fn show_direction(&self) -> bool {
        self.show_direction
    }

    /// If false, minutes and seconds that are zero at the configured precision are omitted.
    pub fn show_zero_parts(&self) -> bool {
        self.show_zero_parts
    }

    /// If false, all spaces between the parts are removed.
    pub fn show_spaces(&self) -> bool {
        self.show_spaces
    }

    pub fn set_output_format(&mut self, output_format: OutputFormat) {
        self.output_format = output_format;
    }

    /// Sets the number of decimal places. On error the previous value is kept.
    pub fn set_decimal_places(&mut self, decimal_places: u8) -> Result<(), AlaskaPakError> {
        self.decimal_places = DecimalPlaces::new(decimal_places)?;
        Ok(())
    }

    pub fn set_show_direction(&mut self, show_direction: bool) {
        self.show_direction = show_direction;
    }

    pub fn set_show_zero_parts(&mut self, show_zero_parts: bool) {
        self.show_zero_parts = show_zero_parts;
    }

    pub fn set_show_spaces(&mut self, show_spaces: bool) {
        self.show_spaces = show_spaces;
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn with_decimal_places(mut self, decimal_places: u8) -> Result<Self, AlaskaPakError> {
        self.set_decimal_places(decimal_places)?;
        Ok(self)
    }

    /// Switches to the given format together with its [default decimals](OutputFormat::default_decimals).
    pub fn with_default_decimals_for(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self.decimal_places = DecimalPlaces(output_format.default_decimals());
        self
    }

    pub fn with_show_direction(mut self, show_direction: bool) -> Self {
        self.show_direction = show_direction;
        self
    }

    pub fn with_show_zero_parts(mut self, show_zero_parts: bool) -> Self {
        self.show_zero_parts = show_zero_parts;
        self
    }

    pub fn with_show_spaces(mut self, show_spaces: bool) -> Self {
        self.show_spaces = show_spaces;
        self
    }

    /// Formats a latitude (`is_latitude == true`) or longitude value. See [`format`](crate::coordinates::format).
    pub fn format(&self, decimal_degrees: f64, is_latitude: bool) -> Result<String, AlaskaPakError> {
        formatter::format(decimal_degrees, is_latitude, self)
    }

    pub fn format_latitude(&self, decimal_degrees: f64) -> Result<String, AlaskaPakError> {
        self.format(decimal_degrees, true)
    }

    pub fn format_longitude(&self, decimal_degrees: f64) -> Result<String, AlaskaPakError> {
        self.format(decimal_degrees, false)
    }

    /// Formats both components of a geographic point given as `(x, y) = (longitude, latitude)`.
    ///
    /// Returns formatted `(longitude, latitude)` strings.
    pub fn format_point(&self, longitude: f64, latitude: f64) -> Result<(String, String), AlaskaPakError> {
        Ok((
            self.format_longitude(longitude)?,
            self.format_latitude(latitude)?,
        ))
    }
}
