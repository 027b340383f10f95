//! Formatting of geographic coordinates for display.
//!
//! A caller configures [`FormatOptions`] once and then formats every latitude and longitude value with it:
//!
//! ```
//! use alaskapak::coordinates::{FormatOptions, OutputFormat};
//!
//! let options = FormatOptions::default().with_output_format(OutputFormat::DegreesDecimalMinutes);
//! assert_eq!(options.format(61.5, true).unwrap(), "61° 30.00' N");
//! ```

mod formatter;
mod options;
mod output_format;

pub use formatter::{format, is_zero_at_precision, normalize_longitude};
pub use options::{DecimalPlaces, FormatOptions};
pub use output_format::OutputFormat;
