use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::AlaskaPakError;

/// Label returned when an index cannot be expressed in the requested style.
pub const OUT_OF_BOUNDS: &str = "OutOfBounds";

/// Alphabetic labels are limited to three letters.
const ALPHA_LIMIT: u32 = 26 * 26 * 26 - 1;

/// Zero padded labels are limited to four digits.
const PADDED_LIMIT: u32 = 10_000;

/// How a row or a column index is turned into a label.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LabelStyle {
    /// `A, B, ..., Z, AA, AB, ...`
    UpperAlpha,
    /// `a, b, ..., z, aa, ab, ...`
    LowerAlpha,
    /// `1, 2, ..., 10, 11, ...`
    Numeric,
    /// `01, 02, ..., 10, 11, ...`, padded to the number of digits of the row or column count.
    ZeroPaddedNumeric,
}

impl LabelStyle {
    /// All label styles in the order they are offered to a user.
    pub const ALL: [LabelStyle; 4] = [
        LabelStyle::UpperAlpha,
        LabelStyle::LowerAlpha,
        LabelStyle::Numeric,
        LabelStyle::ZeroPaddedNumeric,
    ];

    /// Identifier of the style, as accepted by [`LabelStyle::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelStyle::UpperAlpha => "UpperAlpha",
            LabelStyle::LowerAlpha => "LowerAlpha",
            LabelStyle::Numeric => "Numeric",
            LabelStyle::ZeroPaddedNumeric => "ZeroPaddedNumeric",
        }
    }

    /// Human readable name of the style.
    pub fn display_name(&self) -> &'static str {
        match self {
            LabelStyle::UpperAlpha => "Upper case letters (A, B, C)",
            LabelStyle::LowerAlpha => "Lower case letters (a, b, c)",
            LabelStyle::Numeric => "Numbers (1, 2, 3)",
            LabelStyle::ZeroPaddedNumeric => "Zero padded numbers (01, 02, 03)",
        }
    }

    /// Label of the zero based `index` in a sequence of `max` items.
    ///
    /// `max` is only used by [`LabelStyle::ZeroPaddedNumeric`] to determine the padding width. Indices that cannot be
    /// expressed in the style (more than three letters or more than four padded digits) produce [`OUT_OF_BOUNDS`].
    pub fn label(&self, index: u32, max: u32) -> String {
        match self {
            LabelStyle::UpperAlpha => alpha_label(index, b'A'),
            LabelStyle::LowerAlpha => alpha_label(index, b'a'),
            LabelStyle::Numeric => (index as u64 + 1).to_string(),
            LabelStyle::ZeroPaddedNumeric => {
                if max >= PADDED_LIMIT {
                    return OUT_OF_BOUNDS.to_string();
                }

                let width = max.max(1).to_string().len();
                format!("{:0width$}", index as u64 + 1)
            }
        }
    }
}

/// Bijective base-26 representation of `index + 1`.
fn alpha_label(index: u32, first_letter: u8) -> String {
    if index >= ALPHA_LIMIT {
        return OUT_OF_BOUNDS.to_string();
    }

    let mut letters = Vec::with_capacity(3);
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        letters.push((first_letter + (n % 26) as u8) as char);
        n /= 26;
    }

    letters.iter().rev().collect()
}

impl Display for LabelStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelStyle {
    type Err = AlaskaPakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| AlaskaPakError::InvalidConfiguration(format!("unknown label style: {s}")))
    }
}

/// Which part of a cell label comes first.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LabelOrder {
    /// `{row}{delimiter}{column}`
    #[default]
    RowFirst,
    /// `{column}{delimiter}{row}`
    ColumnFirst,
}

impl LabelOrder {
    /// All label orders in the order they are offered to a user.
    pub const ALL: [LabelOrder; 2] = [LabelOrder::RowFirst, LabelOrder::ColumnFirst];

    /// Identifier of the order, as accepted by [`LabelOrder::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelOrder::RowFirst => "RowFirst",
            LabelOrder::ColumnFirst => "ColumnFirst",
        }
    }

    /// Human readable name of the order.
    pub fn display_name(&self) -> &'static str {
        match self {
            LabelOrder::RowFirst => "Row, then column",
            LabelOrder::ColumnFirst => "Column, then row",
        }
    }

    /// Joins row and column labels into a cell label.
    pub fn compose(
        &self,
        prefix: &str,
        row_label: &str,
        delimiter: &str,
        column_label: &str,
        suffix: &str,
    ) -> String {
        let (first, second) = match self {
            LabelOrder::RowFirst => (row_label, column_label),
            LabelOrder::ColumnFirst => (column_label, row_label),
        };

        [prefix, first, delimiter, second, suffix].concat()
    }
}

impl Display for LabelOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelOrder {
    type Err = AlaskaPakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| AlaskaPakError::InvalidConfiguration(format!("unknown label order: {s}")))
    }
}
