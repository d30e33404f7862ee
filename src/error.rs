//! Error types for calendar conversion.

use std::fmt;

/// Which input was rejected by a conversion.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    /// A leap month was requested in a year that does not double that month.
    LeapMonth,
    /// Days since the epoch, for dates the year table does not reach.
    Offset,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::LeapMonth => "leap month",
            Field::Offset => "day offset",
        })
    }
}

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Returned when an input falls outside the range the year table covers,
    /// or fails the coarse month/day bound checks.
    #[error("{field} {value} out of range (must be {min}..={max})")]
    OutOfRange {
        /// The rejected input.
        field: Field,
        /// The value that was provided.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Checks `value` against an inclusive range, naming `field` on failure.
pub(crate) fn check(field: Field, value: i64, min: i64, max: i64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message() {
        let err = Error::OutOfRange {
            field: Field::Year,
            value: 1949,
            min: 1950,
            max: 2100,
        };
        assert_eq!(err.to_string(), "year 1949 out of range (must be 1950..=2100)");

        let err = Error::OutOfRange {
            field: Field::LeapMonth,
            value: 3,
            min: 6,
            max: 6,
        };
        assert_eq!(err.to_string(), "leap month 3 out of range (must be 6..=6)");
    }

    #[test]
    fn check_bounds() {
        assert_eq!(Ok(()), check(Field::Day, 0, 0, 31));
        assert_eq!(Ok(()), check(Field::Day, 31, 0, 31));
        assert_eq!(
            Err(Error::OutOfRange {
                field: Field::Day,
                value: 32,
                min: 0,
                max: 31
            }),
            check(Field::Day, 32, 0, 31)
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync + Clone>() {}
        assert_impl::<Error>();
    }
}
