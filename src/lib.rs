//! Utilities for converting dates between the Gregorian calendar and the
//! Chinese lunisolar calendar.
//!
//! Conversion is driven by a precomputed year table covering lunar years 1950
//! through 2100, see [`chinese::table`]. Everything here is a pure function of
//! its inputs and that table.
//!
//! # Examples
//!
//! Basic usage with [`SolarDate`]:
//!
//! ```
//! use nongli::SolarDate;
//! use nongli::chinese::{lunar_to_solar, solar_to_lunar, Month::*};
//!
//! let lunar = solar_to_lunar(SolarDate::new(2000, 1, 1)).unwrap();
//!
//! assert_eq!((1999, Common(11), 25), (lunar.year, lunar.month, lunar.day));
//! assert_eq!("己卯年 冬月廿五", lunar.chinese());
//! assert_eq!(Ok(SolarDate::new(2000, 1, 1)), lunar_to_solar(&lunar));
//! ```
//!
//! Dates outside the table are rejected:
//!
//! ```
//! use nongli::{Error, SolarDate};
//! use nongli::chinese::solar_to_lunar;
//!
//! assert!(matches!(
//!     solar_to_lunar(SolarDate::new(2101, 1, 1)),
//!     Err(Error::OutOfRange { .. })
//! ));
//! ```

pub mod chinese;
pub mod date;
pub mod error;

pub use date::{Date, SolarDate};
pub use error::{Error, Field, Result};
