//! Heat exchanger pairing toolkit.
//!
//! Utilities for turning raw simulator block readings into classified
//! [`Record`]s and matching hot records with cold records of similar duty.
//!
//! # Overview
//!
//! 1. A [`BlockReading`] holds the raw values read for one block.
//!    [`Record::from_reading`] parses them, normalizes a missing duty to zero
//!    ([`Duty::normalize`]) and fixes the [`StreamKind`].
//! 2. [`partition`] splits records into hot and cold lists, keeping order.
//! 3. [`match_duties`] pairs each hot record with the first cold record whose
//!    duty agrees within a [`Tolerance`], producing enriched [`Pair`]s.
//!
//! # Example
//!
//! ```
//! use twine_heat_integration::support::{
//!     hx::{BlockReading, Reading, Record, Tolerance, match_duties, partition},
//!     units::ReadingUnits,
//! };
//!
//! let readings = [
//!     BlockReading::new("E1", "150", "50", Some(Reading::from("-200"))),
//!     BlockReading::new("E2", "30", "120", Some(Reading::from("199"))),
//!     BlockReading::new("E3", "90", "90", None),
//! ];
//!
//! let records = readings
//!     .iter()
//!     .map(|r| Record::from_reading(r, ReadingUnits::default()))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let split = partition(&records);
//! let pairs = match_duties(&split.hot, &split.cold, Tolerance::default());
//!
//! assert_eq!(pairs.len(), 1);
//! assert_eq!((pairs[0].hot.as_str(), pairs[0].cold.as_str()), ("E1", "E2"));
//! ```

mod duty;
mod kind;
mod matching;
mod pair;
mod reading;
mod record;
mod tolerance;

pub use duty::Duty;
pub use kind::StreamKind;
pub use matching::match_duties;
pub use pair::Pair;
pub use reading::{BlockReading, DataFormatError, Field, Reading};
pub use record::{Partition, Record, partition};
pub use tolerance::{EPSILON_KW, Tolerance, relative_difference};
