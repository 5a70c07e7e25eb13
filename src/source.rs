//! Sources of block readings.
//!
//! A [`BlockSource`] stands in for the external simulator: it returns one
//! [`BlockReading`] per block, in the order the simulator lists them. That
//! order must be stable within a run because matching is order-dependent.
//!
//! Two sources are provided:
//!
//! - [`CsvSource`] reads a block results table exported from the simulator.
//! - [`MemorySource`] serves readings already held in memory.
//!
//! A [`BlockFilter`] selects which blocks are heat exchangers.

mod csv;
mod filter;
mod memory;

pub use self::csv::{CsvSource, SourceError};
pub use filter::BlockFilter;
pub use memory::MemorySource;

use crate::support::hx::BlockReading;

/// Something that can list block readings in discovery order.
pub trait BlockSource {
    /// Error type specific to this source.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns every block reading, in discovery order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read.
    fn fetch(&mut self) -> Result<Vec<BlockReading>, Self::Error>;

    /// Returns the readings accepted by `filter`, in discovery order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read.
    fn fetch_filtered(&mut self, filter: &BlockFilter) -> Result<Vec<BlockReading>, Self::Error> {
        Ok(filter.apply(self.fetch()?))
    }
}
