//! Output of a heat integration run.

use uom::si::f64::Power;

use crate::support::{
    constraint::{Constrained, NonNegative},
    hx::{DataFormatError, Pair, Record, StreamKind},
};

/// Classified records and the pairs found among them.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Every parsed record, in the order the readings were supplied.
    pub records: Vec<Record>,

    /// Matched pairs, in hot-record order.
    pub pairs: Vec<Pair>,

    /// Readings dropped under [`InvalidReadingPolicy::Skip`](super::InvalidReadingPolicy::Skip).
    ///
    /// Always empty under the default abort policy.
    pub skipped: Vec<DataFormatError>,
}

impl Analysis {
    /// Hot records, in input order.
    pub fn hot(&self) -> impl Iterator<Item = &Record> {
        self.of_kind(StreamKind::Hot)
    }

    /// Cold records, in input order.
    pub fn cold(&self) -> impl Iterator<Item = &Record> {
        self.of_kind(StreamKind::Cold)
    }

    /// Hot records that did not end up in any pair.
    pub fn unpaired_hot(&self) -> impl Iterator<Item = &Record> {
        self.hot()
            .filter(|record| !self.pairs.iter().any(|pair| pair.hot == record.identifier()))
    }

    /// Sum of the averaged duties over all pairs.
    #[must_use]
    pub fn total_paired_duty(&self) -> Constrained<Power, NonNegative> {
        self.pairs
            .iter()
            .map(|pair| Constrained::<Power, NonNegative>::new_unchecked(pair.average_duty))
            .sum()
    }

    fn of_kind(&self, kind: StreamKind) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |record| record.kind() == kind)
    }
}
