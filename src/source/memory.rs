use std::convert::Infallible;

use crate::support::hx::BlockReading;

use super::BlockSource;

/// A source backed by readings already in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySource {
    readings: Vec<BlockReading>,
}

impl MemorySource {
    #[must_use]
    pub fn new(readings: Vec<BlockReading>) -> Self {
        Self { readings }
    }
}

impl FromIterator<BlockReading> for MemorySource {
    fn from_iter<I: IntoIterator<Item = BlockReading>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl BlockSource for MemorySource {
    type Error = Infallible;

    fn fetch(&mut self) -> Result<Vec<BlockReading>, Self::Error> {
        Ok(self.readings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{source::BlockFilter, support::hx::Reading};

    fn reading(id: &str) -> BlockReading {
        BlockReading::new(id, 10.0, 20.0, Some(Reading::Number(5.0)))
    }

    #[test]
    fn fetch_is_repeatable() {
        let mut source: MemorySource = ["E1", "B2", "K3"].into_iter().map(reading).collect();

        let first = source.fetch().unwrap();
        let second = source.fetch().unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn fetch_filtered_applies_default_prefixes() {
        let mut source: MemorySource = ["E1", "B2", "K3", "MIX1", "F4"]
            .into_iter()
            .map(reading)
            .collect();

        let ids: Vec<_> = source
            .fetch_filtered(&BlockFilter::default())
            .unwrap()
            .into_iter()
            .map(|r| r.identifier)
            .collect();

        assert_eq!(ids, ["E1", "K3", "F4"]);
    }
}
