use tracing::debug;

use crate::support::hx::BlockReading;

/// Selects heat exchanger blocks by identifier prefix.
///
/// Flowsheets commonly name exchangers with a letter prefix. The default
/// accepts identifiers starting with `E`, `K`, or `F`.
///
/// ```
/// use twine_heat_integration::source::BlockFilter;
///
/// let filter = BlockFilter::default();
/// assert!(filter.accepts("E101"));
/// assert!(!filter.accepts("MIXER"));
///
/// assert!(BlockFilter::all().accepts("MIXER"));
/// assert!(BlockFilter::with_prefixes(["HX"]).accepts("HX-3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFilter {
    prefixes: Option<Vec<String>>,
}

impl BlockFilter {
    /// Accepts every block.
    #[must_use]
    pub fn all() -> Self {
        Self { prefixes: None }
    }

    /// Accepts blocks whose identifier starts with any of `prefixes`.
    ///
    /// Matching is case-sensitive. An empty prefix list accepts nothing.
    #[must_use]
    pub fn with_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: Some(prefixes.into_iter().map(Into::into).collect()),
        }
    }

    #[must_use]
    pub fn accepts(&self, identifier: &str) -> bool {
        self.prefixes.as_ref().is_none_or(|prefixes| {
            prefixes
                .iter()
                .any(|prefix| identifier.starts_with(prefix.as_str()))
        })
    }

    /// Keeps accepted readings, preserving order.
    #[must_use]
    pub fn apply(&self, readings: Vec<BlockReading>) -> Vec<BlockReading> {
        let total = readings.len();
        let kept: Vec<_> = readings
            .into_iter()
            .filter(|reading| self.accepts(&reading.identifier))
            .collect();
        debug!(total, kept = kept.len(), "filtered blocks");
        kept
    }
}

impl Default for BlockFilter {
    fn default() -> Self {
        Self::with_prefixes(["E", "K", "F"])
    }
}
