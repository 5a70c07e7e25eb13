//! Heat integration model.
//!
//! [`HeatIntegration`] implements [`twine_core::Model`] over a list of raw
//! block readings: it classifies every block as hot or cold and pairs hot
//! blocks with cold blocks of similar duty.
//! Block identifiers must be unique within one input; pairs refer to blocks
//! by identifier.
//! The pipeline itself lives in the internal `core` module.

pub(crate) mod core;

pub use self::core::{
    Analysis, HeatIntegrationConfig, HeatIntegrationError, InvalidReadingPolicy, ParsePolicyError,
    SweepPoint,
};

use tracing::info;
use twine_core::Model;

use crate::support::hx::{BlockReading, Record, Tolerance};

/// Pairs heaters with coolers from simulator block readings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeatIntegration {
    config: HeatIntegrationConfig,
}

impl HeatIntegration {
    #[must_use]
    pub fn new(config: HeatIntegrationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &HeatIntegrationConfig {
        &self.config
    }

    /// Reruns matching on already-classified records for each tolerance.
    ///
    /// Records are partitioned once; the configured tolerance is ignored.
    #[must_use]
    pub fn sweep(
        &self,
        records: &[Record],
        tolerances: impl IntoIterator<Item = Tolerance>,
    ) -> Vec<SweepPoint> {
        self::core::sweep(records, tolerances)
    }
}

impl Model for HeatIntegration {
    type Input = Vec<BlockReading>;
    type Output = Analysis;
    type Error = HeatIntegrationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let analysis = self::core::run(input, &self.config)?;

        info!(
            blocks = input.len(),
            hot = analysis.hot().count(),
            cold = analysis.cold().count(),
            pairs = analysis.pairs.len(),
            skipped = analysis.skipped.len(),
            "heat integration complete"
        );

        Ok(analysis)
    }
}
