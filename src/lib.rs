//! # Twine Heat Integration
//!
//! Heat-exchanger pairing for block results extracted from a process
//! simulator, exposed as a [`twine_core::Model`].
//!
//! Block readings (an identifier, inlet and outlet temperatures, and a duty)
//! are classified as hot or cold, then hot blocks are greedily matched to cold
//! blocks whose duties agree within a relative tolerance.
//!
//! ## Crate layout
//!
//! - [`models`]: The [`twine_core::Model`] adapter that runs the pairing pipeline.
//! - [`support`]: Units, numeric constraints, and the pairing toolkit used by models.
//! - [`source`]: Where block readings come from (CSV tables, in-memory lists).
//! - [`export`]: Where classified records and pairs go (CSV tables).
//!
//! ## Example
//!
//! ```
//! use twine_core::Model;
//! use twine_heat_integration::{
//!     models::thermal::hx::{HeatIntegration, HeatIntegrationConfig},
//!     support::hx::{BlockReading, Reading},
//! };
//!
//! let model = HeatIntegration::new(HeatIntegrationConfig::default());
//! let readings = vec![
//!     BlockReading::new("E1", Reading::Number(150.0), Reading::Number(50.0), Some(Reading::Number(-200.0))),
//!     BlockReading::new("E2", Reading::Number(30.0), Reading::Number(120.0), Some(Reading::Number(199.0))),
//! ];
//!
//! let analysis = model.call(&readings).unwrap();
//! assert_eq!(analysis.pairs.len(), 1);
//! assert_eq!(analysis.pairs[0].hot, "E1");
//! assert_eq!(analysis.pairs[0].cold, "E2");
//! ```

pub mod export;
pub mod models;
pub mod source;
pub mod support;
