//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the pipeline lives. The [`twine_core::Model`] implementation is a thin
//! adapter that delegates to that core.

pub mod thermal;
