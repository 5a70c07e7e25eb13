//! Thermal systems models.
//!
//! This module contains models that operate on heat exchanger data, such as
//! pairing heaters and coolers for heat integration.

pub mod hx;
