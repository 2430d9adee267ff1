//! Empirical solar EUV spectral irradiance models.
//!
//! Irradiance in each wavelength band or emission line is a linear
//! combination of terms derived from the F10.7 radio flux and the
//! Lyman-alpha line flux. Per-bin coefficients come from reference tables
//! supplied through a [`coefficients::CoefficientTableProvider`].
//!
//! ## Crate layout
//!
//! - [`coefficients`]: reference tables, the caching [`coefficients::CoefficientStore`],
//!   and coefficient matrix assembly.
//! - [`proxy`]: proxy input validation and regressor matrices.
//! - [`numerics`]: projection of coefficients onto regressors.
//! - [`models`]: the EUV91 and SERF2 calibrations behind [`models::SpectralModel`].
//! - [`serialization`]: text and JSON rendering of spectra.

pub mod coefficients;
pub mod common;
pub mod domain;
pub mod models;
pub mod numerics;
pub mod proxy;
pub mod serialization;
