use super::ProxyError;
use crate::common::constants::{
    CHROMOSPHERIC_TERMS, CORONAL_TERMS, EV_TO_ERG, F107MOD_INTERCEPT, F107MOD_SLOPE,
    HC_EV_ANGSTROM, LYMAN_ALPHA_ANGSTROM,
};
use crate::domain::{ChromosphericTerm, CoronalTerm};
use faer::Mat;

/// Modified F10.7 index `-218.88 + 1.05453e-9 * value`.
pub fn modified_index(value: f64) -> f64 {
    F107MOD_INTERCEPT + F107MOD_SLOPE * value
}

/// Chromospheric regressors driven directly by F10.7: one `[1, f107]` row per sample.
pub fn build_e(f107: &[f64]) -> Mat<f64> {
    chromospheric_regressors(f107, |value| value)
}

/// Chromospheric regressors driven by Lyman-alpha energy flux: one `[1, f_lya]` row per sample.
pub fn build_echr(lya: &[f64]) -> Mat<f64> {
    chromospheric_regressors(lya, lyman_alpha_energy_flux)
}

/// Coronal regressors: one `[1, f107mod, f107]` row per sample.
///
/// The modified index is computed from the Lyman-alpha sample, not from F10.7.
pub fn build_ecor(f107: &[f64], lya: &[f64]) -> Result<Mat<f64>, ProxyError> {
    if f107.len() != lya.len() {
        return Err(ProxyError::LengthMismatch {
            f107: f107.len(),
            lya: lya.len(),
        });
    }

    let mut regressors = Mat::<f64>::zeros(f107.len(), CORONAL_TERMS);
    for (row, (&f107_value, &lya_value)) in f107.iter().zip(lya).enumerate() {
        for term in CoronalTerm::ORDER {
            regressors[(row, term.column())] = match term {
                CoronalTerm::Intercept => 1.0,
                CoronalTerm::ModifiedIndex => modified_index(lya_value),
                CoronalTerm::F107 => f107_value,
            };
        }
    }

    Ok(regressors)
}

fn lyman_alpha_energy_flux(lya: f64) -> f64 {
    lya * HC_EV_ANGSTROM * EV_TO_ERG / LYMAN_ALPHA_ANGSTROM
}

fn chromospheric_regressors(samples: &[f64], proxy: impl Fn(f64) -> f64) -> Mat<f64> {
    let mut regressors = Mat::<f64>::zeros(samples.len(), CHROMOSPHERIC_TERMS);
    for (row, &value) in samples.iter().enumerate() {
        for term in ChromosphericTerm::ORDER {
            regressors[(row, term.column())] = match term {
                ChromosphericTerm::Intercept => 1.0,
                ChromosphericTerm::Proxy => proxy(value),
            };
        }
    }
    regressors
}
