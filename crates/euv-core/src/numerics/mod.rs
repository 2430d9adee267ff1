use faer::linalg::matmul::matmul;
use faer::{Accum, Mat, Par};

/// Chromospheric and coronal parts of a spectrum before they are summed.
#[derive(Debug, Clone)]
pub struct SpectralContributions {
    pub chromospheric: Mat<f64>,
    pub coronal: Mat<f64>,
}

impl SpectralContributions {
    pub fn total(&self) -> Mat<f64> {
        &self.chromospheric + &self.coronal
    }
}

/// `coefficients · regressors^T`, giving one row per bin and one column per sample.
pub fn project(coefficients: &Mat<f64>, regressors: &Mat<f64>) -> Mat<f64> {
    debug_assert_eq!(
        coefficients.ncols(),
        regressors.ncols(),
        "coefficient and regressor term counts must match"
    );

    let mut projected = Mat::<f64>::zeros(coefficients.nrows(), regressors.nrows());
    matmul(
        projected.as_mut(),
        Accum::Replace,
        coefficients.as_ref(),
        regressors.transpose(),
        1.0,
        Par::Seq,
    );
    projected
}

pub fn contributions(
    chromospheric_coefficients: &Mat<f64>,
    coronal_coefficients: &Mat<f64>,
    chromospheric_regressors: &Mat<f64>,
    coronal_regressors: &Mat<f64>,
) -> SpectralContributions {
    SpectralContributions {
        chromospheric: project(chromospheric_coefficients, chromospheric_regressors),
        coronal: project(coronal_coefficients, coronal_regressors),
    }
}

/// Sums the chromospheric and coronal projections into a bins × samples spectrum.
pub fn combine(
    chromospheric_coefficients: &Mat<f64>,
    coronal_coefficients: &Mat<f64>,
    chromospheric_regressors: &Mat<f64>,
    coronal_regressors: &Mat<f64>,
) -> Mat<f64> {
    contributions(
        chromospheric_coefficients,
        coronal_coefficients,
        chromospheric_regressors,
        coronal_regressors,
    )
    .total()
}
