use super::{DomainCoefficients, SpectralModel, SpectralOutput};
use crate::coefficients::CoefficientTableProvider;
use crate::domain::{EuvResult, ModelVariant, TableId};
use crate::proxy::{ProxyError, ProxyInput, ProxyValue, build_e, modified_index};
use faer::Mat;

/// Legacy EUV91 calibration.
///
/// Coefficient matrices and the F10.7 regressor helpers are available, but
/// the calibration never defined how bands and lines are combined, so every
/// spectral call returns [`SpectralOutput::NotImplemented`].
#[derive(Debug, Clone)]
pub struct Euv91 {
    bands: DomainCoefficients,
    lines: DomainCoefficients,
}

impl Euv91 {
    pub const VARIANT: ModelVariant = ModelVariant::Euv91;

    pub fn new<P>(provider: &P) -> EuvResult<Self>
    where
        P: CoefficientTableProvider + ?Sized,
    {
        let bands = DomainCoefficients::load(provider, TableId::bands(Self::VARIANT))?;
        let lines = DomainCoefficients::load(provider, TableId::lines(Self::VARIANT))?;
        tracing::debug!(
            model = %Self::VARIANT,
            bands = bands.bin_count(),
            lines = lines.bin_count(),
            "constructed model"
        );
        Ok(Self { bands, lines })
    }

    /// `[1, f107]` regressor rows for a scalar or a sequence of F10.7 values.
    pub fn build_e(f107: impl Into<ProxyValue>) -> Result<Mat<f64>, ProxyError> {
        let samples = f107.into().to_samples("f107")?;
        Ok(build_e(&samples))
    }

    /// Modified F10.7 index computed from F10.7 itself.
    pub fn f107mod(f107: f64) -> f64 {
        modified_index(f107)
    }

    pub fn bands(&self) -> &DomainCoefficients {
        &self.bands
    }

    pub fn lines(&self) -> &DomainCoefficients {
        &self.lines
    }
}

impl SpectralModel for Euv91 {
    fn variant(&self) -> ModelVariant {
        Self::VARIANT
    }

    fn spectral_bands(&self, _input: &ProxyInput) -> EuvResult<SpectralOutput> {
        tracing::debug!(model = %Self::VARIANT, "band spectrum is not implemented");
        Ok(SpectralOutput::NotImplemented(Self::VARIANT))
    }

    fn spectral_lines(&self, _input: &ProxyInput) -> EuvResult<SpectralOutput> {
        tracing::debug!(model = %Self::VARIANT, "line spectrum is not implemented");
        Ok(SpectralOutput::NotImplemented(Self::VARIANT))
    }
}
