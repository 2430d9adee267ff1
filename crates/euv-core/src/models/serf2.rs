use super::{DomainCoefficients, SpectralModel, SpectralOutput, SpectrumMatrix};
use crate::coefficients::CoefficientTableProvider;
use crate::domain::{EuvResult, ModelVariant, SpectralDomain, TableId};
use crate::numerics::{SpectralContributions, contributions};
use crate::proxy::{ProxyInput, build_echr, build_ecor};

/// SERF2 calibration: Lyman-alpha driven chromospheric term plus a coronal
/// term in F10.7 and the modified index.
#[derive(Debug, Clone)]
pub struct Serf2 {
    bands: DomainCoefficients,
    lines: DomainCoefficients,
}

impl Serf2 {
    pub const VARIANT: ModelVariant = ModelVariant::Serf2;

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

    pub fn bands(&self) -> &DomainCoefficients {
        &self.bands
    }

    pub fn lines(&self) -> &DomainCoefficients {
        &self.lines
    }

    pub fn coefficients(&self, domain: SpectralDomain) -> &DomainCoefficients {
        match domain {
            SpectralDomain::Bands => &self.bands,
            SpectralDomain::Lines => &self.lines,
        }
    }

    /// Chromospheric and coronal parts of the spectrum, before summation.
    pub fn contributions(
        &self,
        domain: SpectralDomain,
        input: &ProxyInput,
    ) -> EuvResult<SpectralContributions> {
        let samples = input.validate()?;
        let echr = build_echr(samples.lya());
        let ecor = build_ecor(samples.f107(), samples.lya())?;

        let matrices = self.coefficients(domain).matrices();
        Ok(contributions(
            matrices.chromospheric(),
            matrices.coronal(),
            &echr,
            &ecor,
        ))
    }

    pub fn compute(&self, domain: SpectralDomain, input: &ProxyInput) -> EuvResult<SpectrumMatrix> {
        let parts = self.contributions(domain, input)?;
        let values = parts.total();
        tracing::debug!(
            model = %Self::VARIANT,
            domain = %domain,
            bins = values.nrows(),
            samples = values.ncols(),
            "computed spectrum"
        );

        let bins = self.coefficients(domain).table().bins().to_vec();
        Ok(SpectrumMatrix::new(Self::VARIANT, domain, bins, values))
    }
}

impl SpectralModel for Serf2 {
    fn variant(&self) -> ModelVariant {
        Self::VARIANT
    }

    fn spectral_bands(&self, input: &ProxyInput) -> EuvResult<SpectralOutput> {
        self.compute(SpectralDomain::Bands, input)
            .map(SpectralOutput::Computed)
    }

    fn spectral_lines(&self, input: &ProxyInput) -> EuvResult<SpectralOutput> {
        self.compute(SpectralDomain::Lines, input)
            .map(SpectralOutput::Computed)
    }
}
