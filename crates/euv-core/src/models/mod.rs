//! EUV irradiance models.
//!
//! Both calibrations implement [`SpectralModel`]. [`Serf2`] computes band and
//! line spectra; [`Euv91`] builds its coefficient matrices but reports
//! [`SpectralOutput::NotImplemented`] for every spectral call.

mod euv91;
mod serf2;
mod spectrum;

pub use euv91::Euv91;
pub use serf2::Serf2;
pub use spectrum::SpectrumMatrix;

use crate::coefficients::{CoefficientMatrices, CoefficientTable, CoefficientTableProvider};
use crate::domain::{EuvError, EuvResult, ModelVariant, SpectralDomain, TableId};
use crate::proxy::ProxyInput;
use std::sync::Arc;

/// Result of a spectral call.
#[derive(Debug, Clone, PartialEq)]
pub enum SpectralOutput {
    Computed(SpectrumMatrix),
    /// The model has no implementation for this computation.
    NotImplemented(ModelVariant),
}

impl SpectralOutput {
    pub fn is_implemented(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    pub fn computed(self) -> Option<SpectrumMatrix> {
        match self {
            Self::Computed(spectrum) => Some(spectrum),
            Self::NotImplemented(_) => None,
        }
    }

    /// Converts the not-implemented signal into a computation error.
    pub fn into_result(self) -> EuvResult<SpectrumMatrix> {
        match self {
            Self::Computed(spectrum) => Ok(spectrum),
            Self::NotImplemented(variant) => Err(EuvError::computation(
                "RUN.NOT_IMPLEMENTED",
                format!("spectral computation is not implemented for the {variant} model"),
            )),
        }
    }
}

pub trait SpectralModel {
    fn variant(&self) -> ModelVariant;

    fn spectral_bands(&self, input: &ProxyInput) -> EuvResult<SpectralOutput>;

    fn spectral_lines(&self, input: &ProxyInput) -> EuvResult<SpectralOutput>;

    /// Band and line spectra for the same input, in that order.
    fn spectra(&self, input: &ProxyInput) -> EuvResult<(SpectralOutput, SpectralOutput)> {
        Ok((self.spectral_bands(input)?, self.spectral_lines(input)?))
    }

    fn spectrum(&self, domain: SpectralDomain, input: &ProxyInput) -> EuvResult<SpectralOutput> {
        match domain {
            SpectralDomain::Bands => self.spectral_bands(input),
            SpectralDomain::Lines => self.spectral_lines(input),
        }
    }
}

/// Constructs the model for `variant`, loading its tables from `provider`.
pub fn build_model<P>(
    variant: ModelVariant,
    provider: &P,
) -> EuvResult<Box<dyn SpectralModel + Send + Sync>>
where
    P: CoefficientTableProvider + ?Sized,
{
    Ok(match variant {
        ModelVariant::Euv91 => Box::new(Euv91::new(provider)?),
        ModelVariant::Serf2 => Box::new(Serf2::new(provider)?),
    })
}

/// A coefficient table together with the matrices derived from it.
#[derive(Debug, Clone)]
pub struct DomainCoefficients {
    table: Arc<CoefficientTable>,
    matrices: CoefficientMatrices,
}

impl DomainCoefficients {
    pub fn load<P>(provider: &P, id: TableId) -> EuvResult<Self>
    where
        P: CoefficientTableProvider + ?Sized,
    {
        let table = provider.table(id)?;
        let matrices = CoefficientMatrices::from_table(&table);
        Ok(Self { table, matrices })
    }

    pub fn table(&self) -> &CoefficientTable {
        &self.table
    }

    pub fn matrices(&self) -> &CoefficientMatrices {
        &self.matrices
    }

    pub fn bin_count(&self) -> usize {
        self.matrices.bin_count()
    }
}
