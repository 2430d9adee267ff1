use crate::domain::{ModelVariant, SpectralDomain};
use faer::Mat;

/// Modeled irradiance: one row per bin in table order, one column per sample.
#[derive(Debug, Clone)]
pub struct SpectrumMatrix {
    variant: ModelVariant,
    domain: SpectralDomain,
    bins: Vec<String>,
    values: Mat<f64>,
}

impl SpectrumMatrix {
    pub(crate) fn new(
        variant: ModelVariant,
        domain: SpectralDomain,
        bins: Vec<String>,
        values: Mat<f64>,
    ) -> Self {
        debug_assert_eq!(bins.len(), values.nrows());
        Self {
            variant,
            domain,
            bins,
            values,
        }
    }

    pub fn variant(&self) -> ModelVariant {
        self.variant
    }

    pub fn domain(&self) -> SpectralDomain {
        self.domain
    }

    pub fn bins(&self) -> &[String] {
        &self.bins
    }

    pub fn bin_count(&self) -> usize {
        self.values.nrows()
    }

    pub fn sample_count(&self) -> usize {
        self.values.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.bin_count(), self.sample_count())
    }

    pub fn value(&self, bin: usize, sample: usize) -> f64 {
        self.values[(bin, sample)]
    }

    pub fn bin_row(&self, bin: usize) -> Vec<f64> {
        (0..self.sample_count())
            .map(|sample| self.values[(bin, sample)])
            .collect()
    }

    pub fn sample_column(&self, sample: usize) -> Vec<f64> {
        (0..self.bin_count())
            .map(|bin| self.values[(bin, sample)])
            .collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.bin_count()).map(|bin| self.bin_row(bin)).collect()
    }
}

impl PartialEq for SpectrumMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.variant == other.variant
            && self.domain == other.domain
            && self.bins == other.bins
            && self.shape() == other.shape()
            && self.to_rows() == other.to_rows()
    }
}
