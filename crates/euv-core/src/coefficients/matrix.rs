use super::table::CoefficientTable;
use crate::common::constants::{CHROMOSPHERIC_TERMS, CORONAL_TERMS};
use crate::domain::{ChromosphericTerm, CoronalTerm};
use faer::Mat;

/// Chromospheric and coronal coefficient matrices for one spectral domain.
///
/// Both matrices have one row per bin in table order. Columns follow
/// [`ChromosphericTerm::ORDER`] and [`CoronalTerm::ORDER`].
#[derive(Debug, Clone)]
pub struct CoefficientMatrices {
    chromospheric: Mat<f64>,
    coronal: Mat<f64>,
}

impl CoefficientMatrices {
    pub fn from_table(table: &CoefficientTable) -> Self {
        let bins = table.bin_count();

        let mut chromospheric = Mat::<f64>::zeros(bins, CHROMOSPHERIC_TERMS);
        for row in 0..bins {
            for term in ChromosphericTerm::ORDER {
                chromospheric[(row, term.column())] = chromospheric_coefficient(table, row, term);
            }
        }

        let mut coronal = Mat::<f64>::zeros(bins, CORONAL_TERMS);
        for row in 0..bins {
            for term in CoronalTerm::ORDER {
                coronal[(row, term.column())] = coronal_coefficient(table, row, term);
            }
        }

        Self {
            chromospheric,
            coronal,
        }
    }

    pub fn bin_count(&self) -> usize {
        self.chromospheric.nrows()
    }

    pub fn chromospheric(&self) -> &Mat<f64> {
        &self.chromospheric
    }

    pub fn coronal(&self) -> &Mat<f64> {
        &self.coronal
    }
}

fn chromospheric_coefficient(table: &CoefficientTable, row: usize, term: ChromosphericTerm) -> f64 {
    match term {
        ChromosphericTerm::Intercept => table.a1()[row],
        ChromosphericTerm::Proxy => table.b1()[row] * table.wchr()[row],
    }
}

fn coronal_coefficient(table: &CoefficientTable, row: usize, term: CoronalTerm) -> f64 {
    match term {
        CoronalTerm::Intercept => table.a2()[row],
        CoronalTerm::ModifiedIndex => table.b2()[row] * table.w1()[row],
        CoronalTerm::F107 => table.b2()[row] * table.w2()[row],
    }
}
