//! Regression term ordering shared by coefficient and regressor matrices.
//!
//! Coefficient matrices and regressor matrices are both laid out by iterating
//! `ORDER`, so column `j` of one always pairs with column `j` of the other.

use crate::common::constants::{CHROMOSPHERIC_TERMS, CORONAL_TERMS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromosphericTerm {
    /// Constant term, weighted by `a1`.
    Intercept,
    /// Chromospheric proxy term, weighted by `b1 * wchr`.
    Proxy,
}

impl ChromosphericTerm {
    pub const ORDER: [Self; CHROMOSPHERIC_TERMS] = [Self::Intercept, Self::Proxy];

    pub const fn column(self) -> usize {
        match self {
            Self::Intercept => 0,
            Self::Proxy => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoronalTerm {
    /// Constant term, weighted by `a2`.
    Intercept,
    /// Modified F10.7 index, weighted by `b2 * w1`.
    ModifiedIndex,
    /// Raw F10.7, weighted by `b2 * w2`.
    F107,
}

impl CoronalTerm {
    pub const ORDER: [Self; CORONAL_TERMS] = [Self::Intercept, Self::ModifiedIndex, Self::F107];

    pub const fn column(self) -> usize {
        match self {
            Self::Intercept => 0,
            Self::ModifiedIndex => 1,
            Self::F107 => 2,
        }
    }
}
