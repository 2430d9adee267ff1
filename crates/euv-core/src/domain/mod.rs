pub mod errors;
pub mod terms;

pub use errors::{EuvError, EuvErrorCategory, EuvResult};
pub use terms::{ChromosphericTerm, CoronalTerm};

use std::fmt::{Display, Formatter};

/// Calibration family of an irradiance model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModelVariant {
    /// Legacy EUV91 calibration.
    Euv91,
    /// Current SERF2 calibration.
    Serf2,
}

impl ModelVariant {
    pub const ALL: [ModelVariant; 2] = [Self::Euv91, Self::Serf2];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Euv91 => "euv91",
            Self::Serf2 => "serf2",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "euv91" => Some(Self::Euv91),
            "serf2" => Some(Self::Serf2),
            _ => None,
        }
    }
}

impl Display for ModelVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Spectral partition a coefficient table covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpectralDomain {
    Bands,
    Lines,
}

impl SpectralDomain {
    pub const ALL: [SpectralDomain; 2] = [Self::Bands, Self::Lines];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bands => "bands",
            Self::Lines => "lines",
        }
    }
}

impl Display for SpectralDomain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Identifies one reference table: a model variant paired with a spectral domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId {
    pub variant: ModelVariant,
    pub domain: SpectralDomain,
}

impl TableId {
    pub const fn new(variant: ModelVariant, domain: SpectralDomain) -> Self {
        Self { variant, domain }
    }

    pub const fn bands(variant: ModelVariant) -> Self {
        Self::new(variant, SpectralDomain::Bands)
    }

    pub const fn lines(variant: ModelVariant) -> Self {
        Self::new(variant, SpectralDomain::Lines)
    }

    /// Canonical file name of the table inside a coefficient directory.
    pub fn file_name(self) -> String {
        format!("{}_{}_dataset.json", self.variant, self.domain)
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.variant, self.domain)
    }
}
