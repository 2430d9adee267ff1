use crate::models::SpectrumMatrix;
use serde::Serialize;
use std::fs;
use std::path::Path;

const VALUE_WIDTH: usize = 16;
const VALUE_PRECISION: usize = 8;

pub fn format_scientific_f64(value: f64, width: usize, precision: usize) -> String {
    format!(
        "{value:>width$.precision$e}",
        width = width,
        precision = precision
    )
}

pub fn normalize_text_artifact(content: &str) -> String {
    let mut normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    if !normalized.is_empty() && !normalized.ends_with('\n') {
        normalized.push('\n');
    }
    normalized
}

pub fn write_text_artifact(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, normalize_text_artifact(content))
}

/// JSON shape of a computed spectrum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectrumReport<'a> {
    pub model: &'a str,
    pub domain: &'a str,
    pub bins: &'a [String],
    #[serde(rename = "sampleCount")]
    pub sample_count: usize,
    /// Irradiance rows, one per bin, one value per sample.
    pub irradiance: Vec<Vec<f64>>,
}

impl<'a> SpectrumReport<'a> {
    pub fn from_spectrum(spectrum: &'a SpectrumMatrix) -> Self {
        Self {
            model: spectrum.variant().as_str(),
            domain: spectrum.domain().as_str(),
            bins: spectrum.bins(),
            sample_count: spectrum.sample_count(),
            irradiance: spectrum.to_rows(),
        }
    }
}

pub fn spectra_to_json(spectra: &[&SpectrumMatrix]) -> serde_json::Result<String> {
    let reports = spectra
        .iter()
        .map(|spectrum| SpectrumReport::from_spectrum(spectrum))
        .collect::<Vec<_>>();
    serde_json::to_string_pretty(&reports)
}

/// Fixed-width text table: a header comment, then one line per bin.
pub fn render_spectrum_text(spectrum: &SpectrumMatrix) -> String {
    let label_width = spectrum
        .bins()
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max("bin".len());

    let mut output = format!(
        "# model={} domain={} bins={} samples={}\n",
        spectrum.variant(),
        spectrum.domain(),
        spectrum.bin_count(),
        spectrum.sample_count()
    );
    output.push_str(&format!("# {:<width$}", "bin", width = label_width));
    for sample in 0..spectrum.sample_count() {
        output.push_str(&format!(
            "{:>width$}",
            format!("sample{sample}"),
            width = VALUE_WIDTH
        ));
    }
    output.push('\n');

    for (bin, label) in spectrum.bins().iter().enumerate() {
        output.push_str(&format!("  {:<width$}", label, width = label_width));
        for value in spectrum.bin_row(bin) {
            output.push_str(&format_scientific_f64(value, VALUE_WIDTH, VALUE_PRECISION));
        }
        output.push('\n');
    }

    output
}
