use super::CliError;
use super::helpers::*;
use euv_core::coefficients::CoefficientTableProvider;
use euv_core::domain::{ModelVariant, SpectralDomain, TableId};
use euv_core::models::build_model;
use euv_core::serialization::{render_spectrum_text, spectra_to_json};
use std::path::{Path, PathBuf};

#[derive(clap::Args)]
pub(super) struct CoefficientDirArgs {
    /// Directory holding the coefficient tables (overrides --config)
    #[arg(long, value_name = "DIR")]
    coeffs: Option<PathBuf>,
}

#[derive(clap::Args)]
#[command(group(clap::ArgGroup::new("proxies").required(true).args(["f107", "input"])))]
pub(super) struct SpectrumArgs {
    /// Irradiance model: euv91 or serf2
    #[arg(long, default_value = "serf2", value_parser = parse_model)]
    model: ModelVariant,

    /// F10.7 radio flux; one value is a scalar, several form a sequence
    #[arg(
        long,
        value_delimiter = ',',
        num_args = 1..,
        allow_negative_numbers = true,
        requires = "lya"
    )]
    f107: Vec<String>,

    /// Lyman-alpha flux; one value is a scalar, several form a sequence
    #[arg(
        long,
        value_delimiter = ',',
        num_args = 1..,
        allow_negative_numbers = true,
        requires = "f107"
    )]
    lya: Vec<String>,

    /// JSON file holding {"f107": .., "lya": ..}
    #[arg(long, conflicts_with_all = ["f107", "lya"])]
    input: Option<PathBuf>,

    #[command(flatten)]
    tables: CoefficientDirArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the rendered spectra to this path instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct TablesArgs {
    #[command(flatten)]
    tables: CoefficientDirArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(super) enum OutputFormat {
    Text,
    Json,
}

fn parse_model(token: &str) -> Result<ModelVariant, String> {
    ModelVariant::parse(token).ok_or_else(|| {
        format!(
            "unknown model '{}'; expected one of: {}",
            token,
            ModelVariant::ALL.map(ModelVariant::as_str).join(", ")
        )
    })
}

pub(super) fn run_spectrum_command(
    domains: &[SpectralDomain],
    args: SpectrumArgs,
    config: Option<&Path>,
) -> Result<i32, CliError> {
    let input = match &args.input {
        Some(path) => load_proxy_file(path)?,
        None => proxy_input_from_args(&args.f107, &args.lya)
            .map_err(|error| CliError::Compute(error.into()))?,
    };
    let store = open_coefficient_store(args.tables.coeffs.as_deref(), config)?;
    let model = build_model(args.model, &store).map_err(CliError::Compute)?;

    let mut spectra = Vec::with_capacity(domains.len());
    for &domain in domains {
        let spectrum = model
            .spectrum(domain, &input)
            .and_then(|output| output.into_result())
            .map_err(CliError::Compute)?;
        spectra.push(spectrum);
    }
    tracing::info!(
        model = %args.model,
        spectra = spectra.len(),
        samples = spectra.first().map(|spectrum| spectrum.sample_count()).unwrap_or(0),
        "computed spectra"
    );

    let rendered = match args.format {
        OutputFormat::Json => {
            let spectra = spectra.iter().collect::<Vec<_>>();
            let mut json = spectra_to_json(&spectra).map_err(anyhow::Error::from)?;
            json.push('\n');
            json
        }
        OutputFormat::Text => spectra
            .iter()
            .map(render_spectrum_text)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    emit_output(args.output.as_deref(), &rendered)?;
    Ok(0)
}

pub(super) fn run_tables_command(args: TablesArgs, config: Option<&Path>) -> Result<i32, CliError> {
    let store = open_coefficient_store(args.tables.coeffs.as_deref(), config)?;

    let mut report = String::new();
    for variant in ModelVariant::ALL {
        for domain in SpectralDomain::ALL {
            let id = TableId::new(variant, domain);
            let table = store
                .table(id)
                .map_err(|error| CliError::Compute(error.into()))?;
            report.push_str(&format!("{:<14}{:>6} bins", id.to_string(), table.bin_count()));
            if let Some(description) = table.description() {
                report.push_str(&format!("  {}", description));
            }
            report.push('\n');
        }
    }
    print!("{}", report);
    Ok(0)
}
