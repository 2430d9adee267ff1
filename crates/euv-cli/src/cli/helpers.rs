use super::CliError;
use anyhow::Context;
use euv_core::coefficients::CoefficientStore;
use euv_core::common::config::{EngineConfig, load_engine_config};
use euv_core::domain::EuvError;
use euv_core::proxy::{ProxyError, ProxyInput, ProxyValue};
use euv_core::serialization::write_text_artifact;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs the stderr subscriber; `RUST_LOG` wins unless `--verbose` is set.
pub(super) fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// One token is a scalar, several form a sequence. Tokens that are not
/// numbers fail the same way a non-numeric `--input` file does.
pub(super) fn proxy_value_from_args(
    name: &'static str,
    tokens: &[String],
) -> Result<ProxyValue, ProxyError> {
    let mut values = tokens
        .iter()
        .map(|token| {
            token
                .trim()
                .parse::<f64>()
                .map_err(|_| ProxyError::InputType {
                    name,
                    found: format!("the string '{}'", token),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(if values.len() == 1 {
        ProxyValue::Scalar(values.remove(0))
    } else {
        ProxyValue::Sequence(values)
    })
}

pub(super) fn proxy_input_from_args(
    f107: &[String],
    lya: &[String],
) -> Result<ProxyInput, ProxyError> {
    Ok(ProxyInput::new(
        proxy_value_from_args("f107", f107)?,
        proxy_value_from_args("lya", lya)?,
    ))
}

pub(super) fn load_proxy_file(path: &Path) -> Result<ProxyInput, CliError> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read proxy input '{}'", path.display()))?;
    let value: Value = serde_json::from_str(&source).map_err(|error| {
        CliError::Compute(EuvError::input_validation(
            "INPUT.PROXY_FILE",
            format!("failed to parse proxy input '{}': {}", path.display(), error),
        ))
    })?;
    ProxyInput::from_json(&value).map_err(|error| CliError::Compute(error.into()))
}

/// Coefficient directory precedence: `--coeffs`, then `--config`, then the default.
pub(super) fn resolve_engine_config(
    coeffs: Option<&Path>,
    config: Option<&Path>,
) -> Result<EngineConfig, CliError> {
    let mut engine_config = match config {
        Some(path) => {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            load_engine_config(path)
                .map_err(|error| CliError::Compute(error.into()))?
                .resolved_against(base)
        }
        None => EngineConfig::default(),
    };
    if let Some(directory) = coeffs {
        engine_config = engine_config.with_coefficient_dir(directory);
    }
    Ok(engine_config)
}

pub(super) fn open_coefficient_store(
    coeffs: Option<&Path>,
    config: Option<&Path>,
) -> Result<CoefficientStore, CliError> {
    let engine_config = resolve_engine_config(coeffs, config)?;
    tracing::debug!(
        directory = %engine_config.coefficient_dir.display(),
        "opening coefficient store"
    );
    Ok(CoefficientStore::from_config(&engine_config))
}

pub(super) fn emit_output(output: Option<&Path>, rendered: &str) -> Result<(), CliError> {
    match output {
        Some(path) => {
            write_text_artifact(path, rendered)
                .with_context(|| format!("failed to write output '{}'", path.display()))?;
            tracing::info!(path = %path.display(), "wrote spectra");
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
