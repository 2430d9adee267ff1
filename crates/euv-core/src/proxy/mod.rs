//! Solar proxy inputs and their conversion into regressor matrices.
//!
//! Callers hand in F10.7 and Lyman-alpha values as [`ProxyValue`]s. A
//! [`ProxyInput`] pairs them, and [`ProxyInput::validate`] normalizes both into
//! plain sample sequences before any transform runs.

pub mod transform;

pub use transform::{build_e, build_echr, build_ecor, modified_index};

use crate::domain::EuvError;
use serde_json::Value;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyKind {
    Scalar,
    Sequence,
}

impl ProxyKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Sequence => "sequence",
        }
    }
}

impl Display for ProxyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProxyError {
    #[error("only numeric scalars or sequences of numbers are allowed; {name} was {found}")]
    InputType { name: &'static str, found: String },
    #[error("f107 and lya must be of the same kind; f107 was {f107}, lya was {lya}")]
    KindMismatch { f107: ProxyKind, lya: ProxyKind },
    #[error("{name} sequence must contain at least one sample")]
    EmptySequence { name: &'static str },
    #[error("{name} sample {index} is {value}; proxy values must be finite")]
    NonFinite {
        name: &'static str,
        index: usize,
        value: f64,
    },
    #[error(
        "the number of F10.7 and Lyman-alpha values does not match; f107 contained {f107} elements, lya contained {lya} elements"
    )]
    LengthMismatch { f107: usize, lya: usize },
}

impl ProxyError {
    /// True for every failure that rejects the shape or type of an input.
    pub fn is_input_type(&self) -> bool {
        !matches!(self, Self::LengthMismatch { .. })
    }
}

impl From<ProxyError> for EuvError {
    fn from(error: ProxyError) -> Self {
        let placeholder = if error.is_input_type() {
            "INPUT.PROXY_TYPE"
        } else {
            "INPUT.PROXY_LENGTH"
        };
        EuvError::input_validation(placeholder, error.to_string())
    }
}

/// A single proxy observation or an ordered series of them.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxyValue {
    Scalar(f64),
    Sequence(Vec<f64>),
}

impl ProxyValue {
    pub fn kind(&self) -> ProxyKind {
        match self {
            Self::Scalar(_) => ProxyKind::Scalar,
            Self::Sequence(_) => ProxyKind::Sequence,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Sequence(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Promotes the value to a sample sequence, rejecting empty sequences
    /// and non-finite samples.
    pub fn to_samples(&self, name: &'static str) -> Result<Vec<f64>, ProxyError> {
        let samples = match self {
            Self::Scalar(value) => vec![*value],
            Self::Sequence(values) if values.is_empty() => {
                return Err(ProxyError::EmptySequence { name });
            }
            Self::Sequence(values) => values.clone(),
        };

        if let Some((index, &value)) = samples
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(ProxyError::NonFinite { name, index, value });
        }
        Ok(samples)
    }

    /// Reads a proxy from untyped JSON: a number, or an array of numbers.
    pub fn from_json(name: &'static str, value: &Value) -> Result<Self, ProxyError> {
        match value {
            Value::Number(number) => number
                .as_f64()
                .map(Self::Scalar)
                .ok_or_else(|| input_type(name, "a number outside the f64 range")),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Number(number) => number
                        .as_f64()
                        .ok_or_else(|| input_type(name, "a number outside the f64 range")),
                    other => Err(input_type(
                        name,
                        format!("an array containing {}", json_type_name(other)),
                    )),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Sequence),
            other => Err(input_type(name, json_type_name(other))),
        }
    }
}

fn input_type(name: &'static str, found: impl Into<String>) -> ProxyError {
    ProxyError::InputType {
        name,
        found: found.into(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<f64> for ProxyValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<i32> for ProxyValue {
    fn from(value: i32) -> Self {
        Self::Scalar(f64::from(value))
    }
}

impl From<Vec<f64>> for ProxyValue {
    fn from(values: Vec<f64>) -> Self {
        Self::Sequence(values)
    }
}

impl From<&[f64]> for ProxyValue {
    fn from(values: &[f64]) -> Self {
        Self::Sequence(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for ProxyValue {
    fn from(values: [f64; N]) -> Self {
        Self::Sequence(values.to_vec())
    }
}

/// F10.7 and Lyman-alpha proxies for one model call.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyInput {
    pub f107: ProxyValue,
    pub lya: ProxyValue,
}

impl ProxyInput {
    pub fn new(f107: impl Into<ProxyValue>, lya: impl Into<ProxyValue>) -> Self {
        Self {
            f107: f107.into(),
            lya: lya.into(),
        }
    }

    /// Reads `{"f107": .., "lya": ..}` from untyped JSON.
    pub fn from_json(value: &Value) -> Result<Self, ProxyError> {
        let Value::Object(fields) = value else {
            return Err(input_type("input", json_type_name(value)));
        };
        let f107 = fields.get("f107").unwrap_or(&Value::Null);
        let lya = fields.get("lya").unwrap_or(&Value::Null);
        Ok(Self {
            f107: ProxyValue::from_json("f107", f107)?,
            lya: ProxyValue::from_json("lya", lya)?,
        })
    }

    /// Checks that both proxies share a kind and normalizes them to sequences.
    ///
    /// Sequence lengths are not compared here; the coronal transform reports
    /// a length mismatch with both counts.
    pub fn validate(&self) -> Result<ProxySamples, ProxyError> {
        let f107_kind = self.f107.kind();
        let lya_kind = self.lya.kind();
        if f107_kind != lya_kind {
            return Err(ProxyError::KindMismatch {
                f107: f107_kind,
                lya: lya_kind,
            });
        }

        Ok(ProxySamples {
            f107: self.f107.to_samples("f107")?,
            lya: self.lya.to_samples("lya")?,
        })
    }
}

/// Validated, sequence-normalized proxies.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxySamples {
    f107: Vec<f64>,
    lya: Vec<f64>,
}

impl ProxySamples {
    pub fn f107(&self) -> &[f64] {
        &self.f107
    }

    pub fn lya(&self) -> &[f64] {
        &self.lya
    }
}
