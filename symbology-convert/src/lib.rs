//! 将解析后的符号对象树转换为通用字典结构（字符串键、有序数组与标量），
//! 供 JSON 输出或其他符号系统的重新编码使用。

pub mod decoration;
pub mod fill;
pub mod leaf;
pub mod line;
pub mod marker;
pub mod picture;
pub mod symbol;

use serde_json::Value;
use symbology_config::OutputConfig;
use symbology_core::Dict;
use symbology_core::symbol::SymbolPayload;
use thiserror::Error;
use tracing::warn;

pub use leaf::convert_color_ramp;
pub use symbol::{convert_layer, convert_payload, convert_symbol};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("unsupported variant: {0}")]
    UnsupportedVariant(String),
    #[error("failed to re-encode {kind} as PNG: {source}")]
    PictureEncoding {
        kind: String,
        #[source]
        source: image::ImageError,
    },
    #[error("non-finite number in field {key}: {value}")]
    NonFiniteNumber { key: String, value: f64 },
    #[error("failed to serialize converted symbol: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConvertError {
    pub(crate) fn unsupported(variant: impl Into<String>) -> Self {
        let variant = variant.into();
        warn!(variant = %variant, "遇到无法转换的变体");
        Self::UnsupportedVariant(variant)
    }
}

/// 数值字段：NaN 与无穷大没有 JSON 表示，报错而不是写成 `null`。
pub(crate) fn number(key: &str, value: f64) -> Result<Value, ConvertError> {
    if value.is_finite() {
        Ok(Value::from(value))
    } else {
        warn!(key, value, "数值字段不是有限数");
        Err(ConvertError::NonFiniteNumber {
            key: key.to_string(),
            value,
        })
    }
}

pub(crate) fn insert_number(out: &mut Dict, key: &str, value: f64) -> Result<(), ConvertError> {
    out.insert(key.to_string(), number(key, value)?);
    Ok(())
}

/// 数值数组，逐项检查。
pub(crate) fn numbers(key: &str, values: &[f64]) -> Result<Value, ConvertError> {
    values
        .iter()
        .map(|&value| number(key, value))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

/// 可选字段：存在时转换为对象，缺失时输出显式 `null`。
pub(crate) fn nullable<T>(
    value: Option<&T>,
    convert: impl FnOnce(&T) -> Result<Dict, ConvertError>,
) -> Result<Value, ConvertError> {
    match value {
        Some(inner) => convert(inner).map(Value::Object),
        None => Ok(Value::Null),
    }
}

pub trait SymbolConverter {
    type Output;

    fn convert(&self, payload: &SymbolPayload) -> Result<Self::Output, ConvertError>;
}

/// 输出通用字典结构。
pub struct DictionaryConverter;

impl DictionaryConverter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DictionaryConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolConverter for DictionaryConverter {
    type Output = Value;

    fn convert(&self, payload: &SymbolPayload) -> Result<Value, ConvertError> {
        convert_payload(payload).map(Value::Object)
    }
}

/// 转换后直接序列化为 JSON 文本。
pub struct JsonConverter {
    output: OutputConfig,
}

impl JsonConverter {
    pub fn new(output: OutputConfig) -> Self {
        Self { output }
    }
}

impl SymbolConverter for JsonConverter {
    type Output = String;

    fn convert(&self, payload: &SymbolPayload) -> Result<String, ConvertError> {
        to_json_string(payload, &self.output)
    }
}

pub fn to_json_string(
    payload: &SymbolPayload,
    output: &OutputConfig,
) -> Result<String, ConvertError> {
    let converted = Value::Object(convert_payload(payload)?);
    let text = if output.pretty {
        serde_json::to_string_pretty(&converted)?
    } else {
        serde_json::to_string(&converted)?
    };
    Ok(text)
}
