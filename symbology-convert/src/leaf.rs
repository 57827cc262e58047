use serde_json::Value;
use symbology_core::Dict;
use symbology_core::color::Color;
use symbology_core::ramp::ColorRamp;
use symbology_core::symbol::LineTemplate;
use symbology_core::text::Font;

use crate::{ConvertError, insert_number, numbers};

/// 颜色的规范字典；缺失颜色输出 `null`。
pub fn color(color: Option<&Color>) -> Value {
    color.map_or(Value::Null, |color| Value::Object(color.to_dict()))
}

pub fn color_model(color: Option<&Color>) -> Value {
    color.map_or(Value::Null, |color| Value::from(color.model().as_str()))
}

/// 写入 `key` 与配套的 `{key}_model` 字段。
pub fn insert_color(out: &mut Dict, key: &str, value: Option<&Color>) {
    out.insert(key.to_string(), color(value));
    out.insert(format!("{key}_model"), color_model(value));
}

pub fn convert_font(font: &Font) -> Result<Dict, ConvertError> {
    let mut out = Dict::new();
    out.insert("font_name".into(), Value::from(font.font_name.as_str()));
    out.insert("charset".into(), Value::from(font.charset));
    out.insert("weight".into(), Value::from(font.weight));
    insert_number(&mut out, "size", font.size)?;
    out.insert("italic".into(), Value::from(font.italic));
    out.insert("strikethrough".into(), Value::from(font.strikethrough));
    out.insert("underline".into(), Value::from(font.underline));
    Ok(out)
}

pub fn convert_template(template: &LineTemplate) -> Result<Dict, ConvertError> {
    let mut out = Dict::new();
    insert_number(&mut out, "pattern_interval", template.pattern_interval)?;
    out.insert(
        "pattern_parts".into(),
        numbers("pattern_parts", &template.pattern_parts)?,
    );
    Ok(out)
}

pub fn convert_color_ramp(ramp: &ColorRamp) -> Dict {
    ramp.to_dict()
}
