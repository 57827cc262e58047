use serde_json::Value;
use symbology_core::Dict;
use symbology_core::symbol::{
    ColorSymbol, FillLayer, GradientFillSymbolLayer, GradientType, LineFillSymbolLayer,
    MarkerFillSymbolLayer, Outline, PictureFillSymbolLayer, SimpleFillSymbolLayer,
};

use crate::{ConvertError, insert_number};
use crate::leaf::{convert_color_ramp, insert_color};
use crate::picture::convert_picture;
use crate::symbol::{convert_layer, convert_symbol, embed_payload};

pub fn convert_fill_layer(layer: &FillLayer) -> Result<Dict, ConvertError> {
    match layer {
        FillLayer::Simple(simple) => convert_simple_fill(simple),
        FillLayer::Color(color) => Ok(convert_color_symbol(color)),
        FillLayer::Gradient(gradient) => convert_gradient_fill(gradient),
        FillLayer::LineFill(line_fill) => convert_line_fill(line_fill),
        FillLayer::MarkerFill(marker_fill) => convert_marker_fill(marker_fill),
        FillLayer::PictureFill(picture_fill) => convert_picture_fill(picture_fill),
        FillLayer::Unrecognized(unknown) => Err(ConvertError::unsupported(&unknown.class_name)),
    }
}

/// 轮廓字段仅在存在时写入；图层与完整符号可同时出现。
fn insert_outline(out: &mut Dict, outline: &Outline) -> Result<(), ConvertError> {
    if let Some(layer) = &outline.layer {
        out.insert("outline_layer".into(), Value::Object(convert_layer(layer)?));
    }
    if let Some(symbol) = &outline.symbol {
        out.insert(
            "outline_symbol".into(),
            Value::Object(convert_symbol(symbol)?),
        );
    }
    Ok(())
}

fn convert_simple_fill(layer: &SimpleFillSymbolLayer) -> Result<Dict, ConvertError> {
    let mut out = Dict::new();
    insert_color(&mut out, "color", Some(&layer.color));
    insert_outline(&mut out, &layer.outline)?;
    Ok(out)
}

fn convert_color_symbol(layer: &ColorSymbol) -> Dict {
    let mut out = Dict::new();
    insert_color(&mut out, "color", Some(&layer.color));
    out
}

pub fn convert_gradient_type(code: i32) -> Result<&'static str, ConvertError> {
    GradientType::from_code(code)
        .map(GradientType::as_str)
        .ok_or_else(|| ConvertError::unsupported(format!("gradient type {code}")))
}

fn convert_gradient_fill(layer: &GradientFillSymbolLayer) -> Result<Dict, ConvertError> {
    let mut out = Dict::new();
    insert_outline(&mut out, &layer.outline)?;
    out.insert(
        "ramp".into(),
        Value::Object(convert_color_ramp(&layer.ramp)),
    );
    insert_number(&mut out, "percent", layer.percent)?;
    insert_number(&mut out, "angle", layer.angle)?;
    out.insert("intervals".into(), Value::from(layer.intervals));
    out.insert(
        "gradient_type".into(),
        Value::from(convert_gradient_type(layer.gradient_type)?),
    );
    Ok(out)
}

fn convert_line_fill(layer: &LineFillSymbolLayer) -> Result<Dict, ConvertError> {
    let mut out = Dict::new();
    insert_outline(&mut out, &layer.outline)?;
    out.insert(
        "line_symbol".into(),
        Value::Object(embed_payload(&layer.line)?),
    );
    insert_number(&mut out, "angle", layer.angle)?;
    insert_number(&mut out, "offset", layer.offset)?;
    insert_number(&mut out, "separation", layer.separation)?;
    Ok(out)
}

fn convert_marker_fill(layer: &MarkerFillSymbolLayer) -> Result<Dict, ConvertError> {
    let mut out = Dict::new();
    insert_outline(&mut out, &layer.outline)?;
    out.insert("marker".into(), Value::Object(embed_payload(&layer.marker)?));
    insert_number(&mut out, "offset_x", layer.offset_x)?;
    insert_number(&mut out, "offset_y", layer.offset_y)?;
    insert_number(&mut out, "separation_x", layer.separation_x)?;
    insert_number(&mut out, "separation_y", layer.separation_y)?;
    out.insert("random".into(), Value::from(layer.random));
    Ok(out)
}

fn convert_picture_fill(layer: &PictureFillSymbolLayer) -> Result<Dict, ConvertError> {
    let mut out = Dict::new();
    insert_color(
        &mut out,
        "color_foreground",
        layer.color_foreground.as_ref(),
    );
    insert_color(&mut out, "color_background", Some(&layer.color_background));
    insert_color(
        &mut out,
        "color_transparent",
        layer.color_transparent.as_ref(),
    );
    out.insert("swap_fg_bg".into(), Value::from(layer.swap_fg_bg));
    insert_outline(&mut out, &layer.outline)?;
    out.insert("picture".into(), convert_picture(layer.picture.as_ref())?);
    insert_number(&mut out, "angle", layer.angle)?;
    insert_number(&mut out, "scale_x", layer.scale_x)?;
    insert_number(&mut out, "scale_y", layer.scale_y)?;
    insert_number(&mut out, "offset_x", layer.offset_x)?;
    insert_number(&mut out, "offset_y", layer.offset_y)?;
    insert_number(&mut out, "separation_x", layer.separation_x)?;
    insert_number(&mut out, "separation_y", layer.separation_y)?;
    Ok(out)
}
