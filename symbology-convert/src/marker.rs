use serde_json::Value;
use symbology_core::Dict;
use symbology_core::symbol::{
    ArrowMarkerSymbolLayer, CharacterMarkerSymbolLayer, MarkerLayer, PictureMarkerSymbolLayer,
    SimpleMarkerSymbolLayer,
};

use crate::leaf::{convert_font, insert_color};
use crate::picture::convert_picture;
use crate::{ConvertError, insert_number, nullable};

pub fn convert_marker_layer(layer: &MarkerLayer) -> Result<Dict, ConvertError> {
    match layer {
        MarkerLayer::Simple(simple) => convert_simple_marker(simple),
        MarkerLayer::Character(character) => convert_character_marker(character),
        MarkerLayer::Arrow(arrow) => convert_arrow_marker(arrow),
        MarkerLayer::Picture(picture) => convert_picture_marker(picture),
        MarkerLayer::Unrecognized(unknown) => Err(ConvertError::unsupported(&unknown.class_name)),
    }
}

fn insert_offsets(out: &mut Dict, x_offset: f64, y_offset: f64) -> Result<(), ConvertError> {
    insert_number(out, "x_offset", x_offset)?;
    insert_number(out, "y_offset", y_offset)
}

fn convert_simple_marker(layer: &SimpleMarkerSymbolLayer) -> Result<Dict, ConvertError> {
    let mut out = Dict::new();
    insert_color(&mut out, "color", Some(&layer.color));
    out.insert(
        "marker_type".into(),
        Value::from(layer.marker_type.as_str()),
    );
    insert_number(&mut out, "size", layer.size)?;
    insert_offsets(&mut out, layer.x_offset, layer.y_offset)?;
    out.insert("outline_enabled".into(), Value::from(layer.outline_enabled));
    insert_color(&mut out, "outline_color", Some(&layer.outline_color));
    insert_number(&mut out, "outline_size", layer.outline_width)?;
    Ok(out)
}

/// `std_font` 始终写入，未附带标准字体时为 `null`。
fn convert_character_marker(layer: &CharacterMarkerSymbolLayer) -> Result<Dict, ConvertError> {
    let mut out = Dict::new();
    insert_color(&mut out, "color", Some(&layer.color));
    out.insert("unicode".into(), Value::from(layer.unicode));
    out.insert("font".into(), Value::from(layer.font.as_str()));
    out.insert(
        "std_font".into(),
        nullable(layer.std_font.as_ref(), convert_font)?,
    );
    insert_number(&mut out, "size", layer.size)?;
    insert_number(&mut out, "angle", layer.angle)?;
    insert_offsets(&mut out, layer.x_offset, layer.y_offset)?;
    Ok(out)
}

fn convert_arrow_marker(layer: &ArrowMarkerSymbolLayer) -> Result<Dict, ConvertError> {
    let mut out = Dict::new();
    insert_color(&mut out, "color", Some(&layer.color));
    insert_number(&mut out, "size", layer.size)?;
    insert_number(&mut out, "width", layer.width)?;
    insert_number(&mut out, "angle", layer.angle)?;
    insert_offsets(&mut out, layer.x_offset, layer.y_offset)?;
    Ok(out)
}

fn convert_picture_marker(layer: &PictureMarkerSymbolLayer) -> Result<Dict, ConvertError> {
    let mut out = Dict::new();
    insert_color(&mut out, "color_foreground", Some(&layer.color_foreground));
    insert_color(&mut out, "color_background", Some(&layer.color_background));
    insert_color(
        &mut out,
        "color_transparent",
        layer.color_transparent.as_ref(),
    );
    insert_number(&mut out, "size", layer.size)?;
    insert_number(&mut out, "angle", layer.angle)?;
    insert_offsets(&mut out, layer.x_offset, layer.y_offset)?;
    out.insert("swap_fg_bg".into(), Value::from(layer.swap_fg_bg));
    out.insert("picture".into(), convert_picture(layer.picture.as_ref())?);
    Ok(out)
}
