use serde_json::Value;
use symbology_core::Dict;
use symbology_core::symbol::{
    CartographicLineSymbolLayer, DecorationElement, HashLineSymbolLayer, LineCap, LineJoin,
    LineLayer, LineTemplate, MarkerLineSymbolLayer, SimpleLineSymbolLayer,
};

use crate::decoration::convert_decoration_element;
use crate::leaf::{convert_template, insert_color};
use crate::symbol::embed_payload;
use crate::{ConvertError, insert_number, nullable};

pub fn convert_line_layer(layer: &LineLayer) -> Result<Dict, ConvertError> {
    match layer {
        LineLayer::Simple(simple) => convert_simple_line(simple),
        LineLayer::Cartographic(cartographic) => convert_cartographic_line(cartographic),
        LineLayer::MarkerLine(marker_line) => convert_marker_line(marker_line),
        LineLayer::Hash(hash) => convert_hash_line(hash),
        LineLayer::Unrecognized(unknown) => Err(ConvertError::unsupported(&unknown.class_name)),
    }
}

fn convert_simple_line(layer: &SimpleLineSymbolLayer) -> Result<Dict, ConvertError> {
    let mut out = Dict::new();
    insert_color(&mut out, "color", Some(&layer.color));
    insert_number(&mut out, "width", layer.width)?;
    out.insert("line_type".into(), Value::from(layer.line_type.as_str()));
    Ok(out)
}

fn insert_stroke(
    out: &mut Dict,
    offset: f64,
    cap: LineCap,
    join: LineJoin,
) -> Result<(), ConvertError> {
    insert_number(out, "offset", offset)?;
    out.insert("cap".into(), Value::from(cap.as_str()));
    out.insert("join".into(), Value::from(join.as_str()));
    Ok(())
}

/// `template` 与 `decoration` 始终写入，缺失时为 `null`。
fn insert_pattern(
    out: &mut Dict,
    template: Option<&LineTemplate>,
    decoration: Option<&DecorationElement>,
) -> Result<(), ConvertError> {
    out.insert(
        "template".into(),
        nullable(template, convert_template)?,
    );
    out.insert(
        "decoration".into(),
        nullable(decoration, convert_decoration_element)?,
    );
    Ok(())
}

fn convert_cartographic_line(layer: &CartographicLineSymbolLayer) -> Result<Dict, ConvertError> {
    let mut out = Dict::new();
    insert_color(&mut out, "color", Some(&layer.color));
    insert_number(&mut out, "width", layer.width)?;
    insert_stroke(&mut out, layer.offset, layer.cap, layer.join)?;
    insert_pattern(&mut out, layer.template.as_ref(), layer.decoration.as_ref())?;
    Ok(out)
}

fn convert_marker_line(layer: &MarkerLineSymbolLayer) -> Result<Dict, ConvertError> {
    let mut out = Dict::new();
    insert_color(&mut out, "color", layer.color.as_ref());
    insert_stroke(&mut out, layer.offset, layer.cap, layer.join)?;
    insert_pattern(&mut out, layer.template.as_ref(), layer.decoration.as_ref())?;
    out.insert(
        "pattern_marker".into(),
        nullable(layer.pattern_marker.as_ref(), embed_payload)?,
    );
    Ok(out)
}

fn convert_hash_line(layer: &HashLineSymbolLayer) -> Result<Dict, ConvertError> {
    let mut out = Dict::new();
    insert_color(&mut out, "color", Some(&layer.color));
    insert_number(&mut out, "width", layer.width)?;
    insert_stroke(&mut out, layer.offset, layer.cap, layer.join)?;
    insert_pattern(&mut out, layer.template.as_ref(), layer.decoration.as_ref())?;
    out.insert(
        "line".into(),
        nullable(layer.line.as_ref(), embed_payload)?,
    );
    Ok(out)
}
