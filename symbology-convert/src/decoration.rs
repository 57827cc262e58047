use serde_json::Value;
use symbology_core::Dict;
use symbology_core::symbol::{DecorationElement, LineDecoration, SimpleLineDecoration};

use crate::symbol::embed_payload;
use crate::{ConvertError, nullable, numbers};

pub fn convert_decoration(decoration: &LineDecoration) -> Result<Dict, ConvertError> {
    let decorations = decoration
        .decorations
        .iter()
        .map(|element| convert_decoration_element(element).map(Value::Object))
        .collect::<Result<Vec<_>, _>>()?;

    let mut out = Dict::new();
    out.insert("decorations".into(), Value::Array(decorations));
    Ok(out)
}

pub fn convert_decoration_element(element: &DecorationElement) -> Result<Dict, ConvertError> {
    match element {
        DecorationElement::Nested(decoration) => convert_decoration(decoration),
        DecorationElement::Simple(simple) => convert_simple_line_decoration(simple),
    }
}

pub fn convert_simple_line_decoration(
    decoration: &SimpleLineDecoration,
) -> Result<Dict, ConvertError> {
    let mut out = Dict::new();
    out.insert("fixed_angle".into(), Value::from(decoration.fixed_angle));
    out.insert("flip_first".into(), Value::from(decoration.flip_first));
    out.insert("flip_all".into(), Value::from(decoration.flip_all));
    out.insert(
        "marker".into(),
        nullable(decoration.marker.as_ref(), embed_payload)?,
    );
    out.insert(
        "positions".into(),
        numbers("positions", &decoration.marker_positions)?,
    );
    Ok(out)
}
