use std::slice;

use serde_json::Value;
use symbology_core::Dict;
use symbology_core::symbol::{
    FillSymbol, LayerKind, LineSymbol, MarkerSymbol, Symbol, SymbolLayer, SymbolPayload,
};
use tracing::{debug, trace};

use crate::{ConvertError, fill, insert_number, line, marker};

/// 光晕符号缺失时 `halo_symbol_type` 的取值。
pub const NO_HALO_SYMBOL: &str = "NoneType";

/// 顶层入口：单个图层被视为只含一个图层的符号，类别由图层所属族决定。
pub fn convert_payload(payload: &SymbolPayload) -> Result<Dict, ConvertError> {
    match payload {
        SymbolPayload::Symbol(symbol) => convert_symbol(symbol),
        SymbolPayload::Layer(layer) => convert_bare_layer(layer),
    }
}

pub fn convert_symbol(symbol: &Symbol) -> Result<Dict, ConvertError> {
    match symbol {
        Symbol::Fill(fill) => symbol_dict(symbol.type_name(), &fill.levels),
        Symbol::Line(line) => symbol_dict(symbol.type_name(), &line.levels),
        Symbol::Marker(marker) => {
            let mut out = symbol_dict(symbol.type_name(), &marker.levels)?;
            insert_halo(
                &mut out,
                marker.halo,
                marker.halo_size,
                marker.halo_symbol.as_ref(),
            )?;
            Ok(out)
        }
    }
}

fn convert_bare_layer(layer: &SymbolLayer) -> Result<Dict, ConvertError> {
    let levels = slice::from_ref(layer);
    match &layer.kind {
        LayerKind::Fill(_) => symbol_dict(FillSymbol::TYPE_NAME, levels),
        LayerKind::Line(_) => symbol_dict(LineSymbol::TYPE_NAME, levels),
        LayerKind::Marker(_) => {
            let mut out = symbol_dict(MarkerSymbol::TYPE_NAME, levels)?;
            insert_halo(&mut out, false, 0.0, None)?;
            Ok(out)
        }
        LayerKind::Unrecognized(unknown) => Err(ConvertError::unsupported(&unknown.class_name)),
    }
}

fn symbol_dict(type_name: &str, levels: &[SymbolLayer]) -> Result<Dict, ConvertError> {
    debug!(symbol = type_name, levels = levels.len(), "转换符号");
    let levels = levels
        .iter()
        .map(|layer| convert_layer(layer).map(Value::Object))
        .collect::<Result<Vec<_>, _>>()?;

    let mut out = Dict::new();
    out.insert("type".into(), Value::from(type_name));
    out.insert("levels".into(), Value::Array(levels));
    Ok(out)
}

fn insert_halo(
    out: &mut Dict,
    halo: bool,
    halo_size: f64,
    halo_symbol: Option<&FillSymbol>,
) -> Result<(), ConvertError> {
    out.insert("halo".into(), Value::from(halo));
    insert_number(out, "halo_size", halo_size)?;
    match halo_symbol {
        Some(symbol) => {
            out.insert(
                "halo_symbol_type".into(),
                Value::from(FillSymbol::TYPE_NAME),
            );
            out.insert(
                "halo_symbol".into(),
                Value::Object(symbol_dict(FillSymbol::TYPE_NAME, &symbol.levels)?),
            );
        }
        None => {
            out.insert("halo_symbol_type".into(), Value::from(NO_HALO_SYMBOL));
        }
    }
    Ok(())
}

/// 图层路由：按族委派后叠加通用字段 `type`、`enabled`、`locked` 与非空的 `tags`。
pub fn convert_layer(layer: &SymbolLayer) -> Result<Dict, ConvertError> {
    trace!(layer = layer.type_name(), "转换图层");
    let mut out = match &layer.kind {
        LayerKind::Fill(fill) => fill::convert_fill_layer(fill)?,
        LayerKind::Line(line) => line::convert_line_layer(line)?,
        LayerKind::Marker(marker) => marker::convert_marker_layer(marker)?,
        LayerKind::Unrecognized(unknown) => {
            return Err(ConvertError::unsupported(&unknown.class_name));
        }
    };
    out.insert("type".into(), Value::from(layer.type_name()));
    out.insert("enabled".into(), Value::from(layer.enabled));
    out.insert("locked".into(), Value::from(layer.locked));
    if !layer.tags.is_empty() {
        out.insert("tags".into(), Value::from(layer.tags.clone()));
    }
    Ok(out)
}

/// 嵌入字段中的载荷：单个图层输出图层字典，完整符号输出独立的符号字典。
pub fn embed_payload(payload: &SymbolPayload) -> Result<Dict, ConvertError> {
    match payload {
        SymbolPayload::Layer(layer) => convert_layer(layer),
        SymbolPayload::Symbol(symbol) => convert_symbol(symbol),
    }
}
