#![allow(dead_code)]

use std::collections::BTreeSet;

use serde_json::Value;
use symbology_core::color::Color;
use symbology_core::symbol::{
    ArrowMarkerSymbolLayer, ColorSymbol, LineType, MarkerType, Outline, SimpleFillSymbolLayer,
    SimpleLineSymbolLayer, SimpleMarkerSymbolLayer, SymbolLayer,
};

pub fn red() -> Color {
    Color::rgb(255, 0, 0)
}

pub fn black() -> Color {
    Color::rgb(0, 0, 0)
}

pub fn color_json(color: &Color) -> Value {
    Value::Object(color.to_dict())
}

pub fn simple_fill(color: Color) -> SymbolLayer {
    SymbolLayer::new(SimpleFillSymbolLayer {
        color,
        outline: Outline::default(),
    })
}

pub fn flat_fill(color: Color) -> SymbolLayer {
    SymbolLayer::new(ColorSymbol { color })
}

pub fn simple_line(color: Color, width: f64) -> SymbolLayer {
    SymbolLayer::new(SimpleLineSymbolLayer {
        color,
        width,
        line_type: LineType::Solid,
    })
}

pub fn circle_marker(size: f64) -> SymbolLayer {
    SymbolLayer::new(SimpleMarkerSymbolLayer {
        color: red(),
        marker_type: MarkerType::Circle,
        size,
        x_offset: 0.0,
        y_offset: 0.0,
        outline_enabled: false,
        outline_color: black(),
        outline_width: 0.0,
    })
}

pub fn arrow_marker() -> SymbolLayer {
    SymbolLayer::new(ArrowMarkerSymbolLayer {
        color: black(),
        size: 8.0,
        width: 5.0,
        angle: 90.0,
        x_offset: 1.0,
        y_offset: -1.0,
    })
}

/// 对象的键集合，便于断言“恰好包含这些键”。
pub fn keys(value: &Value) -> BTreeSet<String> {
    value
        .as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}

pub fn key_set(expected: &[&str]) -> BTreeSet<String> {
    expected.iter().map(|key| key.to_string()).collect()
}
