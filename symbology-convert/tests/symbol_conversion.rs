mod fixtures;

use std::thread;

use fixtures::{
    arrow_marker, circle_marker, color_json, flat_fill, key_set, keys, red, simple_fill,
    simple_line,
};
use serde_json::{Value, json};
use symbology_config::OutputConfig;
use symbology_convert::{
    ConvertError, DictionaryConverter, JsonConverter, SymbolConverter, convert_layer,
    convert_payload, convert_symbol,
};
use symbology_core::color::Color;
use symbology_core::symbol::{
    ArrowMarkerSymbolLayer, FillSymbol, LineSymbol, MarkerLayer, MarkerSymbol, Outline,
    SimpleFillSymbolLayer, Symbol, SymbolLayer, SymbolPayload, UnrecognizedLayer,
};

fn convert(payload: &SymbolPayload) -> Value {
    DictionaryConverter::new()
        .convert(payload)
        .expect("转换符号失败")
}

#[test]
fn simple_fill_layer_without_tags_or_outline() {
    let layer = simple_fill(red());
    let out = Value::Object(convert_layer(&layer).expect("转换图层失败"));
    assert_eq!(
        out,
        json!({
            "type": "SimpleFillSymbolLayer",
            "enabled": true,
            "locked": false,
            "color": color_json(&red()),
            "color_model": "rgb",
        })
    );
}

#[test]
fn red_color_dict_matches_canonical_form() {
    let out = convert_layer(&simple_fill(red())).expect("转换图层失败");
    assert_eq!(out["color_model"], json!("rgb"));
    assert_eq!(out["color"]["R"], json!(255));
    assert_eq!(out["color"]["G"], json!(0));
    assert_eq!(out["color"]["B"], json!(0));
    assert_eq!(out["color"], Value::Object(Color::rgb(255, 0, 0).to_dict()));
}

#[test]
fn non_empty_tags_are_emitted() {
    let mut layer = simple_fill(red()).with_tags(["base", "land"]);
    layer.enabled = false;
    layer.locked = true;
    let out = convert_layer(&layer).expect("转换图层失败");
    assert_eq!(out["tags"], json!(["base", "land"]));
    assert_eq!(out["enabled"], json!(false));
    assert_eq!(out["locked"], json!(true));
}

#[test]
fn levels_preserve_declared_order() {
    let symbol = Symbol::Fill(FillSymbol {
        levels: vec![
            flat_fill(Color::gray(10)),
            simple_fill(red()),
            flat_fill(Color::gray(200)),
        ],
    });
    let out = convert(&symbol.into());
    assert_eq!(out["type"], json!("FillSymbol"));
    let levels = out["levels"].as_array().expect("levels 应为数组");
    let types: Vec<_> = levels.iter().map(|level| level["type"].clone()).collect();
    assert_eq!(
        types,
        vec![
            json!("ColorSymbol"),
            json!("SimpleFillSymbolLayer"),
            json!("ColorSymbol")
        ]
    );
    assert_eq!(levels[0]["color"]["level"], json!(10));
    assert_eq!(levels[2]["color"]["level"], json!(200));
    assert_eq!(keys(&out), key_set(&["type", "levels"]));
}

#[test]
fn bare_layer_matches_single_layer_symbol() {
    let layer = simple_line(red(), 1.5);
    let bare = convert(&layer.clone().into());
    let wrapped = convert(
        &Symbol::Line(LineSymbol {
            levels: vec![layer],
        })
        .into(),
    );
    assert_eq!(bare, wrapped);
    assert_eq!(bare["type"], json!("LineSymbol"));
    assert_eq!(bare["levels"].as_array().map(Vec::len), Some(1));
}

#[test]
fn bare_marker_layer_matches_single_layer_marker_symbol() {
    let layer = circle_marker(4.0);
    let bare = convert(&layer.clone().into());
    let wrapped = convert(
        &Symbol::Marker(MarkerSymbol {
            levels: vec![layer],
            ..MarkerSymbol::default()
        })
        .into(),
    );
    assert_eq!(bare, wrapped);
    assert_eq!(bare["halo"], json!(false));
    assert_eq!(bare["halo_size"], json!(0.0));
    assert_eq!(bare["halo_symbol_type"], json!("NoneType"));
}

#[test]
fn conversion_is_idempotent() {
    let symbol: SymbolPayload = Symbol::Fill(FillSymbol {
        levels: vec![SymbolLayer::new(SimpleFillSymbolLayer {
            color: red(),
            outline: Outline::layer(simple_line(Color::gray(0), 0.4)),
        })],
    })
    .into();
    assert_eq!(convert(&symbol), convert(&symbol));
}

#[test]
fn marker_symbol_with_halo_converts_halo_independently() {
    let halo = FillSymbol {
        levels: vec![flat_fill(Color::rgb(255, 255, 255))],
    };
    let symbol = Symbol::Marker(MarkerSymbol {
        levels: vec![circle_marker(6.0), arrow_marker()],
        halo: true,
        halo_size: 2.5,
        halo_symbol: Some(halo.clone()),
    });
    let out = convert(&symbol.into());

    assert_eq!(
        keys(&out),
        key_set(&[
            "type",
            "levels",
            "halo",
            "halo_size",
            "halo_symbol_type",
            "halo_symbol"
        ])
    );
    assert_eq!(out["type"], json!("MarkerSymbol"));
    assert_eq!(out["halo"], json!(true));
    assert_eq!(out["halo_size"], json!(2.5));
    assert_eq!(out["halo_symbol_type"], json!("FillSymbol"));
    assert_eq!(
        out["halo_symbol"],
        Value::Object(convert_symbol(&Symbol::Fill(halo)).expect("转换光晕失败"))
    );
    assert_eq!(out["levels"][1]["type"], json!("ArrowMarkerSymbolLayer"));
}

#[test]
fn marker_symbol_without_halo_symbol_omits_it() {
    let symbol = Symbol::Marker(MarkerSymbol {
        levels: vec![circle_marker(6.0)],
        halo: true,
        halo_size: 1.0,
        halo_symbol: None,
    });
    let out = convert(&symbol.into());
    assert_eq!(out["halo_symbol_type"], json!("NoneType"));
    assert!(out.get("halo_symbol").is_none());
}

#[test]
fn nested_unsupported_layer_aborts_whole_conversion() {
    let unknown = SymbolLayer::new(MarkerLayer::Unrecognized(UnrecognizedLayer {
        class_name: "PieChartSymbol".to_string(),
    }));
    let outline_symbol = Symbol::Marker(MarkerSymbol {
        levels: vec![circle_marker(2.0), unknown],
        ..MarkerSymbol::default()
    });
    let symbol: SymbolPayload = Symbol::Fill(FillSymbol {
        levels: vec![
            flat_fill(red()),
            SymbolLayer::new(SimpleFillSymbolLayer {
                color: red(),
                outline: Outline::symbol(outline_symbol),
            }),
        ],
    })
    .into();

    match convert_payload(&symbol) {
        Err(ConvertError::UnsupportedVariant(name)) => assert_eq!(name, "PieChartSymbol"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn bare_layer_of_unknown_family_is_unsupported() {
    let layer = SymbolLayer::new(UnrecognizedLayer {
        class_name: "TextSymbol".to_string(),
    });
    let err = convert_payload(&layer.into()).expect_err("应当失败");
    assert!(matches!(err, ConvertError::UnsupportedVariant(ref name) if name == "TextSymbol"));
    assert_eq!(err.to_string(), "unsupported variant: TextSymbol");
}

#[test]
fn sibling_conversions_share_no_state() {
    let fill: SymbolPayload = Symbol::Fill(FillSymbol {
        levels: vec![simple_fill(red()), flat_fill(Color::gray(3))],
    })
    .into();
    let marker: SymbolPayload = Symbol::Marker(MarkerSymbol {
        levels: vec![arrow_marker()],
        halo: true,
        halo_size: 1.0,
        halo_symbol: Some(FillSymbol {
            levels: vec![simple_fill(Color::gray(255))],
        }),
    })
    .into();

    let sequential = (convert(&fill), convert(&marker));
    let parallel = thread::scope(|scope| {
        let fill_job = scope.spawn(|| convert(&fill));
        let marker_job = scope.spawn(|| convert(&marker));
        (
            fill_job.join().expect("填充转换线程崩溃"),
            marker_job.join().expect("标记转换线程崩溃"),
        )
    });
    assert_eq!(sequential, parallel);
}

#[test]
fn json_converter_respects_output_config() {
    let payload: SymbolPayload = simple_fill(red()).into();

    let compact = JsonConverter::new(OutputConfig::compact())
        .convert(&payload)
        .expect("序列化失败");
    assert!(!compact.contains('\n'));

    let pretty = JsonConverter::new(OutputConfig::default())
        .convert(&payload)
        .expect("序列化失败");
    assert!(pretty.contains('\n'));

    let reparsed: Value = serde_json::from_str(&compact).expect("应为合法 JSON");
    assert_eq!(reparsed, convert(&payload));
}

#[test]
fn dictionary_converter_matches_payload_conversion() {
    let payloads: Vec<SymbolPayload> = vec![
        simple_fill(red()).into(),
        circle_marker(3.0).into(),
        Symbol::Line(LineSymbol {
            levels: vec![simple_line(red(), 0.5), simple_line(Color::gray(0), 2.0)],
        })
        .into(),
    ];
    for payload in &payloads {
        let expected = Value::Object(convert_payload(payload).expect("转换符号失败"));
        assert_eq!(
            DictionaryConverter::new()
                .convert(payload)
                .expect("字典转换失败"),
            expected
        );
    }
}

#[test]
fn non_finite_numbers_abort_conversion() {
    let arrow = SymbolLayer::new(ArrowMarkerSymbolLayer {
        color: red(),
        size: f64::NAN,
        width: 2.0,
        angle: 0.0,
        x_offset: 0.0,
        y_offset: 0.0,
    });
    let symbol: SymbolPayload = Symbol::Marker(MarkerSymbol {
        levels: vec![circle_marker(2.0), arrow.clone()],
        halo: true,
        halo_size: f64::INFINITY,
        halo_symbol: None,
    })
    .into();
    match convert_payload(&symbol) {
        Err(ConvertError::NonFiniteNumber { key, .. }) => assert_eq!(key, "size"),
        other => panic!("unexpected result: {other:?}"),
    }

    let halo_only: SymbolPayload = Symbol::Marker(MarkerSymbol {
        levels: vec![circle_marker(2.0)],
        halo: true,
        halo_size: f64::INFINITY,
        halo_symbol: None,
    })
    .into();
    match convert_payload(&halo_only) {
        Err(ConvertError::NonFiniteNumber { key, value }) => {
            assert_eq!(key, "halo_size");
            assert!(value.is_infinite());
        }
        other => panic!("unexpected result: {other:?}"),
    }

    let err = convert_payload(&arrow.into()).expect_err("NaN 尺寸应报错");
    assert!(matches!(err, ConvertError::NonFiniteNumber { ref key, .. } if key == "size"));
}
