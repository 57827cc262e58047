/// 通用字典结构：字符串键到 JSON 值的映射，所有叶子对象的规范形式都以它表示。
pub type Dict = serde_json::Map<String, serde_json::Value>;

pub mod color {
    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    use crate::Dict;

    /// 颜色模型判别符，序列化为小写字符串。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum ColorModel {
        Rgb,
        Cmyk,
        Hsv,
        Hls,
        Gray,
        Cielab,
    }

    impl ColorModel {
        #[inline]
        pub fn as_str(self) -> &'static str {
            match self {
                ColorModel::Rgb => "rgb",
                ColorModel::Cmyk => "cmyk",
                ColorModel::Hsv => "hsv",
                ColorModel::Hls => "hls",
                ColorModel::Gray => "gray",
                ColorModel::Cielab => "cielab",
            }
        }
    }

    /// 各颜色模型的分量。
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    #[serde(tag = "model", rename_all = "lowercase")]
    pub enum ColorValue {
        Rgb {
            red: u8,
            green: u8,
            blue: u8,
        },
        Cmyk {
            cyan: u8,
            magenta: u8,
            yellow: u8,
            black: u8,
        },
        Hsv {
            hue: f64,
            saturation: f64,
            value: f64,
        },
        Hls {
            hue: f64,
            lightness: f64,
            saturation: f64,
        },
        Gray {
            level: u8,
        },
        Cielab {
            l: f64,
            a: f64,
            b: f64,
        },
    }

    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Color {
        #[serde(flatten)]
        pub value: ColorValue,
        #[serde(default)]
        pub dither: bool,
        #[serde(default)]
        pub is_null: bool,
    }

    impl Color {
        #[inline]
        pub fn new(value: ColorValue) -> Self {
            Self {
                value,
                dither: false,
                is_null: false,
            }
        }

        #[inline]
        pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
            Self::new(ColorValue::Rgb { red, green, blue })
        }

        #[inline]
        pub fn cmyk(cyan: u8, magenta: u8, yellow: u8, black: u8) -> Self {
            Self::new(ColorValue::Cmyk {
                cyan,
                magenta,
                yellow,
                black,
            })
        }

        #[inline]
        pub fn gray(level: u8) -> Self {
            Self::new(ColorValue::Gray { level })
        }

        pub fn model(&self) -> ColorModel {
            match self.value {
                ColorValue::Rgb { .. } => ColorModel::Rgb,
                ColorValue::Cmyk { .. } => ColorModel::Cmyk,
                ColorValue::Hsv { .. } => ColorModel::Hsv,
                ColorValue::Hls { .. } => ColorModel::Hls,
                ColorValue::Gray { .. } => ColorModel::Gray,
                ColorValue::Cielab { .. } => ColorModel::Cielab,
            }
        }

        /// 颜色的规范字典：模型名、按模型区分的分量，以及 dither/is_null 标志。
        pub fn to_dict(&self) -> Dict {
            let mut out = Dict::new();
            out.insert("model".into(), Value::from(self.model().as_str()));
            match self.value {
                ColorValue::Rgb { red, green, blue } => {
                    out.insert("R".into(), Value::from(red));
                    out.insert("G".into(), Value::from(green));
                    out.insert("B".into(), Value::from(blue));
                }
                ColorValue::Cmyk {
                    cyan,
                    magenta,
                    yellow,
                    black,
                } => {
                    out.insert("C".into(), Value::from(cyan));
                    out.insert("M".into(), Value::from(magenta));
                    out.insert("Y".into(), Value::from(yellow));
                    out.insert("K".into(), Value::from(black));
                }
                ColorValue::Hsv {
                    hue,
                    saturation,
                    value,
                } => {
                    out.insert("H".into(), Value::from(hue));
                    out.insert("S".into(), Value::from(saturation));
                    out.insert("V".into(), Value::from(value));
                }
                ColorValue::Hls {
                    hue,
                    lightness,
                    saturation,
                } => {
                    out.insert("H".into(), Value::from(hue));
                    out.insert("L".into(), Value::from(lightness));
                    out.insert("S".into(), Value::from(saturation));
                }
                ColorValue::Gray { level } => {
                    out.insert("level".into(), Value::from(level));
                }
                ColorValue::Cielab { l, a, b } => {
                    out.insert("L".into(), Value::from(l));
                    out.insert("A".into(), Value::from(a));
                    out.insert("B".into(), Value::from(b));
                }
            }
            out.insert("dither".into(), Value::from(self.dither));
            out.insert("is_null".into(), Value::from(self.is_null));
            out
        }
    }
}

pub mod text {
    use serde::{Deserialize, Serialize};

    /// 字符标记使用的标准字体描述。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Font {
        pub font_name: String,
        pub charset: u8,
        pub weight: u16,
        pub size: f64,
        #[serde(default)]
        pub italic: bool,
        #[serde(default)]
        pub strikethrough: bool,
        #[serde(default)]
        pub underline: bool,
    }
}

pub mod ramp {
    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    use crate::Dict;
    use crate::color::Color;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum RampAlgorithm {
        Hsv,
        Cielab,
        LabLch,
    }

    impl RampAlgorithm {
        #[inline]
        pub fn as_str(self) -> &'static str {
            match self {
                RampAlgorithm::Hsv => "hsv",
                RampAlgorithm::Cielab => "cielab",
                RampAlgorithm::LabLch => "lab_lch",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct AlgorithmicColorRamp {
        pub color1: Color,
        pub color2: Color,
        pub algorithm: RampAlgorithm,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct PresetColorRamp {
        pub colors: Vec<Color>,
    }

    /// 随机色带，各范围取值 0–100（色相为 0–360）。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct RandomColorRamp {
        pub count: u32,
        pub seed: u32,
        pub hue_min: f64,
        pub hue_max: f64,
        pub sat_min: f64,
        pub sat_max: f64,
        pub val_min: f64,
        pub val_max: f64,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct MultiPartColorRamp {
        pub parts: Vec<ColorRamp>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub enum ColorRamp {
        Algorithmic(AlgorithmicColorRamp),
        Preset(PresetColorRamp),
        Random(RandomColorRamp),
        MultiPart(MultiPartColorRamp),
    }

    impl ColorRamp {
        pub fn type_name(&self) -> &'static str {
            match self {
                ColorRamp::Algorithmic(_) => "AlgorithmicColorRamp",
                ColorRamp::Preset(_) => "PresetColorRamp",
                ColorRamp::Random(_) => "RandomColorRamp",
                ColorRamp::MultiPart(_) => "MultiPartColorRamp",
            }
        }

        pub fn to_dict(&self) -> Dict {
            let mut out = Dict::new();
            out.insert("type".into(), Value::from(self.type_name()));
            match self {
                ColorRamp::Algorithmic(ramp) => {
                    out.insert("color1".into(), Value::Object(ramp.color1.to_dict()));
                    out.insert("color2".into(), Value::Object(ramp.color2.to_dict()));
                    out.insert("algorithm".into(), Value::from(ramp.algorithm.as_str()));
                }
                ColorRamp::Preset(ramp) => {
                    let colors = ramp
                        .colors
                        .iter()
                        .map(|color| Value::Object(color.to_dict()))
                        .collect();
                    out.insert("colors".into(), Value::Array(colors));
                }
                ColorRamp::Random(ramp) => {
                    out.insert("count".into(), Value::from(ramp.count));
                    out.insert("seed".into(), Value::from(ramp.seed));
                    out.insert("hue_min".into(), Value::from(ramp.hue_min));
                    out.insert("hue_max".into(), Value::from(ramp.hue_max));
                    out.insert("sat_min".into(), Value::from(ramp.sat_min));
                    out.insert("sat_max".into(), Value::from(ramp.sat_max));
                    out.insert("val_min".into(), Value::from(ramp.val_min));
                    out.insert("val_max".into(), Value::from(ramp.val_max));
                }
                ColorRamp::MultiPart(ramp) => {
                    let parts = ramp
                        .parts
                        .iter()
                        .map(|part| Value::Object(part.to_dict()))
                        .collect();
                    out.insert("parts".into(), Value::Array(parts));
                }
            }
            out
        }
    }
}

pub mod picture {
    use serde::{Deserialize, Serialize};

    /// 位图图片，内容为原始 BMP 字节。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct BmpPicture {
        pub content: Vec<u8>,
    }

    /// EMF 图元文件，内容按原样保存。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct EmfPicture {
        pub content: Vec<u8>,
    }

    /// 通用图片容器，内部包裹具体的图片载荷。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct StdPicture {
        pub picture: Box<Picture>,
    }

    /// 读取器识别出名称但无法解析的图片类型。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct UnrecognizedPicture {
        pub kind: String,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub enum Picture {
        Bmp(BmpPicture),
        Emf(EmfPicture),
        Std(StdPicture),
        Unrecognized(UnrecognizedPicture),
    }

    impl Picture {
        pub fn type_name(&self) -> &str {
            match self {
                Picture::Bmp(_) => "BmpPicture",
                Picture::Emf(_) => "EmfPicture",
                Picture::Std(_) => "StdPicture",
                Picture::Unrecognized(picture) => &picture.kind,
            }
        }

        /// 剥开一层 `StdPicture` 容器；非容器则返回自身。
        #[inline]
        pub fn unwrap_std(&self) -> &Picture {
            match self {
                Picture::Std(holder) => &holder.picture,
                other => other,
            }
        }
    }
}

pub mod symbol {
    use serde::{Deserialize, Serialize};

    use crate::color::Color;
    use crate::picture::Picture;
    use crate::ramp::ColorRamp;
    use crate::text::Font;

    /// 完整符号：按类别区分的多图层容器。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub enum Symbol {
        Fill(FillSymbol),
        Line(LineSymbol),
        Marker(MarkerSymbol),
    }

    impl Symbol {
        pub fn type_name(&self) -> &'static str {
            match self {
                Symbol::Fill(_) => FillSymbol::TYPE_NAME,
                Symbol::Line(_) => LineSymbol::TYPE_NAME,
                Symbol::Marker(_) => MarkerSymbol::TYPE_NAME,
            }
        }
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct FillSymbol {
        pub levels: Vec<SymbolLayer>,
    }

    impl FillSymbol {
        pub const TYPE_NAME: &'static str = "FillSymbol";
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct LineSymbol {
        pub levels: Vec<SymbolLayer>,
    }

    impl LineSymbol {
        pub const TYPE_NAME: &'static str = "LineSymbol";
    }

    /// 标记符号，可附带以填充符号绘制的光晕。
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct MarkerSymbol {
        pub levels: Vec<SymbolLayer>,
        #[serde(default)]
        pub halo: bool,
        #[serde(default)]
        pub halo_size: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub halo_symbol: Option<FillSymbol>,
    }

    impl MarkerSymbol {
        pub const TYPE_NAME: &'static str = "MarkerSymbol";
    }

    /// 既可以是单个图层，也可以是完整符号的载荷。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum SymbolPayload {
        Layer(Box<SymbolLayer>),
        Symbol(Box<Symbol>),
    }

    impl From<SymbolLayer> for SymbolPayload {
        fn from(value: SymbolLayer) -> Self {
            SymbolPayload::Layer(Box::new(value))
        }
    }

    impl From<Symbol> for SymbolPayload {
        fn from(value: Symbol) -> Self {
            SymbolPayload::Symbol(Box::new(value))
        }
    }

    impl From<FillSymbol> for Symbol {
        fn from(value: FillSymbol) -> Self {
            Symbol::Fill(value)
        }
    }

    impl From<LineSymbol> for Symbol {
        fn from(value: LineSymbol) -> Self {
            Symbol::Line(value)
        }
    }

    impl From<MarkerSymbol> for Symbol {
        fn from(value: MarkerSymbol) -> Self {
            Symbol::Marker(value)
        }
    }

    fn default_enabled() -> bool {
        true
    }

    /// 符号中的一次绘制。`tags` 为空时视为缺省。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct SymbolLayer {
        #[serde(default = "default_enabled")]
        pub enabled: bool,
        #[serde(default)]
        pub locked: bool,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        pub tags: Vec<String>,
        pub kind: LayerKind,
    }

    impl SymbolLayer {
        pub fn new(kind: impl Into<LayerKind>) -> Self {
            Self {
                enabled: true,
                locked: false,
                tags: Vec::new(),
                kind: kind.into(),
            }
        }

        pub fn with_tags<I, S>(mut self, tags: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            self.tags = tags.into_iter().map(Into::into).collect();
            self
        }

        #[inline]
        pub fn type_name(&self) -> &str {
            self.kind.type_name()
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum LayerKind {
        Fill(FillLayer),
        Line(LineLayer),
        Marker(MarkerLayer),
        Unrecognized(UnrecognizedLayer),
    }

    impl LayerKind {
        pub fn type_name(&self) -> &str {
            match self {
                LayerKind::Fill(layer) => layer.type_name(),
                LayerKind::Line(layer) => layer.type_name(),
                LayerKind::Marker(layer) => layer.type_name(),
                LayerKind::Unrecognized(layer) => &layer.class_name,
            }
        }
    }

    /// 读取器按类名识别、但不属于已知变体的图层。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct UnrecognizedLayer {
        pub class_name: String,
    }

    impl From<UnrecognizedLayer> for LayerKind {
        fn from(value: UnrecognizedLayer) -> Self {
            LayerKind::Unrecognized(value)
        }
    }

    macro_rules! layer_variant {
        ($family:ident :: $variant:ident ($ty:ty) => $kind:ident) => {
            impl From<$ty> for $family {
                fn from(value: $ty) -> Self {
                    $family::$variant(value)
                }
            }

            impl From<$ty> for LayerKind {
                fn from(value: $ty) -> Self {
                    LayerKind::$kind($family::$variant(value))
                }
            }
        };
    }

    impl From<FillLayer> for LayerKind {
        fn from(value: FillLayer) -> Self {
            LayerKind::Fill(value)
        }
    }

    impl From<LineLayer> for LayerKind {
        fn from(value: LineLayer) -> Self {
            LayerKind::Line(value)
        }
    }

    impl From<MarkerLayer> for LayerKind {
        fn from(value: MarkerLayer) -> Self {
            LayerKind::Marker(value)
        }
    }

    // ---- 填充图层 ----

    /// 填充图层的轮廓：可以是单个线图层，也可以是完整符号，二者可同时存在。
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Outline {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub layer: Option<Box<SymbolLayer>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub symbol: Option<Box<Symbol>>,
    }

    impl Outline {
        pub fn layer(layer: SymbolLayer) -> Self {
            Self {
                layer: Some(Box::new(layer)),
                symbol: None,
            }
        }

        pub fn symbol(symbol: impl Into<Symbol>) -> Self {
            Self {
                layer: None,
                symbol: Some(Box::new(symbol.into())),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum FillLayer {
        Simple(SimpleFillSymbolLayer),
        Color(ColorSymbol),
        Gradient(GradientFillSymbolLayer),
        LineFill(LineFillSymbolLayer),
        MarkerFill(MarkerFillSymbolLayer),
        PictureFill(PictureFillSymbolLayer),
        Unrecognized(UnrecognizedLayer),
    }

    impl FillLayer {
        pub fn type_name(&self) -> &str {
            match self {
                FillLayer::Simple(_) => "SimpleFillSymbolLayer",
                FillLayer::Color(_) => "ColorSymbol",
                FillLayer::Gradient(_) => "GradientFillSymbolLayer",
                FillLayer::LineFill(_) => "LineFillSymbolLayer",
                FillLayer::MarkerFill(_) => "MarkerFillSymbolLayer",
                FillLayer::PictureFill(_) => "PictureFillSymbolLayer",
                FillLayer::Unrecognized(layer) => &layer.class_name,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct SimpleFillSymbolLayer {
        pub color: Color,
        #[serde(default)]
        pub outline: Outline,
    }

    /// 纯色填充，不带轮廓。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ColorSymbol {
        pub color: Color,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum GradientType {
        Linear,
        Rectangular,
        Circular,
        Buffered,
    }

    impl GradientType {
        /// 文件中的渐变类型编码；未知编码返回 `None`。
        pub fn from_code(code: i32) -> Option<Self> {
            match code {
                0 => Some(GradientType::Linear),
                1 => Some(GradientType::Rectangular),
                2 => Some(GradientType::Circular),
                3 => Some(GradientType::Buffered),
                _ => None,
            }
        }

        #[inline]
        pub fn as_str(self) -> &'static str {
            match self {
                GradientType::Linear => "linear",
                GradientType::Rectangular => "rectangular",
                GradientType::Circular => "circular",
                GradientType::Buffered => "buffered",
            }
        }
    }

    /// 渐变填充。`gradient_type` 保留文件中的原始编码。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct GradientFillSymbolLayer {
        pub ramp: ColorRamp,
        pub percent: f64,
        pub angle: f64,
        pub intervals: u32,
        pub gradient_type: i32,
        #[serde(default)]
        pub outline: Outline,
    }

    /// 线填充（阴影线），`line` 为阴影线本身。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct LineFillSymbolLayer {
        pub line: SymbolPayload,
        pub angle: f64,
        pub offset: f64,
        pub separation: f64,
        #[serde(default)]
        pub outline: Outline,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct MarkerFillSymbolLayer {
        pub marker: SymbolPayload,
        pub offset_x: f64,
        pub offset_y: f64,
        pub separation_x: f64,
        pub separation_y: f64,
        #[serde(default)]
        pub random: bool,
        #[serde(default)]
        pub outline: Outline,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct PictureFillSymbolLayer {
        #[serde(default)]
        pub color_foreground: Option<Color>,
        pub color_background: Color,
        #[serde(default)]
        pub color_transparent: Option<Color>,
        #[serde(default)]
        pub swap_fg_bg: bool,
        #[serde(default)]
        pub picture: Option<Picture>,
        pub angle: f64,
        pub scale_x: f64,
        pub scale_y: f64,
        pub offset_x: f64,
        pub offset_y: f64,
        pub separation_x: f64,
        pub separation_y: f64,
        #[serde(default)]
        pub outline: Outline,
    }

    layer_variant!(FillLayer::Simple(SimpleFillSymbolLayer) => Fill);
    layer_variant!(FillLayer::Color(ColorSymbol) => Fill);
    layer_variant!(FillLayer::Gradient(GradientFillSymbolLayer) => Fill);
    layer_variant!(FillLayer::LineFill(LineFillSymbolLayer) => Fill);
    layer_variant!(FillLayer::MarkerFill(MarkerFillSymbolLayer) => Fill);
    layer_variant!(FillLayer::PictureFill(PictureFillSymbolLayer) => Fill);

    // ---- 线图层 ----

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum LineType {
        Solid,
        Dashed,
        Dotted,
        DashDot,
        DashDotDot,
        Null,
        InsideFrame,
    }

    impl LineType {
        pub fn as_str(self) -> &'static str {
            match self {
                LineType::Solid => "solid",
                LineType::Dashed => "dashed",
                LineType::Dotted => "dotted",
                LineType::DashDot => "dash_dot",
                LineType::DashDotDot => "dash_dot_dot",
                LineType::Null => "null",
                LineType::InsideFrame => "inside_frame",
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum LineCap {
        Butt,
        Round,
        Square,
    }

    impl LineCap {
        pub fn as_str(self) -> &'static str {
            match self {
                LineCap::Butt => "butt",
                LineCap::Round => "round",
                LineCap::Square => "square",
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum LineJoin {
        Miter,
        Round,
        Bevel,
    }

    impl LineJoin {
        pub fn as_str(self) -> &'static str {
            match self {
                LineJoin::Miter => "miter",
                LineJoin::Round => "round",
                LineJoin::Bevel => "bevel",
            }
        }
    }

    /// 虚线模板：`pattern_parts` 依次为实线段与间隔长度，以 `pattern_interval` 为单位。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct LineTemplate {
        pub pattern_interval: f64,
        pub pattern_parts: Vec<f64>,
    }

    /// 沿线放置标记的规则集合，元素可嵌套。
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct LineDecoration {
        pub decorations: Vec<DecorationElement>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum DecorationElement {
        Nested(LineDecoration),
        Simple(SimpleLineDecoration),
    }

    /// 在线上相对位置（0–1）放置标记。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct SimpleLineDecoration {
        #[serde(default)]
        pub fixed_angle: bool,
        #[serde(default)]
        pub flip_first: bool,
        #[serde(default)]
        pub flip_all: bool,
        #[serde(default)]
        pub marker_positions: Vec<f64>,
        #[serde(default)]
        pub marker: Option<SymbolPayload>,
    }

    impl From<LineDecoration> for DecorationElement {
        fn from(value: LineDecoration) -> Self {
            DecorationElement::Nested(value)
        }
    }

    impl From<SimpleLineDecoration> for DecorationElement {
        fn from(value: SimpleLineDecoration) -> Self {
            DecorationElement::Simple(value)
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum LineLayer {
        Simple(SimpleLineSymbolLayer),
        Cartographic(CartographicLineSymbolLayer),
        MarkerLine(MarkerLineSymbolLayer),
        Hash(HashLineSymbolLayer),
        Unrecognized(UnrecognizedLayer),
    }

    impl LineLayer {
        pub fn type_name(&self) -> &str {
            match self {
                LineLayer::Simple(_) => "SimpleLineSymbolLayer",
                LineLayer::Cartographic(_) => "CartographicLineSymbolLayer",
                LineLayer::MarkerLine(_) => "MarkerLineSymbolLayer",
                LineLayer::Hash(_) => "HashLineSymbolLayer",
                LineLayer::Unrecognized(layer) => &layer.class_name,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct SimpleLineSymbolLayer {
        pub color: Color,
        pub width: f64,
        pub line_type: LineType,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct CartographicLineSymbolLayer {
        pub color: Color,
        pub width: f64,
        pub offset: f64,
        pub cap: LineCap,
        pub join: LineJoin,
        #[serde(default)]
        pub template: Option<LineTemplate>,
        #[serde(default)]
        pub decoration: Option<DecorationElement>,
    }

    /// 沿线重复放置 `pattern_marker` 的标记线。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct MarkerLineSymbolLayer {
        #[serde(default)]
        pub color: Option<Color>,
        pub offset: f64,
        pub cap: LineCap,
        pub join: LineJoin,
        #[serde(default)]
        pub template: Option<LineTemplate>,
        #[serde(default)]
        pub pattern_marker: Option<SymbolPayload>,
        #[serde(default)]
        pub decoration: Option<DecorationElement>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct HashLineSymbolLayer {
        pub color: Color,
        pub width: f64,
        pub offset: f64,
        pub cap: LineCap,
        pub join: LineJoin,
        #[serde(default)]
        pub template: Option<LineTemplate>,
        #[serde(default)]
        pub line: Option<SymbolPayload>,
        #[serde(default)]
        pub decoration: Option<DecorationElement>,
    }

    layer_variant!(LineLayer::Simple(SimpleLineSymbolLayer) => Line);
    layer_variant!(LineLayer::Cartographic(CartographicLineSymbolLayer) => Line);
    layer_variant!(LineLayer::MarkerLine(MarkerLineSymbolLayer) => Line);
    layer_variant!(LineLayer::Hash(HashLineSymbolLayer) => Line);

    // ---- 标记图层 ----

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum MarkerType {
        Circle,
        Square,
        Cross,
        X,
        Diamond,
    }

    impl MarkerType {
        pub fn as_str(self) -> &'static str {
            match self {
                MarkerType::Circle => "circle",
                MarkerType::Square => "square",
                MarkerType::Cross => "cross",
                MarkerType::X => "x",
                MarkerType::Diamond => "diamond",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum MarkerLayer {
        Simple(SimpleMarkerSymbolLayer),
        Character(CharacterMarkerSymbolLayer),
        Arrow(ArrowMarkerSymbolLayer),
        Picture(PictureMarkerSymbolLayer),
        Unrecognized(UnrecognizedLayer),
    }

    impl MarkerLayer {
        pub fn type_name(&self) -> &str {
            match self {
                MarkerLayer::Simple(_) => "SimpleMarkerSymbolLayer",
                MarkerLayer::Character(_) => "CharacterMarkerSymbolLayer",
                MarkerLayer::Arrow(_) => "ArrowMarkerSymbolLayer",
                MarkerLayer::Picture(_) => "PictureMarkerSymbolLayer",
                MarkerLayer::Unrecognized(layer) => &layer.class_name,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct SimpleMarkerSymbolLayer {
        pub color: Color,
        pub marker_type: MarkerType,
        pub size: f64,
        pub x_offset: f64,
        pub y_offset: f64,
        #[serde(default)]
        pub outline_enabled: bool,
        pub outline_color: Color,
        pub outline_width: f64,
    }

    /// 字体字符标记。`font` 为字体名句柄，`std_font` 为可选的完整字体描述。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct CharacterMarkerSymbolLayer {
        pub color: Color,
        pub unicode: u32,
        pub font: String,
        #[serde(default)]
        pub std_font: Option<Font>,
        pub size: f64,
        pub angle: f64,
        pub x_offset: f64,
        pub y_offset: f64,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ArrowMarkerSymbolLayer {
        pub color: Color,
        pub size: f64,
        pub width: f64,
        pub angle: f64,
        pub x_offset: f64,
        pub y_offset: f64,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct PictureMarkerSymbolLayer {
        pub color_foreground: Color,
        pub color_background: Color,
        #[serde(default)]
        pub color_transparent: Option<Color>,
        pub size: f64,
        pub angle: f64,
        pub x_offset: f64,
        pub y_offset: f64,
        #[serde(default)]
        pub swap_fg_bg: bool,
        #[serde(default)]
        pub picture: Option<Picture>,
    }

    layer_variant!(MarkerLayer::Simple(SimpleMarkerSymbolLayer) => Marker);
    layer_variant!(MarkerLayer::Character(CharacterMarkerSymbolLayer) => Marker);
    layer_variant!(MarkerLayer::Arrow(ArrowMarkerSymbolLayer) => Marker);
    layer_variant!(MarkerLayer::Picture(PictureMarkerSymbolLayer) => Marker);

}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::color::{Color, ColorModel, ColorValue};
    use crate::picture::{BmpPicture, Picture, StdPicture};
    use crate::ramp::{AlgorithmicColorRamp, ColorRamp, MultiPartColorRamp, RampAlgorithm};

    #[test]
    fn rgb_color_dict_carries_model_and_components() {
        let color = Color::rgb(255, 0, 0);
        assert_eq!(color.model(), ColorModel::Rgb);
        assert_eq!(
            serde_json::Value::Object(color.to_dict()),
            json!({
                "model": "rgb",
                "R": 255,
                "G": 0,
                "B": 0,
                "dither": false,
                "is_null": false,
            })
        );
    }

    #[test]
    fn cmyk_and_gray_models_report_their_names() {
        assert_eq!(Color::cmyk(0, 10, 20, 30).model().as_str(), "cmyk");
        assert_eq!(Color::gray(128).model().as_str(), "gray");
        let hls = Color::new(ColorValue::Hls {
            hue: 120.0,
            lightness: 50.0,
            saturation: 25.0,
        });
        assert_eq!(hls.to_dict().get("L"), Some(&json!(50.0)));
    }

    #[test]
    fn color_round_trips_through_serde() {
        let mut color = Color::rgb(1, 2, 3);
        color.dither = true;
        let encoded = serde_json::to_value(color).expect("序列化颜色失败");
        assert_eq!(encoded["model"], json!("rgb"));
        let decoded: Color = serde_json::from_value(encoded).expect("反序列化颜色失败");
        assert_eq!(decoded, color);
    }

    #[test]
    fn multipart_ramp_nests_part_dicts_in_order() {
        let first = ColorRamp::Algorithmic(AlgorithmicColorRamp {
            color1: Color::rgb(0, 0, 0),
            color2: Color::rgb(255, 255, 255),
            algorithm: RampAlgorithm::Cielab,
        });
        let ramp = ColorRamp::MultiPart(MultiPartColorRamp {
            parts: vec![first.clone(), first],
        });
        let dict = ramp.to_dict();
        assert_eq!(dict["type"], json!("MultiPartColorRamp"));
        let parts = dict["parts"].as_array().expect("parts 应为数组");
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["algorithm"], json!("cielab"));
        assert_eq!(parts[0]["color2"]["B"], json!(255));
    }

    #[test]
    fn std_picture_unwraps_one_level() {
        let inner = Picture::Bmp(BmpPicture { content: vec![1] });
        let holder = Picture::Std(StdPicture {
            picture: Box::new(inner.clone()),
        });
        assert_eq!(holder.type_name(), "StdPicture");
        assert_eq!(holder.unwrap_std(), &inner);
        assert_eq!(inner.unwrap_std(), &inner);
    }
}
