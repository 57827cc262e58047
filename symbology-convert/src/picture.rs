use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use serde_json::Value;
use symbology_core::Dict;
use symbology_core::picture::Picture;

use crate::ConvertError;

/// 图片转换：先剥开 `StdPicture` 容器，再按具体类型输出 `type` 与 base64 `content`。
/// 位图重新编码为 PNG，EMF 原样编码。
pub fn convert_picture(picture: Option<&Picture>) -> Result<Value, ConvertError> {
    let Some(picture) = picture else {
        return Ok(Value::Null);
    };
    let picture = picture.unwrap_std();
    let content = match picture {
        Picture::Bmp(bmp) => bmp_to_base64_png(&bmp.content, picture.type_name())?,
        Picture::Emf(emf) => STANDARD.encode(&emf.content),
        Picture::Std(_) | Picture::Unrecognized(_) => {
            return Err(ConvertError::unsupported(picture.type_name()));
        }
    };

    let mut out = Dict::new();
    out.insert("type".into(), Value::from(picture.type_name()));
    out.insert("content".into(), Value::from(content));
    Ok(Value::Object(out))
}

fn bmp_to_base64_png(content: &[u8], kind: &str) -> Result<String, ConvertError> {
    let encoding_error = |source: image::ImageError| ConvertError::PictureEncoding {
        kind: kind.to_string(),
        source,
    };
    let image =
        image::load_from_memory_with_format(content, ImageFormat::Bmp).map_err(encoding_error)?;
    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(encoding_error)?;
    Ok(STANDARD.encode(&png))
}
