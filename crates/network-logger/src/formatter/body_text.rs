use encoding_rs::{Encoding, UTF_8};

use super::BodyError;

/// Decodes a body with the charset named by its content type, UTF-8 when
/// there is none. Malformed input is an error rather than replacement chars.
pub(crate) fn decode_body(data: &[u8], content_type: Option<&str>) -> Result<String, BodyError> {
    let encoding = body_encoding(content_type);
    encoding
        .decode_without_bom_handling_and_without_replacement(data)
        .map(|text| text.into_owned())
        .ok_or(BodyError::Undecodable(data.len()))
}

/// Like [`decode_body`], with the binary placeholder on failure.
pub(crate) fn body_text(data: &[u8], content_type: Option<&str>) -> String {
    decode_body(data, content_type).unwrap_or_else(|err| {
        tracing::debug!(%err, "body is not text");
        format!("<binary data: {} bytes>", data.len())
    })
}

// inspired by reqwest::Response::text()
fn body_encoding(content_type: Option<&str>) -> &'static Encoding {
    let content_type = content_type.and_then(|value| value.parse::<mime::Mime>().ok());

    let encoding_name = content_type
        .as_ref()
        .and_then(|mime| mime.get_param("charset").map(|charset| charset.as_str()))
        .unwrap_or("utf-8");

    Encoding::for_label(encoding_name.as_bytes()).unwrap_or(UTF_8)
}
