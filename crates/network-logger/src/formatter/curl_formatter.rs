use http::Method;
use tracing::debug;

use super::{
    body_text::decode_body, BodyError, FormatError, HttpRequest, LogLine, RequestBody,
    RequestFormatter, REQUEST,
};

const CURL_SEPARATOR: &str = " \\\n\t";

/// Renders a request as a single `curl` command that replays it.
///
/// Every value is double quoted with `\`, `"`, `$` and `` ` `` escaped. A `!`
/// is left as is: interactive bash with history expansion enabled will still
/// expand it on paste.
#[derive(Clone)]
pub(crate) struct CurlFormatter {
    pub include_response_headers: bool,
}

impl RequestFormatter for CurlFormatter {
    fn format_request(&self, request: &HttpRequest) -> Result<Vec<LogLine>, FormatError> {
        let url = request.url.as_ref().ok_or(FormatError::MissingRequest)?;

        let mut components = vec![if self.include_response_headers {
            "$ curl -i".to_string()
        } else {
            "$ curl".to_string()
        }];

        if request.method != Method::GET {
            components.push(format!("-X {}", request.method));
        }

        for (name, value) in &request.headers {
            components.push(format!("-H \"{}: {}\"", escape(name), escape(value)));
        }

        match &request.body {
            RequestBody::Empty => {}
            RequestBody::Bytes(data) => match decode_body(data, request.content_type()) {
                Ok(body) => components.push(format!("-d \"{}\"", escape(&body))),
                Err(err) => debug!(%err, "omitting body from curl command"),
            },
            RequestBody::Stream(info) => {
                let err = BodyError::UnsupportedReplay;
                debug!(%err, stream = %info, "omitting body from curl command");
            }
        }

        components.push(format!("\"{}\"", escape(url.as_str())));

        Ok(vec![LogLine::new(REQUEST, components.join(CURL_SEPARATOR))])
    }
}

// keeps the value literal inside a double quoted shell word
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
