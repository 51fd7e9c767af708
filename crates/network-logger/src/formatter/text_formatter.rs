use crate::config::Verbosity;
use crate::exchange::ExchangeOutcome;
use crate::target::Target;

use super::{
    body_text::body_text, FormatError, HttpHeader, HttpRequest, HttpResponse, LogLine,
    RequestBody, RequestFormatter, ResponseDataFormatter, REQUEST, RESPONSE,
};

/// Line based rendering of requests and responses.
#[derive(Clone)]
pub(crate) struct TextFormatter {
    verbosity: Verbosity,
    data_formatter: Option<ResponseDataFormatter>,
}

impl TextFormatter {
    pub fn new(verbosity: Verbosity, data_formatter: Option<ResponseDataFormatter>) -> Self {
        Self {
            verbosity,
            data_formatter,
        }
    }

    fn is_verbose(&self) -> bool {
        matches!(self.verbosity, Verbosity::Verbose)
    }

    pub fn format_response(
        &self,
        outcome: &ExchangeOutcome,
        target: &dyn Target,
    ) -> Result<Vec<LogLine>, FormatError> {
        let (response, error) = match outcome {
            Ok(response) => (response, None),
            Err(err) => match err.response() {
                Some(response) if response.metadata.is_some() => (response, Some(err)),
                _ => return Err(FormatError::EmptyNetworkResponse(target.to_string())),
            },
        };

        if !self.is_verbose() {
            return Ok(vec![LogLine::new(
                RESPONSE,
                format!("Response: {}", response.status_code),
            )]);
        }

        let mut lines = vec![LogLine::new(RESPONSE, response_summary(response, target))];

        if let Some(metadata) = response.metadata.as_ref() {
            if !metadata.headers.is_empty() {
                let headers = metadata
                    .headers
                    .iter()
                    .map(|HttpHeader { name, value }| (name.as_str(), value.as_str()));
                lines.push(LogLine::new(
                    "Response Headers",
                    format!("Response Headers: {}", headers_text(headers)),
                ));
            }
        }

        if let Some(err) = error {
            lines.push(LogLine::new(
                "Response Error",
                format!("Response Error: {err}"),
            ));
        }

        let data = match &self.data_formatter {
            Some(formatter) => formatter(&response.data),
            None => response.data.clone(),
        };
        if !data.is_empty() {
            let content_type = response
                .metadata
                .as_ref()
                .and_then(|metadata| metadata.header(http::header::CONTENT_TYPE.as_str()));
            lines.push(LogLine::new("Response Body", body_text(&data, content_type)));
        }

        Ok(lines)
    }
}

impl RequestFormatter for TextFormatter {
    fn format_request(&self, request: &HttpRequest) -> Result<Vec<LogLine>, FormatError> {
        let url = request.url.as_ref().ok_or(FormatError::MissingRequest)?;

        if !self.is_verbose() {
            return Ok(vec![LogLine::new(
                REQUEST,
                format!("Request: {} {url}", request.method),
            )]);
        }

        let mut lines = vec![LogLine::new(REQUEST, format!("Request: {url}"))];

        if !request.headers.is_empty() {
            let headers = request
                .headers
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()));
            lines.push(LogLine::new(
                "Request Headers",
                format!("Request Headers: {}", headers_text(headers)),
            ));
        }

        lines.push(LogLine::new(
            "HTTP Request Method",
            format!("HTTP Request Method: {}", request.method),
        ));

        match &request.body {
            RequestBody::Empty => {}
            RequestBody::Bytes(data) => lines.push(LogLine::new(
                "Request Body",
                format!(
                    "Request Body: {}",
                    body_text(data, request.content_type())
                ),
            )),
            RequestBody::Stream(info) => lines.push(LogLine::new(
                "Request Body Stream",
                format!("Request Body Stream: {info}"),
            )),
        }

        Ok(lines)
    }
}

// Response: { URL: https://host/path } { Status Code: 200 OK } { Version: HTTP/1.1 }
fn response_summary(response: &HttpResponse, target: &dyn Target) -> String {
    let metadata = response.metadata.as_ref();
    let url = metadata
        .and_then(|metadata| metadata.url.clone())
        .or_else(|| target.url());

    let mut summary = String::from("Response:");
    if let Some(url) = url {
        summary.push_str(&format!(" {{ URL: {url} }}"));
    }

    match metadata.and_then(|metadata| metadata.status_string) {
        Some(reason) => summary.push_str(&format!(
            " {{ Status Code: {} {reason} }}",
            response.status_code
        )),
        None => summary.push_str(&format!(" {{ Status Code: {} }}", response.status_code)),
    }

    if let Some(version) = metadata.and_then(|metadata| metadata.version.as_deref()) {
        summary.push_str(&format!(" {{ Version: {version} }}"));
    }
    summary
}

// ["Content-Type": "application/json", "X-Api-Key": "1234"]
fn headers_text<'a>(headers: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let hdr_out_parts: Vec<String> = headers
        .map(|(name, value)| format!("{name:?}: {value:?}"))
        .collect();

    format!("[{}]", hdr_out_parts.join(", "))
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::sync::Arc;

    use bytes::Bytes;
    use http::Method;
    use url::Url;

    use super::*;
    use crate::exchange::ExchangeError;
    use crate::formatter::HttpResponseMetadata;

    struct Zen;

    impl fmt::Display for Zen {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "zen")
        }
    }

    impl Target for Zen {
        fn base_url(&self) -> Option<Url> {
            Url::parse("https://api.github.com").ok()
        }

        fn path(&self) -> String {
            "/zen".into()
        }
    }

    fn zen_url() -> Url {
        Url::parse("https://api.github.com/zen").unwrap()
    }

    fn messages(lines: Vec<LogLine>) -> Vec<String> {
        lines.into_iter().map(|line| line.message).collect()
    }

    fn verbose() -> TextFormatter {
        TextFormatter::new(Verbosity::Verbose, None)
    }

    #[test]
    fn test_verbose_request_lines_in_order() {
        //given
        let request = HttpRequest::new(Method::GET, Some(zen_url()))
            .header("Content-Type", "application/json")
            .body("cool body");

        //when
        let lines = verbose().format_request(&request).unwrap();

        //then
        assert_eq!(
            messages(lines),
            vec![
                "Request: https://api.github.com/zen",
                r#"Request Headers: ["Content-Type": "application/json"]"#,
                "HTTP Request Method: GET",
                "Request Body: cool body",
            ]
        );
    }

    #[test]
    fn test_verbose_request_without_headers_or_body() {
        let request = HttpRequest::new(Method::DELETE, Some(zen_url()));

        let lines = verbose().format_request(&request).unwrap();

        assert_eq!(
            messages(lines),
            vec!["Request: https://api.github.com/zen", "HTTP Request Method: DELETE"]
        );
    }

    #[test]
    fn test_stream_body_is_described() {
        //given
        let request = HttpRequest::new(Method::POST, Some(zen_url())).stream(Some(9));

        //when
        let lines = verbose().format_request(&request).unwrap();

        //then
        let last = lines.last().unwrap();
        assert_eq!(last.label, "Request Body Stream");
        assert_eq!(last.message, "Request Body Stream: <stream: 9 bytes>");
    }

    #[test]
    fn test_summary_request_line() {
        let request = HttpRequest::new(Method::POST, Some(zen_url())).body("cool body");

        let lines = TextFormatter::new(Verbosity::Summary, None)
            .format_request(&request)
            .unwrap();

        assert_eq!(
            lines,
            vec![LogLine::new(REQUEST, "Request: POST https://api.github.com/zen")]
        );
    }

    #[test]
    fn test_request_without_url() {
        let request = HttpRequest::new(Method::GET, None).body("cool body");

        assert_eq!(
            verbose().format_request(&request),
            Err(FormatError::MissingRequest)
        );
    }

    #[test]
    fn test_verbose_response_lines() {
        //given
        let metadata = HttpResponseMetadata {
            url: Some(zen_url()),
            headers: vec![HttpHeader::new("content-type", "text/plain")],
            ..Default::default()
        };
        let outcome = Ok(HttpResponse::new(200, "cool body", Some(metadata)));

        //when
        let lines = verbose().format_response(&outcome, &Zen).unwrap();

        //then
        assert_eq!(
            messages(lines),
            vec![
                "Response: { URL: https://api.github.com/zen } { Status Code: 200 }",
                r#"Response Headers: ["content-type": "text/plain"]"#,
                "cool body",
            ]
        );
    }

    #[test]
    fn test_response_summary_with_status_line() {
        //given
        let metadata = HttpResponseMetadata {
            url: Some(zen_url()),
            version: Some("HTTP/1.1".into()),
            status_string: Some("Created"),
            headers: Vec::new(),
        };
        let outcome = Ok(HttpResponse::new(201, Bytes::new(), Some(metadata)));

        //when
        let lines = verbose().format_response(&outcome, &Zen).unwrap();

        //then
        assert_eq!(
            messages(lines),
            vec![
                "Response: { URL: https://api.github.com/zen } { Status Code: 201 Created } { Version: HTTP/1.1 }"
            ]
        );
    }

    #[test]
    fn test_response_url_falls_back_to_target() {
        let outcome = Ok(HttpResponse::new(204, Bytes::new(), None));

        let lines = verbose().format_response(&outcome, &Zen).unwrap();

        assert_eq!(
            messages(lines),
            vec!["Response: { URL: https://api.github.com/zen } { Status Code: 204 }"]
        );
    }

    #[test]
    fn test_response_data_formatter_replaces_body() {
        //given
        let formatter = TextFormatter::new(
            Verbosity::Verbose,
            Some(Arc::new(|_: &[u8]| Bytes::from("formatted body"))),
        );
        let outcome = Ok(HttpResponse::new(
            200,
            "cool body",
            Some(HttpResponseMetadata::with_url(zen_url())),
        ));

        //when
        let lines = formatter.format_response(&outcome, &Zen).unwrap();

        //then
        let body = lines.last().unwrap();
        assert_eq!(body.label, "Response Body");
        assert_eq!(body.message, "formatted body");
    }

    #[test]
    fn test_failure_without_metadata_is_empty_response() {
        let outcome = Err(ExchangeError::Data(HttpResponse::new(200, "cool body", None)));

        assert_eq!(
            verbose().format_response(&outcome, &Zen),
            Err(FormatError::EmptyNetworkResponse("zen".into()))
        );
    }

    #[test]
    fn test_failure_with_metadata_logs_error_body() {
        //given
        let response = HttpResponse::new(
            500,
            "boom",
            Some(HttpResponseMetadata::with_url(zen_url())),
        );
        let outcome = Err(ExchangeError::StatusCode(response));

        //when
        let lines = verbose().format_response(&outcome, &Zen).unwrap();

        //then
        assert_eq!(
            messages(lines),
            vec![
                "Response: { URL: https://api.github.com/zen } { Status Code: 500 }",
                "Response Error: unexpected status code 500",
                "boom",
            ]
        );
    }

    #[test]
    fn test_summary_response_line() {
        let outcome = Ok(HttpResponse::new(
            201,
            "cool body",
            Some(HttpResponseMetadata::with_url(zen_url())),
        ));

        let lines = TextFormatter::new(Verbosity::Summary, None)
            .format_response(&outcome, &Zen)
            .unwrap();

        assert_eq!(lines, vec![LogLine::new(RESPONSE, "Response: 201")]);
    }

    #[test]
    fn test_binary_response_body_placeholder() {
        let outcome = Ok(HttpResponse::new(
            200,
            vec![0xff, 0xfe, 0x00],
            Some(HttpResponseMetadata::with_url(zen_url())),
        ));

        let lines = verbose().format_response(&outcome, &Zen).unwrap();

        assert_eq!(lines.last().unwrap().message, "<binary data: 3 bytes>");
    }
}
