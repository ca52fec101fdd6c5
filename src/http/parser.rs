use crate::http::request::{Method, Request};
use std::collections::HashMap;

/// Upper bound on the request head; anything larger is rejected.
const MAX_HEAD_LEN: usize = 64 * 1024;

/// Largest `Content-Length` accepted; the body is buffered in full.
pub const MAX_BODY_LEN: usize = 1024 * 1024;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidRequest,
    InvalidMethod,
    InvalidHeader,
    InvalidContentLength,
    Incomplete,
}

/// Parses one request from the front of `buf`.
///
/// Returns the request and the number of bytes it occupied, or
/// [`ParseError::Incomplete`] when more bytes are needed.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let head_end = match find_head_end(buf) {
        Some(end) => end,
        None if buf.len() > MAX_HEAD_LEN => return Err(ParseError::InvalidRequest),
        None => return Err(ParseError::Incomplete),
    };

    let head = std::str::from_utf8(&buf[..head_end]).map_err(|_| ParseError::InvalidRequest)?;
    let mut lines = head.split("\r\n");

    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let (method, path, version) = parse_request_line(request_line)?;

    let mut headers = HashMap::new();
    for line in lines.filter(|l| !l.is_empty()) {
        let (name, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ParseError::InvalidHeader);
        }
        headers.insert(name.to_string(), value.trim().to_string());
    }

    let content_length = headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("Content-Length"))
        .map(|(_, v)| {
            v.parse::<usize>()
                .map_err(|_| ParseError::InvalidContentLength)
        })
        .transpose()?
        .unwrap_or(0);
    if content_length > MAX_BODY_LEN {
        return Err(ParseError::InvalidContentLength);
    }

    let body_start = head_end + 4;
    let body_end = body_start + content_length;
    if buf.len() < body_end {
        return Err(ParseError::Incomplete);
    }

    let request = Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body: buf[body_start..body_end].to_vec(),
    };

    Ok((request, body_end))
}

fn parse_request_line(line: &str) -> Result<(Method, &str, &str), ParseError> {
    let mut parts = line.split_whitespace();
    let method = parts.next().ok_or(ParseError::InvalidRequest)?;
    let path = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;
    if parts.next().is_some() || !version.starts_with("HTTP/") {
        return Err(ParseError::InvalidRequest);
    }

    let method = Method::parse(method).ok_or(ParseError::InvalidMethod)?;
    Ok((method, path, version))
}

fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
