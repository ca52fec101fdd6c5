use apikit::http::parser::{MAX_BODY_LEN, ParseError, parse_http_request};
use apikit::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET /routes HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/routes");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.header("host"), Some("example.com"));
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_post_request_with_json_body() {
    let req = b"POST /echo HTTP/1.1\r\nContent-Type: application/json\r\nContent-Length: 7\r\n\r\n{\"x\":1}";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.body, b"{\"x\":1}".to_vec());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_lowercase_content_length() {
    let req = b"POST /echo HTTP/1.1\r\ncontent-length: 2\r\n\r\nhi";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.body, b"hi".to_vec());
}

#[test]
fn test_parse_pipelined_requests_consume_only_first() {
    let req = b"GET /a HTTP/1.1\r\n\r\nGET /b HTTP/1.1\r\n\r\n";
    let (first, consumed) = parse_http_request(req).unwrap();
    assert_eq!(first.path, "/a");

    let (second, _) = parse_http_request(&req[consumed..]).unwrap();
    assert_eq!(second.path, "/b");
}

#[test]
fn test_parse_incomplete_request_missing_blank_line() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n";

    assert_eq!(parse_http_request(req).unwrap_err(), ParseError::Incomplete);
}

#[test]
fn test_parse_incomplete_request_partial_body() {
    let req = b"POST /echo HTTP/1.1\r\nContent-Length: 10\r\n\r\nhello";

    assert_eq!(parse_http_request(req).unwrap_err(), ParseError::Incomplete);
}

#[test]
fn test_parse_invalid_http_method() {
    let req = b"BREW / HTTP/1.1\r\n\r\n";

    assert_eq!(parse_http_request(req).unwrap_err(), ParseError::InvalidMethod);
}

#[test]
fn test_parse_malformed_request_line() {
    let req = b"GET /\r\n\r\n";

    assert_eq!(parse_http_request(req).unwrap_err(), ParseError::InvalidRequest);
}

#[test]
fn test_parse_malformed_header() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\n\r\n";

    assert_eq!(parse_http_request(req).unwrap_err(), ParseError::InvalidHeader);
}

#[test]
fn test_parse_invalid_content_length() {
    let req = b"POST / HTTP/1.1\r\nContent-Length: lots\r\n\r\n";

    assert_eq!(
        parse_http_request(req).unwrap_err(),
        ParseError::InvalidContentLength
    );
}

#[test]
fn test_parse_various_http_methods() {
    let methods = [
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("HEAD", Method::HEAD),
        ("OPTIONS", Method::OPTIONS),
        ("PATCH", Method::PATCH),
    ];

    for (token, expected) in methods {
        let req = format!("{token} / HTTP/1.1\r\n\r\n");
        let (parsed, _) = parse_http_request(req.as_bytes()).unwrap();
        assert_eq!(parsed.method, expected);
    }
}

#[test]
fn test_parse_request_with_binary_body() {
    let req = b"POST /upload HTTP/1.1\r\nContent-Length: 4\r\n\r\n\x00\x01\x02\x03";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.body, vec![0, 1, 2, 3]);
}

#[test]
fn test_parse_rejects_body_over_limit_before_it_arrives() {
    let req = b"POST /echo HTTP/1.1\r\nContent-Length: 1000000000000\r\n\r\n{";

    assert_eq!(
        parse_http_request(req).unwrap_err(),
        ParseError::InvalidContentLength
    );
}

#[test]
fn test_parse_accepts_body_at_limit() {
    let mut req = format!("POST /echo HTTP/1.1\r\nContent-Length: {MAX_BODY_LEN}\r\n\r\n").into_bytes();
    assert_eq!(parse_http_request(&req).unwrap_err(), ParseError::Incomplete);

    req.resize(req.len() + MAX_BODY_LEN, b'a');
    let (parsed, consumed) = parse_http_request(&req).unwrap();
    assert_eq!(parsed.body.len(), MAX_BODY_LEN);
    assert_eq!(consumed, req.len());

    let over = format!("POST /echo HTTP/1.1\r\nContent-Length: {}\r\n\r\n", MAX_BODY_LEN + 1);
    assert_eq!(
        parse_http_request(over.as_bytes()).unwrap_err(),
        ParseError::InvalidContentLength
    );
}
