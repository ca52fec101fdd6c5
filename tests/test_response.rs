use apikit::http::response::{Response, ResponseBuilder, StatusCode};
use apikit::http::writer::{ResponseWriter, serialize_response};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::Forbidden.reason_phrase(), "Forbidden");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_response_builder_auto_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"This is the body".to_vec())
        .build();

    assert_eq!(response.header("Content-Length"), Some("16"));
}

#[test]
fn test_response_builder_preserves_explicit_content_length_any_case() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("content-length", "999")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.headers.len(), 1);
    assert_eq!(response.header("Content-Length"), Some("999"));
}

#[test]
fn test_response_builder_empty_body() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert!(response.body.is_empty());
    assert_eq!(response.header("Content-Length"), Some("0"));
}

#[test]
fn test_bad_request_helper() {
    let response = Response::bad_request();

    assert_eq!(response.status, StatusCode::BadRequest);
    assert_eq!(response.body, b"400 Bad Request".to_vec());
    assert_eq!(
        response.header("Content-Type"),
        Some("text/plain; charset=utf-8")
    );
}

#[test]
fn test_serialize_response_wire_format() {
    let response = ResponseBuilder::new(StatusCode::Forbidden)
        .header("Content-Type", "text/plain")
        .body(b"no".to_vec())
        .build();

    let wire = serialize_response(&response);

    assert_eq!(
        wire,
        b"HTTP/1.1 403 Forbidden\r\nContent-Length: 2\r\nContent-Type: text/plain\r\n\r\nno".to_vec()
    );
}

#[tokio::test]
async fn test_response_writer_writes_everything() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"hello".to_vec())
        .build();
    let mut writer = ResponseWriter::new(&response);
    let mut out: Vec<u8> = Vec::new();

    writer.write_to_stream(&mut out).await.unwrap();

    assert!(writer.is_done());
    assert_eq!(out, serialize_response(&response));
    assert!(out.ends_with(b"\r\n\r\nhello"));
}
