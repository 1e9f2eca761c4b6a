use axum::{body::Body, http::StatusCode, response::Response};
use axum_htmx::HX_RESWAP;

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    let content_type_header = response
        .headers()
        .get("content-type")
        .expect("content-type header missing");
    assert_eq!(content_type_header, content_type);
}

#[track_caller]
pub(crate) fn get_header(response: &Response<Body>, header_name: &str) -> String {
    response
        .headers()
        .get(header_name)
        .unwrap_or_else(|| panic!("Headers missing {header_name}"))
        .to_str()
        .expect("Could not convert to str")
        .to_string()
}

/// Assert that htmx is told to leave the page as it is.
#[track_caller]
pub(crate) fn assert_no_swap(response: &Response<Body>) {
    assert_status_ok(response);
    assert_eq!(get_header(response, HX_RESWAP.as_str()), "none");
}
