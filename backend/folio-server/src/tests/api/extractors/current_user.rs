use crate::api::extractors::current_user::extract_token;

use axum::http::{
    HeaderMap, HeaderValue,
    header::{AUTHORIZATION, COOKIE},
};
use googletest::prelude::*;

fn headers(pairs: &[(axum::http::HeaderName, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.append(name.clone(), HeaderValue::from_str(value).unwrap());
    }
    map
}

#[test]
fn given_bearer_header_when_extracting_then_returns_header_value() {
    let map = headers(&[(AUTHORIZATION, "Bearer abc.def.ghi")]);

    assert_that!(
        extract_token(&map, "t").as_deref(),
        some(eq("Bearer abc.def.ghi"))
    );
}

#[test]
fn given_only_cookie_when_extracting_then_returns_cookie_value() {
    let map = headers(&[(COOKIE, "theme=dark; t=abc.def.ghi; lang=en")]);

    assert_that!(extract_token(&map, "t").as_deref(), some(eq("abc.def.ghi")));
}

#[test]
fn given_header_and_cookie_when_extracting_then_header_wins() {
    let map = headers(&[
        (AUTHORIZATION, "header.token.value"),
        (COOKIE, "t=cookie.token.value"),
    ]);

    assert_that!(
        extract_token(&map, "t").as_deref(),
        some(eq("header.token.value"))
    );
}

#[test]
fn given_blank_header_when_extracting_then_falls_back_to_cookie() {
    let map = headers(&[(AUTHORIZATION, "   "), (COOKIE, "t=cookie.token.value")]);

    assert_that!(
        extract_token(&map, "t").as_deref(),
        some(eq("cookie.token.value"))
    );
}

#[test]
fn given_similarly_named_cookie_when_extracting_then_ignored() {
    let map = headers(&[(COOKIE, "tt=nope; at=nope")]);

    assert_that!(extract_token(&map, "t"), none());
}

#[test]
fn given_cleared_cookie_when_extracting_then_none() {
    let map = headers(&[(COOKIE, "t=")]);

    assert_that!(extract_token(&map, "t"), none());
}

#[test]
fn given_custom_cookie_name_when_extracting_then_uses_it() {
    let map = headers(&[(COOKIE, "t=wrong; folio_session=right")]);

    assert_that!(
        extract_token(&map, "folio_session").as_deref(),
        some(eq("right"))
    );
}
