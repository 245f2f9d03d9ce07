use crate::{AuthSettings, clear_session_cookie, session_cookie};

use std::time::Duration;

use googletest::prelude::*;

fn settings(secure: bool) -> AuthSettings {
    AuthSettings {
        cookie_name: "t".to_string(),
        cookie_secure: secure,
        token_ttl: Duration::from_secs(7 * 24 * 60 * 60),
    }
}

#[test]
fn given_token_when_building_cookie_then_http_only_with_token_lifetime() {
    let cookie = session_cookie(&settings(false), "abc.def.ghi").unwrap();

    assert_that!(
        cookie.to_str().unwrap(),
        eq("t=abc.def.ghi; Path=/; HttpOnly; SameSite=Lax; Max-Age=604800")
    );
}

#[test]
fn given_secure_settings_when_building_cookie_then_secure_flag_appended() {
    let cookie = session_cookie(&settings(true), "abc").unwrap();

    assert_that!(cookie.to_str().unwrap(), ends_with("; Secure"));
}

#[test]
fn given_settings_when_clearing_cookie_then_expires_immediately() {
    let cookie = clear_session_cookie(&settings(false)).unwrap();

    assert_that!(
        cookie.to_str().unwrap(),
        eq("t=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    );
}
