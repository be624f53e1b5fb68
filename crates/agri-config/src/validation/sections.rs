use crate::schema::AgriConfig;

use super::helpers::{validate_not_blank, validate_range};

pub(crate) fn validate_server(errors: &mut Vec<String>, config: &AgriConfig) {
    let base_url = config.server.base_url.trim();
    if base_url.is_empty() {
        errors.push("server.base_url must not be empty".into());
    } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        errors.push(format!(
            "server.base_url = {base_url:?} must start with http:// or https://"
        ));
    }

    validate_range(
        errors,
        "server.connect_timeout_secs",
        config.server.connect_timeout_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "server.request_timeout_secs",
        config.server.request_timeout_secs,
        1,
        600,
    );
}

pub(crate) fn validate_session(errors: &mut Vec<String>, config: &AgriConfig) {
    validate_not_blank(errors, "session.welcome_message", &config.session.welcome_message);
}
