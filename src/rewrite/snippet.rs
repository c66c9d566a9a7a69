//! Token-extraction snippet inserted after the login pause.

use crate::config::RewriteConfig;

/// Build the lines that copy the token cookie into the session.
///
/// The cookie and the session variable share the `session_token` name, so
/// the headers appended to POST calls pick the value up.
#[must_use]
pub fn token_snippet(config: &RewriteConfig) -> Vec<String> {
    let token = &config.session_token;
    vec![
        "\t\t.exec(session => {".to_string(),
        "\t\t\timport io.gatling.http.cookie._".to_string(),
        "\t\t\tsession(\"gatling.http.cookies\").validate[CookieJar].map {".to_string(),
        format!(
            "\t\t\t\tcookieJar => session.set(\"{token}\", cookieJar.store.get(CookieKey(\"{token}\", \"{}\", \"{}\")).orNull.cookie.getValue)",
            config.cookie_domain, config.cookie_path
        ),
        "\t\t\t}".to_string(),
        "\t\t})".to_string(),
    ]
}
