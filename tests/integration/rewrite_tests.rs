use sim_import::config::RewriteConfig;
use sim_import::rewrite::{Rewrite, Rewriter, token_snippet};

use crate::common::{LOGIN_INDEX, RECORDED_SIMULATION};

fn rewrite_recording() -> Rewrite {
    Rewriter::new(&RewriteConfig::default())
        .unwrap()
        .rewrite_str(RECORDED_SIMULATION)
        .unwrap()
}

#[test]
fn recording_boilerplate_is_removed() {
    let result = rewrite_recording();
    let text = result.lines.join("\n");

    assert!(!text.contains(".authorizationHeader("));
    assert!(!text.contains(".contentTypeHeader("));
    assert!(!text.contains(".connection("));
    assert!(!text.contains("www.google-analytics.com"));
    assert!(text.contains(".acceptHeader("));
    assert_eq!(result.stats.lines_dropped, 4);
}

#[test]
fn recording_token_is_scrubbed() {
    let result = rewrite_recording();
    let text = result.lines.join("\n");

    assert!(text.contains(r#""dummy" -> "dummy")"#));
    assert!(!text.contains("5b0f6c2e"));
    assert_eq!(result.stats.tokens_scrubbed, 1);
}

#[test]
fn recording_requests_are_named() {
    let result = rewrite_recording();
    let text = result.lines.join("\n");

    assert!(text.contains(r#".exec(http("GET /api/session")"#));
    assert!(text.contains(r#".exec(http("POST /dtdl/login")"#));
    assert!(text.contains(r#".exec(http("GET /api/courses")"#));
    assert!(!text.contains("request_"));
    assert_eq!(result.stats.requests_named, 3);
}

#[test]
fn recording_pauses_are_zeroed() {
    let result = rewrite_recording();
    let pauses: Vec<&String> = result
        .lines
        .iter()
        .filter(|line| line.contains(".pause("))
        .collect();

    assert_eq!(pauses.len(), 3);
    assert!(pauses.iter().all(|line| line.trim() == ".pause(0)"));
    assert_eq!(result.stats.pauses_zeroed, 3);
}

#[test]
fn recording_post_gets_headers() {
    let result = rewrite_recording();
    let post = result
        .lines
        .iter()
        .find(|line| line.contains(".post("))
        .unwrap();

    assert_eq!(
        post.trim_start(),
        r#".post("/dtdl/login").header("x-xsrf-token", session => session("xsrf-token").as[String]).header("Content-Type", "application/json")"#
    );
    assert_eq!(post.matches(".header(").count(), 2);
    assert_eq!(result.stats.posts_augmented, 1);
}

#[test]
fn recording_snippet_follows_login_pause() {
    let result = rewrite_recording();
    let snippet = token_snippet(&RewriteConfig::default());

    assert_eq!(result.stats.anchor_index, Some(LOGIN_INDEX));
    assert_eq!(result.stats.snippets_inserted, 1);

    // The pause before the login stays untouched by the snippet rule.
    let pauses: Vec<usize> = result
        .lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains(".pause("))
        .map(|(i, _)| i)
        .collect();
    assert!(result.lines[pauses[0] + 1].contains("POST /dtdl/login"));

    let after_login = pauses[1];
    assert_eq!(
        &result.lines[after_login + 1..after_login + 1 + snippet.len()],
        snippet.as_slice()
    );
    assert_eq!(
        result.stats.lines_written,
        result.stats.lines_read - result.stats.lines_dropped + snippet.len()
    );
}
