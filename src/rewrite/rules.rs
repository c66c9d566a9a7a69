//! Individual line rules.
//!
//! Each rule works on one line in place and reports whether it fired. The
//! fixed order in which they run lives in [`super::Rewriter`].

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::config::{AnchorConfig, RewriteConfig};
use crate::error::Result;

/// Substring marking a pause directive.
pub const PAUSE_MARKER: &str = ".pause(";

const POST_MARKER: &str = ".post(";
const REQUEST_MARKER: &str = "http(\"request_";
const SCRUBBED_PAIR: &str = "\"dummy\" -> \"dummy\"";

static REQUEST_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""request_[^"]*""#).unwrap());

static FIRST_QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]*)""#).unwrap());

/// Set the argument of every pause directive to zero.
///
/// The argument list runs to the matching `)`, so nested calls such as
/// `Duration(5, SECONDS)` are replaced whole. A pause whose argument list
/// does not close on this line is left alone.
pub fn zero_pause(line: &mut String) -> bool {
    let mut out = String::with_capacity(line.len());
    let mut rest = line.as_str();
    let mut changed = false;
    while let Some(start) = rest.find(PAUSE_MARKER) {
        let args = start + PAUSE_MARKER.len();
        let Some(close) = closing_paren(&rest[args..]) else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(".pause(0)");
        rest = &rest[args + close + 1..];
        changed = true;
    }
    if !changed {
        return false;
    }
    out.push_str(rest);
    *line = out;
    true
}

/// Offset of the `)` that closes an argument list whose `(` precedes `args`.
fn closing_paren(args: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, ch) in args.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' if depth == 0 => return Some(offset),
            ')' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Whether the line opens a request with a recorder placeholder name.
#[must_use]
pub fn is_request_placeholder(line: &str) -> bool {
    line.contains(REQUEST_MARKER)
}

/// Replace the placeholder request name with `"<METHOD> <URI>"` taken from
/// the call on the following line.
///
/// The error string describes why `next` could not be used.
pub fn name_request(line: &mut String, next: Option<&str>) -> std::result::Result<(), String> {
    let next = next.ok_or_else(|| "request placeholder on the last line".to_string())?;
    let (method, uri) = parse_request_call(next)?;
    let name = format!("\"{} {}\"", method.to_uppercase(), uri);
    *line = REQUEST_PLACEHOLDER
        .replace(line, NoExpand(&name))
        .into_owned();
    Ok(())
}

/// Split a line such as `.get("/api/data")` into method and URI.
fn parse_request_call(next: &str) -> std::result::Result<(&str, &str), String> {
    let (_, after_dot) = next
        .split_once('.')
        .ok_or_else(|| format!("expected a method call after the request, found `{}`", next.trim()))?;
    let (method, _) = after_dot
        .split_once('(')
        .ok_or_else(|| format!("expected `(` after the method, found `{}`", next.trim()))?;
    if method.is_empty() || !method.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("`{method}` is not an HTTP method in `{}`", next.trim()));
    }
    let uri = FIRST_QUOTED
        .captures(next)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| format!("no quoted URI in `{}`", next.trim()))?;
    Ok((method, uri.as_str()))
}

/// How the anchor line is recognized.
#[derive(Debug, Clone)]
pub enum AnchorMatcher {
    Contains(String),
    Pattern(Regex),
    Disabled,
}

impl AnchorMatcher {
    pub fn from_config(config: &AnchorConfig) -> Result<Self> {
        if let Some(pattern) = &config.pattern {
            return Ok(Self::Pattern(Regex::new(pattern)?));
        }
        Ok(match &config.contains {
            Some(marker) if !marker.is_empty() => Self::Contains(marker.clone()),
            _ => Self::Disabled,
        })
    }

    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        match self {
            Self::Contains(marker) => line.contains(marker.as_str()),
            Self::Pattern(re) => re.is_match(line),
            Self::Disabled => false,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Configuration-dependent rules, compiled once per [`super::Rewriter`].
#[derive(Debug, Clone)]
pub struct RuleSet {
    token_pair: Regex,
    header_suffix: String,
    pub(super) anchor: AnchorMatcher,
    boilerplate: Vec<String>,
    pub(super) snippet: Vec<String>,
    pub(super) snippet_window: usize,
}

impl RuleSet {
    pub fn new(config: &RewriteConfig) -> Result<Self> {
        let token_pair = Regex::new(&format!(
            r#""{}" -> ".*""#,
            regex::escape(&config.token_header)
        ))?;
        let header_suffix = format!(
            r#".header("{}", session => session("{}").as[String]).header("Content-Type", "{}")"#,
            config.token_header, config.session_token, config.content_type
        );

        Ok(Self {
            token_pair,
            header_suffix,
            anchor: AnchorMatcher::from_config(&config.anchor)?,
            boilerplate: config
                .boilerplate
                .iter()
                .filter(|marker| !marker.is_empty())
                .cloned()
                .collect(),
            snippet: super::snippet::token_snippet(config),
            snippet_window: config.snippet_window,
        })
    }

    /// Replace a recorded token header pair with a dummy pair.
    pub fn scrub_token(&self, line: &mut String) -> bool {
        if !self.token_pair.is_match(line) {
            return false;
        }
        *line = self
            .token_pair
            .replace_all(line, NoExpand(SCRUBBED_PAIR))
            .into_owned();
        true
    }

    /// Append token and content-type headers to a POST call.
    pub fn inject_headers(&self, line: &mut String) -> bool {
        if !line.contains(POST_MARKER) {
            return false;
        }
        line.push_str(&self.header_suffix);
        true
    }

    #[must_use]
    pub fn is_boilerplate(&self, line: &str) -> bool {
        self.boilerplate
            .iter()
            .any(|marker| line.contains(marker.as_str()))
    }
}
