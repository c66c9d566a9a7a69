//! Line-oriented rewriting of recorder-generated simulations.
//!
//! A [`Rewriter`] makes one forward pass over the script. For every input
//! line the rules run in this order:
//!
//! 1. token scrub
//! 2. pause normalization
//! 3. header injection on POST calls
//! 4. anchor detection (first match wins)
//! 5. request naming from the following line
//! 6. boilerplate filtering
//! 7. token snippet insertion inside the window after the anchor
//!
//! The snippet window is measured in input line indices, so dropped and
//! inserted lines never shift it.

mod rules;
mod snippet;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::RewriteConfig;
use crate::error::{ImportError, Result};

pub use rules::{AnchorMatcher, PAUSE_MARKER, RuleSet, is_request_placeholder, name_request, zero_pause};
pub use snippet::token_snippet;

/// Counters collected during one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteStats {
    pub lines_read: usize,
    pub lines_written: usize,
    pub tokens_scrubbed: usize,
    pub pauses_zeroed: usize,
    pub posts_augmented: usize,
    pub requests_named: usize,
    pub lines_dropped: usize,
    pub snippets_inserted: usize,
    /// Zero-based input index of the anchor line, if one was found.
    pub anchor_index: Option<usize>,
}

/// Output of a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub lines: Vec<String>,
    pub stats: RewriteStats,
}

/// Compiled rule pipeline.
#[derive(Debug, Clone)]
pub struct Rewriter {
    rules: RuleSet,
}

impl Rewriter {
    pub fn new(config: &RewriteConfig) -> Result<Self> {
        Ok(Self {
            rules: RuleSet::new(config)?,
        })
    }

    /// Rewrite a whole script given as text.
    pub fn rewrite_str(&self, script: &str) -> Result<Rewrite> {
        let lines: Vec<&str> = script.lines().collect();
        self.rewrite(&lines)
    }

    /// Run every rule over `input` in a single forward pass.
    pub fn rewrite<S: AsRef<str>>(&self, input: &[S]) -> Result<Rewrite> {
        let rules = &self.rules;
        let mut output = Vec::with_capacity(input.len());
        let mut stats = RewriteStats {
            lines_read: input.len(),
            ..RewriteStats::default()
        };
        let mut anchor: Option<usize> = None;

        for (index, current) in input.iter().enumerate() {
            let next: Option<&str> = input.get(index + 1).map(AsRef::as_ref);
            let mut line = current.as_ref().to_string();

            if rules.scrub_token(&mut line) {
                stats.tokens_scrubbed += 1;
            }
            if zero_pause(&mut line) {
                stats.pauses_zeroed += 1;
            }
            if rules.inject_headers(&mut line) {
                stats.posts_augmented += 1;
            }

            if anchor.is_none() && rules.anchor.matches(&line) {
                debug!(line = index + 1, "Anchor line found");
                anchor = Some(index);
            }

            if is_request_placeholder(&line) {
                name_request(&mut line, next).map_err(|reason| ImportError::MalformedRequest {
                    line: index + 1,
                    reason,
                })?;
                stats.requests_named += 1;
            }

            if rules.is_boilerplate(&line) {
                debug!(line = index + 1, "Dropped boilerplate line");
                stats.lines_dropped += 1;
                continue;
            }

            let in_window = anchor
                .is_some_and(|start| index > start && index - start <= rules.snippet_window);
            let insert_snippet = in_window && line.contains(PAUSE_MARKER);

            output.push(line);

            if insert_snippet {
                debug!(line = index + 1, "Inserted token snippet");
                output.extend(rules.snippet.iter().cloned());
                stats.snippets_inserted += 1;
            }
        }

        if anchor.is_none() && rules.anchor.is_enabled() {
            warn!("No anchor line found; token snippet not inserted");
        }

        stats.anchor_index = anchor;
        stats.lines_written = output.len();
        Ok(Rewrite {
            lines: output,
            stats,
        })
    }
}
