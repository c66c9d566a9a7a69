//! Invariants of the line pipeline that must hold for any input.

use proptest::prelude::*;

use sim_import::config::RewriteConfig;
use sim_import::rewrite::{Rewriter, token_snippet, zero_pause};

fn rewriter() -> Rewriter {
    Rewriter::new(&RewriteConfig::default()).unwrap()
}

/// Script-ish lines free of every marker the pipeline reacts to.
fn plain_line() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _={}+,;:/\\t-]{0,60}"
}

fn boilerplate_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("\t\t.authorizationHeader(\"Basic x\")".to_string()),
        Just("\t\t.contentTypeHeader(\"text/plain\")".to_string()),
        Just("\t\t.connection(\"keep-alive\")".to_string()),
        Just("\tval uri3 = \"cdn.mathjax.org\"".to_string()),
    ]
}

/// Pause arguments, including nested calls and duration constructors.
fn pause_argument() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ._]{0,20}",
        ("[a-zA-Z]{1,8}", "[a-zA-Z0-9 ,._]{0,12}").prop_map(|(call, inner)| format!("{call}({inner})")),
        ("[0-9]{1,3}", "[A-Z]{1,8}", "[a-z0-9 ]{0,6}")
            .prop_map(|(n, unit, tail)| format!("Duration({n}, {unit}), max({tail})")),
    ]
}

proptest! {
    #[test]
    fn plain_lines_pass_through_unchanged(lines in prop::collection::vec(plain_line(), 0..40)) {
        let result = rewriter().rewrite(&lines).unwrap();
        prop_assert_eq!(result.lines, lines);
    }

    #[test]
    fn pause_argument_always_becomes_zero(arg in pause_argument(), indent in "[ \\t]{0,4}") {
        let mut line = format!("{indent}.pause({arg}).exec(next)");
        prop_assert!(zero_pause(&mut line));
        prop_assert_eq!(line, format!("{indent}.pause(0).exec(next)"));
    }

    #[test]
    fn lines_without_pause_untouched_by_pause_rule(line in plain_line()) {
        let mut mutated = line.clone();
        prop_assert!(!zero_pause(&mut mutated));
        prop_assert_eq!(mutated, line);
    }

    #[test]
    fn token_scrub_is_total(value in "[^\"\\n]{0,40}", prefix in "[ \\t]{0,6}") {
        let line = format!("{prefix}\"x-xsrf-token\" -> \"{value}\"");
        let result = rewriter().rewrite(&[line]).unwrap();
        prop_assert_eq!(&result.lines[0], &format!("{prefix}\"dummy\" -> \"dummy\""));
    }

    #[test]
    fn post_gets_exactly_two_headers(uri in "/[a-z0-9/]{0,30}") {
        let line = format!("\t\t\t.post(\"{uri}\")");
        let result = rewriter().rewrite(&[line.clone()]).unwrap();
        let out = &result.lines[0];
        prop_assert!(out.starts_with(&line));
        prop_assert_eq!(out.matches(".header(\"x-xsrf-token\"").count(), 1);
        prop_assert_eq!(out.matches(".header(\"Content-Type\", \"application/json\")").count(), 1);
    }

    #[test]
    fn filter_removes_exactly_boilerplate(
        lines in prop::collection::vec(prop_oneof![plain_line(), boilerplate_line()], 0..40)
    ) {
        let expected: Vec<String> = lines
            .iter()
            .filter(|line| !line.contains(".authorizationHeader(\"")
                && !line.contains(".contentTypeHeader(\"")
                && !line.contains(".connection(\"")
                && !line.contains("\"cdn.mathjax.org\""))
            .cloned()
            .collect();
        let result = rewriter().rewrite(&lines).unwrap();
        prop_assert_eq!(result.stats.lines_dropped, lines.len() - expected.len());
        prop_assert_eq!(result.lines, expected);
    }

    #[test]
    fn snippet_only_inside_window(gap in 1usize..8, filler in plain_line()) {
        let mut lines = vec!["\t\t.post(\"/dtdl/login\")".to_string()];
        lines.extend(std::iter::repeat_n(filler, gap - 1));
        lines.push("\t\t.pause(1)".to_string());

        let result = rewriter().rewrite(&lines).unwrap();
        let snippet_len = token_snippet(&RewriteConfig::default()).len();
        let expected = usize::from(gap <= 3);

        prop_assert_eq!(result.stats.snippets_inserted, expected);
        prop_assert_eq!(result.lines.len(), lines.len() + expected * snippet_len);
    }

    #[test]
    fn request_named_from_next_line(
        method in prop_oneof![Just("get"), Just("post"), Just("put"), Just("delete")],
        uri in "/[a-z0-9/_-]{0,30}",
        n in 0u32..500,
    ) {
        let lines = vec![
            format!("\t\t.exec(http(\"request_{n}\")"),
            format!("\t\t\t.{method}(\"{uri}\")"),
        ];
        let result = rewriter().rewrite(&lines).unwrap();
        prop_assert_eq!(
            &result.lines[0],
            &format!("\t\t.exec(http(\"{} {uri}\")", method.to_uppercase())
        );
    }
}
