//! Property-based tests for boilerplate stripping.
//!
//! These tests verify key invariants:
//! - Idempotency: stripping twice produces the same result as stripping once
//! - No-op: text without the boilerplate is returned byte-identical
//! - Preservation: content around a block survives untouched, LF or CRLF

use initfix_edit::{contains_auto_init, strip_auto_init};
use proptest::prelude::*;

/// Strategy to generate JavaScript-ish lines that never start a block.
fn arb_plain_js() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::string::string_regex(r"(const|let|function|return) [a-z][a-zA-Z0-9_]{0,12};?")
            .unwrap(),
        0..8,
    )
    .prop_map(|lines| {
        let mut out = lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    })
}

/// Strategy to generate a module identifier used as the init receiver.
fn arb_module_name() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[A-Z][A-Za-z0-9]{0,15}").unwrap()
}

fn block(name: &str) -> String {
    format!(
        "// Auto-initialize\n\
if (document.readyState === 'loading') {{\n\
\x20   document.addEventListener('DOMContentLoaded', () => {name}.init());\n\
}} else {{\n\
\x20   {name}.init();\n\
}}\n\n"
    )
}

proptest! {
    #[test]
    fn idempotency(prefix in arb_plain_js(), suffix in arb_plain_js(), name in arb_module_name()) {
        let src = format!("{prefix}{}{suffix}", block(&name));
        let once = strip_auto_init(&src).content;
        let twice = strip_auto_init(&once).content;
        prop_assert_eq!(&once, &twice, "stripping should be idempotent");
        prop_assert_eq!(strip_auto_init(&once).removed, 0);
    }

    #[test]
    fn plain_text_is_untouched(src in arb_plain_js()) {
        let out = strip_auto_init(&src);
        prop_assert_eq!(&out.content, &src);
        prop_assert_eq!(out.removed, 0);
        prop_assert!(!contains_auto_init(&src));
    }

    #[test]
    fn surrounding_content_preserved(
        prefix in arb_plain_js(),
        suffix in arb_plain_js(),
        name in arb_module_name(),
        crlf in any::<bool>(),
    ) {
        let mut src = format!("{prefix}{}{suffix}", block(&name));
        let mut expected = format!("{prefix}{suffix}");
        if crlf {
            src = src.replace('\n', "\r\n");
            expected = expected.replace('\n', "\r\n");
        }

        let out = strip_auto_init(&src);
        prop_assert_eq!(out.removed, 1);
        prop_assert_eq!(out.content, expected);
    }
}
