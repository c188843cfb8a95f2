//! The auto-initialization boilerplate pattern.
//!
//! Matches a block of this shape, with `\n` or `\r\n` line breaks:
//!
//! ```text
//! // Auto-initialize
//! if (document.readyState === 'loading') {
//!     document.addEventListener('DOMContentLoaded', () => Module.init());
//! } else {
//!     Module.init();
//! }
//!
//! ```
//!
//! The trailing blank line is part of the match.

use regex::Regex;
use std::sync::OnceLock;

const BOILERPLATE_PATTERN: &str = concat!(
    r"(?s)",
    r"// Auto-initialize\r?\n",
    r"if \(document\.readyState === 'loading'\) \{\r?\n",
    r"    document\.addEventListener\('DOMContentLoaded', \(\) => .*?\.init\(\)\);\r?\n",
    r"\} else \{\r?\n",
    r"    .*?\.init\(\);\r?\n",
    r"\}\r?\n",
    r"\r?\n",
);

/// Compiled boilerplate regex. Dot matches newline; inner groups are lazy.
pub fn boilerplate_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(BOILERPLATE_PATTERN).expect("invalid boilerplate regex"))
}

/// Result of stripping one text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    pub content: String,
    /// Number of blocks removed.
    pub removed: u64,
}

impl Stripped {
    pub fn changed(&self) -> bool {
        self.removed > 0
    }
}

/// Remove every boilerplate block from `content`.
pub fn strip_auto_init(content: &str) -> Stripped {
    let re = boilerplate_regex();
    let removed = re.find_iter(content).count() as u64;
    if removed == 0 {
        return Stripped {
            content: content.to_string(),
            removed,
        };
    }

    Stripped {
        content: re.replace_all(content, "").into_owned(),
        removed,
    }
}

pub fn contains_auto_init(content: &str) -> bool {
    boilerplate_regex().is_match(content)
}
