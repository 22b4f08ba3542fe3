use regex::bytes::{Captures, Regex};
use std::borrow::Cow;

/// Renames `"kernel_config_<current>_<version>"` module names to `next`.
///
/// Only quoted names with a non-empty version suffix made of digits and dots
/// are touched; the suffix is carried over verbatim.
#[derive(Debug, Clone)]
pub struct ModuleNameRewriter {
    pattern: Regex,
    next: String,
}

impl ModuleNameRewriter {
    pub fn new(current: &str, next: &str) -> Self {
        let pattern = format!(r#""kernel_config_{}_([0-9.]+)""#, regex::escape(current));
        ModuleNameRewriter {
            pattern: Regex::new(&pattern).expect("escaped label yields a valid pattern"),
            next: next.to_string(),
        }
    }

    pub fn apply<'a>(&self, content: &'a [u8]) -> Cow<'a, [u8]> {
        self.pattern.replace_all(content, |caps: &Captures| {
            let mut out = format!("\"kernel_config_{}_", self.next).into_bytes();
            out.extend_from_slice(&caps[1]);
            out.push(b'"');
            out
        })
    }
}
