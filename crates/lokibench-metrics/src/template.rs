//! Query template rendering.
//!
//! PromQL uses braces for label selectors, so placeholders are written as
//! `${name}`. Substituted values are inserted verbatim and never rescanned.

use std::fmt::{self, Write};

/// A query string with `${name}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTemplate(&'static str);

impl QueryTemplate {
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    /// Raw template text
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Substitute every `${name}` found in `vars`.
    ///
    /// Placeholders without a matching variable are kept as written.
    pub fn render(&self, vars: &[(&str, &dyn fmt::Display)]) -> String {
        let mut out = String::with_capacity(self.0.len() + 64);
        let mut rest = self.0;

        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let Some(end) = after.find('}') else {
                out.push_str(&rest[start..]);
                return out;
            };

            let key = &after[..end];
            match vars.iter().find(|(name, _)| *name == key) {
                Some((_, value)) => {
                    // Writing into a String cannot fail.
                    let _ = write!(out, "{value}");
                }
                None => out.push_str(&rest[start..start + 2 + end + 1]),
            }
            rest = &after[end + 1..];
        }

        out.push_str(rest);
        out
    }
}

impl fmt::Display for QueryTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
