// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Shell-style environment variable expansion for the module prefix.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// A special one-character name (`$1`, `$$`, `${#}`), a braced name, an
    /// unterminated `${`, or a run of word characters. Alternatives are
    /// tried in that order.
    static ref VAR_PATTERN: Regex = Regex::new(
        r"\$(?:\{([*#$@!?0-9-])\}|\{([^}]*)\}|\{|([*#$@!?0-9-])|([A-Za-z0-9_]+))"
    )
    .unwrap();
}

/// Expand `$NAME` and `${NAME}`, resolving names through `lookup`.
///
/// Names `lookup` does not know expand to the empty string. A digit or one
/// of `*#$@!?-` after `$` is a name on its own, so `$1abc` is `$1`
/// followed by `abc`. Malformed `${}` and unterminated `${` are dropped;
/// a `$` followed by anything else is kept as is.
pub fn expand_with<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    VAR_PATTERN
        .replace_all(input, |caps: &Captures<'_>| {
            let name = [1, 2, 3, 4]
                .iter()
                .find_map(|&i| caps.get(i))
                .map(|m| m.as_str())
                .unwrap_or_default();
            if name.is_empty() {
                return String::new();
            }
            lookup(name).unwrap_or_default()
        })
        .into_owned()
}
