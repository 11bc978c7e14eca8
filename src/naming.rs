//! Name transformations applied to the free-text project name.
//! Produces the npm package name and the component or hook identifier
//! used inside the generated sources.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static PACKAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9*~-][a-z0-9*._~-]*/)?[a-z0-9~-][a-z0-9._~-]*$")
        .expect("package name pattern is valid")
});
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9~-]+").expect("disallowed pattern is valid"));
static UNDERSCORE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([A-Za-z0-9_])").expect("underscore pattern is valid"));
static HYPHEN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-([A-Za-z0-9_])").expect("hyphen pattern is valid"));

/// Returns true if `name` is a valid npm package name, optionally scoped.
pub fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_NAME.is_match(name)
}

/// Converts `name` to kebab-case.
///
/// Leading and trailing hyphens are dropped. An uppercase ASCII letter
/// following a letter or digit starts a new word; one following a
/// separator or at the start of the string is only lowercased.
pub fn to_kebab_case(name: &str) -> String {
    let trimmed = name.trim_matches('-');
    let mut out = String::with_capacity(trimmed.len() + 4);
    let mut previous: Option<char> = None;

    for c in trimmed.chars() {
        if c.is_ascii_uppercase() {
            if previous.is_some_and(|p| p.is_ascii_alphanumeric()) {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
        previous = Some(c);
    }

    out
}

/// Normalizes arbitrary text into a valid npm package name.
///
/// Applying it to its own output returns the output unchanged. The result
/// can be empty when `name` holds no usable characters, so callers still
/// check it with [`is_valid_package_name`].
pub fn to_valid_package_name(name: &str) -> String {
    let kebab = to_kebab_case(name.trim()).to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&kebab, "-");
    let body = hyphenated.strip_prefix(['.', '_']).unwrap_or(&*hyphenated);

    DISALLOWED.replace_all(body, "-").trim_matches('-').to_string()
}

/// Derives the identifier exported by the generated library.
///
/// `_x` pairs fold into an uppercase `X` first, then `-x` pairs. Names starting with `use`
/// are hooks and stay camelCase; anything else becomes PascalCase.
pub fn to_valid_component_name(name: &str) -> String {
    let upper = |caps: &Captures| caps[1].to_uppercase();
    let folded = UNDERSCORE_WORD.replace_all(name, upper);
    let folded = HYPHEN_WORD.replace_all(&folded, upper).into_owned();

    if folded.starts_with("use") {
        folded
    } else {
        first_upper_case(&folded)
    }
}

/// Returns true if the identifier names a React hook.
pub fn is_hook_name(identifier: &str) -> bool {
    identifier.starts_with("use")
}

pub fn first_upper_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case_keeps_single_separators() {
        assert_eq!(to_kebab_case("My-Cool-Thing"), "my-cool-thing");
        assert_eq!(to_kebab_case("--Padded--"), "padded");
        assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
    }

    #[test]
    fn test_first_upper_case() {
        assert_eq!(first_upper_case("useTimer"), "UseTimer");
        assert_eq!(first_upper_case(""), "");
        assert_eq!(first_upper_case("a"), "A");
    }
}
