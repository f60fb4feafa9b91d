//! URL slugs
//!
//! Lowercases, hyphenates and transliterates arbitrary text into a token made of
//! ASCII letters, digits, underscores and single hyphens.

use std::sync::LazyLock;

use regex::Regex;

/// Characters replaced during transliteration, paired by position with [`PLAIN`]
const ACCENTED: &str = "àáâäæãåāăąçćčđďèéêëēėęěğǵḧîïíīįìłḿñńǹňôöòóœøōõőṕŕřßśšşșťțûüùúūǘůűųẃẍÿýžźż·/_,:;";
const PLAIN: &str = "aaaaaaaaaacccddeeeeeeeegghiiiiiilmnnnnoooooooooprrsssssttuuuuuuuuuwxyyzzz------";

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x{FEFF}]+").expect("whitespace pattern"));
static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\-]+").expect("non-word pattern"));
static HYPHENS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").expect("hyphen pattern"));

/// Turn `input` into a URL slug
///
/// # Example
/// ```
/// use fetsch::slugify;
///
/// assert_eq!(slugify("Héllo World!"), "hello-world");
/// assert_eq!(slugify("Fish & Chips"), "fish-and-chips");
/// ```
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let hyphenated = WHITESPACE_RE.replace_all(&lowered, "-");
    let transliterated: String = hyphenated.chars().map(transliterate).collect();
    let with_and = transliterated.replace('&', "-and-");
    let stripped = NON_WORD_RE.replace_all(&with_and, "");
    let collapsed = HYPHENS_RE.replace_all(&stripped, "-");

    collapsed.trim_matches('-').to_string()
}

/// Whether `s` is already a slug, i.e. `slugify(s) == s`
pub fn is_slug(s: &str) -> bool {
    slugify(s) == s
}

fn transliterate(c: char) -> char {
    ACCENTED
        .chars()
        .position(|a| a == c)
        .and_then(|i| PLAIN.chars().nth(i))
        .unwrap_or(c)
}
