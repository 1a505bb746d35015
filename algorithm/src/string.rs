use deunicode::deunicode;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9_]+").unwrap());

/// Convert a text to a slug: transliterate to ASCII, lowercase, every run of characters that
/// are neither letters nor digits is replaced by a single `_`, and separators at both ends are
/// dropped.
///
/// E.g: `"Date of Birth (UTC)"` => `"date_of_birth_utc"`, `"Café"` => `"cafe"`
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_sep = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('_');
            }
            pending_sep = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }

    slug
}

/// Drop the leading digits of a slug, together with the separators between them, so the result
/// never starts with a digit.
///
/// E.g: `"3d_model"` => `"d_model"`, `"3_2d"` => `"d"`, `"1_2_3"` => `""`
pub fn strip_digit_prefix(name: &str) -> &str {
    match DIGIT_PREFIX.find(name) {
        Some(m) => &name[m.end()..],
        None => name,
    }
}
