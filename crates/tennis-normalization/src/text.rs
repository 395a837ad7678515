//! Person and tournament name normalization.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Latin letters with no canonical decomposition, folded by hand.
const TRANSLITERATIONS: &[(char, &str)] = &[
    ('ø', "o"),
    ('Ø', "O"),
    ('ł', "l"),
    ('Ł', "L"),
    ('đ', "d"),
    ('Đ', "D"),
    ('ß', "ss"),
    ('ẞ', "SS"),
    ('æ', "ae"),
    ('Æ', "AE"),
    ('œ', "oe"),
    ('Œ', "OE"),
    ('þ', "th"),
    ('Þ', "TH"),
    ('ð', "d"),
    ('Ð', "D"),
    ('ı', "i"),
];

/// Normalizes a name to its comparison form.
///
/// Diacritics are folded to base Latin letters, underscores become spaces,
/// whitespace runs collapse to one space, edges are trimmed and the result is
/// title cased. A missing or empty input yields an empty string.
///
/// ```
/// use tennis_normalization::normalize_name;
///
/// assert_eq!(normalize_name(Some("  rafael   NADAL ")), "Rafael Nadal");
/// assert_eq!(normalize_name(Some("Đoković")), "Dokovic");
/// assert_eq!(normalize_name(Some("roland_garros")), "Roland Garros");
/// assert_eq!(normalize_name(None), "");
/// ```
pub fn normalize_name(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let folded = fold_diacritics(value).replace('_', " ");
    let collapsed = folded.split_whitespace().collect::<Vec<_>>().join(" ");
    title_case(&collapsed)
}

fn fold_diacritics(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.nfkd().filter(|ch| !is_combining_mark(*ch)) {
        match TRANSLITERATIONS.iter().find(|(from, _)| *from == ch) {
            Some((_, to)) => out.push_str(to),
            None => out.push(ch),
        }
    }
    out
}

/// Upper-cases every letter that follows a non-letter, lower-cases the rest.
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_alphabetic = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
        } else {
            out.push(ch);
        }
        prev_alphabetic = ch.is_alphabetic();
    }
    out
}
