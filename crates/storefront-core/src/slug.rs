//! Slug Derivation
//!
//! Turns a product display name into the stable id used as the cart key.

/// Derive a lowercase hyphenated slug from a display name.
///
/// Latin diacritics fold to their ASCII base letter, every run of other
/// characters collapses into one hyphen, and edge hyphens are stripped.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.trim().chars().flat_map(char::to_lowercase) {
        if is_combining_mark(ch) {
            continue;
        }
        let folded = if ch.is_ascii_alphanumeric() {
            None
        } else {
            match fold_diacritic(ch) {
                Some(ascii) => Some(ascii),
                None => {
                    pending_hyphen = true;
                    continue;
                }
            }
        };
        if pending_hyphen && !slug.is_empty() {
            slug.push('-');
        }
        pending_hyphen = false;
        match folded {
            Some(ascii) => slug.push_str(ascii),
            None => slug.push(ch),
        }
    }
    slug
}

/// Combining diacritical marks, e.g. the U+0307 dot `İ` lowercases into
fn is_combining_mark(ch: char) -> bool {
    matches!(ch, '\u{0300}'..='\u{036F}')
}

/// ASCII base for a lowercase Latin letter with a diacritic.
fn fold_diacritic(ch: char) -> Option<&'static str> {
    let ascii = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => "a",
        'æ' => "ae",
        'ç' | 'č' => "c",
        'è' | 'é' | 'ê' | 'ë' | 'ē' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'ī' => "i",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => "o",
        'œ' => "oe",
        'ß' => "ss",
        'š' => "s",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' => "u",
        'ý' | 'ÿ' => "y",
        'ž' => "z",
        _ => return None,
    };
    Some(ascii)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accents_and_spacing_share_a_slug() {
        assert_eq!(slugify("Café Helado"), "cafe-helado");
        assert_eq!(slugify("café   helado"), "cafe-helado");
        assert_eq!(slugify("  CAFÉ HELADO  "), "cafe-helado");
    }

    #[test]
    fn test_punctuation_runs_collapse() {
        assert_eq!(slugify("Jugo de Piña (1L)"), "jugo-de-pina-1l");
        assert_eq!(slugify("--Pan--integral--"), "pan-integral");
        assert_eq!(slugify("Straße"), "strasse");
    }

    #[test]
    fn test_combining_marks_are_dropped() {
        assert_eq!(slugify("İstanbul Kebab"), "istanbul-kebab");
        assert_eq!(slugify("Cafe\u{0301} Helado"), "cafe-helado");
    }

    #[test]
    fn test_no_alphanumerics_gives_empty_slug() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }
}
