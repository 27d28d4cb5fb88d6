//! Character-level classification for transliteration input.

/// Lowercase Lithuanian letters carrying a diacritic.
const LITHUANIAN_LETTERS: [char; 9] = ['ą', 'č', 'ę', 'ė', 'į', 'š', 'ų', 'ū', 'ž'];

/// Lithuanian diacritic letter, either case.
pub fn is_lithuanian_letter(c: char) -> bool {
    LITHUANIAN_LETTERS.contains(&fold_case(c))
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Letters the transliterator recognizes as part of its alphabet, whether or
/// not the active table maps them. Unmapped alphabet letters become Unknown
/// units; everything else outside the table is dropped.
pub fn is_rune_alphabet(c: char) -> bool {
    is_latin(c) || is_lithuanian_letter(c)
}

/// Lowercase a single character without changing the character count.
///
/// Characters whose lowercase form expands to several chars (e.g. 'İ')
/// are returned unchanged so that folded and original positions line up.
pub fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
