//! Static table of the languages the pipeline can translate between.

use std::sync::LazyLock;

use super::model::Language;

const SUPPORTED: [(&str, &str); 12] = [
    ("ar", "Arabic"),
    ("zh", "Chinese"),
    ("en", "English"),
    ("fr", "French"),
    ("de", "German"),
    ("hi", "Hindi"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("es", "Spanish"),
];

// Sorted once by display name; the names are ASCII so byte order matches any
// reasonable collation.
static LANGUAGES: LazyLock<Vec<Language>> = LazyLock::new(|| {
    let mut languages: Vec<Language> = SUPPORTED
        .iter()
        .map(|&(code, name)| Language { code, name })
        .collect();
    languages.sort_by(|a, b| a.name.cmp(b.name));
    languages
});

/// All supported languages, ordered by display name.
pub fn list() -> &'static [Language] {
    &LANGUAGES
}

pub fn is_supported(code: &str) -> bool {
    SUPPORTED.iter().any(|&(c, _)| c == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lists_exactly_twelve_languages() {
        assert_eq!(list().len(), 12);
    }

    #[test]
    fn codes_and_names_are_unique() {
        let codes: HashSet<_> = list().iter().map(|l| l.code).collect();
        let names: HashSet<_> = list().iter().map(|l| l.name).collect();
        assert_eq!(codes.len(), 12);
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn sorted_by_display_name() {
        let names: Vec<_> = list().iter().map(|l| l.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn stable_across_calls() {
        assert_eq!(list(), list());
    }

    #[test]
    fn membership_checks() {
        assert!(is_supported("es"));
        assert!(is_supported("zh"));
        assert!(!is_supported("tlh"));
        assert!(!is_supported(""));
    }
}
