use regex::Regex;
use std::sync::LazyLock;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("slug filter compiles"));
static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("slug separator compiles"));
static EDGE_HYPHENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-+|-+$").expect("slug edges compile"));

/// URL slug for an anime title: lowercase ASCII word characters joined by single
/// hyphens. Other characters are dropped without introducing a separator, so
/// `"Re:Zero"` becomes `"rezero"` while `"Spy x Family"` becomes `"spy-x-family"`.
pub fn create_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept = DISALLOWED.replace_all(lowered.trim(), "");
    let joined = SEPARATOR_RUNS.replace_all(&kept, "-");
    EDGE_HYPHENS.replace_all(&joined, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_title() {
        assert_eq!(create_slug("Fullmetal Alchemist: Brotherhood"), "fullmetal-alchemist-brotherhood");
    }

    #[test]
    fn test_punctuation_is_removed_without_separator() {
        assert_eq!(create_slug("Re:Zero"), "rezero");
        assert_eq!(create_slug("Steins;Gate 0"), "steinsgate-0");
    }

    #[test]
    fn test_runs_of_separators_collapse() {
        assert_eq!(create_slug("  Spy   x__Family -- Code: White "), "spy-x-family-code-white");
    }

    #[test]
    fn test_leading_and_trailing_hyphens_are_stripped() {
        assert_eq!(create_slug("--Naruto--"), "naruto");
        assert_eq!(create_slug("!Gintama!"), "gintama");
    }

    #[test]
    fn test_non_ascii_is_dropped() {
        assert_eq!(create_slug("Shingeki no Kyojin 進撃の巨人"), "shingeki-no-kyojin");
    }

    #[test]
    fn test_underscores_become_hyphens() {
        assert_eq!(create_slug("Kimi_no_Na_wa"), "kimi-no-na-wa");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(create_slug(""), "");
        assert_eq!(create_slug("   "), "");
        assert_eq!(create_slug("!!!"), "");
    }
}
