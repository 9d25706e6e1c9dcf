use once_cell::sync::Lazy;
use regex::Regex;

static ORDINAL_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\.\s*").unwrap());

/// Drops the "N." numbering some sites put in front of dish names.
/// Names without the prefix pass through trimmed and otherwise untouched.
pub fn strip_ordinal(raw_name: &str) -> String {
    ORDINAL_PREFIX.replace(raw_name, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_ordinal() {
        assert_eq!(
            strip_ordinal("3. Roast pork with dumplings"),
            "Roast pork with dumplings"
        );
    }

    #[test]
    fn strips_ordinal_without_space() {
        assert_eq!(strip_ordinal("2.Beef goulash with bread"), "Beef goulash with bread");
    }

    #[test]
    fn leaves_unnumbered_name_unchanged() {
        assert_eq!(strip_ordinal("Soup of the day"), "Soup of the day");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(strip_ordinal("  1. Smažený sýr  "), "Smažený sýr");
    }

    #[test]
    fn keeps_numbers_inside_the_name() {
        assert_eq!(strip_ordinal("150 g Flank steak"), "150 g Flank steak");
    }
}
