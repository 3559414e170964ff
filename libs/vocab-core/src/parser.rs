//! Parser for pasted bilingual vocabulary lists.
//!
//! # Format
//! One entry per line, Latin-script term first, Cyrillic translation after it:
//! ```text
//! bonjour  здравствуйте
//! Ça va ? Как дела?
//! avoir 20 ans    быть 20 лет
//! ```
//! Lines that do not split into a Latin term and a Cyrillic translation are
//! dropped without error.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::Candidate;

/// Latin-eligible term, at least one whitespace, then a translation that starts
/// with a Cyrillic-eligible character. The term group is greedy.
static LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\p{Latin}\d\s'’!?-]+)\s([\p{Cyrillic}\d\s.,;!?()-]+.*)$")
        .expect("line pattern is valid")
});

static LATIN_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Latin}").expect("latin pattern is valid"));

static CYRILLIC_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Cyrillic}").expect("cyrillic pattern is valid"));

/// Parse pasted text into term/translation candidates, in input order.
pub fn parse(text: &str) -> Vec<Candidate> {
    candidates(text).collect()
}

/// Lazily yield the candidates of `text`, skipping lines that do not match.
pub fn candidates(text: &str) -> impl Iterator<Item = Candidate> + '_ {
    non_empty_lines(text).filter_map(|(_, line)| parse_line(line))
}

/// A non-empty line that produced no candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based line number in the submitted text.
    pub line_number: usize,
    pub content: String,
}

/// Parser output together with the lines it dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    pub candidates: Vec<Candidate>,
    pub skipped: Vec<SkippedLine>,
}

/// Same as [`parse`], but also reports every non-empty line that was dropped.
pub fn parse_with_report(text: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for (line_number, line) in non_empty_lines(text) {
        match parse_line(line) {
            Some(candidate) => report.candidates.push(candidate),
            None => report.skipped.push(SkippedLine {
                line_number,
                content: line.to_string(),
            }),
        }
    }

    report
}

/// Split a single trimmed line into term and translation.
pub fn parse_line(line: &str) -> Option<Candidate> {
    let caps = LINE.captures(line)?;
    let term = caps.get(1)?.as_str().trim();
    let translation = caps.get(2)?.as_str().trim();

    // Both scripts must actually be present, not only digits and punctuation.
    if !LATIN_LETTER.is_match(term) || !CYRILLIC_LETTER.is_match(translation) {
        return None;
    }

    Some(Candidate::new(term, translation))
}

fn non_empty_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_two_word_term() {
        let cards = parse("Hello world Привет мир!");
        assert_eq!(cards, vec![Candidate::new("Hello world", "Привет мир!")]);
    }

    #[test]
    fn parse_tab_separated_line() {
        let cards = parse("Bonjour\tПривет");
        assert_eq!(cards, vec![Candidate::new("Bonjour", "Привет")]);
    }

    #[test]
    fn parse_preserves_line_order() {
        let input = "un один\n\nmerci спасибо\nnot a pair\n  au revoir   до свидания  \n";
        let cards = parse(input);
        assert_eq!(
            cards,
            vec![
                Candidate::new("un", "один"),
                Candidate::new("merci", "спасибо"),
                Candidate::new("au revoir", "до свидания"),
            ]
        );
    }

    #[test]
    fn parse_handles_crlf_line_endings() {
        let cards = parse("oui да\r\nnon нет\r\n");
        assert_eq!(
            cards,
            vec![Candidate::new("oui", "да"), Candidate::new("non", "нет")]
        );
    }

    #[test]
    fn drop_lines_with_one_script() {
        assert!(parse("only latin words here").is_empty());
        assert!(parse("только кириллица").is_empty());
        assert!(parse("Hello 123").is_empty());
        assert!(parse("2024 год").is_empty());
    }

    #[test]
    fn drop_line_with_translation_first() {
        assert!(parse("Привет Hello").is_empty());
    }

    #[test]
    fn term_keeps_apostrophes_and_punctuation() {
        let cards = parse("What's up? Как дела?\nl’ami - друг\nc'est-à-dire то есть");
        assert_eq!(
            cards,
            vec![
                Candidate::new("What's up?", "Как дела?"),
                Candidate::new("l’ami -", "друг"),
                Candidate::new("c'est-à-dire", "то есть"),
            ]
        );
    }

    #[test]
    fn digits_stay_with_the_term() {
        let cards = parse("avoir 20 ans быть 20 лет");
        assert_eq!(cards, vec![Candidate::new("avoir 20 ans", "быть 20 лет")]);
    }

    #[test]
    fn translation_may_start_with_punctuation() {
        let cards = parse("salut (informal) привет");
        assert_eq!(cards, vec![Candidate::new("salut", "(informal) привет")]);
    }

    #[test]
    fn translation_keeps_listed_punctuation() {
        let cards = parse("avion самолёт; (транспорт), воздух.");
        assert_eq!(
            cards,
            vec![Candidate::new("avion", "самолёт; (транспорт), воздух.")]
        );
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse("").is_empty());
        assert!(parse("\n   \n\t\n").is_empty());
    }

    #[test]
    fn report_lists_skipped_lines() {
        let report = parse_with_report("chien собака\n\nbroken line\nchat кошка\nтолько");
        assert_eq!(
            report.candidates,
            vec![
                Candidate::new("chien", "собака"),
                Candidate::new("chat", "кошка"),
            ]
        );
        assert_eq!(
            report.skipped,
            vec![
                SkippedLine {
                    line_number: 3,
                    content: "broken line".to_string(),
                },
                SkippedLine {
                    line_number: 5,
                    content: "только".to_string(),
                },
            ]
        );
    }

    #[test]
    fn report_and_parse_agree() {
        let input = "a а\nb\nc в\n";
        assert_eq!(parse_with_report(input).candidates, parse(input));
    }
}
