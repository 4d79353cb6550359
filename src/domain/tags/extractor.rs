//! Whole-word literal tag extraction.

use crate::domain::foundation::TagCounts;

use super::PhraseTable;

/// Finds all tagged phrases in a message and counts their tags.
///
/// The message is lower-cased once and each phrase (also lower-cased)
/// is matched as a literal, whole-word substring: an occurrence counts
/// only when bounded by non-word characters or the string edges, so
/// `"no"` never matches inside `"know"`. Multi-word phrases must appear
/// verbatim, internal spaces included; `"red eyes"` does not match
/// `"red-eyes"`. Occurrences are non-overlapping, and every occurrence
/// increments all of the phrase's tags by one.
///
/// Phrases are never interpreted as patterns, so metacharacter-heavy
/// phrases like `"c++"` match literally. This is a pure function: an
/// empty message yields empty counts, and identical inputs always
/// produce identical counts.
pub fn extract_tags(message: &str, table: &PhraseTable) -> TagCounts {
    let mut counts = TagCounts::new();
    if message.is_empty() {
        return counts;
    }

    let haystack = message.to_lowercase();
    for (phrase, tags) in table.entries() {
        let needle = phrase.to_lowercase();
        if needle.is_empty() {
            continue;
        }
        let occurrences = count_word_occurrences(&haystack, &needle);
        for tag in tags {
            counts.add(tag.clone(), occurrences);
        }
    }
    counts
}

/// Counts non-overlapping occurrences of `needle` bounded by word edges.
fn count_word_occurrences(haystack: &str, needle: &str) -> u32 {
    let mut count = 0;
    for (start, matched) in haystack.match_indices(needle) {
        let end = start + matched.len();
        let bounded_before = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let bounded_after = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));
        if bounded_before && bounded_after {
            count += 1;
        }
    }
    count
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::tags::TagSpec;
    use proptest::prelude::*;

    fn word() -> impl Strategy<Value = String> {
        "[a-z]{2,8}"
    }

    proptest! {
        #[test]
        fn extraction_is_pure(phrase in word(), filler in word()) {
            let table = PhraseTable::from_pairs([(phrase.as_str(), TagSpec::from("tag"))]).unwrap();
            let message = format!("{} {} {}", filler, phrase, filler);
            let first = extract_tags(&message, &table);
            let second = extract_tags(&message, &table);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn casing_of_message_is_irrelevant(phrase in word()) {
            let table = PhraseTable::from_pairs([(phrase.as_str(), TagSpec::from("tag"))]).unwrap();
            let lower = format!("so {} indeed", phrase);
            let upper = lower.to_uppercase();
            prop_assert_eq!(
                extract_tags(&lower, &table).count("tag"),
                extract_tags(&upper, &table).count("tag")
            );
        }

        #[test]
        fn phrase_embedded_in_longer_word_never_matches(phrase in word(), suffix in "[a-z]{1,4}") {
            // The only word in the message containing the phrase is
            // phrase+suffix, which never equals the phrase itself.
            prop_assume!(phrase != "zzzz");
            let table = PhraseTable::from_pairs([(phrase.as_str(), TagSpec::from("tag"))]).unwrap();
            let message = format!("zzzz {}{} zzzz", phrase, suffix);
            prop_assert_eq!(extract_tags(&message, &table).count("tag"), 0);
        }
    }
}
