use std::collections::HashMap;

/// Lowercases a line, strips ASCII punctuation, and splits it on whitespace.
/// Every line tokenizes; a line that is empty after stripping just yields no
/// tokens.
pub fn tokenize_line(line: &str) -> Vec<String> {
    line.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Folds word tokens into a word -> occurrence count mapping.
pub fn count_words<I>(words: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = String>,
{
    let mut frequencies = HashMap::new();
    for word in words {
        *frequencies.entry(word).or_insert(0) += 1;
    }
    frequencies
}

/// Frequency entries ordered by descending count, ties broken by ascending
/// word, so reports are deterministic.
pub fn sorted_frequencies(frequencies: &HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = frequencies
        .iter()
        .map(|(word, count)| (word.clone(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_is_case_and_punctuation_insensitive() {
        let tokens = tokenize_line("Cat, cat CAT!");
        let frequencies = count_words(tokens);
        assert_eq!(frequencies.len(), 1);
        assert_eq!(frequencies["cat"], 3);
    }

    #[test]
    fn apostrophes_are_stripped_inside_words() {
        assert_eq!(tokenize_line("don't stop"), vec!["dont", "stop"]);
    }

    #[test]
    fn punctuation_only_line_yields_no_tokens() {
        assert!(tokenize_line("!!! ... ---").is_empty());
        assert!(tokenize_line("").is_empty());
    }

    #[test]
    fn sorting_is_by_descending_count_then_word() {
        let tokens = ["b", "a", "c", "a", "c", "b", "a"]
            .into_iter()
            .map(str::to_string);
        let entries = sorted_frequencies(&count_words(tokens));
        // a occurs three times; b and c tie at two and sort lexicographically
        assert_eq!(
            entries,
            vec![
                ("a".to_string(), 3),
                ("b".to_string(), 2),
                ("c".to_string(), 2),
            ]
        );
    }
}
