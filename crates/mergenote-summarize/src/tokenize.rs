use mergenote_model::WordFrequencyTable;

/// Lowercase Polish letters that count as word characters.
const POLISH_LETTERS: [char; 9] = ['ą', 'ć', 'ę', 'ł', 'ń', 'ó', 'ś', 'ż', 'ź'];

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || POLISH_LETTERS.contains(&c)
}

/// Lowercase the text and split it into word tokens.
///
/// Any character other than an ASCII letter, a digit, or one of the Polish
/// letters separates tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Count every token of the text.
pub fn frequency_table(text: &str) -> WordFrequencyTable {
    WordFrequencyTable::from_tokens(tokenize(text))
}
