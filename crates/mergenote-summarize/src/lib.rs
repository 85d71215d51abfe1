use mergenote_model::{RetentionPercent, Sentence, Summary, WordFrequencyTable};

pub mod sentences;
pub mod tokenize;

pub use sentences::split_sentences;
pub use tokenize::{frequency_table, tokenize};

/// Produce an extractive summary of cleaned text.
///
/// Sentences are scored by the summed document-wide frequency of their words.
/// The highest-scoring `percent` of them (at least one) are kept and returned
/// in their original order, joined by single spaces.
///
/// Returns `None` for empty text.
pub fn summarize(text: &str, percent: RetentionPercent) -> Option<Summary> {
    if text.is_empty() {
        return None;
    }

    let freq = frequency_table(text);
    let scored = score_sentences(text, &freq);
    let total_sentences = scored.len();
    let keep_count = percent.keep_count(total_sentences);
    let sentences = select_top(scored, keep_count);

    let text = sentences
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    tracing::debug!(
        total = total_sentences,
        kept = sentences.len(),
        vocabulary = freq.len(),
        percent = percent.value(),
        "Summarized"
    );

    Some(Summary {
        percent,
        total_sentences,
        keep_count,
        sentences,
        text,
    })
}

/// Split text into sentences and score each one against the frequency table.
pub fn score_sentences(text: &str, freq: &WordFrequencyTable) -> Vec<Sentence> {
    split_sentences(text)
        .into_iter()
        .enumerate()
        .map(|(index, unit)| Sentence {
            index,
            text: unit.trim().to_string(),
            score: tokenize(unit).iter().map(|w| freq.get(w)).sum(),
        })
        .collect()
}

/// Keep the `count` highest-scoring sentences, back in document order.
///
/// Ties keep their original relative order.
pub fn select_top(mut sentences: Vec<Sentence>, count: usize) -> Vec<Sentence> {
    sentences.sort_by(|a, b| b.score.cmp(&a.score));
    sentences.truncate(count);
    sentences.sort_by_key(|s| s.index);
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent(p: f64) -> RetentionPercent {
        RetentionPercent::new(p)
    }

    #[test]
    fn test_empty_text_has_no_summary() {
        assert_eq!(summarize("", percent(20.0)), None);
    }

    #[test]
    fn test_equal_scores_keep_first_in_order() {
        let text = "Alfa. Bravo. Charlie. Delta. Echo. Foxtrot. Golf. Hotel. India. Juliet.";
        let summary = summarize(text, percent(20.0)).unwrap();

        assert_eq!(summary.total_sentences, 10);
        assert_eq!(summary.keep_count, 2);
        assert_eq!(summary.text, "Alfa. Bravo.");
        assert_eq!(
            summary.sentences.iter().map(|s| s.index).collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    #[test]
    fn test_selection_restores_document_order() {
        let text = "Rare words here.\nKot kot kot.\nNothing.\nKot i pies.";
        let summary = summarize(text, percent(50.0)).unwrap();

        // kot = 4; line 2 scores 12, line 4 scores 4 + 1 + 1
        assert_eq!(summary.keep_count, 2);
        assert_eq!(summary.text, "Kot kot kot. Kot i pies.");
    }

    #[test]
    fn test_keep_count_never_zero() {
        let summary = summarize("Only one sentence here", percent(5.0)).unwrap();
        assert_eq!(summary.total_sentences, 1);
        assert_eq!(summary.keep_count, 1);
        assert_eq!(summary.text, "Only one sentence here");
    }

    #[test]
    fn test_score_sentences() {
        let text = "A b. B b!";
        let freq = frequency_table(text);
        let scored = score_sentences(text, &freq);

        assert_eq!(
            scored,
            vec![
                Sentence { index: 0, text: "A b.".into(), score: 1 + 3 },
                Sentence { index: 1, text: "B b!".into(), score: 3 + 3 },
            ]
        );
    }

    #[test]
    fn test_whitespace_unit_counts_toward_total() {
        let text = "Jeden. ";
        let summary = summarize(text, percent(90.0)).unwrap();
        assert_eq!(summary.total_sentences, 2);
        assert_eq!(summary.keep_count, 2);
        assert_eq!(summary.sentences[1].text, "");
        assert_eq!(summary.sentences[1].score, 0);
    }

    #[test]
    fn test_select_top_is_stable() {
        let sentences = vec![
            Sentence { index: 0, text: "a".into(), score: 1 },
            Sentence { index: 1, text: "b".into(), score: 5 },
            Sentence { index: 2, text: "c".into(), score: 1 },
            Sentence { index: 3, text: "d".into(), score: 5 },
        ];
        let picked: Vec<usize> = select_top(sentences, 3).iter().map(|s| s.index).collect();
        assert_eq!(picked, vec![0, 1, 3]);
    }

    #[test]
    fn test_only_terminators_summarized_whole() {
        let summary = summarize("?!", percent(20.0)).unwrap();
        assert_eq!(summary.total_sentences, 1);
        assert_eq!(summary.text, "?!");
    }
}
