/// Page-count-scaled extractive summary.
///
/// Sentence candidates are split on the literal `". "` delimiter; this is
/// deliberately naive and not locale- or abbreviation-aware. If the text
/// has no more sentences than the target, it is returned verbatim,
/// irregular spacing included.
pub fn summarize(text: &str, page_count: u32) -> String {
    let sentences: Vec<&str> = text.split(". ").collect();
    let total = sentences.len();

    let target = match page_count {
        0..=10 => 5,
        11..=30 => 10,
        _ => std::cmp::min(15 + page_count as usize / 2, total),
    };

    if total > target {
        let mut summary = sentences[..target].join(". ");
        summary.push('.');
        summary
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence_count(summary: &str) -> usize {
        summary.split(". ").count()
    }

    #[test]
    fn test_short_document_caps_at_five_sentences() {
        let text = (1..=20)
            .map(|i| format!("Sentence number {}", i))
            .collect::<Vec<_>>()
            .join(". ");

        let summary = summarize(&text, 10);

        assert_eq!(sentence_count(&summary), 5);
        assert!(summary.starts_with("Sentence number 1. "));
        assert!(summary.ends_with("Sentence number 5."));
    }

    #[test]
    fn test_medium_document_caps_at_ten_sentences() {
        let text = (1..=20)
            .map(|i| format!("Sentence number {}", i))
            .collect::<Vec<_>>()
            .join(". ");

        assert_eq!(sentence_count(&summarize(&text, 11)), 10);
        assert_eq!(sentence_count(&summarize(&text, 30)), 10);
    }

    #[test]
    fn test_long_document_scales_with_page_count() {
        // 50 sentences at 45 pages: target = 15 + 45/2 = 37
        let text = (1..=50)
            .map(|i| format!("Sentence number {}", i))
            .collect::<Vec<_>>()
            .join(". ");

        let summary = summarize(&text, 45);

        assert_eq!(sentence_count(&summary), 37);
        let expected = (1..=37)
            .map(|i| format!("Sentence number {}", i))
            .collect::<Vec<_>>()
            .join(". ")
            + ".";
        assert_eq!(summary, expected);
    }

    #[test]
    fn test_long_document_target_capped_by_total_sentences() {
        let text = "One sentence here. Another one there. Third";

        // target = min(15 + 50, 3) = 3, not above total, so verbatim
        assert_eq!(summarize(text, 100), text);
    }

    #[test]
    fn test_passthrough_is_byte_exact() {
        // Irregular spacing preserved when under target
        let text = "A cat sat.  A cat  ran. A dog slept.";
        assert_eq!(summarize(text, 5), text);
    }

    #[test]
    fn test_three_sentences_five_pages_returned_unchanged() {
        let text = "A cat sat. A cat ran. A dog slept.";
        assert_eq!(summarize(text, 5), text);
    }

    #[test]
    fn test_empty_input_returned_unchanged() {
        assert_eq!(summarize("", 5), "");
        assert_eq!(summarize("", 45), "");
    }
}
