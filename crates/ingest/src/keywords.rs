use crate::annotate::Annotator;
use pdfmeta_common::Result;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

/// Page-count-scaled frequency-ranked keyword extraction.
///
/// Candidates come from three annotator outputs, in order: lemmas of
/// alphabetic non-stop tokens longer than two characters, noun-chunk spans
/// verbatim, and named-entity spans verbatim. Frequency is counted over the
/// concatenation of all three lists; ties rank by first occurrence in that
/// combined sequence.
#[derive(Clone)]
pub struct KeywordExtractor {
    annotator: Arc<dyn Annotator>,
}

impl KeywordExtractor {
    pub fn new(annotator: Arc<dyn Annotator>) -> Self {
        Self { annotator }
    }

    pub fn extract(&self, text: &str, page_count: u32) -> Result<Vec<String>> {
        let annotation = self.annotator.annotate(text)?;

        let mut candidates: Vec<String> = annotation
            .tokens
            .iter()
            .filter(|t| t.is_alpha && !t.is_stop && t.text.chars().count() > 2)
            .map(|t| t.lemma.clone())
            .collect();
        candidates.extend(annotation.noun_chunks);
        candidates.extend(annotation.entities);

        // Frequency table in first-seen order. A plain map iteration would
        // not give a deterministic tie order, so the sort key is explicit:
        // (descending frequency, first-seen index).
        let mut first_seen: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<(String, usize)> = Vec::new();
        for candidate in candidates {
            match first_seen.get(&candidate) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    first_seen.insert(candidate.clone(), counts.len());
                    counts.push((candidate, 1));
                }
            }
        }

        let mut ranked: Vec<(usize, (String, usize))> = counts.into_iter().enumerate().collect();
        ranked.sort_by_key(|&(first_seen_idx, (_, freq))| (Reverse(freq), first_seen_idx));

        let target = match page_count {
            0..=10 => 10,
            11..=30 => 20,
            _ => 40,
        };

        Ok(ranked
            .into_iter()
            .take(target)
            .map(|(_, (keyword, _))| keyword)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{Annotation, Token};
    use pdfmeta_common::Result;

    /// Scripted annotator so ranking behavior is tested exactly
    struct FakeAnnotator {
        annotation: Annotation,
    }

    impl Annotator for FakeAnnotator {
        fn annotate(&self, _text: &str) -> Result<Annotation> {
            Ok(self.annotation.clone())
        }
    }

    fn token(text: &str) -> Token {
        Token {
            text: text.to_string(),
            lemma: text.to_lowercase(),
            is_alpha: text.chars().all(|c| c.is_alphabetic()),
            is_stop: false,
        }
    }

    fn stop_token(text: &str) -> Token {
        Token {
            is_stop: true,
            ..token(text)
        }
    }

    fn extractor(annotation: Annotation) -> KeywordExtractor {
        KeywordExtractor::new(Arc::new(FakeAnnotator { annotation }))
    }

    #[test]
    fn test_candidate_filters() {
        let annotation = Annotation {
            tokens: vec![
                token("engine"),
                stop_token("because"), // stop word: excluded
                token("ox"),           // too short: excluded
                token("x86"),          // not alphabetic: excluded
                token("engine"),
            ],
            noun_chunks: vec![],
            entities: vec![],
        };

        let keywords = extractor(annotation).extract("", 5).unwrap();
        assert_eq!(keywords, vec!["engine".to_string()]);
    }

    #[test]
    fn test_frequency_descending_with_chunk_and_entity_counts() {
        let annotation = Annotation {
            tokens: vec![token("pump"), token("valve"), token("valve")],
            noun_chunks: vec!["centrifugal pump".to_string()],
            entities: vec![
                "centrifugal pump".to_string(),
                "centrifugal pump".to_string(),
            ],
        };

        let keywords = extractor(annotation).extract("", 5).unwrap();

        // "centrifugal pump" occurs once in the chunk list and twice in the
        // entity list: counted three times total.
        assert_eq!(
            keywords,
            vec![
                "centrifugal pump".to_string(),
                "valve".to_string(),
                "pump".to_string(),
            ]
        );
    }

    #[test]
    fn test_ties_preserve_first_occurrence_order() {
        let annotation = Annotation {
            tokens: vec![
                token("zebra"),
                token("apple"),
                token("mango"),
                token("zebra"),
                token("apple"),
                token("mango"),
            ],
            noun_chunks: vec![],
            entities: vec![],
        };

        let keywords = extractor(annotation).extract("", 5).unwrap();
        assert_eq!(
            keywords,
            vec!["zebra".to_string(), "apple".to_string(), "mango".to_string()]
        );
    }

    #[test]
    fn test_tier_caps() {
        let tokens: Vec<Token> = (0..60u8)
            .map(|i| {
                let a = (b'a' + i / 26) as char;
                let b = (b'a' + i % 26) as char;
                token(&format!("kw{}{}", a, b))
            })
            .collect();
        let annotation = Annotation {
            tokens,
            noun_chunks: vec![],
            entities: vec![],
        };
        let extractor = extractor(annotation);

        assert_eq!(extractor.extract("", 5).unwrap().len(), 10);
        assert_eq!(extractor.extract("", 10).unwrap().len(), 10);
        assert_eq!(extractor.extract("", 11).unwrap().len(), 20);
        assert_eq!(extractor.extract("", 30).unwrap().len(), 20);
        assert_eq!(extractor.extract("", 31).unwrap().len(), 40);
    }

    #[test]
    fn test_cap_bounded_by_distinct_candidates() {
        let annotation = Annotation {
            tokens: vec![token("alpha"), token("beta"), token("alpha")],
            noun_chunks: vec![],
            entities: vec![],
        };

        let keywords = extractor(annotation).extract("", 50).unwrap();
        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords, vec!["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn test_duplicates_removed_by_construction() {
        let annotation = Annotation {
            tokens: vec![token("motor"), token("motor"), token("motor")],
            noun_chunks: vec!["motor".to_string()],
            entities: vec![],
        };

        let keywords = extractor(annotation).extract("", 5).unwrap();
        assert_eq!(keywords, vec!["motor".to_string()]);
    }
}
