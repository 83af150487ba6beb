use pdfmeta_common::Result;

/// One token of annotated text
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub is_alpha: bool,
    pub is_stop: bool,
}

/// Output of the linguistic annotator for one text blob
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotation {
    pub tokens: Vec<Token>,
    pub noun_chunks: Vec<String>,
    pub entities: Vec<String>,
}

/// Seam around the linguistic annotator
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> Result<Annotation>;
}

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being",
    "between", "both", "but", "by", "can", "could", "did", "do", "does",
    "down", "during", "each", "few", "for", "from", "further", "had",
    "has", "have", "having", "he", "her", "here", "hers", "him", "his",
    "how", "i", "if", "in", "into", "is", "it", "its", "just", "me",
    "more", "most", "my", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "our", "out", "over", "own", "same",
    "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "them", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "very", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "would", "you", "your",
];

/// Deterministic rule-based annotator.
///
/// Stand-in for a statistical NLP model: whitespace tokenization with
/// punctuation trimming, a fixed English stop-word list, lowercasing plus
/// plural stripping as the lemma, and capitalized-run heuristics for noun
/// chunks and named entities.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleAnnotator;

impl RuleAnnotator {
    pub fn new() -> Self {
        Self
    }
}

struct Word {
    core: String,
    sentence_start: bool,
}

fn split_words(text: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut at_sentence_start = true;

    for raw in text.split_whitespace() {
        let core: String = raw
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_string();

        if !core.is_empty() {
            words.push(Word {
                core,
                sentence_start: at_sentence_start,
            });
        }

        at_sentence_start = matches!(raw.chars().last(), Some('.') | Some('!') | Some('?'));
    }

    words
}

fn lemmatize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() >= 2 {
            return format!("{}y", stem);
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        if stem.ends_with("ss") || stem.ends_with('x') || stem.ends_with("ch") || stem.ends_with("sh") {
            return stem.to_string();
        }
    }
    if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") && !word.ends_with("is")
    {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

fn is_capitalized(core: &str) -> bool {
    core.chars().next().map(|c| c.is_uppercase()).unwrap_or(false)
}

impl Annotator for RuleAnnotator {
    fn annotate(&self, text: &str) -> Result<Annotation> {
        let words = split_words(text);

        let tokens: Vec<Token> = words
            .iter()
            .map(|w| {
                let lower = w.core.to_lowercase();
                Token {
                    is_alpha: w.core.chars().all(|c| c.is_alphabetic()),
                    is_stop: STOP_WORDS.contains(&lower.as_str()),
                    lemma: lemmatize(&lower),
                    text: w.core.clone(),
                }
            })
            .collect();

        // Noun chunks: runs of 2-4 consecutive alphabetic non-stop words,
        // broken at sentence boundaries.
        let mut noun_chunks = Vec::new();
        let mut run: Vec<&str> = Vec::new();
        for (word, token) in words.iter().zip(&tokens) {
            let chunkable = token.is_alpha && !token.is_stop;
            if word.sentence_start || !chunkable {
                if (2..=4).contains(&run.len()) {
                    noun_chunks.push(run.join(" "));
                }
                run.clear();
            }
            if chunkable {
                run.push(&word.core);
            }
        }
        if (2..=4).contains(&run.len()) {
            noun_chunks.push(run.join(" "));
        }

        // Entities: maximal runs of capitalized alphabetic words. A single
        // capitalized word at a sentence start is ordinary casing, not an
        // entity.
        let mut entities = Vec::new();
        let mut run: Vec<&str> = Vec::new();
        let mut run_at_sentence_start = false;
        for (word, token) in words.iter().zip(&tokens) {
            let entity_like = token.is_alpha && is_capitalized(&word.core);
            if word.sentence_start || !entity_like {
                if !run.is_empty() && (run.len() > 1 || !run_at_sentence_start) {
                    entities.push(run.join(" "));
                }
                run.clear();
            }
            if entity_like {
                if run.is_empty() {
                    run_at_sentence_start = word.sentence_start;
                }
                run.push(&word.core);
            }
        }
        if !run.is_empty() && (run.len() > 1 || !run_at_sentence_start) {
            entities.push(run.join(" "));
        }

        Ok(Annotation {
            tokens,
            noun_chunks,
            entities,
        })
    }
}
