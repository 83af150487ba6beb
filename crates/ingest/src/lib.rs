pub mod annotate;
pub mod extract;
pub mod keywords;
pub mod pipeline;
pub mod scanner;
pub mod summarize;

pub use annotate::{Annotation, Annotator, RuleAnnotator, Token};
pub use extract::{PdfExtractor, TextExtractor};
pub use keywords::KeywordExtractor;
pub use pipeline::IngestPipeline;
pub use scanner::scan_folder;
pub use summarize::summarize;
