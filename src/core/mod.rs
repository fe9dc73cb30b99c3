pub mod summarizer;
pub mod timestamp;
