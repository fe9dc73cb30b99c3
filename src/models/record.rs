/// One raw row handed over by the table loader.
///
/// The loader guarantees both columns were present in the input; the
/// timestamp is kept as raw text and parsed by the summarizer, so a bad
/// value surfaces as a summarization failure, not a loading one.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub timestamp: String, // ⇔ input column "event.published"
    pub actor: String,     // ⇔ input column "actor.display_name"
}

impl RawRecord {
    pub fn new(timestamp: impl Into<String>, actor: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            actor: actor.into(),
        }
    }
}
