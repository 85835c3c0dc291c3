mod datamuse;
mod enrich;

pub use datamuse::{DatamuseClient, LookupError, Relation, RelatedWords};
pub use enrich::{EnrichError, EnrichReport, Enricher, WordInfo, join_or_na};
