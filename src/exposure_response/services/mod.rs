mod dedup_key_generator;
mod finding_extractor;

pub use dedup_key_generator::{DedupKeyGenerator, DEFAULT_WINDOW_MINUTES};
pub use finding_extractor::{
    FindingExtractor, ResourceOutcome, SkipReason, S3_BUCKET_RESOURCE_TYPE,
};
