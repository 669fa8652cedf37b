pub mod score_normalizer;

pub use score_normalizer::{NormalizeOptions, ScoreNormalizer, RAW_SCORE_SCALE};
