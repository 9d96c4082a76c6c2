//! Word embedding storage, caching and vector math.

pub mod cache;
pub mod import;
pub mod math;
pub mod store;

pub use cache::VectorCache;
pub use import::{ImportReport, VectorImporter};
pub use math::{cosine_similarity, is_zero_vector};
pub use store::{InMemoryVectorStore, SqliteVectorStore, VectorStore};
