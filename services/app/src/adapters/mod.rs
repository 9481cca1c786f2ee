pub mod generation_llm;
pub mod kv_db;

pub use generation_llm::OpenAiGenerationAdapter;
pub use kv_db::SqliteKvAdapter;
