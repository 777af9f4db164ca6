pub mod fs;
pub mod loader;
pub mod reader;

pub use fs::{normalize_path, resolve_kb_path, DEFAULT_KB_PATH};
pub use loader::{load_knowledge_base, load_knowledge_base_with, LoadReport};
pub use reader::{convenience, KnowledgeBaseReader, ReaderConfig, ANSWER_COLUMN, QUESTION_COLUMN};
