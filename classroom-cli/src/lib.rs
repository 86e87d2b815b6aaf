// All planning functionality is in classroom-core
// This CLI acts as the collaborator around the core library

// CLI-specific modules
pub mod ingest;
pub mod session;

// Re-export core types for convenience
pub use classroom_core::*;

// Re-export CLI utilities
pub use ingest::{assemble_document_text, load_sources, SourceFile, SourceKind};
pub use session::{Step, StudySession};
