mod comment;
mod constants;
mod document;
mod engine;
mod extractor;
mod lexer;
mod scanner;
mod table;

pub use document::{assemble, Document};
pub use scanner::SourceScanner;

// Export the main engine
pub use engine::{Engine, PreviewFormat};
