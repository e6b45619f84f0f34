pub mod files;
pub mod parser;
pub mod progress;
