pub mod reader;

pub use reader::{TextReader, TextSource};
