pub mod ellipsize;
pub mod tokenize;

pub use ellipsize::ellipsize;
pub use tokenize::{TokenizeError, tokenize_line};
