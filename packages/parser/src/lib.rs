pub mod ast;
pub mod error;
pub mod parser;
pub mod serializer;
pub mod tokenizer;

#[cfg(test)]
mod tests_roundtrip;

pub use ast::{find_block, new_document, next_free_block_id, BlockId, Document, LevelObject};
pub use error::{FormatError, ParseResult, ParseWarning};
pub use parser::{parse, parse_with_warnings, ParseOutput, Parser};
pub use serializer::{normalize_info_text, normalize_title, serialize, Serializer};
pub use tokenizer::{lex_line, tokenize, Token};

#[cfg(feature = "pretty-errors")]
pub use error::format_error;
