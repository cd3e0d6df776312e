pub mod code_entry;
pub mod code_word;
pub mod resolver;
pub mod symbol;

pub use code_entry::CodeEntry;
pub use code_word::CodeWord;
pub use resolver::{build_codes, Resolver};
pub use symbol::CodeSymbol;
