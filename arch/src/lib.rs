//! Architecture description of the Hack 16-bit computer: the predefined
//! symbols, the `comp`/`dest`/`jump` mnemonic tables and the machine word format.

pub mod field;
pub mod table;
pub mod word;

pub use field::Field;
pub use table::{TableError, Tables};
pub use word::Word;
