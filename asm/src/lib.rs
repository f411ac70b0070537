//! # Hack Assembler
//!
//! Translates Hack assembly into 16-character binary words, one per
//! instruction, in program order.
//!
//! ```
//! use hack_arch::Tables;
//!
//! let words = hackasm::assemble("@21\nD=D+A\n", &Tables::hack())?;
//! assert_eq!(words, vec!["0000000000010101", "1110000010010000"]);
//! # Ok::<(), hackasm::error::Error>(())
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod ident;
pub mod label;
pub mod parser;
pub mod util;
pub mod variable;

use hack_arch::{Tables, Word};

use error::Error;
use ident::Idents;
use parser::{Inst, Line};

/// Result of a successful run, kept for listings.
#[derive(Debug, Clone)]
pub struct Assembly {
    /// Label-free instructions; position is the instruction address
    pub insts: Vec<Line<Inst>>,
    /// `words[i]` encodes `insts[i]`
    pub words: Vec<Word>,
    pub idents: Idents,
}

impl Assembly {
    /// Output words as `0`/`1` strings.
    pub fn to_strings(&self) -> Vec<String> {
        self.words.iter().map(Word::to_string).collect()
    }

    /// Output file contents: one word per line, no trailing newline.
    pub fn to_text(&self) -> String {
        self.to_strings().join("\n")
    }
}

/// Parse, resolve labels, allocate variables and encode.
pub fn assemble_program(source: &str, tables: &Tables) -> Result<Assembly, Error> {
    let lines = parser::parse(source)?;
    let idents = Idents::with_fixed(tables);
    let (idents, insts) = label::resolve(idents, lines)?;
    let (idents, insts) = variable::resolve(idents, insts)?;
    let words = codegen::generate(&insts, &idents, tables)?;
    Ok(Assembly {
        insts,
        words,
        idents,
    })
}

/// Assemble `source` into one binary string per instruction.
pub fn assemble(source: &str, tables: &Tables) -> Result<Vec<String>, Error> {
    assemble_program(source, tables).map(|asm| asm.to_strings())
}
