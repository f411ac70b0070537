use bimap::BiMap;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::field::{Field, NO_OP};

// ----------------------------------------------------------------------------
// Built-in Hack tables

pub const SCREEN: u16 = 0x4000;
pub const KBD: u16 = 0x6000;

static HACK_SYMBOLS: Lazy<IndexMap<String, u16>> = Lazy::new(|| {
    let mut symbols = IndexMap::new();
    for (name, addr) in [("SP", 0), ("LCL", 1), ("ARG", 2), ("THIS", 3), ("THAT", 4)] {
        symbols.insert(name.to_string(), addr);
    }
    for r in 0..16 {
        symbols.insert(format!("R{}", r), r);
    }
    symbols.insert("SCREEN".to_string(), SCREEN);
    symbols.insert("KBD".to_string(), KBD);
    symbols
});

// a-bit followed by c1..c6
const HACK_COMP: [(&str, u8); 28] = [
    ("0", 0b0101010),
    ("1", 0b0111111),
    ("-1", 0b0111010),
    ("D", 0b0001100),
    ("A", 0b0110000),
    ("!D", 0b0001101),
    ("!A", 0b0110001),
    ("-D", 0b0001111),
    ("-A", 0b0110011),
    ("D+1", 0b0011111),
    ("A+1", 0b0110111),
    ("D-1", 0b0001110),
    ("A-1", 0b0110010),
    ("D+A", 0b0000010),
    ("D-A", 0b0010011),
    ("A-D", 0b0000111),
    ("D&A", 0b0000000),
    ("D|A", 0b0010101),
    ("M", 0b1110000),
    ("!M", 0b1110001),
    ("-M", 0b1110011),
    ("M+1", 0b1110111),
    ("M-1", 0b1110010),
    ("D+M", 0b1000010),
    ("D-M", 0b1010011),
    ("M-D", 0b1000111),
    ("D&M", 0b1000000),
    ("D|M", 0b1010101),
];

const HACK_DEST: [(&str, u8); 7] = [
    ("M", 0b001),
    ("D", 0b010),
    ("MD", 0b011),
    ("A", 0b100),
    ("AM", 0b101),
    ("AD", 0b110),
    ("AMD", 0b111),
];

const HACK_JUMP: [(&str, u8); 7] = [
    ("JGT", 0b001),
    ("JEQ", 0b010),
    ("JGE", 0b011),
    ("JLT", 0b100),
    ("JNE", 0b101),
    ("JLE", 0b110),
    ("JMP", 0b111),
];

// ----------------------------------------------------------------------------
// Errors

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("Bad {field} pattern `{pattern}` for `{mnemonic}`: expected {width} binary digits")]
    BadPattern {
        field: Field,
        mnemonic: String,
        pattern: String,
        width: u32,
    },

    #[error("{field} pattern `{pattern}` is mapped by both `{first}` and `{second}`")]
    DuplicatePattern {
        field: Field,
        pattern: String,
        first: String,
        second: String,
    },

    #[error("{field} mnemonic `{mnemonic}` uses the reserved no-op pattern")]
    ReservedPattern { field: Field, mnemonic: String },
}

// ----------------------------------------------------------------------------
// Tables

/// Predefined symbols and the mnemonic translation tables consumed by the assembler.
///
/// Each mnemonic table is a bijection so that the same data serves encoding
/// and listing: one pattern has exactly one mnemonic, so aliases such as
/// `A+D` for `D+A` cannot be declared. Deserializing accepts a partial document; omitted sections keep
/// the built-in Hack contents.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawTables")]
pub struct Tables {
    symbols: IndexMap<String, u16>,
    comp: BiMap<String, u8>,
    dest: BiMap<String, u8>,
    jump: BiMap<String, u8>,
}

impl Tables {
    /// The standard Hack platform tables.
    pub fn hack() -> Self {
        fn bimap(entries: &[(&str, u8)]) -> BiMap<String, u8> {
            entries
                .iter()
                .map(|(mnemonic, bits)| (mnemonic.to_string(), *bits))
                .collect()
        }
        Tables {
            symbols: HACK_SYMBOLS.clone(),
            comp: bimap(&HACK_COMP),
            dest: bimap(&HACK_DEST),
            jump: bimap(&HACK_JUMP),
        }
    }

    /// Predefined symbols in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = (&str, u16)> + '_ {
        self.symbols.iter().map(|(name, addr)| (name.as_str(), *addr))
    }

    pub fn symbol(&self, name: &str) -> Option<u16> {
        self.symbols.get(name).copied()
    }

    pub fn encode(&self, field: Field, mnemonic: &str) -> Option<u8> {
        self.table(field).get_by_left(mnemonic).copied()
    }

    pub fn decode(&self, field: Field, bits: u8) -> Option<&str> {
        self.table(field).get_by_right(&bits).map(String::as_str)
    }

    fn table(&self, field: Field) -> &BiMap<String, u8> {
        match field {
            Field::Comp => &self.comp,
            Field::Dest => &self.dest,
            Field::Jump => &self.jump,
        }
    }
}

impl Default for Tables {
    fn default() -> Self {
        Tables::hack()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawTables {
    symbols: Option<IndexMap<String, u16>>,
    comp: Option<IndexMap<String, String>>,
    dest: Option<IndexMap<String, String>>,
    jump: Option<IndexMap<String, String>>,
}

impl TryFrom<RawTables> for Tables {
    type Error = TableError;

    fn try_from(raw: RawTables) -> Result<Self, Self::Error> {
        let hack = Tables::hack();
        Ok(Tables {
            symbols: raw.symbols.unwrap_or(hack.symbols),
            comp: match raw.comp {
                Some(entries) => build(Field::Comp, entries)?,
                None => hack.comp,
            },
            dest: match raw.dest {
                Some(entries) => build(Field::Dest, entries)?,
                None => hack.dest,
            },
            jump: match raw.jump {
                Some(entries) => build(Field::Jump, entries)?,
                None => hack.jump,
            },
        })
    }
}

fn build(field: Field, entries: IndexMap<String, String>) -> Result<BiMap<String, u8>, TableError> {
    let mut table: BiMap<String, u8> = BiMap::new();
    for (mnemonic, pattern) in entries {
        let bits = parse_pattern(field, &mnemonic, &pattern)?;
        // dest/jump 000 is what an omitted field encodes to
        if field != Field::Comp && bits == NO_OP {
            return Err(TableError::ReservedPattern { field, mnemonic });
        }
        if let Some(first) = table.get_by_right(&bits) {
            return Err(TableError::DuplicatePattern {
                field,
                pattern: format!("{:0width$b}", bits, width = field.width() as usize),
                first: first.clone(),
                second: mnemonic,
            });
        }
        table.insert(mnemonic, bits);
    }
    Ok(table)
}

fn parse_pattern(field: Field, mnemonic: &str, pattern: &str) -> Result<u8, TableError> {
    let bad = || TableError::BadPattern {
        field,
        mnemonic: mnemonic.to_string(),
        pattern: pattern.to_string(),
        width: field.width(),
    };
    if pattern.len() != field.width() as usize || !pattern.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(bad());
    }
    u8::from_str_radix(pattern, 2).map_err(|_| bad())
}
