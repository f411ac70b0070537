use std::fmt;

use color_print::cformat;

use crate::field::{Field, NO_OP};
use crate::table::Tables;

/// Largest value an address instruction can load.
pub const ADDRESS_MAX: u16 = 0x7FFF;

const COMPUTE_PREFIX: u16 = 0b111 << 13;

/// A single encoded machine word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word {
    /// `0vvv vvvv vvvv vvvv`; the value must be `<= ADDRESS_MAX`, bit 15 is dropped
    Address(u16),
    /// `111a cccc ccdd djjj`
    Compute { comp: u8, dest: u8, jump: u8 },
}

// ----------------------------------------------------------------------------

impl Word {
    pub fn to_bin(&self) -> u16 {
        match *self {
            Word::Address(value) => value & ADDRESS_MAX,
            Word::Compute { comp, dest, jump } => {
                COMPUTE_PREFIX
                    | ((comp & Field::Comp.mask()) as u16) << 6
                    | ((dest & Field::Dest.mask()) as u16) << 3
                    | (jump & Field::Jump.mask()) as u16
            }
        }
    }

    pub fn from_bin(bin: u16) -> Word {
        if bin & 0x8000 == 0 {
            Word::Address(bin)
        } else {
            Word::Compute {
                comp: ((bin >> 6) as u8) & Field::Comp.mask(),
                dest: ((bin >> 3) as u8) & Field::Dest.mask(),
                jump: (bin as u8) & Field::Jump.mask(),
            }
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016b}", self.to_bin())
    }
}

// ----------------------------------------------------------------------------

impl Word {
    /// Render the word back to assembly text. Patterns missing from `tables`
    /// are shown as `?`.
    pub fn disasm(&self, tables: &Tables) -> String {
        match *self {
            Word::Address(value) => format!("@{}", value),
            Word::Compute { comp, dest, jump } => {
                let mut text = String::new();
                if dest != NO_OP {
                    text.push_str(tables.decode(Field::Dest, dest).unwrap_or("?"));
                    text.push('=');
                }
                text.push_str(tables.decode(Field::Comp, comp).unwrap_or("?"));
                if jump != NO_OP {
                    text.push(';');
                    text.push_str(tables.decode(Field::Jump, jump).unwrap_or("?"));
                }
                text
            }
        }
    }

    pub fn cformat(&self, tables: &Tables) -> String {
        match self {
            Word::Address(_) => cformat!("<y>{}</>", self.disasm(tables)),
            Word::Compute { .. } => cformat!("<c>{}</>", self.disasm(tables)),
        }
    }
}
