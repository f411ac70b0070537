use strum::{Display, EnumIter};

/// The three mnemonic fields of a computation instruction, `dest=comp;jump`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Comp,
    Dest,
    Jump,
}

impl Field {
    /// Bit width of the field inside a computation word.
    pub fn width(&self) -> u32 {
        match self {
            Field::Comp => 7,
            Field::Dest => 3,
            Field::Jump => 3,
        }
    }

    /// Largest pattern the field can hold.
    pub fn mask(&self) -> u8 {
        ((1u16 << self.width()) - 1) as u8
    }
}

/// Pattern emitted for an absent `dest` or `jump`.
pub const NO_OP: u8 = 0b000;

#[test]
fn test_field() {
    assert_eq!(Field::Comp.to_string(), "comp");
    assert_eq!(Field::Jump.to_string(), "jump");
    assert_eq!(Field::Comp.mask(), 0x7F);
    assert_eq!(Field::Dest.mask(), 0x07);
}
