use hack_arch::{field::NO_OP, word::ADDRESS_MAX, Field, Tables, Word};

use crate::error::Error;
use crate::ident::Idents;
use crate::parser::{Compute, Inst, Line, Operand};

/// Encode the label-free instruction stream, one word per instruction.
pub fn generate(insts: &[Line<Inst>], idents: &Idents, tables: &Tables) -> Result<Vec<Word>, Error> {
    insts
        .iter()
        .map(|line| encode(line, idents, tables))
        .collect()
}

pub fn encode(line: &Line<Inst>, idents: &Idents, tables: &Tables) -> Result<Word, Error> {
    match &line.body {
        Inst::Load(operand) => {
            let value = match operand {
                Operand::Literal(v) => *v,
                Operand::Ident(name) => {
                    idents.get_val(name).ok_or_else(|| Error::UndefinedSymbol {
                        name: name.clone(),
                        line: line.idx,
                    })?
                }
            };
            if value > ADDRESS_MAX {
                let operand = match operand {
                    Operand::Literal(v) => v.to_string(),
                    Operand::Ident(name) => format!("{} ({})", name, value),
                };
                return Err(Error::AddressOverflow {
                    operand,
                    line: line.idx,
                });
            }
            Ok(Word::Address(value))
        }
        Inst::Compute(Compute { dest, comp, jump }) => {
            let lookup = |field: Field, mnemonic: Option<&String>| match mnemonic {
                None => Ok(NO_OP),
                Some(m) => tables
                    .encode(field, m)
                    .ok_or_else(|| Error::UnresolvedMnemonic {
                        field,
                        mnemonic: m.clone(),
                        line: line.idx,
                    }),
            };
            Ok(Word::Compute {
                comp: lookup(Field::Comp, Some(comp))?,
                dest: lookup(Field::Dest, dest.as_ref())?,
                jump: lookup(Field::Jump, jump.as_ref())?,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::Ident;

    fn line(body: Inst) -> Line<Inst> {
        Line { idx: 7, body }
    }

    fn compute(dest: Option<&str>, comp: &str, jump: Option<&str>) -> Inst {
        Inst::Compute(Compute {
            dest: dest.map(str::to_string),
            comp: comp.to_string(),
            jump: jump.map(str::to_string),
        })
    }

    fn encode_str(inst: Inst, idents: &Idents) -> Result<String, Error> {
        encode(&line(inst), idents, &Tables::hack()).map(|w| w.to_string())
    }

    #[test]
    fn test_load() {
        let idents = Idents::with_fixed(&Tables::hack());
        assert_eq!(
            encode_str(Inst::Load(Operand::Literal(21)), &idents).unwrap(),
            "0000000000010101"
        );
        assert_eq!(
            encode_str(Inst::Load(Operand::Ident("SCREEN".to_string())), &idents).unwrap(),
            "0100000000000000"
        );
    }

    #[test]
    fn test_compute() {
        let idents = Idents::new();
        let tables = Tables::hack();
        let expect = format!(
            "111{:07b}{:03b}{:03b}",
            tables.encode(Field::Comp, "D+A").unwrap(),
            tables.encode(Field::Dest, "D").unwrap(),
            NO_OP
        );
        assert_eq!(encode_str(compute(Some("D"), "D+A", None), &idents).unwrap(), expect);
        assert_eq!(
            encode_str(compute(None, "D", Some("JGT")), &idents).unwrap(),
            "1110001100000001"
        );
        assert_eq!(
            encode_str(compute(Some("AM"), "M+1", None), &idents).unwrap(),
            "1111110111101000"
        );
    }

    #[test]
    fn test_unresolved_mnemonic() {
        let idents = Idents::new();
        for (inst, field) in [
            (compute(None, "D+D", None), Field::Comp),
            (compute(Some("X"), "D", None), Field::Dest),
            (compute(None, "0", Some("JMPX")), Field::Jump),
        ] {
            match encode_str(inst, &idents).unwrap_err() {
                Error::UnresolvedMnemonic { field: f, line, .. } => {
                    assert_eq!(f, field);
                    assert_eq!(line, 7);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_symbol_overflow() {
        let mut idents = Idents::new();
        idents.insert("BIG".to_string(), Ident::Fixed, 0x8000, None);
        let err = encode_str(Inst::Load(Operand::Ident("BIG".to_string())), &idents).unwrap_err();
        assert!(matches!(err, Error::AddressOverflow { line: 7, .. }));
    }

    #[test]
    fn test_undefined_symbol() {
        let err = encode_str(Inst::Load(Operand::Ident("nope".to_string())), &Idents::new())
            .unwrap_err();
        assert!(matches!(err, Error::UndefinedSymbol { .. }));
    }
}
