use hack_arch::word::ADDRESS_MAX;

use crate::error::Error;
use crate::ident::{Ident, Idents};
use crate::parser::{Inst, Line, Operand};

/// First RAM address handed out to variables. 0..=15 belong to `R0`..`R15`.
pub const VAR_START: u16 = 16;

/// Pass 2: convert numeric operands to literals and allocate an address to every
/// symbol that is still unknown, in order of first use.
pub fn resolve(
    mut idents: Idents,
    mut insts: Vec<Line<Inst>>,
) -> Result<(Idents, Vec<Line<Inst>>), Error> {
    let mut next = VAR_START;

    for line in insts.iter_mut() {
        let Inst::Load(Operand::Ident(name)) = &line.body else {
            continue;
        };

        if Operand::is_numeric(name) {
            let value = name
                .parse::<u16>()
                .ok()
                .filter(|v| *v <= ADDRESS_MAX)
                .ok_or_else(|| Error::AddressOverflow {
                    operand: name.clone(),
                    line: line.idx,
                })?;
            line.body = Inst::Load(Operand::Literal(value));
        } else if !idents.contains(name) {
            idents.insert(name.clone(), Ident::Variable, next, Some(line.idx));
            next = next.checked_add(1).ok_or_else(|| Error::AddressOverflow {
                operand: name.clone(),
                line: line.idx,
            })?;
        }
    }

    Ok((idents, insts))
}
