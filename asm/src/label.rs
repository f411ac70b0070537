use crate::error::Error;
use crate::ident::{Ident, Idents};
use crate::parser::{Inst, Line, Stmt};

/// Pass 1: bind every label to the address of the next instruction, then drop
/// the label lines. The returned instructions are addressed by their position.
pub fn resolve(
    mut idents: Idents,
    lines: Vec<Line<Stmt>>,
) -> Result<(Idents, Vec<Line<Inst>>), Error> {
    let mut insts = Vec::with_capacity(lines.len());

    for Line { idx, body } in lines {
        match body {
            Stmt::Inst(inst) => insts.push(Line { idx, body: inst }),
            Stmt::Label(name) => {
                let pc = u16::try_from(insts.len()).map_err(|_| Error::AddressOverflow {
                    operand: name.clone(),
                    line: idx,
                })?;
                if let Some(prev) = idents.insert(name.clone(), Ident::Label, pc, Some(idx)) {
                    return Err(Error::DuplicateLabel {
                        name,
                        line: idx,
                        prev: prev.line,
                    });
                }
            }
        }
    }

    Ok((idents, insts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use hack_arch::Tables;

    fn run(source: &str) -> Result<(Idents, Vec<Line<Inst>>), Error> {
        resolve(Idents::with_fixed(&Tables::hack()), parse(source)?)
    }

    #[test]
    fn test_label_points_at_next_inst() {
        let (idents, insts) = run("@1\n(A)\n(B)\nD=A\n(C)\n0;JMP\n(END)\n").unwrap();
        assert_eq!(insts.len(), 3);
        assert_eq!(idents.get_val("A"), Some(1));
        assert_eq!(idents.get_val("B"), Some(1));
        assert_eq!(idents.get_val("C"), Some(2));
        assert_eq!(idents.get_val("END"), Some(3));
        assert_eq!(idents.get("C").and_then(|s| s.line), Some(4));
    }

    #[test]
    fn test_label_lines_removed() {
        let (_, insts) = run("(LOOP)\n@LOOP\n0;JMP\n").unwrap();
        let idx: Vec<usize> = insts.iter().map(|l| l.idx).collect();
        assert_eq!(idx, vec![1, 2]);
    }

    #[test]
    fn test_duplicate_label() {
        let err = run("(X)\n@1\n(X)\n").unwrap_err();
        match err {
            Error::DuplicateLabel { name, line, prev } => {
                assert_eq!(name, "X");
                assert_eq!(line, 2);
                assert_eq!(prev, Some(0));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_label_clashes_with_fixed_symbol() {
        let err = run("(SCREEN)\n@1\n").unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateLabel { prev: None, line: 0, .. }
        ));
    }
}
