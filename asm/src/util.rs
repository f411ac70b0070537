use std::collections::HashMap;

use color_print::cformat;
use hack_arch::Tables;

use crate::ident::Ident;
use crate::Assembly;

const RULE: &str = "------------------------+-----------------------------------------------------";

/// Listing of `source` beside the addresses and words it assembled to.
pub fn dump(path: &str, source: &str, asm: &Assembly, tables: &Tables) -> Vec<String> {
    let mut out = vec![];

    let labels: HashMap<usize, (&str, u16)> = asm
        .idents
        .iter()
        .filter(|(_, sym)| sym.kind == Ident::Label)
        .filter_map(|(name, sym)| sym.line.map(|line| (line, (name, sym.value))))
        .collect();

    out.push(format!(
        "{}+------[{}]{}",
        "-".repeat(24),
        path,
        "-".repeat(45usize.saturating_sub(path.len()))
    ));

    let mut insts = asm.insts.iter().zip(&asm.words).enumerate().peekable();
    for (idx, raw) in source.lines().enumerate() {
        let line_num = idx + 1;
        let body = match insts.peek() {
            Some((pc, (line, word))) if line.idx == idx => {
                let body = format!(
                    "[{:04X}] {} | {:>4}: {:<24} {}",
                    pc,
                    word,
                    line_num,
                    raw.trim(),
                    word.cformat(tables)
                );
                insts.next();
                body
            }
            _ => match labels.get(&idx) {
                Some((name, value)) => {
                    let label = cformat!("<g>({})</> = 0x{:04X}", name, value);
                    format!("{:24}| {:>4}: {}", "", line_num, label)
                }
                None => format!("{:24}| {:>4}: {}", "", line_num, raw.trim_end()),
            },
        };
        out.push(body);
    }
    out.push(RULE.to_string());

    for (name, sym) in asm.idents.iter().filter(|(_, sym)| sym.kind == Ident::Variable) {
        out.push(cformat!("<c>@0x{:04X} {}</>", sym.value, name));
    }
    out
}

pub fn print_dump(path: &str, source: &str, asm: &Assembly, tables: &Tables) {
    for line in dump(path, source, asm, tables) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble_program;

    #[test]
    fn test_dump() {
        let source = "// count\n(LOOP)\n@i\nM=M+1\n@LOOP\n0;JMP\n";
        let tables = Tables::hack();
        let asm = assemble_program(source, &tables).unwrap();
        let lines = dump("count.asm", source, &asm, &tables);

        assert!(lines[0].contains("[count.asm]"));
        assert!(lines[1].ends_with("1: // count"));
        assert!(lines[2].contains("(LOOP)"));
        assert!(lines[2].contains("0x0000"));
        assert!(lines[3].starts_with("[0000] 0000000000010000 |    3: @i"));
        assert!(lines[4].starts_with("[0001] 1111110111001000 |    4: M=M+1"));
        assert!(lines[6].starts_with("[0003] 1110101010000111 |    6: 0;JMP"));
        assert_eq!(lines[7], RULE);
        assert!(lines[8].contains("@0x0010 i"));
        assert_eq!(lines.len(), 9);
    }
}
