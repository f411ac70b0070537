use crate::error::Error;

// ----------------------------------------------------------------------------
// Line

/// A parsed item together with the 0-based index of the source line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<T> {
    pub idx: usize,
    pub body: T,
}

/// Strip whitespace and `//` comments from a raw source line.
pub fn clean(raw: &str) -> String {
    let code: String = raw.chars().filter(|c| !c.is_whitespace() && *c != '\u{8}').collect();
    match code.find("//") {
        Some(pos) => code[..pos].to_string(),
        None => code,
    }
}

/// Parse a whole program. Blank and comment-only lines produce nothing.
pub fn parse(source: &str) -> Result<Vec<Line<Stmt>>, Error> {
    let mut lines = vec![];
    for (idx, raw) in source.lines().enumerate() {
        let code = clean(raw);
        if code.is_empty() {
            continue;
        }
        let body = Stmt::parse(&code).map_err(|reason| Error::MalformedInstruction {
            reason: reason.to_string(),
            line: idx,
        })?;
        lines.push(Line { idx, body });
    }
    Ok(lines)
}

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Label(String),
    Inst(Inst),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inst {
    /// `@value`
    Load(Operand),
    /// `dest=comp;jump`
    Compute(Compute),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compute {
    pub dest: Option<String>,
    pub comp: String,
    pub jump: Option<String>,
}

impl Stmt {
    /// `code` must already be cleaned.
    pub fn parse(code: &str) -> Result<Stmt, &'static str> {
        if let Some(operand) = code.strip_prefix('@') {
            if operand.is_empty() {
                return Err("missing operand after `@`");
            }
            return Ok(Stmt::Inst(Inst::Load(Operand::Ident(operand.to_string()))));
        }

        if let Some(rest) = code.strip_prefix('(') {
            let label = rest
                .strip_suffix(')')
                .ok_or("label must end with `)`")?;
            if label.is_empty() {
                return Err("empty label");
            }
            if label.contains(['(', ')']) {
                return Err("unbalanced parentheses in label");
            }
            return Ok(Stmt::Label(label.to_string()));
        }

        Compute::parse(code).map(|c| Stmt::Inst(Inst::Compute(c)))
    }
}

impl Compute {
    fn parse(code: &str) -> Result<Compute, &'static str> {
        let (expr, jump) = match code.split_once(';') {
            Some((_, jump)) if jump.contains(';') => return Err("more than one `;`"),
            Some((_, "")) => return Err("empty jump field after `;`"),
            Some((expr, jump)) => (expr, Some(jump.to_string())),
            None => (code, None),
        };

        let (dest, comp) = match expr.split_once('=') {
            Some((_, comp)) if comp.contains('=') => return Err("more than one `=`"),
            Some(("", _)) => return Err("empty dest field before `=`"),
            Some((dest, comp)) => (Some(dest.to_string()), comp),
            None => (None, expr),
        };

        if comp.is_empty() {
            return Err("missing comp field");
        }

        Ok(Compute {
            dest,
            comp: comp.to_string(),
            jump,
        })
    }
}

// ----------------------------------------------------------------------------
// Operand

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Symbol name, or a digit string not yet converted
    Ident(String),
    Literal(u16),
}

impl Operand {
    pub fn is_numeric(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }
}
