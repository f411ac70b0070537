use color_print::cprintln;
use hack_arch::Field;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate label: `{name}`")]
    DuplicateLabel {
        name: String,
        line: usize,
        prev: Option<usize>,
    },

    #[error("Malformed instruction: {reason}")]
    MalformedInstruction { reason: String, line: usize },

    #[error("Unresolved {field} mnemonic: `{mnemonic}`")]
    UnresolvedMnemonic {
        field: Field,
        mnemonic: String,
        line: usize,
    },

    #[error("Address overflow: `{operand}` does not fit in 15 bits")]
    AddressOverflow { operand: String, line: usize },

    #[error("Undefined symbol: `{name}`")]
    UndefinedSymbol { name: String, line: usize },

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to load tables: {0}")]
    TableLoad(String, #[source] serde_yaml::Error),
}

impl Error {
    /// 0-based index of the source line the error points at.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::DuplicateLabel { line, .. }
            | Error::MalformedInstruction { line, .. }
            | Error::UnresolvedMnemonic { line, .. }
            | Error::AddressOverflow { line, .. }
            | Error::UndefinedSymbol { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, source: &str) {
        cprintln!("<red,bold>error</>: {}", self);
        if let Some(source) = std::error::Error::source(self) {
            cprintln!("  <blue>=</> <bold>caused by</>: {}", source);
        }

        let Some(line_idx) = self.line() else {
            return;
        };
        print_location(file, source, line_idx);

        if let Error::DuplicateLabel {
            prev: Some(prev), ..
        } = self
        {
            cprintln!("<green,bold>note</>: Already defined here");
            print_location(file, source, *prev);
        }
    }
}

fn print_location(file: &str, source: &str, line_idx: usize) {
    // line_idx is 0-based, display as 1-based
    let line_num = line_idx + 1;
    let line_content = source.lines().nth(line_idx).unwrap_or("");
    cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
    cprintln!("      <blue>|</>");
    cprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
    cprintln!("      <blue>|</>");
}
