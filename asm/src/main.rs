use std::io::Write;
use std::path::Path;
use std::process;

use clap::Parser;
use color_print::cprintln;
use hackasm::{config, error::Error, util};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.asm")]
    input: String,

    /// Output file [default: input with `.hack` extension]
    #[clap(short, long)]
    output: Option<String>,

    /// YAML file overriding the symbol and mnemonic tables
    #[clap(short, long)]
    tables: Option<String>,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    let args = Args::parse();
    let output = args.output.clone().unwrap_or_else(|| {
        Path::new(&args.input)
            .with_extension("hack")
            .to_string_lossy()
            .into_owned()
    });
    println!("Hack Assembler");

    println!("1. Read File");
    println!("  < {}", args.input);
    let source = match std::fs::read_to_string(&args.input) {
        Ok(source) => source,
        Err(e) => fail(&Error::FileOpen(args.input.clone(), e), &args.input, ""),
    };
    let tables = match config::tables(args.tables.as_deref()) {
        Ok(tables) => tables,
        Err(e) => fail(&e, &args.input, &source),
    };

    println!("2. Assemble");
    let asm = match hackasm::assemble_program(&source, &tables) {
        Ok(asm) => asm,
        Err(e) => fail(&e, &args.input, &source),
    };
    println!(
        "  - {} words, {} symbols",
        asm.words.len(),
        asm.idents.len()
    );

    println!("3. Write Binary");
    println!("  > {}", output);
    if let Err(e) = write_output(&output, &asm.to_text()) {
        fail(&e, &args.input, &source);
    }

    if args.dump {
        util::print_dump(&args.input, &source, &asm, &tables);
    }
}

fn write_output(path: &str, text: &str) -> Result<(), Error> {
    let mut file =
        std::fs::File::create(path).map_err(|e| Error::FileCreate(path.to_string(), e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| Error::FileWrite(path.to_string(), e))
}

fn fail(err: &Error, path: &str, source: &str) -> ! {
    err.print_diag(path, source);
    cprintln!("<r,s>Assembly aborted</>");
    process::exit(1);
}
