use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use indentx::Formatter;
use is_terminal::IsTerminal;

/// Reindent or minify lenient JSON and XML text.
///
/// indentx reads from stdin or files, detects JSON vs. XML from the first
/// non-whitespace character, and writes the reformatted text. JSON input may
/// contain comments, unquoted keys, single quotes, and missing or trailing
/// commas; broken input is reformatted best-effort instead of rejected.
#[derive(Parser, Debug)]
#[command(name = "indentx")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s). If not specified, reads from stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output file. If not specified, writes to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Minify instead of pretty-printing.
    #[arg(short, long)]
    minify: bool,

    /// Number of spaces per indentation level.
    #[arg(short, long, default_value = "4")]
    indent: usize,

    /// Use tabs instead of spaces for indentation.
    #[arg(short = 't', long)]
    tabs: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("indentx: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let input = if args.files.is_empty() {
        if io::stdin().is_terminal() {
            return Err("no input files and stdin is a terminal (try `indentx --help`)".into());
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        let mut combined = String::new();
        for path in &args.files {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
            combined.push_str(&content);
        }
        combined
    };

    let formatter = Formatter::with_indent(indent_string(&args));
    let result = if args.minify {
        formatter.unindent(&input)
    } else {
        formatter.format(&input)
    };

    // Blank input means there is nothing to reformat; pass it through.
    let output = result.unwrap_or(input);

    if let Some(path) = args.output {
        fs::write(&path, &output)
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
    } else {
        let mut stdout = io::stdout();
        stdout.write_all(output.as_bytes())?;
        if !output.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

fn indent_string(args: &Args) -> String {
    if args.tabs {
        "\t".to_string()
    } else {
        " ".repeat(args.indent)
    }
}
