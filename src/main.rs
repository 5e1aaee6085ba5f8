// tinybasc: BASIC to C compiler

use std::fs;
use std::path::Path;

/// Where the translation is written
const OUTPUT_PATH: &str = "out.c";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("tinybasc");

    if args.len() != 2 {
        eprintln!("Error: compiler needs exactly one source file as argument");
        eprintln!();
        eprintln!("Usage: {} <file.bas>", program_name);
        eprintln!();
        eprintln!("The C translation is written to ./{}", OUTPUT_PATH);
        std::process::exit(1);
    }

    let input_file = &args[1];

    if !Path::new(input_file).exists() {
        eprintln!("Error: File '{}' not found", input_file);
        eprintln!("Usage: {} <file.bas>", program_name);
        std::process::exit(1);
    }

    let source = fs::read_to_string(input_file)?;

    eprintln!("Compiling {}...", input_file);
    let output = match tinybasc::compile(&source) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    fs::write(OUTPUT_PATH, &output)?;
    eprintln!(
        "Compiled successfully. Wrote {} lines to {}.",
        output.lines().count(),
        OUTPUT_PATH
    );

    Ok(())
}
