// tinybasc-view: side-by-side viewer for BASIC source and its C translation

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tinybasc::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("tinybasc-view");

    if args.len() != 2 {
        eprintln!("Error: viewer needs exactly one source file as argument");
        eprintln!();
        eprintln!("Usage: {} <file.bas>", program_name);
        eprintln!();
        eprintln!("Try one of the bundled demos:");
        eprintln!("  {} demos/fib.bas", program_name);
        std::process::exit(1);
    }

    let input_file = &args[1];

    if !Path::new(input_file).exists() {
        eprintln!("Error: File '{}' not found", input_file);
        std::process::exit(1);
    }

    let source = fs::read_to_string(input_file)?;

    eprintln!("Compiling {}...", input_file);
    let mut app = App::new(source);
    match &app.error {
        Some(e) => eprintln!("Compile error: {}", e),
        None => eprintln!("Compiled successfully."),
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
