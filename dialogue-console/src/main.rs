//! Console front end for dialogue trees.
//!
//! An interactive text interface for walking dialogue files. The
//! engine does all the work; this binary only renders nodes, reads
//! choices, and reacts to the engine's failure results.
//!
//! # Check Mode
//!
//! Run with `--check` to batch-load and validate files without
//! entering the interactive loop:
//!
//! ```bash
//! cargo run -p dialogue-console -- --check story.json intro.json
//! ```

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use dialogue_core::{sample_document, DialogueEngine, DialogueNode};
use std::io::{self, stdout, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if let Some(pos) = args.iter().position(|a| a == "--check") {
        let files = &args[pos + 1..];
        if files.is_empty() {
            eprintln!("Error: --check requires at least one file");
            std::process::exit(2);
        }
        let failures = check_files(files);
        if failures > 0 {
            std::process::exit(1);
        }
        return Ok(());
    }

    run_interactive()
}

/// The interactive loop: load, warn about validation findings, then
/// render the current node and apply choices until the user quits.
fn run_interactive() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = DialogueEngine::new();

    clear_screen()?;
    print_header();
    println!("Enter the path to a dialogue JSON file, or press Enter for the built-in sample:");
    let path = read_line("> ")?;

    if path.is_empty() {
        engine.load_document(sample_document());
    } else if let Err(e) = engine.load_from_path(&path) {
        println!("Error: failed to load dialogue file '{path}': {e}");
        println!("Please check the file path and JSON structure.");
        return Ok(());
    }

    let errors = engine.validate();
    if !errors.is_empty() {
        println!("\nWarning: dialogue tree has validation errors:");
        for error in &errors {
            println!("- {error}");
        }
        println!("\nContinuing anyway, but some paths may not work correctly.");
        read_line("Press Enter to continue...")?;
    }

    loop {
        clear_screen()?;
        print_header();

        let Some(node) = engine.current_dialogue() else {
            // A followed response dangled. Reset and carry on; only
            // give up if even the starting node is missing.
            println!("Error: invalid dialogue state. Resetting to start.");
            engine.reset();
            if engine.current_dialogue().is_none() {
                println!("No valid starting dialogue. Exiting.");
                break;
            }
            read_line("Press Enter to continue...")?;
            continue;
        };

        let response_count = node.responses.len();
        print_dialogue(node);

        println!("\nEnter a response number, 'r' to reset, or 'q' to quit:");
        let choice = read_line("> ")?.to_lowercase();

        match choice.as_str() {
            "q" => break,
            "r" => {
                engine.reset();
                continue;
            }
            _ => {}
        }

        match choice.parse::<usize>() {
            Ok(n) if n >= 1 && n <= response_count => {
                let response_id = engine.response_options()[n - 1].0.to_string();
                if let Err(e) = engine.choose_response(&response_id) {
                    println!("Error: {e}");
                    read_line("Press Enter to continue...")?;
                }
            }
            _ => {
                println!("Invalid choice. Please try again.");
                read_line("Press Enter to continue...")?;
            }
        }
    }

    println!("\nGoodbye!");
    Ok(())
}

/// Load and validate each file, printing a report. Returns the number
/// of files that failed to load.
fn check_files(files: &[String]) -> usize {
    let mut failures = 0;

    for path in files {
        println!("\nChecking dialogue file: {path}");
        let mut engine = DialogueEngine::new();

        if let Err(e) = engine.load_from_path(path) {
            println!("  FAILED to load: {e}");
            failures += 1;
            continue;
        }
        println!("  Loaded {} nodes, {} quests", engine.node_count(), engine.quests().len());

        let errors = engine.validate();
        if errors.is_empty() {
            println!("  Dialogue tree is valid");
        } else {
            println!("  Validation errors:");
            for error in &errors {
                println!("  - {error}");
            }
        }

        match engine.current_dialogue() {
            Some(node) => {
                println!("  Starting dialogue: {} ({} responses)", node.id, node.responses.len());
            }
            None => println!("  Could not resolve the starting dialogue"),
        }
    }

    failures
}

/// Render one dialogue node with numbered responses.
fn print_dialogue(node: &DialogueNode) {
    println!("\n[{}]", node.npc_name);
    println!("{}", node.text);

    if node.responses.is_empty() {
        println!("\n(End of conversation)");
        return;
    }

    println!("\nResponses:");
    for (i, response) in node.responses.iter().enumerate() {
        println!("{}. {}", i + 1, response.text);
    }
}

fn print_header() {
    println!("{}", "=".repeat(60));
    println!("{:^60}", "DIALOGUE TREE CONSOLE");
    println!("{}", "=".repeat(60));
    println!();
}

fn clear_screen() -> io::Result<()> {
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))
}

/// Print a prompt and read one trimmed line from stdin.
fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_help() {
    println!("dialogue-console - walk dialogue tree files interactively");
    println!();
    println!("USAGE:");
    println!("  dialogue-console               Interactive mode");
    println!("  dialogue-console --check F...  Load and validate files, then exit");
    println!("  dialogue-console --help        Show this help");
    println!();
    println!("In interactive mode, enter a response number to follow it,");
    println!("'r' to reset the conversation, or 'q' to quit.");
}
