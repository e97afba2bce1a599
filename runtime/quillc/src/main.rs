//! Quill Runtime CLI
//!
//! Runs scripts and imports notebook modules.

use std::path::PathBuf;

use quill_eval::Value;
use quillc::commands::{import_module, run_script};

fn main() {
    quillc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let (file, paths) = parse_target_and_paths(&args[2..]);
            let Some(file) = file else {
                eprintln!("Usage: quill run <file.ql> [--path=<dir>]...");
                std::process::exit(1);
            };

            match run_script(&PathBuf::from(file), &paths) {
                Ok(Value::Unit) => {}
                Ok(value) => println!("{value}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        "import" => {
            let (name, paths) = parse_target_and_paths(&args[2..]);
            let Some(name) = name else {
                eprintln!("Usage: quill import <Module.Name> [--path=<dir>]...");
                std::process::exit(1);
            };

            match import_module(name, &paths) {
                Ok(lines) => {
                    for line in lines {
                        println!("{line}");
                    }
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command `{other}`");
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Split args into a single positional target plus any `--path=<dir>` flags.
fn parse_target_and_paths(args: &[String]) -> (Option<&str>, Vec<PathBuf>) {
    let mut target = None;
    let mut paths = Vec::new();

    for arg in args {
        if let Some(dir) = arg.strip_prefix("--path=") {
            paths.push(PathBuf::from(dir));
        } else if !arg.starts_with('-') && target.is_none() {
            target = Some(arg.as_str());
        }
    }
    (target, paths)
}

fn print_usage() {
    println!("Quill Runtime");
    println!();
    println!("Usage: quill <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  run <file.ql> [--path=<dir>]...       Execute a Quill script");
    println!("  import <Module.Name> [--path=<dir>]... Import a module and list its bindings");
    println!("  help                                   Show this help");
    println!();
    println!("Module imports resolve notebook documents (.qnb) first, then");
    println!("plain Quill source files (.ql), searching each --path directory");
    println!("in order. Set RUST_LOG for resolution diagnostics.");
}
