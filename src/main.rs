use std::env;
use std::fs;
use std::process;

use chordsheet::{Alignment, ChordType, Notation, RenderOptions};
use tracing_subscriber::filter::LevelFilter;

const USAGE: &str = "Usage: chordsheet [--key K] [--flats] [--no-chords] [--inline] [--center] [--html] [--verbose] <input.chords> [output]";

struct CliArgs {
    input_path: String,
    output_path: Option<String>,
    key: Option<String>,
    options: RenderOptions,
    html: bool,
    verbose: bool,
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut options = RenderOptions::default();
    let mut key = None;
    let mut html = false;
    let mut verbose = false;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--key" => match iter.next() {
                Some(k) => key = Some(k.clone()),
                None => usage_error("--key needs a value"),
            },
            "--flats" => options.notation = Notation::Flats,
            "--no-chords" => options.show_chords = false,
            "--inline" => options.placement = ChordType::Inline,
            "--center" => options.alignment = Alignment::Center,
            "--html" => html = true,
            "--verbose" | "-v" => verbose = true,
            flag if flag.starts_with("--") => usage_error(&format!("Unknown option: {}", flag)),
            _ => positional.push(arg.clone()),
        }
    }

    let mut positional = positional.into_iter();
    let Some(input_path) = positional.next() else {
        usage_error("Missing input file");
    };
    let output_path = positional.next();
    if positional.next().is_some() {
        usage_error("Too many arguments");
    }

    CliArgs {
        input_path,
        output_path,
        key,
        options,
        html,
        verbose,
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let cli = parse_args(&args);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        })
        .init();

    // Read input file
    let source = match fs::read_to_string(&cli.input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", cli.input_path, e);
            process::exit(1);
        }
    };

    // Render
    let result = if cli.html {
        chordsheet::render_html_with_options(&source, cli.key.as_deref(), &cli.options)
    } else {
        chordsheet::render_text_with_options(&source, cli.key.as_deref(), &cli.options)
    };

    let sheet = match result {
        Ok(sheet) => sheet,
        Err(e) => {
            eprintln!("Render error: {}", e);
            process::exit(1);
        }
    };

    // Output
    match cli.output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &sheet) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote chord sheet to {}", path);
        }
        None => {
            print!("{}", sheet);
        }
    }
}
