//! dome - select and edit HTML from the command line

use std::io::{self, Read as _};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use dome::{Document, Error, Operation, Read, apply_all, ops};

#[derive(Parser)]
#[command(name = "dome")]
#[command(version, about = "Select and edit HTML elements", long_about = None)]
#[command(after_help = r#"EXAMPLES:
    dome page.html -s "li" -g text                     Print each item's text
    dome page.html -s "a" -g attr:href                 Print link targets
    dome page.html -s ".box" --op '{"op":"add_class","names":["on"]}'
    cat page.html | dome - -s "ul" --script edits.json -o out.html"#)]
struct Cli {
    /// Input HTML file, or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    input: String,

    /// CSS selector for the elements to work on
    #[arg(short, long, default_value = "body")]
    select: String,

    /// Operation as JSON, e.g. '{"op":"set_text","value":"hi"}'. Repeatable.
    #[arg(long = "op", value_name = "JSON")]
    ops: Vec<String>,

    /// JSON file holding an array of operations, applied after --op
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Print a value instead of the document: text, html, or attr:NAME
    #[arg(short, long, value_name = "READ")]
    get: Option<String>,

    /// Write the document here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    let read = cli.get.as_deref().map(str::parse::<Read>).transpose()?;

    let mut operations = cli
        .ops
        .iter()
        .map(|json| serde_json::from_str::<Operation>(json))
        .collect::<Result<Vec<_>, _>>()?;
    if let Some(path) = &cli.script {
        operations.extend(ops::load_script(path)?);
    }

    let doc = Document::parse_bytes(&read_input(&cli.input)?);
    let selection = doc.get(cli.select.as_str())?;
    info!(
        selector = %cli.select,
        matches = selection.len(),
        operations = operations.len(),
        "selected"
    );

    apply_all(&selection, &operations)?;

    let output = match read {
        Some(read) => serde_json::to_string_pretty(&read.read(&selection))?,
        None => doc.to_html(),
    };

    match &cli.output {
        Some(path) => std::fs::write(path, output)?,
        None => println!("{output}"),
    }
    Ok(())
}

fn read_input(input: &str) -> io::Result<Vec<u8>> {
    if input == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read(input)
    }
}
