mod output;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use sigil::{CasePolicy, IntentionReducer, SigilError, SigilGenerator, Variant};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code for input with no usable letters
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "sigil", author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate dense, balanced and minimal SVG sigils.
    Generate(GenerateArgs),
    /// Print the letters an intention phrase reduces to.
    Reduce {
        /// Intention phrase (read from stdin when omitted).
        intention: Option<String>,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Intention phrase, reduced to distinct consonants before generation.
    #[arg(long, conflicts_with = "letters")]
    intention: Option<String>,

    /// Comma-separated letters used as-is (invalid entries are dropped).
    #[arg(long, value_delimiter = ',')]
    letters: Vec<String>,

    /// Variant to print or write: dense, balanced or minimal.
    #[arg(long)]
    variant: Option<Variant>,

    /// Write `sigil_<variant>.svg` files here (all variants unless --variant).
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Print the full result as JSON, including its fingerprint.
    #[arg(long)]
    json: bool,

    /// Render config file (default: configs/sigil.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Accept lowercase letters by upper-casing them.
    #[arg(long)]
    fold_case: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<SigilError>() {
            Some(SigilError::InvalidInput { .. }) => {
                log::debug!("{err}");
                eprintln!("please enter at least one valid letter");
                ExitCode::from(EXIT_INVALID_INPUT)
            }
            _ => {
                eprintln!("error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Generate(args) => generate(args),
        Command::Reduce { intention } => {
            let phrase = match intention {
                Some(p) => p,
                None => read_intention()?,
            };
            let letters: String = IntentionReducer::new().reduce(&phrase).into_iter().collect();
            println!("{letters}");
            Ok(())
        }
    }
}

fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => sigil_config::load_render_config_from(path)?,
        None => sigil_config::load_render_config()?,
    };
    if args.fold_case {
        config.case_policy = CasePolicy::Fold;
    }
    let generator = SigilGenerator::with_config(config)?;

    let result = if !args.letters.is_empty() {
        generator.generate(&args.letters)?
    } else {
        let phrase = match args.intention {
            Some(p) => p,
            None => read_intention()?,
        };
        let letters = IntentionReducer::new().reduce(&phrase);
        log::info!("Intention reduced to {}", letters.iter().collect::<String>());
        generator.generate(&letters)?
    };

    let selected: Vec<Variant> = match args.variant {
        Some(v) => vec![v],
        None => Variant::ALL.to_vec(),
    };

    if let Some(dir) = &args.out_dir {
        for path in output::write_svgs(&result, &selected, dir)? {
            if !args.json {
                println!("{}", path.display());
            }
        }
    }

    if args.json {
        println!("{}", output::to_json(&result)?);
    } else if args.out_dir.is_none() {
        print!("{}", result.svg(args.variant.unwrap_or(Variant::Balanced)));
    }
    Ok(())
}

/// Read one line of intention from stdin, prompting when interactive
fn read_intention() -> anyhow::Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("AWAITING INTENT > ");
        io::stderr().flush()?;
    }
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("Failed to read intention from stdin")?;
    Ok(line.trim().to_string())
}
