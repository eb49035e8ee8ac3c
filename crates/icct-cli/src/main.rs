use clap::{Parser, Subcommand};
use icct_cli::commands::{apply, modes, pick, planes};
use icct_cli::{AppConfig, CliError, FilterStep, logging, parse_step};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "icct")]
#[command(version, about = "Image colour channel tool", long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct StepArgs {
    /// Filter step, MODE or MODE:R,G,B (repeatable, applied in order)
    #[arg(short, long = "step", value_name = "MODE[:R,G,B]")]
    steps: Vec<String>,

    /// Chain steps onto each other instead of restarting from the original
    #[arg(short, long)]
    cumulative: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply filter steps to an image and save the result
    Apply {
        /// Input image (PNG, JPEG or BMP)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output image; the extension picks the format
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        steps: StepArgs,
    },

    /// Report one pixel as RGB, HEX, HSL and CMYK
    Pick {
        /// Input image
        input: PathBuf,

        /// Column, from the left
        x: u32,

        /// Row, from the top
        y: u32,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        steps: StepArgs,
    },

    /// Export the red, green and blue planes as greyscale images
    Planes {
        /// Input image
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,

        #[command(flatten)]
        steps: StepArgs,
    },

    /// List operation modes and their parameter ranges
    Modes,
}

fn parse_steps(args: &StepArgs) -> Result<Vec<FilterStep>, CliError> {
    args.steps.iter().map(|s| parse_step(s)).collect()
}

fn run(cli: Cli, config: &AppConfig) -> Result<(), CliError> {
    match cli.command {
        Commands::Apply {
            input,
            output,
            steps,
        } => {
            let parsed = parse_steps(&steps)?;
            let written = apply::run(&apply::ApplyOptions {
                input: &input,
                output: output.as_deref(),
                steps: &parsed,
                cumulative: steps.cumulative || config.cumulative,
            })?;
            println!("{}", written.display());
        }
        Commands::Pick {
            input,
            x,
            y,
            json,
            steps,
        } => {
            let parsed = parse_steps(&steps)?;
            let text = pick::run(&pick::PickOptions {
                input: &input,
                x,
                y,
                steps: &parsed,
                cumulative: steps.cumulative || config.cumulative,
                json,
                hex_case: config.hex_case,
            })?;
            println!("{text}");
        }
        Commands::Planes {
            input,
            out_dir,
            steps,
        } => {
            let parsed = parse_steps(&steps)?;
            let written = planes::run(&planes::PlanesOptions {
                input: &input,
                out_dir: &out_dir,
                steps: &parsed,
                cumulative: steps.cumulative || config.cumulative,
            })?;
            for path in written {
                println!("{}", path.display());
            }
        }
        Commands::Modes => println!("{}", modes::render()),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.log, cli.verbose);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
