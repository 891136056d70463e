use std::path::PathBuf;

use chirpnet_species::Result;
use chirpnet_species::config::CleanerConfig;
use chirpnet_species::logging::init_logging;
use chirpnet_species::pipeline::{self, OutputFormat};
use clap::{Parser, Subcommand, ValueEnum};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose)?;
    match cli.command {
        Command::Clean(args) => execute_clean(args),
        Command::Species(args) => execute_species(args),
    }
}

fn execute_clean(args: CleanArgs) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => CleanerConfig::load(path)?,
        None => CleanerConfig::default(),
    };
    let request = args
        .flag_config()
        .or(file_config)
        .into_request(args.format.map(OutputFormat::from))?;

    let summary = pipeline::clean_species_list(&request)?;
    println!(
        "wrote {} species to {}",
        summary.record_count,
        summary.output.display()
    );
    Ok(())
}

fn execute_species(args: SpeciesArgs) -> Result<()> {
    for name in pipeline::species_names(&args.input, args.limit)? {
        println!("{name}");
    }
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Build the ChirpNet species list from the European Red List of Birds workbook."
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reduce a workbook sheet to a sorted common/scientific name list.
    Clean(CleanArgs),
    /// Print the common names of a cleaned species list.
    Species(SpeciesArgs),
}

#[derive(clap::Args)]
struct CleanArgs {
    /// Workbook to read.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Sheet holding the species table.
    #[arg(long)]
    sheet: Option<String>,

    /// Destination of the cleaned list.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Rows preceding the header row.
    #[arg(long)]
    header_rows: Option<usize>,

    /// Output format; inferred from the output extension when omitted.
    #[arg(long, value_enum)]
    format: Option<FormatKind>,

    /// JSON file supplying defaults for the settings above.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl CleanArgs {
    fn flag_config(&self) -> CleanerConfig {
        CleanerConfig {
            workbook_path: self.input.clone(),
            sheet_name: self.sheet.clone(),
            output_path: self.output.clone(),
            header_rows: self.header_rows,
        }
    }
}

#[derive(clap::Args)]
struct SpeciesArgs {
    /// Cleaned species list (CSV).
    #[arg(long)]
    input: PathBuf,

    /// Print at most this many names.
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FormatKind {
    Csv,
    Xlsx,
}

impl From<FormatKind> for OutputFormat {
    fn from(kind: FormatKind) -> Self {
        match kind {
            FormatKind::Csv => OutputFormat::Csv,
            FormatKind::Xlsx => OutputFormat::Xlsx,
        }
    }
}
