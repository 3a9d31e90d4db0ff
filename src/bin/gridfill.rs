use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "gridfill", version)]
struct Cli {
    /// Log each placed region to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Partition a grid and print its regions.
    Partition(PartitionArgs),
    /// Run a full layout pass and print the placements as JSON.
    Layout(LayoutArgs),
}

#[derive(Parser, Debug)]
struct PartitionArgs {
    /// Column count.
    #[arg(long, default_value_t = 4)]
    columns: u32,

    /// Row count.
    #[arg(long, default_value_t = 8)]
    rows: u32,

    /// Seed for reproducible output (OS entropy when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Layout config JSON. Flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    columns: Option<u32>,

    #[arg(long)]
    rows: Option<u32>,

    /// Container width in pixels.
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Container height in pixels.
    #[arg(long, requires = "width")]
    height: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Partition(args) => cmd_partition(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_partition(args: PartitionArgs) -> anyhow::Result<()> {
    let size = gridfill::GridSize::new(args.columns, args.rows)?;
    let regions = match args.seed {
        Some(seed) => gridfill::partition(size, gridfill::RngSource::seeded(seed))?,
        None => gridfill::partition(size, gridfill::RngSource::from_entropy())?,
    };

    match args.format {
        OutputFormat::Text => {
            print!("{}", gridfill::region_map(size, &regions)?);
            println!();
            for (idx, r) in regions.iter().enumerate() {
                println!(
                    "#{idx}: row {} col {} {}x{}",
                    r.start_row, r.start_column, r.width_cells, r.height_cells
                );
            }
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&regions).context("serialize regions as JSON")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => gridfill::LayoutConfig::from_path(path)
            .with_context(|| format!("load layout config '{}'", path.display()))?,
        None => gridfill::LayoutConfig::default(),
    };
    if let Some(columns) = args.columns {
        config.columns = columns;
    }
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let (Some(width), Some(height)) = (args.width, args.height) {
        config.container = Some(gridfill::ContainerSize::new(width, height));
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let outcome = gridfill::run_layout_seeded(&config)?;
    let json = serde_json::to_string_pretty(&outcome).context("serialize layout as JSON")?;
    println!("{json}");
    Ok(())
}
