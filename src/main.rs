use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};

use cncpilot::{
    client_config, init_logging_with, select_client, AppEvent, Config, EventCategory, EventFilter,
    LogTone, MachineCatalog, MaterialCatalog, OperationSet, PipelineEvent, PipelineStage,
    ProgramViewer, Session, StockDimensions, BUILD_DATE, VERSION,
};

#[derive(Parser, Debug)]
#[command(name = "cncpilot", version, about = "Turn CAD part files into CNC programs")]
struct Cli {
    /// Configuration file (TOML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a part, generate its program and export it
    Run(RunArgs),

    /// List supported machines
    Machines {
        /// Only machines from this vendor
        #[arg(long)]
        vendor: Option<String>,
    },

    /// List supported materials
    Materials,

    /// Print a program with syntax classes
    Highlight {
        /// Program file
        file: PathBuf,

        /// Colour the listing with ANSI escapes
        #[arg(long)]
        color: bool,
    },
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Part file (.step, .stp, .iges, .igs)
    file: PathBuf,

    /// Size in bytes; when given, the file is not read from disk
    #[arg(long)]
    size: Option<u64>,

    /// Material id
    #[arg(long)]
    material: Option<String>,

    /// Machine id
    #[arg(long)]
    machine: Option<String>,

    /// Stock size as XxYxZ in mm
    #[arg(long, value_parser = parse_stock)]
    stock: Option<StockDimensions>,

    /// Feed rate in mm/min
    #[arg(long)]
    feed: Option<f64>,

    /// Spindle speed in RPM
    #[arg(long)]
    spindle: Option<f64>,

    /// Tool diameter in mm
    #[arg(long)]
    tool: Option<f64>,

    /// Depth of cut in mm
    #[arg(long)]
    depth: Option<f64>,

    /// Operation to run; repeat for several. Replaces the configured list
    #[arg(long = "op")]
    operations: Vec<String>,

    /// Never contact the remote service
    #[arg(long)]
    offline: bool,

    /// Output directory (defaults to the configured one)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip writing the program file
    #[arg(long)]
    no_export: bool,

    /// What to print on stdout
    #[arg(long, value_enum, default_value_t = Show::Summary)]
    show: Show,

    /// Colour the program listing
    #[arg(long)]
    color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Show {
    Gcode,
    Listing,
    Summary,
    Tools,
}

fn parse_stock(value: &str) -> Result<StockDimensions, String> {
    let parts: Vec<f64> = value
        .split(['x', 'X'])
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("'{}': {}", p, e)))
        .collect::<Result<_, _>>()?;
    match parts.as_slice() {
        [x, y, z] => StockDimensions::new(*x, *y, *z).map_err(|e| e.to_string()),
        _ => Err(format!("expected XxYxZ, got '{}'", value)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    init_logging_with(level)?;
    tracing::debug!("cncpilot {} (built {})", VERSION, BUILD_DATE);

    let config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Command::Run(args) => run(config, args).await,
        Command::Machines { vendor } => {
            let machines: Vec<_> = match vendor.as_deref() {
                Some(vendor) => MachineCatalog::by_vendor(vendor).collect(),
                None => MachineCatalog::all().iter().collect(),
            };
            for machine in machines {
                println!("{:<14} {}", machine.id, machine);
            }
            Ok(())
        }
        Command::Materials => {
            for material in MaterialCatalog::all() {
                println!("{:<20} {}", material.id, material.label);
            }
            Ok(())
        }
        Command::Highlight { file, color } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let viewer = ProgramViewer::from_text(&text);
            if color {
                print!("{}", viewer.render_ansi());
            } else {
                print!("{}", viewer.render_classes());
            }
            Ok(())
        }
    }
}

async fn run(config: Config, args: RunArgs) -> anyhow::Result<()> {
    let client = select_client(&client_config(&config), args.offline);
    let mut session = Session::new(&config, client)?;

    session.events().subscribe(
        EventFilter::Categories(vec![EventCategory::Pipeline]),
        |event| {
            if let AppEvent::Pipeline(PipelineEvent::Log { message, tone }) = event {
                let marker = match tone {
                    LogTone::Info => "  ",
                    LogTone::Ai => "AI",
                    LogTone::Success => "ok",
                    LogTone::Warning => "!!",
                };
                eprintln!("[{}] {}", marker, message);
            }
        },
    );

    if let Some(id) = &args.material {
        session.select_material(id)?;
    }
    if let Some(id) = &args.machine {
        session.select_machine(id)?;
    }

    match args.size {
        Some(size) => {
            let name = args
                .file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            session.load_file(&name, size)?;
        }
        None => {
            session.load_path(&args.file)?;
        }
    }

    session.analyze().await?;

    if let Some(stock) = args.stock {
        session.set_stock(stock)?;
    }
    if let Some(v) = args.feed {
        session.set_feed_rate(v)?;
    }
    if let Some(v) = args.spindle {
        session.set_spindle_rpm(v)?;
    }
    if let Some(v) = args.tool {
        session.set_tool_diameter(v)?;
    }
    if let Some(v) = args.depth {
        session.set_depth_of_cut(v)?;
    }
    if !args.operations.is_empty() {
        session.set_operations(OperationSet::from_names(&args.operations)?)?;
    }

    session.generate().await?;

    let Some(document) = session.document() else {
        bail!("No program was generated");
    };

    match args.show {
        Show::Gcode => println!("{}", document.to_text()),
        Show::Listing => {
            let viewer = ProgramViewer::new(document);
            if args.color {
                print!("{}", viewer.render_ansi());
            } else {
                print!("{}", viewer.render_plain());
            }
        }
        Show::Summary => {
            let strip: Vec<String> = PipelineStage::all()
                .iter()
                .map(|stage| {
                    let done = session.sequencer().is_done(stage.ordinal())
                        || *stage == session.stage();
                    format!("[{}] {}", if done { "x" } else { " " }, stage.label())
                })
                .collect();
            println!("{}", strip.join("  "));
            if let Some(analysis) = session.analysis() {
                println!(
                    "Part: {} ({}, {})",
                    analysis.part_name, analysis.complexity, analysis.bounding_box
                );
            }
            if let Some(stats) = session.preview_stats() {
                println!("{}", stats);
            }
            println!("{}", session.job_summary());
        }
        Show::Tools => {
            for tool in session.tool_list() {
                println!("{}", tool);
            }
        }
    }

    if !args.no_export {
        let path = match &args.output {
            Some(dir) => session.export_to(dir)?,
            None => session.export()?,
        };
        eprintln!("Program written to {}", path.display());
    }

    Ok(())
}
