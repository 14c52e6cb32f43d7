//! minitiff - inspect, validate and re-encode uncompressed TIFF files

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use minitiff::tags::{field_type_name, tag_name};
use minitiff::{ComponentSwap, IFDEntry, LoadOptions, Result, TiffReader};

#[derive(Parser, Debug)]
#[command(name = "minitiff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log directory parsing at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every directory entry in file order
    Info {
        file: PathBuf,
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a file and print the resolved raster
    Check {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = SwapArg::FileOrder)]
        swap: SwapArg,
    },
    /// Load a file and save it again in the minimal layout
    Copy { input: PathBuf, output: PathBuf },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum SwapArg {
    FileOrder,
    FillOrder,
    Either,
    Never,
}

impl From<SwapArg> for ComponentSwap {
    fn from(arg: SwapArg) -> Self {
        match arg {
            SwapArg::FileOrder => ComponentSwap::FileOrder,
            SwapArg::FillOrder => ComponentSwap::FillOrder,
            SwapArg::Either => ComponentSwap::Either,
            SwapArg::Never => ComponentSwap::Never,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Info { file, json } => run_info(file, json),
        Command::Check { file, swap } => run_check(file, swap.into()),
        Command::Copy { input, output } => run_copy(input, output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose { "minitiff=debug" } else { "minitiff=warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_info(file: PathBuf, json: bool) -> Result<()> {
    let entries: Vec<IFDEntry> = TiffReader::open(&file)?.entries()?;

    if json {
        let out = serde_json::to_string_pretty(&entries)
            .map_err(|e| minitiff::Error::Io(e.into()))?;
        println!("{}", out);
        return Ok(());
    }

    println!("{}: {} entries", file.display(), entries.len());
    for entry in &entries {
        println!(
            "  {:5} {:<26} {:<9} count={:<6} value={}",
            entry.tag,
            tag_name(entry.tag),
            field_type_name(entry.field_type),
            entry.count,
            entry.value
        );
    }
    Ok(())
}

fn run_check(file: PathBuf, swap: ComponentSwap) -> Result<()> {
    let options = LoadOptions::default().with_component_swap(swap);
    let (descriptor, _) = TiffReader::open_with_options(&file, options)?.read_descriptor()?;
    println!("{}", descriptor);
    Ok(())
}

fn run_copy(input: PathBuf, output: PathBuf) -> Result<()> {
    let (layout, data) = minitiff::load(&input, |desc, reader| {
        let mut data = vec![0u8; desc.layout.data_len() as usize];
        reader.read_bytes(&mut data)?;
        Ok((desc.layout, data))
    })?;

    minitiff::save(
        &output,
        layout.width,
        layout.height,
        layout.components,
        layout.bits_per_component,
        &data,
    )?;
    println!("{} -> {}", input.display(), output.display());
    Ok(())
}
