use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::ensure;
use log::info;

use sld_gen::config::{DecoderConfig, Padding};
use sld_gen::cost::CostTable;
use sld_gen::generator::{generate_file, Generator};
use sld_gen::sink::WriterSink;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate the VHDL decoder with `n` outputs.
    Generate {
        /// Output width (a power of two).
        #[arg(value_name = "INT", default_value = "512")]
        n: u64,

        /// Directory to write `decoder_<n>_sld.vhd` into.
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Print the document to stdout instead of writing a file.
        #[arg(long)]
        stdout: bool,

        /// Alignment rule for the assignment arrows.
        #[arg(long, value_enum, default_value_t = PaddingArg::Legacy)]
        padding: PaddingArg,
    },

    /// Print tree decoder cost estimates.
    Cost {
        /// Emit CSV instead of one line per estimate.
        #[arg(long)]
        csv: bool,

        /// Smallest input width.
        #[arg(long, value_name = "INT", default_value = "2")]
        k_min: u32,

        /// Largest input width.
        #[arg(long, value_name = "INT", default_value = "18")]
        k_max: u32,

        /// Maximum top-level fanouts (powers of two).
        #[arg(long, value_name = "INT", value_delimiter = ',', default_value = "2,4,8,16,32,64,128")]
        f_max: Vec<u64>,

        /// Base decoder output sizes.
        #[arg(long, value_name = "INT", value_delimiter = ',', default_value = "4,8,16,32,64,128")]
        base: Vec<u64>,

        /// Transistors per inverter.
        #[arg(long, value_name = "INT", default_value = "2")]
        t_not: u64,
    },
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum PaddingArg {
    Legacy,
    Aligned,
}

impl From<PaddingArg> for Padding {
    fn from(arg: PaddingArg) -> Self {
        match arg {
            PaddingArg::Legacy => Padding::Legacy,
            PaddingArg::Aligned => Padding::Aligned,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    // Keep stdout clean when it carries the generated document.
    let mode = match args.command {
        Command::Generate { stdout: true, .. } => simplelog::TerminalMode::Stderr,
        _ => simplelog::TerminalMode::Mixed,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        mode,
        simplelog::ColorChoice::Auto,
    )?;

    match args.command {
        Command::Generate {
            n,
            out_dir,
            stdout,
            padding,
        } => {
            let config = DecoderConfig::new(n)?.with_padding(padding.into());
            info!("Parameters:");
            info!("n = ...... {}", config.outputs());
            info!("log_2(n) = {}", config.input_width());

            if stdout {
                let mut sink = WriterSink::new(std::io::stdout().lock());
                Generator::new(config).write_to(&mut sink)?;
                let mut out = sink.into_inner();
                writeln!(out)?;
            } else {
                std::fs::create_dir_all(&out_dir)?;
                generate_file(config, &out_dir)?;
            }
        }
        Command::Cost {
            csv,
            k_min,
            k_max,
            f_max,
            base,
            t_not,
        } => {
            ensure!(k_min <= k_max, "k-min ({}) must not exceed k-max ({})", k_min, k_max);
            ensure!(
                f_max.iter().all(|f| f.is_power_of_two() && *f >= 2),
                "f-max values must be powers of two >= 2, got {:?}",
                f_max
            );
            let table = CostTable {
                t_not,
                ks: k_min..=k_max,
                f_max,
                base,
            };
            let out = if csv { table.to_csv()? } else { table.to_text()? };
            print!("{}", out);
        }
    }

    Ok(())
}
