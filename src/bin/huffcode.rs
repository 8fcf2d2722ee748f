use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{bail, Result, WrapErr};
use huffcode::{FrequencyTable, HuffmanCode};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::prelude::*;

mod input;
mod progress;
mod report;

use input::InputSet;
use progress::{InputProgress, ProgressMonitor};

#[derive(Parser)]
#[command(version, about = "Build Huffman codes from symbol frequencies and use them to encode and decode text")]
struct Cli {
    /// Log more, repeat for even more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Never draw progress bars
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read every file of the input directory and write code table, preorder dump, decoded and
    /// encoded lines to the output directory
    Batch {
        /// Defaults to ./Input_Files
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Defaults to ./Output_Files, created if missing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the code of every symbol
    Codes {
        #[command(flatten)]
        source: FrequencySource,
    },
    /// Encode text, after folding it to upper case alphanumerics
    Encode {
        #[command(flatten)]
        source: FrequencySource,
        text: String,
    },
    /// Decode a string of 0s and 1s
    Decode {
        #[command(flatten)]
        source: FrequencySource,
        bits: String,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct FrequencySource {
    /// File with one `SYMBOL - COUNT` line per symbol
    #[arg(short, long)]
    frequencies: Option<PathBuf>,
    /// Count the alphanumeric characters of this file instead
    #[arg(short, long)]
    sample: Option<PathBuf>,
}

impl FrequencySource {
    fn load(&self) -> Result<(FrequencyTable, HuffmanCode)> {
        let frequencies = match (&self.frequencies, &self.sample) {
            (Some(path), _) => input::read_frequencies(path)
                .wrap_err_with(|| format!("loading frequencies from {}", path.display()))?,
            (None, Some(path)) => input::read_sample(path)
                .wrap_err_with(|| format!("counting symbols in {}", path.display()))?,
            (None, None) => bail!("either --frequencies or --sample is required"),
        };
        let code = build_code(&frequencies)?;
        Ok((frequencies, code))
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let draw_progress = !cli.quiet && console::Term::stderr().is_term();
    init_tracing(cli.verbose, draw_progress);

    match cli.command {
        Commands::Batch { input, output } => {
            let cwd = std::env::current_dir()?;
            let input = input.unwrap_or_else(|| cwd.join("Input_Files"));
            let output = output.unwrap_or_else(|| cwd.join("Output_Files"));
            batch(&input, &output)
        }
        Commands::Codes { source } => {
            let (frequencies, code) = source.load()?;
            let mut stdout = io::stdout().lock();
            for (symbol, bits) in code.codes().iter() {
                writeln!(stdout, "{} = {}", console::style(symbol).bold(), bits)?;
            }
            let average = code.codes().average_length(&frequencies);
            writeln!(stdout, "average code length: {average:.3} bits")?;
            Ok(())
        }
        Commands::Encode { source, text } => {
            let (_, code) = source.load()?;
            let bits = code.encode(&huffcode::normalize_text(&text))?;
            println!("{bits}");
            Ok(())
        }
        Commands::Decode { source, bits } => {
            let (_, code) = source.load()?;
            println!("{}", code.decode(bits.trim())?);
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8, draw_progress: bool) {
    let level = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if draw_progress {
        let indicatif_layer = IndicatifLayer::new();
        tracing_subscriber::registry()
            .with(level)
            .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
            .with(indicatif_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(level)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn build_code(frequencies: &FrequencyTable) -> Result<HuffmanCode> {
    let code = HuffmanCode::from_frequencies(frequencies).wrap_err("building the huffman tree")?;
    info!(
        symbols = code.codes().len(),
        bits_per_symbol = code.codes().average_length(frequencies),
        "built code table"
    );
    Ok(code)
}

fn batch(input_dir: &Path, output_dir: &Path) -> Result<()> {
    let files = input::list_files(input_dir)?;
    if files.is_empty() {
        bail!("no input files in {}", input_dir.display());
    }

    let total = files
        .iter()
        .map(|path| fs::metadata(path).map(|meta| meta.len()))
        .sum::<io::Result<u64>>()?;
    let mut inputs = InputSet::default();
    {
        let progress = InputProgress::start(total, files.len());
        let _entered = progress.span().enter();
        for path in &files {
            debug!(file = %path.display(), "reading input");
            let file = File::open(path).wrap_err_with(|| format!("opening {}", path.display()))?;
            let contents = input::read_to_string(ProgressMonitor::new(file, progress.span()), path)?;
            inputs.ingest(&contents, path);
        }
    }

    let code = build_code(&inputs.frequencies)
        .wrap_err_with(|| format!("no usable frequency lines in {}", input_dir.display()))?;

    fs::create_dir_all(output_dir)
        .wrap_err_with(|| format!("creating {}", output_dir.display()))?;

    write_report(output_dir, report::CODE_TABLE_FILE, |out| {
        report::write_code_table(out, code.codes())
    })?;
    write_report(output_dir, report::PREORDER_FILE, |out| {
        report::write_preorder(out, &code.preorder())
    })?;

    let decoded: Vec<(String, String)> = report::dedup_keys(inputs.to_decode)
        .into_iter()
        .map(|bits| {
            let text = code.decode(&bits).unwrap_or_else(|err| {
                warn!(%bits, %err, "could not decode");
                format!("<error: {err}>")
            });
            (bits, text)
        })
        .collect();
    write_report(output_dir, report::DECODED_FILE, |out| {
        report::write_aligned(out, &decoded)
    })?;

    let encoded: Vec<(String, String)> = report::dedup_keys(inputs.to_encode)
        .into_iter()
        .map(|text| {
            let bits = code.encode(&text).unwrap_or_else(|err| {
                warn!(%text, %err, "could not encode");
                format!("<error: {err}>")
            });
            (text, bits)
        })
        .collect();
    write_report(output_dir, report::ENCODED_FILE, |out| {
        report::write_aligned(out, &encoded)
    })?;

    info!(
        decoded = decoded.len(),
        encoded = encoded.len(),
        output = %output_dir.display(),
        "wrote reports"
    );
    Ok(())
}

fn write_report(
    dir: &Path,
    name: &str,
    write: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> Result<()> {
    let path = dir.join(name);
    let mut out = BufWriter::new(
        File::create(&path).wrap_err_with(|| format!("creating {}", path.display()))?,
    );
    write(&mut out)
        .and_then(|()| out.flush())
        .wrap_err_with(|| format!("writing {}", path.display()))
}
