use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use barsheet::{Config, Error, InputOptions, PageSize, SymbolRenderer};

#[derive(Parser)]
#[command(name = "barsheet")]
#[command(version)]
#[command(about = "Turn CSV columns into pages of Code128 barcodes", long_about = None)]
struct Cli {
    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a barcode PDF with one section per CSV column
    Generate {
        /// Input CSV file; the first row names the columns
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF
        #[arg(short, long, value_name = "FILE", default_value = "output.pdf")]
        output: PathBuf,

        /// Barcodes per grid row
        #[arg(short, long, env = "BARSHEET_COLUMNS", default_value_t = 3)]
        columns: usize,

        #[arg(long, value_enum, default_value = "letter")]
        page_size: PageSizeArg,

        /// Field delimiter
        #[arg(long, default_value_t = ',')]
        delimiter: char,

        /// Title stored in the PDF metadata
        #[arg(long)]
        title: Option<String>,
    },

    /// Write a single bars-only symbol as PNG
    Symbol {
        value: String,

        #[arg(short, long, value_name = "FILE", default_value = "symbol.png")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PageSizeArg {
    Letter,
    A4,
}

impl From<PageSizeArg> for PageSize {
    fn from(arg: PageSizeArg) -> Self {
        match arg {
            PageSizeArg::Letter => PageSize::Letter,
            PageSizeArg::A4 => PageSize::A4,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Generate {
            input,
            output,
            columns,
            page_size,
            delimiter,
            title,
        } => {
            if !delimiter.is_ascii() {
                return Err(Error::Config(format!(
                    "delimiter must be a single ASCII character, got {delimiter:?}"
                ))
                .into());
            }
            let input_options = InputOptions {
                delimiter: delimiter as u8,
            };
            let mut config = Config::for_page_size(page_size.into()).with_columns_per_row(columns);
            config.title = title;

            barsheet::convert_csv_to_pdf(&input, &output, &input_options, &config)?;
            println!("PDF generated: {}", output.display());
        }
        Commands::Symbol { value, output } => {
            let renderer = SymbolRenderer::new(Config::default().symbol);
            let symbol = renderer.render(&value)?;
            symbol.save_png(&output)?;
            println!(
                "Symbol written: {} ({}x{} px)",
                output.display(),
                symbol.width(),
                symbol.height()
            );
        }
    }
    Ok(())
}
