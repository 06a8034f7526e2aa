use super::commands;
use clap::{Args, Parser, Subcommand, ValueEnum};
use ferritin_seqview::{ColorScheme, SeqFormat};
use log::LevelFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// When to emit ANSI colors
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// A sequence given inline or as the first record of a FASTA file.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SequenceInput {
    #[arg(short, long)]
    pub sequence: Option<String>,

    #[arg(long)]
    pub fasta: Option<String>,
}

#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// Residues per line
    #[arg(long, default_value_t = 80)]
    width: usize,

    /// Residues per block
    #[arg(long, default_value_t = 10)]
    block_size: usize,

    /// Separator between blocks
    #[arg(long, default_value = " ")]
    gap: String,

    #[arg(long)]
    no_line_numbers: bool,

    /// Color scheme (see `schemes`)
    #[arg(long, default_value_t = ColorScheme::Flower)]
    scheme: ColorScheme,
}

impl LayoutArgs {
    pub fn to_format(&self) -> SeqFormat {
        SeqFormat::builder()
            .width(self.width)
            .block_size(self.block_size)
            .gap(self.gap.as_str())
            .line_numbers(!self.no_line_numbers)
            .color_scheme(self.scheme.to_string())
            .build()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print a sequence in colored, numbered blocks
    Format {
        #[command(flatten)]
        input: SequenceInput,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Print annotation tracks under a sequence
    Annotate {
        #[command(flatten)]
        input: SequenceInput,
        /// JSON array of `{"start", "end", "label"}` objects
        #[arg(short, long)]
        annotations: String,
        /// Only show these labels, in this order
        #[arg(long)]
        filter: Vec<String>,
        /// Emit JSON instead of colored text
        #[arg(long)]
        json: bool,
        /// With --json, emit the labels covering each position
        #[arg(long, requires = "json")]
        by_index: bool,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Align two protein sequences and plot the alignment as SVG
    Align {
        #[arg(long, requires = "prediction", required_unless_present = "fasta")]
        reference: Option<String>,
        #[arg(long, requires = "reference")]
        prediction: Option<String>,
        /// FASTA file holding the reference and prediction records
        #[arg(long, conflicts_with_all = ["reference", "prediction"])]
        fasta: Option<String>,
        #[arg(short, long)]
        output: String,
    },
    /// Write an HTML page showing a PDB structure
    View {
        #[arg(long)]
        pdb: String,
        #[arg(short, long)]
        output: String,
        #[arg(long, default_value_t = 800)]
        width: u32,
        #[arg(long, default_value_t = 600)]
        height: u32,
        /// Hex color for the cartoon
        #[arg(long, default_value = "#007FAA")]
        tint: String,
    },
    /// List the available color schemes
    Schemes,
}

impl Cli {
    pub fn init(&self) {
        let mut builder = pretty_env_logger::formatted_builder();
        builder.filter_level(if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        });
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
        let _ = builder.try_init();

        match self.color {
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
            ColorChoice::Auto => {}
        }
    }

    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Format { input, layout } => commands::format::execute(input, layout),
            Commands::Annotate {
                input,
                annotations,
                filter,
                json,
                by_index,
                layout,
            } => commands::annotate::execute(input, annotations, filter, json, by_index, layout),
            Commands::Align {
                reference,
                prediction,
                fasta,
                output,
            } => commands::align::execute(reference, prediction, fasta, output),
            Commands::View {
                pdb,
                output,
                width,
                height,
                tint,
            } => commands::view::execute(pdb, output, width, height, tint),
            Commands::Schemes => commands::schemes::execute(),
        }
    }
}
