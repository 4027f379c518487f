use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use spanmark_config::{Config, OutputFormat};
use spanmark_engine::{TextSpan, inline_to_html, text_to_textnodes};
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Html,
    Spans,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Spans => OutputFormat::Spans,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Convert inline markdown (bold, italic, code, links, images) into typed
/// spans or HTML. Each non-blank input line is converted on its own.
#[derive(Debug, Parser)]
#[command(name = "spanmark", version)]
struct Cli {
    /// Input file. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Output format. Overrides the config file.
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Config file to use instead of ~/.config/spanmark/config.toml.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write HTML text and attributes without escaping.
    #[arg(long)]
    no_escape: bool,
}

/// Config file settings with command-line overrides applied.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let loaded = match &cli.config {
        Some(path) => {
            let path = Config::expand_path(path);
            Some(
                Config::load_from_path(&path)?
                    .with_context(|| format!("config file {} not found", path.display()))?,
            )
        }
        None => Config::load()?,
    };
    let mut config = loaded.unwrap_or_default();

    if let Some(format) = cli.format {
        config.output = format.into();
    }
    if cli.no_escape {
        config.escape_html = false;
    }
    Ok(config)
}

/// Converts every non-blank line of `input`, one output line per span or line.
fn convert(input: &str, config: &Config) -> Result<String> {
    let mut out = String::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;
        match config.output {
            OutputFormat::Html => {
                let html = inline_to_html(line, config.escape_html)
                    .with_context(|| format!("line {line_no}"))?;
                out.push_str(&html);
                out.push('\n');
            }
            OutputFormat::Spans => {
                for span in spans_for(line, line_no)? {
                    out.push_str(&span.to_string());
                    out.push('\n');
                }
            }
            OutputFormat::Json => {
                let spans = spans_for(line, line_no)?;
                out.push_str(&serde_json::to_string(&spans)?);
                out.push('\n');
            }
        }
    }
    Ok(out)
}

fn spans_for(line: &str, line_no: usize) -> Result<Vec<TextSpan>> {
    text_to_textnodes(line).with_context(|| format!("line {line_no}"))
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    log::debug!(
        "output format: {}, escape html: {}",
        config.output,
        config.escape_html
    );

    let input = read_input(cli.file.as_ref())?;
    let output = convert(&input, &config)?;

    io::stdout().write_all(output.as_bytes())?;
    Ok(())
}
