// SPDX-License-Identifier: AGPL-3.0-or-later
//! rtfconv - convert bracketed-token markup from a file, stdin or the
//! built-in sample into ASCII, TeX or text widget output

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use rtfconv_core::{convert_with, OutputFormat, ReadConfig, RtfReader, WidgetConverter};
use serde_json::json;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CliConfig;

const SAMPLE_INPUT: &str = "{char:H}{char:e}{char:l}{char:l}{char:o} \
    {font:bold}{char:W}{char:o}{char:r}{char:l}{char:d}{font:bold} \
    {font:italic}{char:!}{font:italic}{par}\
    {char:A}{font:bold}{font:italic}{char:B}{char:C}{font:bold}{font:italic}";

const SEPARATOR: &str = "-----------------------------";

#[derive(Debug, Parser)]
#[command(name = "rtfconv", version, about = "Convert {char:X}/{font:NAME}/{par} markup")]
struct Cli {
    /// Input file; stdin is read when omitted
    input: Option<PathBuf>,

    /// Output format: ascii, tex or widget (repeatable, default all)
    #[arg(short, long = "format")]
    formats: Vec<OutputFormat>,

    /// Convert the built-in sample instead of reading input
    #[arg(long, conflicts_with = "input")]
    sample: bool,

    /// Emit conversions and reports as JSON
    #[arg(long)]
    json: bool,

    /// Record unmatched text between tokens in JSON reports
    #[arg(long)]
    collect_gaps: bool,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let file_config = match &cli.config {
        Some(path) => CliConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CliConfig::default(),
    };

    let formats = pick_formats(&cli.formats, &file_config.formats);
    let read_config = ReadConfig {
        collect_gaps: cli.collect_gaps || file_config.read.collect_gaps,
    };

    let input = read_input(&cli)?;
    tracing::debug!(?formats, bytes = input.len(), "converting input");
    println!("{}", render_stdout(&cli, &input, &formats, &read_config)?);

    Ok(())
}

/// Everything written to stdout. JSON mode emits the records alone.
fn render_stdout(
    cli: &Cli,
    input: &str,
    formats: &[OutputFormat],
    config: &ReadConfig,
) -> Result<String> {
    if cli.json {
        return render_json(input, formats, config);
    }

    let output = render_text(input, formats, config);
    if cli.sample {
        Ok(format!("Sample Input:\n{}\n\n{}", input, output))
    } else {
        Ok(output)
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_input(cli: &Cli) -> Result<String> {
    if cli.sample {
        return Ok(SAMPLE_INPUT.to_string());
    }

    match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

/// Command line formats win over the config file; both empty means all
fn pick_formats(cli: &[OutputFormat], file: &[OutputFormat]) -> Vec<OutputFormat> {
    let chosen = if !cli.is_empty() { cli } else { file };
    if chosen.is_empty() {
        OutputFormat::ALL.to_vec()
    } else {
        chosen.to_vec()
    }
}

fn render_text(input: &str, formats: &[OutputFormat], config: &ReadConfig) -> String {
    if let [format] = formats {
        return convert_with(input, *format, config).output;
    }

    formats
        .iter()
        .map(|format| {
            let conversion = convert_with(input, *format, config);
            format!("{} Conversion:\n{}\n{}", format.label(), conversion.output, SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_json(input: &str, formats: &[OutputFormat], config: &ReadConfig) -> Result<String> {
    let records = formats
        .iter()
        .map(|format| match format {
            // Widgets export their structured elements rather than text lines
            OutputFormat::Widget => {
                let mut widget = WidgetConverter::new();
                let report = RtfReader::with_config(&mut widget, config.clone()).parse_rtf(input);
                Ok(json!({ "format": format, "elements": widget.elements(), "report": report }))
            }
            _ => serde_json::to_value(convert_with(input, *format, config)),
        })
        .collect::<serde_json::Result<Vec<_>>>()?;

    serde_json::to_string_pretty(&records).context("Failed to serialize conversions")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pick_formats() {
        let tex = [OutputFormat::Tex];
        let widget = [OutputFormat::Widget];
        assert_eq!(pick_formats(&tex, &widget), vec![OutputFormat::Tex]);
        assert_eq!(pick_formats(&[], &widget), vec![OutputFormat::Widget]);
        assert_eq!(pick_formats(&[], &[]), OutputFormat::ALL.to_vec());
    }

    #[test]
    fn test_render_single_format_is_bare() {
        let output = render_text("{char:a}{par}", &[OutputFormat::Ascii], &ReadConfig::default());
        assert_eq!(output, "a\n");
    }

    #[test]
    fn test_render_sample_sections() {
        let output = render_text(SAMPLE_INPUT, &OutputFormat::ALL, &ReadConfig::default());
        assert!(output.starts_with("ASCII Conversion:\nHelloWorld!\nABC\n"));
        assert!(output.contains("TeX Conversion:\nHello\\textbf{W}"));
        assert!(output.contains("Text Widget Conversion:\nTextWidget{text='H', font='normal'}"));
        assert_eq!(output.matches(SEPARATOR).count(), 3);
    }

    #[test]
    fn test_render_json() {
        let output = render_json(
            "{char:a}rest",
            &[OutputFormat::Tex, OutputFormat::Widget],
            &ReadConfig::default(),
        )
        .unwrap();
        let records: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(records[0]["format"], "tex");
        assert_eq!(records[0]["output"], "a");
        assert_eq!(records[0]["report"]["diagnostic"]["text"], "rest");
        assert_eq!(records[1]["elements"][0]["type"], "text");
        assert_eq!(records[1]["elements"][0]["font"], "normal");
    }

    #[test]
    fn test_sample_json_output_is_pure_json() {
        let cli = Cli::try_parse_from(["rtfconv", "--sample", "--json"]).unwrap();
        let input = read_input(&cli).unwrap();
        let output = render_stdout(&cli, &input, &OutputFormat::ALL, &ReadConfig::default()).unwrap();

        let records: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(records.as_array().map(Vec::len), Some(3));
        assert!(!output.contains("Sample Input:"));
    }

    #[test]
    fn test_sample_text_output_has_header() {
        let cli = Cli::try_parse_from(["rtfconv", "--sample", "-f", "ascii"]).unwrap();
        let input = read_input(&cli).unwrap();
        let output = render_stdout(&cli, &input, &[OutputFormat::Ascii], &ReadConfig::default()).unwrap();

        assert!(output.starts_with("Sample Input:\n{char:H}"));
        assert!(output.ends_with("\n\nHelloWorld!\nABC"));
    }

    #[test]
    fn test_cli_parses_formats() {
        let cli = Cli::try_parse_from(["rtfconv", "-f", "tex", "--format", "widget", "in.txt"]).unwrap();
        assert_eq!(cli.formats, vec![OutputFormat::Tex, OutputFormat::Widget]);
        assert_eq!(cli.input, Some(PathBuf::from("in.txt")));
        assert!(Cli::try_parse_from(["rtfconv", "--sample", "in.txt"]).is_err());
    }
}
