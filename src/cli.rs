// src/cli.rs
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::options::{AppOptions, ExportFormat};
use crate::data::{cert_counts, CertField, RowFilter};
use crate::error::{Error, Result};
use crate::profile::{catalog, ProfileProcessor, SampleSource};
use crate::progress::Progress;
use crate::{file, input};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
    Xlsx,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
            FormatArg::Xlsx => ExportFormat::Xlsx,
        }
    }
}

/// Turn LinkedIn profile URLs into an HR profile/certification table (sample data).
#[derive(Debug, Parser)]
#[command(name = "cli", version)]
pub struct Args {
    /// Profile URLs; combined with --input when both are given
    pub urls: Vec<String>,

    /// CSV/TSV/XLSX file (header row) or text file with one URL per line
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Header of the URL column in --input (guessed when omitted)
    #[arg(long)]
    pub column: Option<String>,

    /// Output file or directory (trailing separator); default out/linkedin_profiles_<timestamp>
    #[arg(short, long)]
    pub out: Option<String>,

    /// Output format; an extension on --out wins
    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Omit the header row in CSV/TSV output
    #[arg(long)]
    pub no_headers: bool,

    /// Keep only HR-related rows
    #[arg(long)]
    pub hr_only: bool,

    /// Keep only rows with a certification
    #[arg(long)]
    pub certified_only: bool,

    /// Keep rows whose profile name contains this text (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// Keep rows whose company contains this text (case-insensitive)
    #[arg(long)]
    pub company: Option<String>,

    /// Keep rows with exactly this certification code
    #[arg(long)]
    pub certification: Option<String>,

    /// Seed for reproducible sample data
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulated delay per profile, in milliseconds
    #[arg(long)]
    pub pause_ms: Option<u64>,

    /// Print the certification catalog and exit
    #[arg(long)]
    pub list_certifications: bool,

    /// Echo log events to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Map flags onto the shared option structs.
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.process.seed = self.seed;
        opts.process.hr_only = self.hr_only;
        opts.process.certified_only = self.certified_only;
        if let Some(ms) = self.pause_ms {
            opts.process.pause_ms = ms;
        }
        opts.export.format = self.format.into();
        opts.export.include_headers = !self.no_headers;
        if let Some(out) = &self.out {
            opts.export.set_path(out);
        }
        opts
    }

    pub fn search_filter(&self) -> RowFilter {
        RowFilter::search(
            self.name.as_deref().unwrap_or(""),
            self.company.as_deref().unwrap_or(""),
            self.certification.as_deref(),
        )
    }

    /// Positional URLs first, then the file's.
    pub fn collect_urls(&self) -> Result<Vec<String>> {
        let mut urls: Vec<String> = self.urls.iter().flat_map(|u| input::parse_text(u)).collect();
        if let Some(path) = &self.input {
            urls.extend(input::load_urls(path, self.column.as_deref())?);
        }
        Ok(urls)
    }
}

/// Per-URL progress on stderr.
pub struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, done: usize, total: usize) {
        eprint!("\rProcessing profile {done} of {total}");
        let _ = std::io::stderr().flush();
        if done == total {
            eprintln!();
        }
    }
}

/// What a CLI run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub rows: usize,
    pub file_written: Option<PathBuf>,
}

pub fn run(args: &Args) -> Result<RunSummary> {
    if args.list_certifications {
        for e in catalog::CATALOG {
            println!("{},{},{}", e.code, e.provider, e.kind);
        }
        return Ok(RunSummary::default());
    }

    let opts = args.to_options();
    let urls = args.collect_urls()?;
    if urls.is_empty() {
        return Err(Error::Input(s!("Please provide LinkedIn profile URLs")));
    }

    let invalid = urls.iter().filter(|u| !ProfileProcessor::<SampleSource>::validate(u)).count();
    if invalid > 0 {
        logw!("Input: {} of {} urls invalid", invalid, urls.len());
        eprintln!("Found {invalid} invalid LinkedIn URLs (skipped)");
    }
    if invalid == urls.len() {
        return Err(Error::Input(s!("No valid LinkedIn URLs found")));
    }
    eprintln!("Processing {} LinkedIn profiles...", urls.len() - invalid);

    let mut processor = ProfileProcessor::from_options(SampleSource::new(opts.process.seed), &opts.process);
    let report = processor.process_batch(&urls, &mut CliProgress);

    for (url, msg) in report.failures() {
        eprintln!("Error processing {url}: {msg}");
    }

    let mut results = report.into_result_set();
    results.retain(&RowFilter::post_pass(opts.process.hr_only, opts.process.certified_only));
    let view = results.view(&args.search_filter());

    if view.is_empty() {
        println!("No data could be extracted from the provided URLs");
        return Ok(RunSummary::default());
    }

    let summary = view.summary();
    for (label, count) in summary.metrics() {
        println!("{label:<20} {count}");
    }
    let codes = cert_counts(view.iter(), CertField::Code);
    if !codes.is_empty() {
        println!();
        println!("Certifications:");
        for (code, n) in codes {
            println!("  {code:<10} {n}");
        }
    }

    let rows = view.to_owned_rows();
    let path = file::write_export(&opts.export, &rows)?;
    println!("Wrote {}", path.display());

    Ok(RunSummary { rows: rows.len(), file_written: Some(path) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_options() {
        let args = Args::try_parse_from([
            "cli", "--hr-only", "--seed", "5", "--pause-ms", "0", "--format", "tsv",
            "--no-headers", "https://linkedin.com/in/a",
        ])
        .unwrap();
        let opts = args.to_options();
        assert!(opts.process.hr_only);
        assert_eq!(opts.process.seed, Some(5));
        assert_eq!(opts.process.pause_ms, 0);
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert!(!opts.export.include_headers);
        assert_eq!(args.urls, vec!["https://linkedin.com/in/a"]);
    }

    #[test]
    fn out_extension_overrides_format() {
        let args = Args::try_parse_from(["cli", "-o", "report.xlsx", "x"]).unwrap();
        assert_eq!(args.to_options().export.format, ExportFormat::Xlsx);
    }

    #[test]
    fn missing_urls_is_an_input_error() {
        let args = Args::try_parse_from(["cli"]).unwrap();
        assert!(matches!(run(&args), Err(Error::Input(_))));
    }

    #[test]
    fn all_invalid_is_an_input_error() {
        let args = Args::try_parse_from(["cli", "--pause-ms", "0", "bad", "https://example.com/in/x"]).unwrap();
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("No valid LinkedIn URLs"));
    }

    #[test]
    fn end_to_end_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("run.csv");
        let args = Args::try_parse_from([
            "cli", "--pause-ms", "0", "--seed", "1",
            "-o", out.to_str().unwrap(),
            "https://www.linkedin.com/in/a", "nope", "https://www.linkedin.com/in/b",
        ])
        .unwrap();
        let summary = run(&args).unwrap();
        assert_eq!(summary.file_written.as_deref(), Some(out.as_path()));
        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text.lines().count(), summary.rows + 1);
        assert!(text.starts_with("profile_url,"));
    }
}
