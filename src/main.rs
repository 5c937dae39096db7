use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use offline_html_inliner::{InlineOptions, Inliner};

const USAGE: &str = "Usage: offline-html-inliner input.html output.single.html";

#[derive(Parser)]
#[command(name = "offline-html-inliner")]
#[command(about = "Inline local images of an HTML page as data URIs")]
#[command(version)]
struct Cli {
    /// HTML document to pack
    input: Option<PathBuf>,

    /// Where the single-file document is written
    output: Option<PathBuf>,

    /// Accepted and ignored
    #[arg(hide = true)]
    extra: Vec<OsString>,

    /// Resolve image references against this directory instead of the input's
    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Leave `data-full` attributes untouched
    #[arg(long)]
    no_data_full: bool,

    /// Also write a JSON report of every examined reference
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
}

impl Cli {
    fn options(&self) -> InlineOptions {
        let mut options = InlineOptions::default().with_data_full(!self.no_data_full);
        if let Some(dir) = &self.base_dir {
            options = options.with_base_dir(dir);
        }
        if let Some(path) = &self.report {
            options = options.with_report_path(path);
        }
        options
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            print!("{err}");
            println!("{USAGE}");
            return ExitCode::from(1);
        }
    };

    let (Some(input), Some(output)) = (&cli.input, &cli.output) else {
        println!("{USAGE}");
        return ExitCode::from(1);
    };
    if !cli.extra.is_empty() {
        log::debug!("ignoring {} extra argument(s)", cli.extra.len());
    }

    match Inliner::new(cli.options()).run(input, output) {
        Ok(report) => {
            println!("{}", report.summary());
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
