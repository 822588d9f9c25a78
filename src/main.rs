//! folio - replay widget interactions against an HTML page

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use folio::{Action, ChangeApi, Environment, MediaSupport, ViewerOptions, initialize, read_html};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Run the book viewer and scroll reveal widgets against an HTML page", long_about = None)]
#[command(after_help = "ACTIONS:
    next, prev              Click the first viewer's navigation buttons
    thumb:N                 Click the first viewer's Nth thumbnail
    wait:MS                 Let MS milliseconds pass
    settle                  Let every running page turn finish
    resize:W                Resize the viewport to W pixels
    reveal:SEL[@RATIO]      Scroll elements matching SEL into view

EXAMPLES:
    folio book.html -a next -a settle         Show the second spread
    folio book.html --width 600 -o out.html   Render the mobile grid")]
struct Cli {
    /// Input HTML file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Write the resulting HTML here instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Initial viewport width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Run as if matchMedia were unavailable
    #[arg(long)]
    no_media_queries: bool,

    /// Subscribe to breakpoint changes through the legacy addListener API
    #[arg(long, conflicts_with = "no_media_queries")]
    legacy_media_listener: bool,

    /// Run as if IntersectionObserver were unavailable
    #[arg(long)]
    no_intersection_observer: bool,

    /// JSON file overriding timings and thresholds
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Action to replay, in order (repeatable)
    #[arg(short, long = "action", value_name = "ACTION")]
    actions: Vec<Action>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        eprintln!("warning: logger already initialized");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> folio::Result<()> {
    let options = match &cli.config {
        Some(path) => ViewerOptions::from_json(&fs::read_to_string(path)?)?,
        None => ViewerOptions::default(),
    };

    let media = if cli.no_media_queries {
        MediaSupport::Unavailable
    } else if cli.legacy_media_listener {
        MediaSupport::Available(ChangeApi::LegacyListener)
    } else {
        MediaSupport::Available(ChangeApi::EventListener)
    };
    let env = Environment {
        viewport_width: cli.width,
        media,
        intersection_observer: !cli.no_intersection_observer,
    };

    let mut page = initialize(read_html(&cli.input)?, env, options);
    log::info!(
        "{}: {} viewers, {} shared pages",
        cli.input.display(),
        page.viewers().len(),
        page.shared_pages().len()
    );

    for action in &cli.actions {
        log::debug!("{action} at {}ms", page.now());
        action.apply(&mut page)?;
    }

    let html = page.to_html();
    match &cli.output {
        Some(path) => fs::write(path, html)?,
        None => println!("{html}"),
    }
    Ok(())
}
