use std::io::{IsTerminal, Write};

use clap::Parser;
use color_eyre::Result;

use regex_lens::app::{self, App};
use regex_lens::cli::{Args, Settings};
use regex_lens::config::{self, OutputFormat};
use regex_lens::render::html;
use regex_lens::session;
use regex_lens::{LensError, MarkupEscaper, VerbatimEscaper};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    let mut settings = args.resolve(&config);

    if settings.output == OutputFormat::Tui && !std::io::stdout().is_terminal() {
        log::debug!("stdout is not a terminal, printing JSON instead of the viewer");
        settings.output = OutputFormat::Json;
    }

    // Validation failures never reach the service, but are shown like any other error
    let (text, result) = match session::prepare(&args.pattern, &settings) {
        Ok(request) => {
            let result = session::fetch(&request, &settings).await;
            (request.text, result)
        }
        Err(e) => (String::new(), Err(e)),
    };

    match settings.output {
        OutputFormat::Tui => show_viewer(&args.pattern, &text, &settings, result),
        OutputFormat::Html => print_html(&args.pattern, &text, &settings, result),
        OutputFormat::Json => print_json(&text, result),
    }
}

fn show_viewer(
    pattern: &str,
    text: &str,
    settings: &Settings,
    result: Result<Vec<regex_lens::MatchSpan>, LensError>,
) -> Result<()> {
    match result {
        Ok(matches) => {
            let view = session::visualize(text, &matches, &VerbatimEscaper);
            app::run(App::new(pattern, &settings.flags, view.report, &view.projection))?;
            Ok(())
        }
        Err(e) => {
            app::run(App::with_error(pattern, &settings.flags, e.to_string()))?;
            Err(e.into())
        }
    }
}

fn print_html(
    pattern: &str,
    text: &str,
    settings: &Settings,
    result: Result<Vec<regex_lens::MatchSpan>, LensError>,
) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match result {
        Ok(matches) => {
            let view = session::visualize(text, &matches, &MarkupEscaper);
            let out = if settings.fragment {
                html::render_fragment(&view.report, &view.projection)
            } else {
                html::render_page(pattern, &settings.flags, &view.report, &view.projection)
            };
            writeln!(stdout, "{}", out)?;
            Ok(())
        }
        Err(e) => {
            let out = if settings.fragment {
                html::render_error(&e.to_string())
            } else {
                html::render_error_page(&e.to_string())
            };
            writeln!(stdout, "{}", out)?;
            Err(e.into())
        }
    }
}

fn print_json(text: &str, result: Result<Vec<regex_lens::MatchSpan>, LensError>) -> Result<()> {
    let matches = result?;
    let view = session::visualize(text, &matches, &VerbatimEscaper);
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &view.report)?;
    writeln!(stdout)?;
    Ok(())
}

/// Debug builds log to a file in the temp dir, filtered by `REGEX_LENS_LOG`
#[cfg(debug_assertions)]
fn init_logging() {
    let path = std::env::temp_dir().join("regex-lens.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::new().filter_or("REGEX_LENS_LOG", "debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
