use mazer::app::{App, Settings};
use mazer::maze::Maze;
use mazer::render::NoopRenderer;

const USAGE: &str = "usage: mazer [COLUMNS ROWS] [--seed N] [--headless]";

fn parse_args() -> Result<(Settings, bool), String> {
    let mut settings = Settings::default();
    let mut headless = false;
    let mut dims = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--headless" => headless = true,
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed: {value}"))?;
                settings.seed = Some(seed);
            }
            "--help" | "-h" => return Err(USAGE.to_string()),
            _ => {
                let dim = arg
                    .parse::<u16>()
                    .map_err(|_| format!("invalid dimension: {arg}"))?;
                dims.push(dim);
            }
        }
    }
    match dims.as_slice() {
        [] => {}
        [columns, rows] => {
            settings.num_columns = *columns;
            settings.num_rows = *rows;
        }
        _ => return Err(USAGE.to_string()),
    }
    Ok((settings, headless))
}

/// Log to a file: the terminal is in raw mode while the animation runs,
/// so stdout is not available for diagnostics.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "mazer.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    guard
}

fn run_headless(settings: &Settings) -> std::io::Result<()> {
    let mut maze = Maze::new(
        settings.origin(),
        settings.num_columns,
        settings.num_rows,
        settings.cell_width(),
        settings.cell_height(),
        Box::new(NoopRenderer),
        settings.seed,
    )
    .map_err(std::io::Error::other)?;

    maze.generate()?;
    println!("Maze created.");
    if maze.solve()? {
        println!("Maze solved!");
    } else {
        println!("Couldn't solve this maze.");
    }
    Ok(())
}

fn main() -> std::io::Result<()> {
    let (settings, headless) = match parse_args() {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    // Held until exit so buffered log lines are flushed
    let _guard = init_logging();
    tracing::debug!(?settings, headless, "starting");

    if headless {
        run_headless(&settings)
    } else {
        App::default().run(&settings)
    }
}
