use std::path::PathBuf;

use drunken_bishop::{Board, Config, InputMode, utils};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: drunken_bishop [--md5 | --hex | --raw] [--title TEXT] \
[--width N] [--height N] [--config PATH] [--expect PATH] INPUT...";

/// Command line overrides on top of the config file
#[derive(Debug, Default)]
struct Args {
    mode: Option<InputMode>,
    title: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    config: Option<PathBuf>,
    expect: Option<PathBuf>,
    inputs: Vec<String>,
}

fn flag_value(argv: &mut impl Iterator<Item = String>, name: &str) -> Result<String, String> {
    argv.next().ok_or_else(|| format!("{name} needs a value"))
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args, Box<dyn std::error::Error>> {
    let mut args = Args::default();
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--md5" => args.mode = Some(InputMode::Md5),
            "--hex" => args.mode = Some(InputMode::Hex),
            "--raw" => args.mode = Some(InputMode::Raw),
            "--title" => args.title = Some(flag_value(&mut argv, "--title")?),
            "--width" => args.width = Some(flag_value(&mut argv, "--width")?.parse()?),
            "--height" => args.height = Some(flag_value(&mut argv, "--height")?.parse()?),
            "--config" => args.config = Some(PathBuf::from(flag_value(&mut argv, "--config")?)),
            "--expect" => args.expect = Some(PathBuf::from(flag_value(&mut argv, "--expect")?)),
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            "--" => args.inputs.extend(argv.by_ref()),
            flag if flag.starts_with("--") => {
                return Err(format!("unknown flag {flag}\n{USAGE}").into());
            }
            _ => args.inputs.push(arg),
        }
    }
    if args.inputs.is_empty() {
        return Err(USAGE.into());
    }
    Ok(args)
}

/// Compare a rendering against the contents of an expectation file.
///
/// Trailing newlines in the file are ignored. On mismatch the error carries the
/// side-by-side comparison.
fn check_expected(expected: &str, art: &str) -> Result<(), String> {
    let expected = expected.trim_end_matches('\n');
    if expected == art {
        Ok(())
    } else {
        Err(utils::side_by_side(expected, art))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    // Load config
    let config_path = args.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load_from(&config_path);
    if let Some(width) = args.width {
        config.set_width(width);
    }
    if let Some(height) = args.height {
        config.set_height(height);
    }
    if args.title.is_some() {
        config.set_title(args.title.clone());
    }
    if let Some(mode) = args.mode {
        config.set_mode(mode);
    }
    let mode = config.input_mode()?;

    let mut board = Board::from_config(&config)?;
    tracing::info!(
        width = board.width(),
        height = board.height(),
        mode = mode.as_str(),
        inputs = args.inputs.len(),
        "drawing randomart"
    );

    // Every input lands on the same board
    let mut art = board.render();
    for input in &args.inputs {
        art = board.make_art(input, mode)?;
    }

    if let Some(path) = &args.expect {
        let expected = std::fs::read_to_string(path)?;
        if let Err(comparison) = check_expected(&expected, &art) {
            eprintln!("{comparison}");
            return Err(format!("rendering differs from {}", path.display()).into());
        }
    }
    println!("{art}");

    Ok(())
}
