use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::Style;
use hueprobe_core::provider::{CaptureOptions, FileCapture, ImageResizer};
use hueprobe_core::sampler::ColorSampler;
use hueprobe_core::session::{CaptureSession, SessionState};

use super::load_config;
use crate::summary::{print_settings, print_state};

#[derive(Args)]
pub struct InteractiveArgs {
    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Capture(PathBuf),
    Retake,
    Show,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    match word {
        "" => Command::Empty,
        "capture" | "c" if !rest.is_empty() => Command::Capture(PathBuf::from(rest)),
        "retake" | "r" => Command::Retake,
        "show" | "s" => Command::Show,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

fn print_help() {
    println!("  capture <path>   capture an image file and detect its color");
    println!("  retake           discard the current photo");
    println!("  show             print the current state");
    println!("  quit             leave");
}

pub fn run(args: &InteractiveArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let sampler = ColorSampler::new(ImageResizer::new(config.sampler.filter));
    let options = CaptureOptions::with_quality(config.capture.quality);
    let error = Style::new().red();

    let mut session = CaptureSession::with_config(&config.session);
    session.subscribe(|state: &SessionState| {
        // Captured is transient here: capture_from settles before returning.
        if !matches!(state, SessionState::Captured { .. }) {
            print_state(state);
        }
    });

    print_settings(&config);
    print_help();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Command::Capture(path) => {
                let provider = FileCapture::new(path);
                if let Err(e) =
                    pollster::block_on(session.capture_from(&provider, options, &sampler))
                {
                    println!("  {}", error.apply_to(e));
                }
            }
            Command::Retake => session.retake(),
            Command::Show => print_state(session.state()),
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Empty => {}
            Command::Unknown(text) => {
                println!("  {}", error.apply_to(format!("unknown command: {text}")));
            }
        }
    }

    Ok(())
}
