//! Interactive carousel
//!
//! Reads one command per line from stdin and redraws the active slide.
//! Slides keep loading in the background; the screen is redrawn when the
//! active slide settles.

use std::io::Write as _;

use application::{Carousel, Dashboard, Key, KeyOutcome, slide_view};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::render;

pub const HELP: &str = "Commands: n/right, p/left, tab, shift-tab, 1-9 (go to slide), q (quit)";

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    /// Activate the slide with this zero-based index
    Goto(usize),
    Quit,
    Help,
}

/// Parse a line of input; unknown input maps to [`Key::Other`]
pub fn parse_input(line: &str) -> Input {
    let line = line.trim().to_ascii_lowercase();
    match line.as_str() {
        "n" | "right" | "l" => Input::Key(Key::ArrowRight),
        "p" | "left" | "h" => Input::Key(Key::ArrowLeft),
        "tab" | "t" => Input::Key(Key::Tab),
        "shift-tab" | "st" => Input::Key(Key::ShiftTab),
        "q" | "quit" | "exit" => Input::Quit,
        "?" | "help" => Input::Help,
        other => match other.parse::<usize>() {
            Ok(number) if number > 0 => Input::Goto(number - 1),
            _ => Input::Key(Key::Other),
        },
    }
}

fn draw(carousel: &Carousel, dashboard: &Dashboard) -> std::io::Result<()> {
    let Some(snapshot) = dashboard.snapshot(carousel.active()) else {
        return Ok(());
    };
    let text = render::carousel(
        &slide_view(&snapshot),
        carousel.background(),
        &carousel.pagination(),
    );

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}")?;
    stdout.flush()
}

/// Run the interactive loop until `q` or end of input
pub async fn run(mut carousel: Carousel, mut dashboard: Dashboard) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut loading = true;

    println!("{HELP}\n");
    draw(&carousel, &dashboard)?;

    loop {
        tokio::select! {
            settled = dashboard.next_settled(), if loading => match settled {
                Some(index) if index == carousel.active() => draw(&carousel, &dashboard)?,
                Some(index) => debug!(index, "Background slide settled"),
                None => loading = false,
            },
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_input(&line) {
                    Input::Quit => break,
                    Input::Help => println!("{HELP}"),
                    Input::Goto(index) => {
                        if carousel.activate(index).is_some() {
                            draw(&carousel, &dashboard)?;
                        } else {
                            println!("No slide {}", index + 1);
                        }
                    },
                    Input::Key(key) => match carousel.handle_key(key) {
                        KeyOutcome::Navigate(request) => {
                            debug!(index = request.index, smooth = request.smooth, "Scroll");
                            draw(&carousel, &dashboard)?;
                        },
                        KeyOutcome::Focus { index, .. } => {
                            println!("{}", render::pagination(&carousel.pagination()));
                            debug!(index, "Focus moved");
                        },
                        KeyOutcome::Ignored => println!("{HELP}"),
                    },
                }
            },
        }
    }

    Ok(())
}
