mod configuration;

use std::fs::File;
use std::io::stdout;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use configuration::AppConfiguration;
use indoc::indoc;
use life_core::{EdgeRule, Session, SessionState, Theme};
use life_term::splash::show_splash;
use life_term::{BoardLayout, TermInput, TermPacer, TermPainter, TerminalWindow};
use simplelog::{LevelFilter, WriteLogger};

const AFTER_HELP: &str = indoc! {"
    Themes:
      1 blue, 2 red, 3 green, 4 yellow, 5 light blue, 6 orange, 7 white
      conway 3     play in green
      conway       play in a random theme
    Only the first theme argument is used. Arguments starting with a dash are
    read as options, except negative numbers.

    Keys:
      h j k l / arrows   move the cursor
      space              toggle the cell under the cursor
      enter              run the configured number of ticks
      = / -              add / remove ten ticks
      + / _              add / remove one tick
      d                  clear the board and the tick total
      q                  quit
"};

#[derive(Debug, Parser)]
#[command(
    name = "conway",
    version,
    about = "Conway's Game of Life in the terminal",
    after_help = AFTER_HELP,
    allow_negative_numbers = true
)]
struct Args {
    /// Color theme from 1 to 7. Anything else picks one at random.
    #[arg(value_name = "THEME", allow_negative_numbers = true)]
    themes: Vec<String>,
    /// Write a debug log to debug.log
    #[arg(long)]
    debug: bool,
    /// Configuration file to use instead of the default
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Ticks advanced by each run
    #[arg(long, value_name = "N")]
    ticks: Option<u32>,
    /// Pause between generations in milliseconds
    #[arg(long, value_name = "N")]
    interval_ms: Option<u64>,
    /// Use the older neighbor lookup. It gives the same generations as the
    /// default, since cells below the board are always dead.
    #[arg(long)]
    legacy_edges: bool,
    /// Key that stops a run early
    #[arg(long, value_name = "C")]
    cancel_key: Option<char>,
    /// Go straight to the board
    #[arg(long)]
    no_splash: bool,
    /// Logo shown on the splash screen
    #[arg(long, value_name = "FILE")]
    logo: Option<PathBuf>,
}

impl Args {
    fn theme_arg(&self) -> Option<&str> {
        if self.themes.len() > 1 {
            log::info!("Ignoring extra theme arguments {:?}", &self.themes[1..]);
        }
        self.themes.first().map(String::as_str)
    }

    fn apply_overrides(&self, config: &mut AppConfiguration) {
        if let Some(ticks) = self.ticks {
            config.session.default_ticks = ticks;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.session.tick_interval_ms = interval_ms;
        }
        if self.legacy_edges {
            config.session.edge_rule = EdgeRule::Legacy;
        }
        if self.cancel_key.is_some() {
            config.terminal.cancel_key = self.cancel_key;
        }
        if self.no_splash {
            config.terminal.splash = false;
        }
        if self.logo.is_some() {
            config.terminal.logo_path = self.logo.clone();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.debug)?;

    let mut config = AppConfiguration::load(args.config.as_deref())?;
    args.apply_overrides(&mut config);
    log::debug!("Configuration: {config:?}");

    let theme = Theme::from_arg(args.theme_arg(), &mut rand::rng());
    log::info!("Using theme {}", theme.id());

    let window = TerminalWindow::new().context("could not set up the terminal")?;
    if config.terminal.splash {
        if let Err(e) = show_splash(
            &mut stdout(),
            config.terminal.logo_path.as_deref(),
            (window.width(), window.height()),
            theme,
        ) {
            log::error!("Splash screen failed: {e}");
        }
    }

    let layout = BoardLayout::fit(window.width(), window.height())?;
    let state = SessionState::new(
        &config.session,
        layout.grid_width(),
        layout.grid_height(),
        theme,
    )?;
    let mut session = Session::new(
        state,
        TermInput::default(),
        TermPainter::new(stdout(), layout),
        TermPacer::new(config.terminal.cancel_key),
    );
    session.run()?;
    drop(window);
    Ok(())
}

fn setup_logging(debug: bool) -> anyhow::Result<()> {
    if debug {
        WriteLogger::init(
            LevelFilter::Debug,
            simplelog::ConfigBuilder::new()
                .set_target_level(LevelFilter::Error)
                .build(),
            File::create("debug.log").context("could not create debug.log")?,
        )?;
    }
    Ok(())
}
