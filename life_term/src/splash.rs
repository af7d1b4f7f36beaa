//! Title screen shown before the board. The logo is read from a text file;
//! when it can't be read the splash is skipped and the game starts anyway.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crossterm::cursor::MoveTo;
use crossterm::event::Event;
use crossterm::queue;
use crossterm::style::{PrintStyledContent, StyledContent};
use crossterm::terminal::{Clear, ClearType};
use life_core::Theme;
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

use crate::configuration::ColorScheme;

const TITLE: &str = "CONWAY";
const CREDITS: [&str; 2] = [
    "Developed by Harley Wiltzer",
    "Powered by Destructive Reasoning",
];
const PROMPT: &str = "Press any key to start";

#[derive(Debug, Error)]
pub enum SplashError {
    #[error("no home directory to look for the logo in")]
    NoHomeDirectory,
    #[error("could not read logo file [{path}]")]
    UnreadableLogo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Splash {
    logo: Vec<String>,
}

impl Splash {
    /// `~/.conway/conwaylogo`
    pub fn default_logo_path() -> Result<PathBuf, SplashError> {
        let home = homedir::get_my_home()
            .ok()
            .flatten()
            .ok_or(SplashError::NoHomeDirectory)?;
        let mut path = home;
        path.push(".conway");
        path.push("conwaylogo");
        Ok(path)
    }

    pub fn load(path: &Path) -> Result<Self, SplashError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| SplashError::UnreadableLogo {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_logo(&contents))
    }

    pub fn from_logo(contents: &str) -> Self {
        Splash {
            logo: contents.lines().map(str::to_string).collect(),
        }
    }

    /// Display width of the logo's first line, used to center every line
    fn logo_width(&self) -> usize {
        self.logo.first().map(|line| line.width()).unwrap_or(0)
    }

    /// Draws a border around the screen with the logo and title centered.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        (cols, rows): (u16, u16),
        theme: Theme,
    ) -> io::Result<()> {
        let scheme = ColorScheme::for_theme(theme);
        queue!(out, Clear(ClearType::All))?;
        self.render_border(out, cols, rows, scheme)?;

        let center = usize::from(cols / 2);
        let logo_col = center.saturating_sub(self.logo_width() / 2) as u16;
        let mut row = (rows / 2).saturating_sub(10);
        for line in &self.logo {
            if row + 1 >= rows {
                break;
            }
            queue!(
                out,
                MoveTo(logo_col, row),
                PrintStyledContent(StyledContent::new(scheme.panel_text(), line.as_str()))
            )?;
            row += 1;
        }
        // Title, two credit lines and the prompt stay inside the border
        let title_row = (row + 1).min(rows.saturating_sub(5));
        let title_col = center.saturating_sub(TITLE.len() / 2) as u16;
        queue!(
            out,
            MoveTo(title_col, title_row),
            PrintStyledContent(StyledContent::new(scheme.splash_title(), TITLE))
        )?;
        for (credit_row, credit) in (title_row + 1..).zip(CREDITS) {
            let credit_col = center.saturating_sub(credit.len() / 2) as u16;
            queue!(
                out,
                MoveTo(credit_col, credit_row),
                PrintStyledContent(StyledContent::new(scheme.splash_credits(), credit))
            )?;
        }
        let prompt_col = center.saturating_sub(PROMPT.len() / 2) as u16;
        queue!(
            out,
            MoveTo(prompt_col, title_row + 3),
            PrintStyledContent(StyledContent::new(scheme.panel_text(), PROMPT)),
            MoveTo(0, 0)
        )?;
        out.flush()
    }

    fn render_border<W: Write>(
        &self,
        out: &mut W,
        cols: u16,
        rows: u16,
        scheme: ColorScheme,
    ) -> io::Result<()> {
        if cols < 2 || rows < 2 {
            return Ok(());
        }
        let style = scheme.splash_border();
        let edge = format!("+{}+", "-".repeat(usize::from(cols - 2)));
        queue!(
            out,
            MoveTo(0, 0),
            PrintStyledContent(StyledContent::new(style, edge.as_str()))
        )?;
        for row in 1..rows - 1 {
            queue!(
                out,
                MoveTo(0, row),
                PrintStyledContent(StyledContent::new(style, '|')),
                MoveTo(cols - 1, row),
                PrintStyledContent(StyledContent::new(style, '|'))
            )?;
        }
        queue!(
            out,
            MoveTo(0, rows - 1),
            PrintStyledContent(StyledContent::new(style, edge.as_str()))
        )?;
        Ok(())
    }
}

/// Shows the splash and waits for a key. Problems with the logo are logged and
/// the splash is skipped; only terminal errors are returned.
pub fn show_splash<W: Write>(
    out: &mut W,
    logo_path: Option<&Path>,
    size: (u16, u16),
    theme: Theme,
) -> io::Result<bool> {
    let splash = match logo_path
        .map(|path| Ok(path.to_path_buf()))
        .unwrap_or_else(Splash::default_logo_path)
        .and_then(|path| Splash::load(&path))
    {
        Ok(splash) => splash,
        Err(e) => {
            log::warn!("Skipping splash screen: {e}");
            return Ok(false);
        },
    };
    splash.render(out, size, theme)?;
    wait_for_key()?;
    queue!(out, Clear(ClearType::All))?;
    out.flush()?;
    Ok(true)
}

fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(_) = crossterm::event::read()? {
            return Ok(());
        }
    }
}
