pub mod configuration;
pub mod input_event;
mod key_map;
pub mod layout;
mod render;
pub mod splash;

use std::io::stdout;
use std::panic;

use crossterm::execute;
use getset::CopyGetters;

pub use configuration::TermConfiguration;
pub use input_event::{TermInput, TermPacer};
pub use key_map::KeyMap;
pub use layout::BoardLayout;
pub use render::TermPainter;

/// Owns the terminal while the game runs. Raw mode and the alternate screen
/// are switched on when it is created and restored when it is dropped, or when
/// the program panics.
#[derive(Debug, CopyGetters)]
pub struct TerminalWindow {
    #[getset(get_copy = "pub")]
    width: u16,
    #[getset(get_copy = "pub")]
    height: u16,
}

impl TerminalWindow {
    pub fn new() -> std::io::Result<TerminalWindow> {
        Self::reset_terminal_on_panic();
        Self::set_terminal_state()?;
        let (width, height) = crossterm::terminal::size()?;
        log::debug!("Terminal is {width}x{height}");
        Ok(TerminalWindow { width, height })
    }

    fn reset_terminal_state() -> std::io::Result<()> {
        crossterm::terminal::disable_raw_mode()?;
        execute!(
            stdout(),
            crossterm::style::ResetColor,
            crossterm::cursor::Show,
            crossterm::terminal::LeaveAlternateScreen
        )?;
        Ok(())
    }

    fn set_terminal_state() -> std::io::Result<()> {
        execute!(
            stdout(),
            crossterm::terminal::EnterAlternateScreen,
            crossterm::terminal::SetTitle("Conway"),
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All)
        )?;
        crossterm::terminal::enable_raw_mode()?;
        Ok(())
    }

    fn reset_terminal_on_panic() {
        let default_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            log::error!(
                "Panic occurred\n{:#?}\n\nAttempting to reset terminal",
                panic_info
            );

            match Self::reset_terminal_state() {
                Ok(()) => {
                    log::info!("Successfully reset terminal")
                },
                Err(e) => {
                    log::error!("Failure resetting terminal: {:#?}", e)
                },
            }
            default_hook(panic_info)
        }))
    }
}

impl Drop for TerminalWindow {
    fn drop(&mut self) {
        match Self::reset_terminal_state() {
            Ok(()) => {
                log::info!("Successfully reset terminal from Drop")
            },
            Err(e) => {
                log::error!("Failure resetting terminal from Drop: {:#?}", e)
            },
        }
    }
}
