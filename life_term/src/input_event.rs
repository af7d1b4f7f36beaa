use std::io;
use std::time::{Duration, Instant};

pub use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use life_core::{Command, InputSource, Pace, Pacer, SleepPacer};

use crate::KeyMap;

/// Reads commands from the terminal, blocking until a key is pressed.
#[derive(Debug, Default)]
pub struct TermInput {
    key_map: KeyMap,
}

impl TermInput {
    pub fn new(key_map: KeyMap) -> Self {
        TermInput { key_map }
    }

    /// Anything that is not a bound key becomes [Command::Noop]. The board
    /// never changes size, so resizes are only logged.
    pub fn command_for_event(&self, event: Event) -> Command {
        match event {
            Event::Key(KeyEvent {
                code, modifiers, ..
            }) => self
                .key_map
                .command_for_key(code, modifiers)
                .unwrap_or(Command::Noop),
            Event::Resize(width, height) => {
                log::debug!("Terminal resized to {width}x{height}, board keeps its size");
                Command::Noop
            },
            _ => Command::Noop,
        }
    }
}

impl InputSource for TermInput {
    fn next_command(&mut self) -> io::Result<Command> {
        let event = crossterm::event::read()?;
        Ok(self.command_for_event(event))
    }
}

/// Paces runs in real time. Without a cancel key it just sleeps; with one it
/// watches the keyboard during each pause and cancels the run when that key
/// is pressed. Other keys pressed during a cancellable run are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct TermPacer {
    cancel_key: Option<KeyCode>,
}

impl TermPacer {
    pub fn new(cancel_key: Option<char>) -> Self {
        TermPacer {
            cancel_key: cancel_key.map(KeyCode::Char),
        }
    }

    pub fn cancel_key(&self) -> Option<KeyCode> {
        self.cancel_key
    }

    fn watch_for_cancel(cancel_key: KeyCode, interval: Duration) -> io::Result<Pace> {
        let deadline = Instant::now() + interval;
        loop {
            let now = Instant::now();
            if now >= deadline {
                return Ok(Pace::Continue);
            }
            if !crossterm::event::poll(deadline - now)? {
                return Ok(Pace::Continue);
            }
            match crossterm::event::read()? {
                Event::Key(KeyEvent { code, .. }) if code == cancel_key => {
                    return Ok(Pace::Cancel)
                },
                event => log::trace!("Dropping {event:?} during run"),
            }
        }
    }
}

impl Pacer for TermPacer {
    fn pause(&mut self, interval: Duration) -> Pace {
        let Some(cancel_key) = self.cancel_key else {
            return SleepPacer.pause(interval);
        };
        let started = Instant::now();
        match Self::watch_for_cancel(cancel_key, interval) {
            Ok(pace) => pace,
            Err(e) => {
                log::error!("Error watching for cancel key, run can't be stopped: {e:?}");
                SleepPacer.pause(interval.saturating_sub(started.elapsed()))
            },
        }
    }
}

#[cfg(test)]
mod test {
    use life_core::{Compass, TickAdjustment};
    use test_log::test;

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn keys_become_commands() {
        let input = TermInput::default();
        assert_eq!(
            input.command_for_event(key(KeyCode::Char('k'), KeyModifiers::NONE)),
            Command::Move(Compass::North)
        );
        assert_eq!(
            input.command_for_event(key(KeyCode::Char('_'), KeyModifiers::SHIFT)),
            Command::AdjustTicks(TickAdjustment::DecreaseByOne)
        );
        assert_eq!(
            input.command_for_event(key(KeyCode::Enter, KeyModifiers::NONE)),
            Command::Run
        );
    }

    #[test]
    fn unbound_keys_and_resizes_are_noops() {
        let input = TermInput::default();
        assert_eq!(
            input.command_for_event(key(KeyCode::Char('z'), KeyModifiers::NONE)),
            Command::Noop
        );
        assert_eq!(input.command_for_event(Event::Resize(10, 10)), Command::Noop);
    }

    #[test]
    fn pacer_without_cancel_key_sleeps() {
        let mut pacer = TermPacer::new(None);
        assert_eq!(pacer.cancel_key(), None);
        let started = Instant::now();
        assert_eq!(pacer.pause(Duration::from_millis(5)), Pace::Continue);
        assert!(started.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn cancel_key_is_a_plain_character() {
        assert_eq!(
            TermPacer::new(Some('c')).cancel_key(),
            Some(KeyCode::Char('c'))
        );
    }
}
