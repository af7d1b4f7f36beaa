use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use life_core::{Command, Compass, TickAdjustment};

#[derive(Debug, Eq, Hash, PartialEq)]
struct KeyCombo(KeyCode, KeyModifiers);

impl KeyCombo {
    /// Terminals disagree on whether shifted symbols like `+` or `_` carry
    /// SHIFT, so it is dropped for character keys.
    fn normalized(code: KeyCode, modifiers: KeyModifiers) -> Self {
        match code {
            KeyCode::Char(_) => KeyCombo(code, modifiers - KeyModifiers::SHIFT),
            _ => KeyCombo(code, modifiers),
        }
    }
}

#[derive(Debug)]
pub struct KeyMap {
    bindings: HashMap<KeyCombo, Command>,
}

impl Default for KeyMap {
    fn default() -> Self {
        KeyMap {
            bindings: [
                (KeyCode::Char('q'), Command::Quit),
                (KeyCode::Char(' '), Command::Toggle),
                (KeyCode::Enter, Command::Run),
                (KeyCode::Char('h'), Command::Move(Compass::West)),
                (KeyCode::Char('j'), Command::Move(Compass::South)),
                (KeyCode::Char('k'), Command::Move(Compass::North)),
                (KeyCode::Char('l'), Command::Move(Compass::East)),
                (KeyCode::Left, Command::Move(Compass::West)),
                (KeyCode::Down, Command::Move(Compass::South)),
                (KeyCode::Up, Command::Move(Compass::North)),
                (KeyCode::Right, Command::Move(Compass::East)),
                (KeyCode::Char('d'), Command::Clear),
                (
                    KeyCode::Char('='),
                    Command::AdjustTicks(TickAdjustment::IncreaseByTen),
                ),
                (
                    KeyCode::Char('-'),
                    Command::AdjustTicks(TickAdjustment::DecreaseByTen),
                ),
                (
                    KeyCode::Char('+'),
                    Command::AdjustTicks(TickAdjustment::IncreaseByOne),
                ),
                (
                    KeyCode::Char('_'),
                    Command::AdjustTicks(TickAdjustment::DecreaseByOne),
                ),
            ]
            .into_iter()
            .map(|(code, command)| (KeyCombo(code, KeyModifiers::NONE), command))
            .collect(),
        }
    }
}

impl KeyMap {
    pub fn command_for_key(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
        self.bindings
            .get(&KeyCombo::normalized(code, modifiers))
            .copied()
    }
}
