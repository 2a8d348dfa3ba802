// Author: Dustin Pilgrim
// License: MIT

use std::io::{self, IsTerminal};

use crossterm::event::{Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use futures::StreamExt;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::Sender;

use crate::core::events::{Input, Key};

/// Puts the terminal in raw mode; restores it on drop.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            crate::lwarn!("input", "failed to restore terminal: {e}");
        }
    }
}

pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

/// Starts the stdin producers. Returns a raw-mode guard when keypresses are read raw.
pub fn spawn_input(tx: Sender<Input>) -> Option<RawModeGuard> {
    spawn_interrupt_listener(tx.clone());

    if stdin_is_tty() {
        match RawModeGuard::enable() {
            Ok(guard) => {
                crate::ldebug!("input", "raw keypress mode");
                tokio::spawn(run_key_reader(tx));
                return Some(guard);
            }
            Err(e) => {
                crate::lwarn!("input", "raw mode unavailable, falling back to lines: {e}");
            }
        }
    }

    crate::ldebug!("input", "line mode");
    tokio::spawn(run_line_reader(tx));
    None
}

fn spawn_interrupt_listener(tx: Sender<Input>) {
    tokio::spawn(async move {
        loop {
            if tokio::signal::ctrl_c().await.is_err() {
                crate::lwarn!("input", "ctrl-c listener unavailable");
                break;
            }
            crate::linfo!("input", "received Ctrl+C");
            if tx.send(Input::Interrupt).await.is_err() {
                break;
            }
        }
    });
}

async fn run_line_reader(tx: Sender<Input>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let msg = match lines.next_line().await {
            Ok(Some(line)) => Input::Line(line),
            Ok(None) => Input::Closed,
            Err(e) => {
                crate::lwarn!("input", "stdin read failed: {e}");
                Input::Closed
            }
        };

        let closed = msg == Input::Closed;
        if tx.send(msg).await.is_err() || closed {
            break;
        }
    }
}

async fn run_key_reader(tx: Sender<Input>) {
    let mut events = EventStream::new();

    while let Some(ev) = events.next().await {
        let msg = match ev {
            Ok(TermEvent::Key(key)) => match map_key(key) {
                Some(k) => Input::Key(k),
                None => continue,
            },
            Ok(_) => continue,
            Err(e) => {
                crate::lwarn!("input", "terminal event error: {e}");
                Input::Closed
            }
        };

        let closed = msg == Input::Closed;
        if tx.send(msg).await.is_err() || closed {
            return;
        }
    }

    let _ = tx.send(Input::Closed).await;
}

fn map_key(key: KeyEvent) -> Option<Key> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => Some(Key::CtrlC),
        KeyCode::Char('d') | KeyCode::Char('D') if ctrl => Some(Key::CtrlD),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_map_key() {
        assert_eq!(
            map_key(key(KeyCode::Char('l'), KeyModifiers::NONE)),
            Some(Key::Char('l'))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::CtrlC)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            Some(Key::CtrlD)
        );
        assert_eq!(map_key(key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
        assert_eq!(map_key(key(KeyCode::Enter, KeyModifiers::NONE)), Some(Key::Enter));
        assert_eq!(map_key(key(KeyCode::Up, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut ev = key(KeyCode::Char('s'), KeyModifiers::NONE);
        ev.kind = KeyEventKind::Release;
        assert_eq!(map_key(ev), None);
    }
}
