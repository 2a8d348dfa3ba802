// Author: Dustin Pilgrim
// License: MIT

/// Raw keypresses the terminal layer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    CtrlC,
    CtrlD,
}

/// Everything that can land in the dispatcher queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A full line from a line-buffered (non-tty) stdin.
    Line(String),

    /// A single keypress from a raw-mode terminal.
    Key(Key),

    /// SIGINT delivered outside raw mode.
    Interrupt,

    /// stdin reached end-of-input.
    Closed,

    /// Display refresh from the ticker.
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopTrigger {
    Line,
    Key,
    Interrupt,
    EndOfInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Lap,
    Stop(StopTrigger),
    Unknown(String),
}

impl Command {
    fn word(&self) -> Option<&'static str> {
        match self {
            Command::Lap => Some("lap"),
            Command::Stop(_) => Some("stop"),
            Command::Unknown(_) => None,
        }
    }
}

/// Maps a typed line onto the command vocabulary. Blank lines map to nothing.
pub fn parse_line(line: &str) -> Option<Command> {
    match line.trim() {
        "" => None,
        "lap" => Some(Command::Lap),
        "stop" => Some(Command::Stop(StopTrigger::Line)),
        other => Some(Command::Unknown(other.to_string())),
    }
}

/// What the editor did with a key, for echoing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Inserted(char),
    Erased,
    Submitted,
    Nothing,
}

/// Assembles raw keypresses into lines.
///
/// With hotkeys on, `l`/`s` on an empty line fire `Lap`/`Stop` at once. If the
/// user goes on to type the full word and hits Enter, that line is swallowed
/// since its command already ran.
#[derive(Debug, Default)]
pub struct LineEditor {
    buf: String,
    fired: Option<Command>,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buf
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.fired = None;
    }

    /// Feeds a key for the command loop. Returns the edit and any command it triggers.
    pub fn feed(&mut self, key: Key) -> (Edit, Option<Command>) {
        match key {
            Key::Char(c) if self.buf.is_empty() => {
                let hotkey = match c.to_ascii_lowercase() {
                    'l' => Some(Command::Lap),
                    's' => Some(Command::Stop(StopTrigger::Key)),
                    _ => None,
                };
                self.buf.push(c);
                self.fired = hotkey.clone();
                (Edit::Inserted(c), hotkey)
            }
            Key::Enter => {
                let line = std::mem::take(&mut self.buf);
                let fired = self.fired.take();
                let cmd = parse_line(&line);

                let already_ran = match (&fired, &cmd) {
                    (Some(f), _) if line.trim().len() == 1 => f.word().is_some(),
                    (Some(f), Some(c)) => f.word().is_some() && f.word() == c.word(),
                    _ => false,
                };

                (Edit::Submitted, if already_ran { None } else { cmd })
            }
            Key::CtrlC => (Edit::Nothing, Some(Command::Stop(StopTrigger::Interrupt))),
            Key::CtrlD if self.buf.is_empty() => {
                (Edit::Nothing, Some(Command::Stop(StopTrigger::EndOfInput)))
            }
            other => (self.edit(other), None),
        }
    }

    /// Feeds a key for a prompt answer (no hotkeys). Returns the answer on Enter.
    pub fn feed_plain(&mut self, key: Key) -> (Edit, Option<String>) {
        match key {
            Key::Enter => {
                self.fired = None;
                (Edit::Submitted, Some(std::mem::take(&mut self.buf)))
            }
            other => (self.edit(other), None),
        }
    }

    fn edit(&mut self, key: Key) -> Edit {
        match key {
            Key::Char(c) => {
                self.buf.push(c);
                Edit::Inserted(c)
            }
            Key::Backspace => {
                if self.buf.pop().is_none() {
                    return Edit::Nothing;
                }
                if self.buf.is_empty() {
                    self.fired = None;
                }
                Edit::Erased
            }
            _ => Edit::Nothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(ed: &mut LineEditor, s: &str) -> Vec<Command> {
        s.chars()
            .filter_map(|c| ed.feed(Key::Char(c)).1)
            .collect()
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("lap"), Some(Command::Lap));
        assert_eq!(parse_line("  stop \n"), Some(Command::Stop(StopTrigger::Line)));
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("laps"), Some(Command::Unknown("laps".into())));
        assert_eq!(parse_line("LAP"), Some(Command::Unknown("LAP".into())));
    }

    #[test]
    fn test_hotkeys_fire_on_empty_line() {
        let mut ed = LineEditor::new();
        assert_eq!(ed.feed(Key::Char('l')), (Edit::Inserted('l'), Some(Command::Lap)));
        ed.feed(Key::Enter);

        assert_eq!(
            ed.feed(Key::Char('S')).1,
            Some(Command::Stop(StopTrigger::Key))
        );
    }

    #[test]
    fn test_hotkey_word_not_dispatched_twice() {
        let mut ed = LineEditor::new();
        assert_eq!(type_str(&mut ed, "lap"), vec![Command::Lap]);
        assert_eq!(ed.feed(Key::Enter), (Edit::Submitted, None));

        assert_eq!(type_str(&mut ed, "l"), vec![Command::Lap]);
        assert_eq!(ed.feed(Key::Enter).1, None);
    }

    #[test]
    fn test_hotkey_then_other_word_is_unknown() {
        let mut ed = LineEditor::new();
        assert_eq!(type_str(&mut ed, "lx"), vec![Command::Lap]);
        assert_eq!(ed.feed(Key::Enter).1, Some(Command::Unknown("lx".into())));
    }

    #[test]
    fn test_letters_mid_line_are_plain() {
        let mut ed = LineEditor::new();
        assert!(type_str(&mut ed, "als").is_empty());
        assert_eq!(ed.buffer(), "als");
        assert_eq!(ed.feed(Key::Enter).1, Some(Command::Unknown("als".into())));
    }

    #[test]
    fn test_backspace_resets_hotkey() {
        let mut ed = LineEditor::new();
        type_str(&mut ed, "l");
        assert_eq!(ed.feed(Key::Backspace).0, Edit::Erased);
        assert_eq!(ed.feed(Key::Backspace).0, Edit::Nothing);
        assert!(type_str(&mut ed, "xlap").is_empty());
        for _ in 0..4 {
            ed.feed(Key::Backspace);
        }
        // "lap" retyped from scratch fires the hotkey again
        assert_eq!(type_str(&mut ed, "lap"), vec![Command::Lap]);
    }

    #[test]
    fn test_ctrl_keys() {
        let mut ed = LineEditor::new();
        assert_eq!(
            ed.feed(Key::CtrlC).1,
            Some(Command::Stop(StopTrigger::Interrupt))
        );
        assert_eq!(
            ed.feed(Key::CtrlD).1,
            Some(Command::Stop(StopTrigger::EndOfInput))
        );

        type_str(&mut ed, "x");
        assert_eq!(ed.feed(Key::CtrlD).1, None);
        assert_eq!(
            ed.feed(Key::CtrlC).1,
            Some(Command::Stop(StopTrigger::Interrupt))
        );
    }

    #[test]
    fn test_plain_mode_has_no_hotkeys() {
        let mut ed = LineEditor::new();
        for c in "Yes".chars() {
            assert_eq!(ed.feed_plain(Key::Char(c)).1, None);
        }
        assert_eq!(ed.feed_plain(Key::Enter).1, Some("Yes".to_string()));
        assert_eq!(ed.buffer(), "");
    }
}
