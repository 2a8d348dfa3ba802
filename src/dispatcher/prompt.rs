// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::mpsc::Receiver;

use crate::core::events::{Edit, Input, Key, LineEditor};
use crate::ui::{Presenter, PromptKind, UiEvent};

/// Shows a prompt and reads one answer from the input queue.
///
/// Ctrl-C and end-of-input give `None`, which callers treat as "no".
pub async fn ask<P: Presenter>(
    rx: &mut Receiver<Input>,
    presenter: &mut P,
    kind: PromptKind,
) -> Option<String> {
    presenter.render(UiEvent::Prompt(kind));

    let mut editor = LineEditor::new();

    while let Some(input) = rx.recv().await {
        match input {
            Input::Line(line) => return Some(line),
            Input::Key(Key::CtrlC) | Input::Key(Key::CtrlD) => {
                presenter.render(UiEvent::Echo(Edit::Submitted));
                return None;
            }
            Input::Key(key) => {
                let (edit, answer) = editor.feed_plain(key);
                if edit != Edit::Nothing {
                    presenter.render(UiEvent::Echo(edit));
                }
                if answer.is_some() {
                    return answer;
                }
            }
            Input::Interrupt | Input::Closed => return None,
            Input::Tick => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::RecordingPresenter;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_line_answer() {
        let (tx, mut rx) = mpsc::channel(8);
        tx.send(Input::Tick).await.unwrap();
        tx.send(Input::Line("y".into())).await.unwrap();

        let mut p = RecordingPresenter::default();
        let answer = ask(&mut rx, &mut p, PromptKind::ShowAllHistory).await;
        assert_eq!(answer.as_deref(), Some("y"));
        assert_eq!(p.events()[0], UiEvent::Prompt(PromptKind::ShowAllHistory));
    }

    #[tokio::test]
    async fn test_key_answer_ignores_hotkeys() {
        let (tx, mut rx) = mpsc::channel(8);
        for k in [Key::Char('s'), Key::Char('x'), Key::Backspace, Key::Enter] {
            tx.send(Input::Key(k)).await.unwrap();
        }

        let mut p = RecordingPresenter::default();
        let answer = ask(&mut rx, &mut p, PromptKind::DeleteHistory).await;
        assert_eq!(answer.as_deref(), Some("s"));
    }

    #[tokio::test]
    async fn test_interrupt_and_close_mean_no_answer() {
        let mut p = RecordingPresenter::default();

        let (tx, mut rx) = mpsc::channel(8);
        tx.send(Input::Key(Key::CtrlC)).await.unwrap();
        assert_eq!(ask(&mut rx, &mut p, PromptKind::DeleteHistory).await, None);

        tx.send(Input::Closed).await.unwrap();
        assert_eq!(ask(&mut rx, &mut p, PromptKind::DeleteHistory).await, None);

        drop(tx);
        assert_eq!(ask(&mut rx, &mut p, PromptKind::DeleteHistory).await, None);
    }
}
