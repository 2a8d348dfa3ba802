// Author: Dustin Pilgrim
// License: MIT

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lapwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Interactive stopwatch with laps and a session history"
)]
pub struct Args {
    /// Name of the task being timed
    #[arg(value_name = "TASK")]
    pub task: Vec<String>,

    /// Message catalog language (en, es, fr, or a file in the locales dir)
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Delete the session history instead of starting a timer
    #[arg(long, action)]
    pub clean: bool,

    /// History file to use
    #[arg(long, value_name = "FILE")]
    pub history: Option<PathBuf>,

    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, action)]
    pub verbose: bool,
}

impl Args {
    /// The task label as typed, or `None` when no words were given.
    pub fn task_label(&self) -> Option<String> {
        let label = self.task.join(" ");
        let label = label.trim();
        (!label.is_empty()).then(|| label.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_only_means_no_task() {
        let args = Args::parse_from(["lapwatch", "--lang=es"]);
        assert_eq!(args.task_label(), None);
        assert_eq!(args.lang.as_deref(), Some("es"));
        assert!(!args.clean);
    }

    #[test]
    fn test_task_words_joined() {
        let args = Args::parse_from(["lapwatch", "fix", "the", "bug", "--lang", "fr"]);
        assert_eq!(args.task_label().as_deref(), Some("fix the bug"));
        assert_eq!(args.lang.as_deref(), Some("fr"));
    }

    #[test]
    fn test_clean_mode() {
        let args = Args::parse_from(["lapwatch", "--clean", "--history", "/tmp/h.txt"]);
        assert!(args.clean);
        assert_eq!(args.history, Some(PathBuf::from("/tmp/h.txt")));
    }

    #[test]
    fn test_blank_task_is_none() {
        let args = Args::parse_from(["lapwatch", "  "]);
        assert_eq!(args.task_label(), None);
    }
}
