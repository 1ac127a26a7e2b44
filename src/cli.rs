use std::path::PathBuf;

use clap::Parser;

/// Paste text, get a summary back from the summarization service.
#[derive(Parser, Debug)]
#[command(name = "memo-summarizer", version)]
pub struct Args {
    /// Text to summarize; read from --file or stdin when omitted
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, short, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Summarization endpoint, overrides SUMMARIZER_ENDPOINT
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request deadline in seconds, overrides SUMMARIZER_TIMEOUT_SECS
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Run as an interactive form
    #[arg(long, short, conflicts_with_all = ["text", "file"])]
    pub interactive: bool,
}

/// One line typed into the interactive form.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Summarize,
    Clear,
    Show,
    Quit,
    Unknown(&'a str),
    Input(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        let Some(command) = line.trim().strip_prefix(':') else {
            return Command::Input(line);
        };
        match command.trim() {
            "summarize" | "s" => Command::Summarize,
            "clear" | "c" => Command::Clear,
            "show" => Command::Show,
            "quit" | "q" => Command::Quit,
            other => Command::Unknown(other),
        }
    }
}

pub const INTERACTIVE_HELP: &str =
    "Type or paste text. Commands: :summarize (:s), :clear (:c), :show, :quit (:q)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!(Command::parse(":summarize"), Command::Summarize);
        assert_eq!(Command::parse(":s"), Command::Summarize);
        assert_eq!(Command::parse("  :c "), Command::Clear);
        assert_eq!(Command::parse(":show"), Command::Show);
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse(":nope"), Command::Unknown("nope"));
    }

    #[test]
    fn other_lines_are_input_verbatim() {
        assert_eq!(Command::parse("  indented text"), Command::Input("  indented text"));
        assert_eq!(Command::parse(""), Command::Input(""));
        assert_eq!(Command::parse("a: b"), Command::Input("a: b"));
    }

    #[test]
    fn args_accept_one_shot_text() {
        let args = Args::try_parse_from(["memo-summarizer", "--endpoint", "http://x/s", "hello"])
            .unwrap();
        assert_eq!(args.text.as_deref(), Some("hello"));
        assert_eq!(args.endpoint.as_deref(), Some("http://x/s"));
        assert!(!args.interactive);
    }

    #[test]
    fn interactive_conflicts_with_text() {
        assert!(Args::try_parse_from(["memo-summarizer", "-i", "hello"]).is_err());
    }
}
