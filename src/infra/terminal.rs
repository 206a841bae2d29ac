//! Line-oriented terminal input: one intent per line.

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::application::board::Intent;
use crate::domain::types::{DraftField, PostId};

#[derive(Parser, Debug)]
#[command(
    name = "postboard",
    no_binary_name = true,
    disable_version_flag = true,
    about = "Board commands (one per line)"
)]
pub struct InputLine {
    #[command(subcommand)]
    pub command: InputCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum InputCommand {
    /// Load a post into the form for updating
    Edit { id: PostId },
    /// Delete a post
    Delete { id: PostId },
    /// Fetch and show the comments of a post
    Comments { id: PostId },
    /// Set the draft title
    Title {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Set the draft body
    Body {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Set a draft field by name (`title` or `body`)
    Set {
        field: DraftField,
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Create or update, depending on the form mode
    Submit,
    /// Empty the form and leave update mode
    Clear,
    /// Print the board again
    Show,
    /// Fetch the post list again
    Reload,
    /// Leave without waiting for outstanding requests
    Quit,
}

impl From<InputCommand> for Intent {
    fn from(command: InputCommand) -> Self {
        match command {
            InputCommand::Edit { id } => Intent::Edit(id),
            InputCommand::Delete { id } => Intent::Delete(id),
            InputCommand::Comments { id } => Intent::ViewComments(id),
            InputCommand::Title { text } => Intent::SetField(DraftField::Title, text.join(" ")),
            InputCommand::Body { text } => Intent::SetField(DraftField::Body, text.join(" ")),
            InputCommand::Set { field, text } => Intent::SetField(field, text.join(" ")),
            InputCommand::Submit => Intent::Submit,
            InputCommand::Clear => Intent::Clear,
            InputCommand::Show => Intent::Render,
            InputCommand::Reload => Intent::Load,
            InputCommand::Quit => Intent::Quit,
        }
    }
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// Words are split on whitespace, so runs of spaces inside free text collapse
/// to a single space.
pub fn parse_line(line: &str) -> Result<Option<Intent>, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }
    let parsed = InputLine::try_parse_from(words)?;
    Ok(Some(parsed.command.into()))
}

/// Read intents from `input` until end of input or `quit`.
///
/// Dropping the sender on end of input tells the event loop no more intents
/// are coming.
pub fn spawn_reader<R>(input: R, intents: mpsc::Sender<Intent>) -> JoinHandle<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = input.lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(err) => {
                    debug!(target = "infra::terminal", error = %err, "input closed");
                    break;
                }
            };

            match parse_line(&line) {
                Ok(Some(intent)) => {
                    let quit = intent == Intent::Quit;
                    if intents.send(intent).await.is_err() || quit {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    let rendered = err.render();
                    if err.use_stderr() {
                        eprintln!("{rendered}");
                    } else {
                        println!("{rendered}");
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(line: &str) -> Intent {
        parse_line(line)
            .expect("line should parse")
            .expect("line should yield an intent")
    }

    #[test]
    fn blank_line_is_not_an_intent() {
        assert!(matches!(parse_line("   "), Ok(None)));
    }

    #[test]
    fn id_commands_map_to_intents() {
        assert_eq!(intent("edit 3"), Intent::Edit(PostId::new(3)));
        assert_eq!(intent("delete 4"), Intent::Delete(PostId::new(4)));
        assert_eq!(intent("comments 5"), Intent::ViewComments(PostId::new(5)));
    }

    #[test]
    fn free_text_keeps_all_words() {
        assert_eq!(
            intent("title Hello   there world"),
            Intent::SetField(DraftField::Title, "Hello there world".into())
        );
        assert_eq!(
            intent("body dashes -are -fine"),
            Intent::SetField(DraftField::Body, "dashes -are -fine".into())
        );
    }

    #[test]
    fn field_without_text_clears_it() {
        assert_eq!(intent("title"), Intent::SetField(DraftField::Title, String::new()));
    }

    #[test]
    fn set_accepts_named_fields() {
        assert_eq!(
            intent("set body some text"),
            Intent::SetField(DraftField::Body, "some text".into())
        );
        assert!(parse_line("set userId 3").is_err());
    }

    #[test]
    fn invalid_id_is_rejected() {
        assert!(parse_line("edit abc").is_err());
        assert!(parse_line("frobnicate").is_err());
    }

    #[test]
    fn bare_commands_map_to_intents() {
        assert_eq!(intent("submit"), Intent::Submit);
        assert_eq!(intent("clear"), Intent::Clear);
        assert_eq!(intent("show"), Intent::Render);
        assert_eq!(intent("reload"), Intent::Load);
        assert_eq!(intent("quit"), Intent::Quit);
    }

    #[tokio::test]
    async fn reader_stops_at_quit() {
        let (tx, mut rx) = mpsc::channel(8);
        let input: &'static [u8] = b"title A\n\nbogus\nsubmit\nquit\nclear\n";
        spawn_reader(tokio::io::BufReader::new(input), tx)
            .await
            .expect("reader task");

        let mut received = Vec::new();
        while let Some(intent) = rx.recv().await {
            received.push(intent);
        }
        assert_eq!(
            received,
            vec![
                Intent::SetField(DraftField::Title, "A".into()),
                Intent::Submit,
                Intent::Quit,
            ]
        );
    }
}
