//! Command-line interpreter for `:` commands.
//!
//! The grammar is closed and matched literally against the whole command
//! line, prefix included:
//!
//! | Input  | Command     |
//! |--------|-------------|
//! | `:w`   | `Write`     |
//! | `:q`   | `Quit`      |
//! | `:q!`  | `ForceQuit` |
//! | `:wq`  | `WriteQuit` |
//!
//! Anything else parses as `Unknown` and does nothing.

use tracing::{debug, info};

use super::mode::EditorMode;
use super::session::EditorSession;
use crate::file::saver::SaveRequest;
use crate::input::event::Effect;

/// Character placed in the command line on entering Command mode.
pub const COMMAND_PREFIX: char = ':';

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Save the buffer to the target path.
    Write,
    /// Quit without saving.
    Quit,
    /// Quit without saving, forced.
    ForceQuit,
    /// Save, then quit once the save has succeeded.
    WriteQuit,
    /// Unrecognized text.
    Unknown(String),
}

impl Command {
    /// Parses the full command-line text.
    ///
    /// ```
    /// use vimlet::editor::command::Command;
    ///
    /// assert_eq!(Command::parse(":wq"), Command::WriteQuit);
    /// assert_eq!(Command::parse(":w "), Command::Unknown(":w ".to_string()));
    /// ```
    pub fn parse(text: &str) -> Command {
        match text {
            ":w" => Command::Write,
            ":q" => Command::Quit,
            ":q!" => Command::ForceQuit,
            ":wq" => Command::WriteQuit,
            other => Command::Unknown(other.to_string()),
        }
    }

    /// Runs the command against `session`, returning the effects to perform.
    ///
    /// `Write` returns the session to Normal mode; every other command leaves
    /// the mode alone.
    pub fn execute(&self, session: &mut EditorSession) -> Vec<Effect> {
        match self {
            Command::Write => {
                info!(target: "command", path = %session.target_path().display(), "write");
                let request = save_request(session, false);
                session.set_mode(EditorMode::Normal);
                vec![Effect::Save(request)]
            }
            Command::Quit | Command::ForceQuit => {
                info!(target: "command", command = ?self, "quit");
                vec![Effect::Quit]
            }
            Command::WriteQuit => {
                info!(target: "command", path = %session.target_path().display(), "write_quit");
                vec![Effect::Save(save_request(session, true))]
            }
            Command::Unknown(text) => {
                debug!(target: "command", %text, "unknown_command");
                Vec::new()
            }
        }
    }
}

fn save_request(session: &EditorSession, quit_after: bool) -> SaveRequest {
    SaveRequest {
        path: session.target_path().to_path_buf(),
        contents: session.buffer().value(),
        quit_after,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_session(buffer: &str) -> EditorSession {
        let mut session = EditorSession::new("target.txt");
        session.buffer_mut().set_value(buffer);
        session.set_mode(EditorMode::Command);
        session
    }

    #[test]
    fn test_parse_grammar() {
        assert_eq!(Command::parse(":w"), Command::Write);
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse(":q!"), Command::ForceQuit);
        assert_eq!(Command::parse(":wq"), Command::WriteQuit);
        assert_eq!(Command::parse("w"), Command::Unknown("w".to_string()));
        assert_eq!(Command::parse(":x"), Command::Unknown(":x".to_string()));
        assert_eq!(Command::parse(""), Command::Unknown(String::new()));
    }

    #[test]
    fn test_write_requests_save_and_returns_to_normal() {
        let mut session = command_session("body");
        let effects = Command::Write.execute(&mut session);

        assert_eq!(
            effects,
            vec![Effect::Save(SaveRequest {
                path: "target.txt".into(),
                contents: "body".to_string(),
                quit_after: false,
            })]
        );
        assert_eq!(session.mode(), EditorMode::Normal);
    }

    #[test]
    fn test_quit_variants_do_not_save() {
        for command in [Command::Quit, Command::ForceQuit] {
            let mut session = command_session("body");
            assert_eq!(command.execute(&mut session), vec![Effect::Quit]);
            assert_eq!(session.mode(), EditorMode::Command);
        }
    }

    #[test]
    fn test_write_quit_saves_with_quit_after() {
        let mut session = command_session("body");
        let effects = Command::WriteQuit.execute(&mut session);
        match effects.as_slice() {
            [Effect::Save(request)] => {
                assert!(request.quit_after);
                assert_eq!(request.contents, "body");
            }
            other => panic!("unexpected effects {:?}", other),
        }
        assert_eq!(session.mode(), EditorMode::Command);
    }

    #[test]
    fn test_unknown_does_nothing() {
        let mut session = command_session("body");
        assert!(Command::parse(":e foo").execute(&mut session).is_empty());
        assert_eq!(session.mode(), EditorMode::Command);
        assert!(session.last_error().is_none());
    }
}
