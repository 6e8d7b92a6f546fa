//! Isolated test environment with temp directory.

use super::{NotecardsCommand, TestNote};
use notecards::infra::{JsonFile, NotesDocument, Persistence};
use notecards::store::{RandomColors, Session};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes file.
///
/// The temp directory doubles as `$HOME` for spawned commands, so no real
/// config file is picked up. It is cleaned up on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Directory holding the notes file
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    ///
    /// The notes file does not exist until a note is added or a command
    /// runs.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the temp directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the notes file.
    pub fn notes_path(&self) -> PathBuf {
        self.root.join("notes.json")
    }

    /// Saves a test note to the notes file, creating it if needed.
    pub fn add_note(&self, test_note: &TestNote) {
        let file = JsonFile::new(self.notes_path());
        let mut session =
            Session::open_with(file, RandomColors::new()).expect("Failed to open notes file");
        *session.open_new() = test_note.to_draft();
        if test_note.is_favorite() {
            session.toggle_favorite().expect("Failed to star test note");
        }
        session.save().expect("Failed to save test note");
    }

    /// Loads the notes document as it is on disk.
    pub fn document(&self) -> NotesDocument {
        JsonFile::new(self.notes_path())
            .load()
            .expect("Failed to load notes file")
    }

    /// Reads the raw notes file.
    pub fn raw_notes(&self) -> String {
        std::fs::read_to_string(self.notes_path()).expect("Failed to read notes file")
    }

    /// Overwrites the notes file with raw content.
    pub fn write_notes(&self, content: &str) {
        std::fs::write(self.notes_path(), content).expect("Failed to write notes file");
    }

    /// Writes the config file that spawned commands will read.
    pub fn write_config(&self, content: &str) {
        let dir = self.root.join(".config").join("notecards");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        std::fs::write(dir.join("config.toml"), content).expect("Failed to write config file");
    }

    /// Creates a NotecardsCommand configured for this test environment.
    pub fn cmd(&self) -> NotecardsCommand {
        NotecardsCommand::new()
            .home(&self.root)
            .file(&self.notes_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir(), "root should be a directory");
        assert!(
            !env.notes_path().exists(),
            "notes file should not exist yet"
        );
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_add_note_writes_file() {
        let env = TestEnv::new();
        env.add_note(&TestNote::new("Saved").category("Misc"));

        let doc = env.document();
        assert_eq!(doc.notes.len(), 1);
        assert_eq!(doc.notes[0].title(), "Saved");
        assert_eq!(doc.notes[0].category().as_str(), "misc");
    }

    #[test]
    fn test_env_add_favorite_note() {
        let env = TestEnv::new();
        env.add_note(&TestNote::new("Starred").favorite());

        let doc = env.document();
        assert_eq!(doc.notes.len(), 1);
        assert!(doc.notes[0].is_favorite());
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--file");
        assert_eq!(args[1], env.notes_path().to_string_lossy());
    }
}
