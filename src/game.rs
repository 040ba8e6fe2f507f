use crate::console::Console;
use crate::layout::{
    GAME_DATA_REL, GAME_DIR_NAME, LINUX_DEFAULT_GAME_DIR_REL, WINDOWS_DEFAULT_GAME_DIR,
};
use crate::resolve::{Resolution, Unresolved};
use crate::style::Style;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// A game install directory that exists on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInstall {
    dir: PathBuf,
}

impl GameInstall {
    /// Game directory as found or entered.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Folder holding the game's managed assemblies.
    pub fn data_dir(&self) -> PathBuf {
        self.dir.join(GAME_DATA_REL)
    }
}

/// Finds the game install, falling back to asking the user.
#[derive(Debug, Clone)]
pub struct GameLocator {
    candidates: Vec<PathBuf>,
}

impl Default for GameLocator {
    fn default() -> Self {
        Self::new(default_candidates())
    }
}

impl GameLocator {
    /// Locator over an explicit, ordered candidate list.
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Candidates in the order they are tried.
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// First candidate that exists.
    pub fn detect(&self) -> Option<GameInstall> {
        self.candidates.iter().find(|p| p.exists()).map(|p| {
            tracing::debug!(path = %p.display(), "game install detected");
            GameInstall { dir: p.clone() }
        })
    }

    /// Detect the install; when nothing is found, prompt once (or use `preset`, which
    /// replaces the prompt) and accept the answer only if it exists.
    pub fn resolve<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        preset: Option<&Path>,
    ) -> io::Result<Resolution<GameInstall>> {
        let found = match preset {
            Some(p) => Some(p.to_path_buf()),
            None => self.detect().map(|g| g.dir),
        };

        let dir = match found {
            Some(dir) => dir,
            None => {
                tracing::info!(tried = self.candidates.len(), "no known game location exists");
                let answer = console.ask(
                    Style::Warning,
                    &format!(
                        "Could not locate {GAME_DIR_NAME} game files!\n\
                         Please paste the full path to '{GAME_DIR_NAME}':"
                    ),
                )?;
                PathBuf::from(answer)
            }
        };

        if !dir.exists() {
            return Ok(Resolution::Unresolved(Unresolved::GameNotFound { input: dir }));
        }
        console.say(
            Style::Success,
            &format!("Game data path found: {}", dir.display()),
        )?;
        Ok(Resolution::Resolved(GameInstall { dir }))
    }
}

/// Default install locations, most likely first, followed by the install folder the Steam
/// client reports for the game when it differs from both.
pub fn default_candidates() -> Vec<PathBuf> {
    let mut out = vec![PathBuf::from(WINDOWS_DEFAULT_GAME_DIR)];
    if let Some(home) = dirs_next::home_dir() {
        out.push(home.join(LINUX_DEFAULT_GAME_DIR_REL));
    }
    if let Some(dir) = crate::steam::detect_game_dir() {
        if !out.contains(&dir) {
            out.push(dir);
        }
    }
    out
}
