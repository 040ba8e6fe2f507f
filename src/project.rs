use crate::console::Console;
use crate::layout::{UNITY_PLUGINS_REL, UNITY_PROJECT_DIR};
use crate::resolve::{Resolution, Unresolved};
use crate::style::Style;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// A Unity project that carries the plugins folder the game assemblies go into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnityProject {
    dir: PathBuf,
}

impl UnityProject {
    /// Project directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Destination of the copied game assemblies.
    pub fn plugins_dir(&self) -> PathBuf {
        self.dir.join(UNITY_PLUGINS_REL)
    }
}

/// Find the Unity project next to `root`, asking the user when it is not there.
///
/// `preset` replaces the default location; it is not prompted for but still validated.
pub fn locate_project<R: BufRead, W: Write>(
    root: &Path,
    preset: Option<&Path>,
    console: &mut Console<R, W>,
) -> io::Result<Resolution<UnityProject>> {
    let default = root.join(UNITY_PROJECT_DIR);
    let dir = match preset {
        Some(p) => p.to_path_buf(),
        None if default.exists() => default,
        None => {
            let answer = console.ask(
                Style::Warning,
                &format!(
                    "Could not find Unity project at {}! Paste the full path to your Unity project:",
                    default.display()
                ),
            )?;
            PathBuf::from(answer)
        }
    };

    if !dir.exists() {
        return Ok(Resolution::Unresolved(Unresolved::ProjectNotFound { input: dir }));
    }

    let project = UnityProject { dir };
    let plugins = project.plugins_dir();
    if !plugins.exists() {
        tracing::warn!(project = %project.dir.display(), "unity project has no plugins folder");
        return Ok(Resolution::Unresolved(Unresolved::PluginsFolderMissing {
            project: project.dir,
        }));
    }

    console.say(
        Style::Heading,
        &format!("Unity Plugins path found: {}", plugins.display()),
    )?;
    Ok(Resolution::Resolved(project))
}
