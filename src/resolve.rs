use crate::layout::UNITY_PLUGINS_REL;
use std::fmt;
use std::path::PathBuf;

/// Result of an interactive resolution step.
///
/// Steps never stop the program themselves; the caller decides what an
/// [`Unresolved`] location means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    /// The location exists.
    Resolved(T),
    /// Neither detection nor the user could provide the location.
    Unresolved(Unresolved),
}

impl<T> Resolution<T> {
    /// The resolved value, if any.
    pub fn resolved(self) -> Option<T> {
        match self {
            Resolution::Resolved(v) => Some(v),
            Resolution::Unresolved(_) => None,
        }
    }

    /// True when the step succeeded.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// A location that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unresolved {
    /// No known game install exists and the pasted path does not either.
    GameNotFound {
        /// What the user entered.
        input: PathBuf,
    },
    /// The Unity project is not at its default place and the pasted path does not exist.
    ProjectNotFound {
        /// What the user entered.
        input: PathBuf,
    },
    /// The Unity project has no plugins folder, so it is not based on the game's files.
    PluginsFolderMissing {
        /// The project that was checked.
        project: PathBuf,
    },
    /// The deployment folder does not exist.
    DeployDirNotFound {
        /// What the user entered.
        input: PathBuf,
    },
}

impl Unresolved {
    /// Message shown to the user before the program halts.
    pub fn message(&self) -> String {
        match self {
            Unresolved::GameNotFound { .. } | Unresolved::ProjectNotFound { .. } => {
                "Could not find location.".to_string()
            }
            Unresolved::PluginsFolderMissing { .. } => format!(
                "Your Unity Project does not have a {UNITY_PLUGINS_REL} folder!\n\
                 Make sure your Unity Project is based on Lethal Company files."
            ),
            Unresolved::DeployDirNotFound { .. } => "Path not found!".to_string(),
        }
    }
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unresolved::GameNotFound { input } => {
                write!(f, "game install not found: {}", input.display())
            }
            Unresolved::ProjectNotFound { input } => {
                write!(f, "unity project not found: {}", input.display())
            }
            Unresolved::PluginsFolderMissing { project } => write!(
                f,
                "unity project has no {UNITY_PLUGINS_REL} folder: {}",
                project.display()
            ),
            Unresolved::DeployDirNotFound { input } => {
                write!(f, "deployment directory not found: {}", input.display())
            }
        }
    }
}
