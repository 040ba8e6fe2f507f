#![doc = r#"
`lc-project-setup` prepares a workspace for building the SCP-682 Lethal Company mod.

Core capabilities:
- Locate the game install (known Steam locations, the Steam client's libraries, or an entered path)
- Locate the Unity project and copy the game assemblies it compiles against
- Run `dotnet tool restore` for the C# plugin
- Generate `Plugin/SCP682.csproj.user` pointing the build at the game and a deployment folder

Every step talks to the user through a [`Console`], so the whole flow can run against
in-memory buffers.
"#]

mod console;
mod csproj;
mod error;
mod game;
mod layout;
mod libs;
mod project;
mod resolve;
mod restore;
mod setup;
mod steam;
mod style;

pub use crate::console::Console;
pub use crate::csproj::{normalize_dir, UserFile};
pub use crate::error::{Result, SetupError};
pub use crate::game::{default_candidates, GameInstall, GameLocator};
pub use crate::libs::{copy_required_files, CopyOutcome};
pub use crate::project::{locate_project, UnityProject};
pub use crate::resolve::{Resolution, Unresolved};
pub use crate::restore::RestoreCommand;
pub use crate::setup::{Outcome, ProjectSetup, RestoreMode, SetupReport};
pub use crate::style::{paint, Style};

pub use crate::layout::{
    CSPROJ_USER_FILE, GAME_DATA_REL, PLUGIN_DIR, REQUIRED_PLUGIN_DLLS, UNITY_PLUGINS_REL,
    UNITY_PROJECT_DIR,
};
