use crate::console::Console;
use crate::csproj::UserFile;
use crate::error::Result;
use crate::game::{GameInstall, GameLocator};
use crate::layout::{PLUGIN_DIR, REQUIRED_PLUGIN_DLLS};
use crate::libs::{copy_required_files, CopyOutcome};
use crate::project::{locate_project, UnityProject};
use crate::resolve::{Resolution, Unresolved};
use crate::restore::RestoreCommand;
use crate::style::Style;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Whether and how the restore tool runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RestoreMode {
    /// `dotnet tool restore` in the plugin folder.
    #[default]
    Dotnet,
    /// A custom command.
    Command(RestoreCommand),
    /// Do not run anything.
    Skip,
}

/// How a setup run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every step ran and the user file was written.
    Completed(SetupReport),
    /// A location could not be resolved; nothing after that step ran.
    Halted(Unresolved),
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    /// Game install used.
    pub game: GameInstall,
    /// Unity project used.
    pub project: UnityProject,
    /// Result of the assembly copy.
    pub copy: CopyOutcome,
    /// False when the restore tool failed or was skipped.
    pub restored: bool,
    /// Normalized deployment directory written to the user file.
    pub deploy_dir: String,
    /// Location of the generated user file.
    pub user_file: PathBuf,
}

/// Prepares a mod workspace: game assemblies, dotnet tools and the MSBuild user file.
#[derive(Debug, Clone)]
pub struct ProjectSetup {
    root: PathBuf,
    locator: GameLocator,
    game_dir: Option<PathBuf>,
    project_dir: Option<PathBuf>,
    deploy_dir: Option<PathBuf>,
    restore: RestoreMode,
}

impl ProjectSetup {
    /// Setup for the workspace at `root` (the folder holding `UnityProject/` and `Plugin/`).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            locator: GameLocator::default(),
            game_dir: None,
            project_dir: None,
            deploy_dir: None,
            restore: RestoreMode::default(),
        }
    }

    /// Replace the game locator (and its candidate list).
    pub fn locator(mut self, locator: GameLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Use this game directory instead of detecting or prompting.
    pub fn game_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.game_dir = Some(dir.into());
        self
    }

    /// Use this Unity project instead of the default location or prompting.
    pub fn project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = Some(dir.into());
        self
    }

    /// Use this deployment directory instead of prompting.
    pub fn deploy_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.deploy_dir = Some(dir.into());
        self
    }

    /// Control the restore step.
    pub fn restore(mut self, mode: RestoreMode) -> Self {
        self.restore = mode;
        self
    }

    /// Run every step in order, stopping at the first unresolved location.
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<Outcome> {
        tracing::debug!(root = %self.root.display(), "starting project setup");

        let game = match self.locator.resolve(console, self.game_dir.as_deref())? {
            Resolution::Resolved(g) => g,
            Resolution::Unresolved(u) => return Ok(halt(u)),
        };

        let project = match locate_project(&self.root, self.project_dir.as_deref(), console)? {
            Resolution::Resolved(p) => p,
            Resolution::Unresolved(u) => return Ok(halt(u)),
        };

        let copy = self.copy_assemblies(&game, &project, console)?;

        console.say(Style::Heading, "Part 1 of 3 complete!")?;
        let restored = self.run_restore(console)?;

        console.say(Style::Heading, "Part 2 of 3 complete!")?;
        let deploy = match self.resolve_deploy_dir(console)? {
            Resolution::Resolved(d) => d,
            Resolution::Unresolved(u) => return Ok(halt(u)),
        };

        let user_file = UserFile::new(game.dir(), &deploy);
        let path = UserFile::path_in(&self.root);
        user_file.write(&path)?;
        console.say(
            Style::Success,
            &format!("csproj.user file created at {}!", path.display()),
        )?;

        console.say(Style::Heading, "Project Setup Complete!")?;
        console.say(
            Style::Detail,
            "> You should now be able to build the C# project, including the Asset Bundle!",
        )?;

        Ok(Outcome::Completed(SetupReport {
            game,
            project,
            copy,
            restored,
            deploy_dir: user_file.deploy_dir().to_string(),
            user_file: path,
        }))
    }

    fn copy_assemblies<R: BufRead, W: Write>(
        &self,
        game: &GameInstall,
        project: &UnityProject,
        console: &mut Console<R, W>,
    ) -> Result<CopyOutcome> {
        let plugins = project.plugins_dir();
        console.say(Style::Plain, "Copying game DLLs for Unity project:")?;
        let outcome = copy_required_files(
            &game.data_dir(),
            &plugins,
            &REQUIRED_PLUGIN_DLLS,
            |file| console.say(Style::Plain, &format!("Got: {file}")),
        )?;
        console.say(
            Style::Success,
            &format!("Done copying game DLLs to {}!", plugins.display()),
        )?;
        Ok(outcome)
    }

    fn run_restore<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<bool> {
        let cmd = match &self.restore {
            RestoreMode::Skip => {
                tracing::info!("restore step skipped");
                return Ok(false);
            }
            RestoreMode::Dotnet => RestoreCommand::dotnet(self.root.join(PLUGIN_DIR)),
            RestoreMode::Command(cmd) => cmd.clone(),
        };

        let line = cmd
            .args
            .iter()
            .fold(cmd.program.to_string_lossy().into_owned(), |acc, a| {
                format!("{acc} {}", a.to_string_lossy())
            });
        console.say(Style::Action, &format!("Running `{line}`"))?;
        console.say(Style::Detail, &format!("We are in: {}", cmd.cwd().display()))?;

        match cmd.run() {
            Ok(()) => Ok(true),
            Err(e) => {
                tracing::warn!(error = %e, "restore tool failed, continuing");
                console.say(Style::Failure, "Error: failed to run command.")?;
                Ok(false)
            }
        }
    }

    fn resolve_deploy_dir<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Resolution<PathBuf>> {
        let dir = match &self.deploy_dir {
            Some(d) => d.clone(),
            None => {
                console.say(
                    Style::Action,
                    "> Next you will have to provide a path to where we will copy your mod files each time you build it.",
                )?;
                console.say(Style::Example, DEPLOY_EXAMPLES)?;
                PathBuf::from(console.ask(Style::Detail, "Paste your path: ")?)
            }
        };

        if !dir.exists() {
            return Ok(Resolution::Unresolved(Unresolved::DeployDirNotFound { input: dir }));
        }
        Ok(Resolution::Resolved(dir))
    }
}

const DEPLOY_EXAMPLES: &str = "Examples:
     r2modman: /home/user/.config/r2modmanPlus-local/LethalCompany/profiles/testing/BepInEx/scripts
     Game installation: /home/user/.local/share/Steam/steamapps/common/Lethal Company/BepInEx/scripts";

fn halt(u: Unresolved) -> Outcome {
    tracing::warn!(reason = %u, "setup halted");
    Outcome::Halted(u)
}
