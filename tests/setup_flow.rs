//! End-to-end runs of the setup flow against temporary workspaces.
use lc_project_setup::{
    CopyOutcome, Console, GameLocator, Outcome, ProjectSetup, RestoreCommand, RestoreMode,
    Unresolved, REQUIRED_PLUGIN_DLLS,
};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

struct Workspace {
    _dir: TempDir,
    root: PathBuf,
    game: PathBuf,
    deploy: PathBuf,
}

fn workspace(with_dlls: bool) -> Workspace {
    let dir = tempdir().unwrap();
    let root = dir.path().join("SCP682");
    let game = dir.path().join("games/LC");
    let deploy = dir.path().join("profile/BepInEx/scripts");

    fs::create_dir_all(root.join("UnityProject/Assets/Plugins")).unwrap();
    fs::create_dir_all(root.join("Plugin")).unwrap();
    fs::create_dir_all(&deploy).unwrap();
    fs::create_dir_all(&game).unwrap();
    if with_dlls {
        let managed = game.join("Lethal Company_Data/Managed");
        fs::create_dir_all(&managed).unwrap();
        for dll in REQUIRED_PLUGIN_DLLS {
            fs::write(managed.join(dll), format!("assembly {dll}")).unwrap();
        }
    }

    Workspace {
        _dir: dir,
        root,
        game,
        deploy,
    }
}

fn failing_restore(root: &Path) -> RestoreMode {
    RestoreMode::Command(RestoreCommand::new(
        "lc-setup-missing-restore-tool",
        ["tool", "restore"],
        root.join("Plugin"),
    ))
}

#[test]
fn detected_game_only_prompts_for_deploy_dir() {
    let ws = workspace(true);
    let setup = ProjectSetup::new(&ws.root)
        .locator(GameLocator::new(vec![ws.root.join("nope"), ws.game.clone()]))
        .restore(failing_restore(&ws.root));

    let input = format!("{}\n", ws.deploy.display());
    let mut console = Console::new(Cursor::new(input), Vec::new(), false);
    let outcome = setup.run(&mut console).unwrap();

    let report = match outcome {
        Outcome::Completed(report) => report,
        other => panic!("setup halted: {other:?}"),
    };
    assert_eq!(report.game.dir(), ws.game);
    assert!(!report.restored);
    assert_eq!(
        report.copy,
        CopyOutcome::Copied(REQUIRED_PLUGIN_DLLS.iter().map(|s| s.to_string()).collect())
    );
    for dll in REQUIRED_PLUGIN_DLLS {
        let copied = fs::read(ws.root.join("UnityProject/Assets/Plugins").join(dll)).unwrap();
        assert_eq!(copied, format!("assembly {dll}").into_bytes());
    }

    let text = fs::read_to_string(ws.root.join("Plugin/SCP682.csproj.user")).unwrap();
    assert!(text.contains(&format!("<GameDirectory>{}/</GameDirectory>", ws.game.display())));
    assert!(text.contains(&format!(
        "<PluginsDirectory>{}/</PluginsDirectory>",
        ws.deploy.display()
    )));

    let out = String::from_utf8(console.into_output()).unwrap();
    assert!(!out.contains("Could not locate"));
    assert!(!out.contains("Could not find Unity project"));
    assert_eq!(out.matches("Paste your path: ").count(), 1);
    assert!(out.contains("Got: Newtonsoft.Json.dll"));
    assert!(out.contains("Error: failed to run command."));
    assert!(out.contains("Project Setup Complete!"));
}

#[test]
fn unknown_game_path_halts_before_copying() {
    let ws = workspace(true);
    let setup = ProjectSetup::new(&ws.root)
        .locator(GameLocator::new(vec![ws.root.join("missing")]))
        .restore(RestoreMode::Skip);

    let input = format!("{}\n", ws.root.join("also-missing").display());
    let mut console = Console::new(Cursor::new(input), Vec::new(), false);
    let outcome = setup.run(&mut console).unwrap();

    let Outcome::Halted(reason) = outcome else {
        panic!("expected halt");
    };
    assert_eq!(
        reason,
        Unresolved::GameNotFound {
            input: ws.root.join("also-missing")
        }
    );
    assert_eq!(reason.message(), "Could not find location.");
    assert_eq!(
        fs::read_dir(ws.root.join("UnityProject/Assets/Plugins"))
            .unwrap()
            .count(),
        0
    );
    assert!(!ws.root.join("Plugin/SCP682.csproj.user").exists());

    let out = String::from_utf8(console.into_output()).unwrap();
    assert_eq!(out.matches("Could not locate Lethal Company game files!").count(), 1);
}

#[test]
fn entered_game_path_is_accepted() {
    let ws = workspace(false);
    let setup = ProjectSetup::new(&ws.root)
        .locator(GameLocator::new(vec![]))
        .restore(RestoreMode::Skip);

    let input = format!("{}\n{}\n", ws.game.display(), ws.deploy.display());
    let mut console = Console::new(Cursor::new(input), Vec::new(), false);
    let Outcome::Completed(report) = setup.run(&mut console).unwrap() else {
        panic!("setup halted");
    };

    assert_eq!(report.game.dir(), ws.game);
    assert_eq!(report.copy, CopyOutcome::SourceMissing);
    assert!(ws.root.join("Plugin/SCP682.csproj.user").is_file());
}

#[test]
fn missing_project_is_prompted_for() {
    let ws = workspace(false);
    let other = ws.root.parent().unwrap().join("MyUnity");
    fs::create_dir_all(other.join("Assets/Plugins")).unwrap();
    fs::remove_dir_all(ws.root.join("UnityProject")).unwrap();

    let setup = ProjectSetup::new(&ws.root)
        .game_dir(&ws.game)
        .deploy_dir(&ws.deploy)
        .restore(RestoreMode::Skip);

    let input = format!("{}\n", other.display());
    let mut console = Console::new(Cursor::new(input), Vec::new(), false);
    let Outcome::Completed(report) = setup.run(&mut console).unwrap() else {
        panic!("setup halted");
    };
    assert_eq!(report.project.dir(), other);
}

#[test]
fn project_without_plugins_folder_halts() {
    let ws = workspace(true);
    fs::remove_dir_all(ws.root.join("UnityProject/Assets")).unwrap();

    let setup = ProjectSetup::new(&ws.root)
        .game_dir(&ws.game)
        .restore(RestoreMode::Skip);
    let mut console = Console::new(Cursor::new(""), Vec::new(), false);

    let outcome = setup.run(&mut console).unwrap();
    let Outcome::Halted(reason) = outcome else {
        panic!("expected halt");
    };
    assert_eq!(
        reason,
        Unresolved::PluginsFolderMissing {
            project: ws.root.join("UnityProject")
        }
    );
    assert!(reason.message().contains("Assets/Plugins"));
}

#[test]
fn missing_deploy_dir_halts_without_writing() {
    let ws = workspace(true);
    let setup = ProjectSetup::new(&ws.root)
        .game_dir(&ws.game)
        .restore(RestoreMode::Skip);

    let mut console = Console::new(Cursor::new("/definitely/not/here\n"), Vec::new(), false);
    let outcome = setup.run(&mut console).unwrap();

    let Outcome::Halted(reason) = outcome else {
        panic!("expected halt");
    };
    assert!(matches!(reason, Unresolved::DeployDirNotFound { .. }));
    assert_eq!(reason.message(), "Path not found!");
    assert!(!ws.root.join("Plugin/SCP682.csproj.user").exists());
}

#[test]
fn deploy_dir_with_separator_is_kept() {
    let ws = workspace(true);
    let deploy = format!("{}/", ws.deploy.display());
    let setup = ProjectSetup::new(&ws.root)
        .game_dir(&ws.game)
        .deploy_dir(&deploy)
        .restore(RestoreMode::Skip);

    let mut console = Console::new(Cursor::new(""), Vec::new(), false);
    let Outcome::Completed(report) = setup.run(&mut console).unwrap() else {
        panic!("setup halted");
    };
    assert_eq!(report.deploy_dir, deploy);
}

#[test]
fn missing_dll_is_an_error() {
    let ws = workspace(true);
    fs::remove_file(ws.game.join("Lethal Company_Data/Managed/DissonanceVoip.dll")).unwrap();

    let setup = ProjectSetup::new(&ws.root)
        .game_dir(&ws.game)
        .deploy_dir(&ws.deploy)
        .restore(RestoreMode::Skip);
    let mut console = Console::new(Cursor::new(""), Vec::new(), false);

    let err = setup.run(&mut console).unwrap_err();
    assert!(err.to_string().contains("DissonanceVoip.dll"));
    assert!(!ws.root.join("Plugin/SCP682.csproj.user").exists());
}

#[test]
fn existing_user_file_is_overwritten() {
    let ws = workspace(false);
    let path = ws.root.join("Plugin/SCP682.csproj.user");
    fs::write(&path, "stale").unwrap();

    let setup = ProjectSetup::new(&ws.root)
        .game_dir(&ws.game)
        .deploy_dir(&ws.deploy)
        .restore(RestoreMode::Skip);
    let mut console = Console::new(Cursor::new(""), Vec::new(), false);
    setup.run(&mut console).unwrap();

    let text = fs::read_to_string(path).unwrap();
    assert!(text.starts_with("<?xml"));
}
