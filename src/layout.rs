//! Fixed names of the mod workspace and of the game install it builds against.

/// Steam app id of the game.
pub const LETHAL_COMPANY_APP_ID: u32 = 1966720;

/// Steam `common` folder name of the game.
pub const GAME_DIR_NAME: &str = "Lethal Company";

/// Managed assemblies folder, relative to the game directory.
pub const GAME_DATA_REL: &str = "Lethal Company_Data/Managed";

/// Unity project folder, relative to the workspace root.
pub const UNITY_PROJECT_DIR: &str = "UnityProject";

/// Plugins folder, relative to the Unity project.
pub const UNITY_PLUGINS_REL: &str = "Assets/Plugins";

/// C# plugin folder, relative to the workspace root.
pub const PLUGIN_DIR: &str = "Plugin";

/// MSBuild user file generated inside [`PLUGIN_DIR`].
pub const CSPROJ_USER_FILE: &str = "SCP682.csproj.user";

/// Restore tool invoked once inside [`PLUGIN_DIR`].
pub const RESTORE_PROGRAM: &str = "dotnet";

/// Arguments of [`RESTORE_PROGRAM`].
pub const RESTORE_ARGS: [&str; 2] = ["tool", "restore"];

/// Game assemblies the Unity project needs to compile the mod's scripts.
pub const REQUIRED_PLUGIN_DLLS: [&str; 7] = [
    "AmazingAssets.TerrainToMesh.dll",
    "ClientNetworkTransform.dll",
    "DissonanceVoip.dll",
    "Facepunch Transport for Netcode for GameObjects.dll",
    "Facepunch.Steamworks.Win64.dll",
    "Newtonsoft.Json.dll",
    "Assembly-CSharp-firstpass.dll",
];

/// Default install location of the game on Windows.
pub const WINDOWS_DEFAULT_GAME_DIR: &str =
    "C:/Program Files (x86)/Steam/steamapps/common/Lethal Company";

/// Default install location of the game on Linux, relative to the home directory.
pub const LINUX_DEFAULT_GAME_DIR_REL: &str = ".local/share/Steam/steamapps/common/Lethal Company";
