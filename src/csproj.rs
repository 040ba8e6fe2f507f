use crate::error::{Result, SetupError};
use crate::layout::{CSPROJ_USER_FILE, GAME_DATA_REL, PLUGIN_DIR};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Append `/` unless `dir` already ends with `/` or `\`.
pub fn normalize_dir(dir: &str) -> String {
    if dir.ends_with('/') || dir.ends_with('\\') {
        dir.to_string()
    } else {
        format!("{dir}/")
    }
}

/// The MSBuild `.csproj.user` file pointing the plugin build at local paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFile {
    game_dir: String,
    deploy_dir: String,
}

impl UserFile {
    /// Both paths are normalized to end with a separator.
    pub fn new(game_dir: &Path, deploy_dir: &Path) -> Self {
        Self {
            game_dir: normalize_dir(&game_dir.to_string_lossy()),
            deploy_dir: normalize_dir(&deploy_dir.to_string_lossy()),
        }
    }

    /// Normalized game directory.
    pub fn game_dir(&self) -> &str {
        &self.game_dir
    }

    /// Normalized deployment directory.
    pub fn deploy_dir(&self) -> &str {
        &self.deploy_dir
    }

    /// Where the file lives for a workspace rooted at `root`.
    pub fn path_in(root: &Path) -> PathBuf {
        root.join(PLUGIN_DIR).join(CSPROJ_USER_FILE)
    }

    /// Render the document.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, r#"<?xml version="1.0" encoding="utf-8"?>"#);
        let _ = writeln!(
            out,
            r#"<Project ToolsVersion="Current" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">"#
        );
        let _ = writeln!(out, "    <!-- GENERATED BY lc-setup -->");
        let _ = writeln!(out, "    <PropertyGroup>");
        let _ = writeln!(
            out,
            "        <!-- Automatically found or manually inputted game path -->"
        );
        let _ = writeln!(out, "        <GameDirectory>{}</GameDirectory>", self.game_dir);
        let _ = writeln!(out, "        <!-- The path you pasted when running the setup -->");
        let _ = writeln!(
            out,
            "        <PluginsDirectory>{}</PluginsDirectory>",
            self.deploy_dir
        );
        let _ = writeln!(
            out,
            "        <TestingDirectory>$(PluginsDirectory)../scripts/</TestingDirectory>"
        );
        let _ = writeln!(out, "    </PropertyGroup>");
        out.push('\n');
        let _ = writeln!(out, "    <!-- Constant Variables - Do Not modify -->");
        let _ = writeln!(out, "    <PropertyGroup>");
        let _ = writeln!(
            out,
            "        <ManagedDirectory>$(GameDirectory){GAME_DATA_REL}/</ManagedDirectory>"
        );
        let _ = writeln!(out, "        <MMHOOK>$(PluginsDirectory)MMHOOK/</MMHOOK>");
        let _ = writeln!(out, "        <SCPAssets>$(TestingDirectory)SCP682Assets/</SCPAssets>");
        let _ = writeln!(out, "    </PropertyGroup>");
        out.push('\n');
        out.push_str(COPY_TARGET);
        out.push_str("</Project>\n");
        out
    }

    /// Write the document to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render()).map_err(|source| SetupError::WriteUserFile {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "wrote user file");
        Ok(())
    }
}

// Runs after NetcodePatcher has processed the plugin DLL.
const COPY_TARGET: &str = r#"    <!-- Our mod files get copied over after NetcodePatcher has processed our DLL -->
    <Target Name="CopyToTestProfile" DependsOnTargets="NetcodePatch" AfterTargets="PostBuildEvent">
        <MakeDir
            Directories="$(SCPAssets)"
            Condition="!Exists('$(SCPAssets)')"
        />
        <Copy SourceFiles="$(TargetPath)" DestinationFolder="$(TestingDirectory)"/>
        <!-- We will copy the asset bundle named "modassets" over -->
        <Copy SourceFiles="../../UnityProject/AssetBundles/StandaloneWindows/scp682assets" DestinationFolder="$(SCPAssets)" SkipUnchangedFiles="true"/>
        <Copy SourceFiles="../../ExternalAssets/SCP682VideoBundle/scp682videobundle" DestinationFolder="$(SCPAssets)" SkipUnchangedFiles="true"/>
        <Exec Command="echo '[csproj.user] Mod files copied to $(TestingDirectory)'" />
    </Target>
"#;
