use crate::layout::LETHAL_COMPANY_APP_ID;
use std::path::PathBuf;
use steamlocate::SteamDir;

/// Install folder of the game as recorded by the local Steam client, if any.
///
/// Steam being absent or its manifests unreadable is not an error: detection falls back to the
/// fixed candidate list and the prompt.
pub(crate) fn detect_game_dir() -> Option<PathBuf> {
    let steam = match SteamDir::locate() {
        Ok(steam) => steam,
        Err(e) => {
            tracing::debug!(error = %e, "steam client not found");
            return None;
        }
    };

    match steam.find_app(LETHAL_COMPANY_APP_ID) {
        Ok(Some((app, library))) => {
            let dir = library.resolve_app_dir(&app);
            tracing::debug!(path = %dir.display(), "game found in steam library");
            Some(dir)
        }
        Ok(None) => None,
        Err(e) => {
            tracing::debug!(error = %e, "could not read steam libraries");
            None
        }
    }
}
