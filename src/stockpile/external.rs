use crate::error::{Result, StockError};
use std::path::Path;
use std::process::Command;

/// Opens a file with the host OS's default application.
/// - macOS: `open`
/// - Linux: `xdg-open`
/// - Windows: `cmd /C start`
///
/// Best-effort: the viewer is spawned and not waited on beyond launch.
pub fn open_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(StockError::NotFound(path.display().to_string()));
    }

    #[cfg(target_os = "macos")]
    {
        launch("open", &[path])
    }

    #[cfg(target_os = "linux")]
    {
        launch("xdg-open", &[path])
    }

    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg("start").arg("").arg(path);
        spawn(cmd, "start")
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(StockError::Store(
            "Opening files is not supported on this platform".to_string(),
        ))
    }
}

#[cfg(any(target_os = "macos", target_os = "linux"))]
fn launch(program: &str, args: &[&Path]) -> Result<()> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    spawn(cmd, program)
}

fn spawn(mut cmd: Command, program: &str) -> Result<()> {
    cmd.spawn()
        .map(|_| ())
        .map_err(|e| StockError::Store(format!("Failed to launch '{}': {}", program, e)))
}
