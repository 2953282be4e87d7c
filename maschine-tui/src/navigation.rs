use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

/// Build the profile page URL for `fid` from a template containing `{fid}`.
pub fn profile_url(template: &str, fid: u64) -> String {
    template.replace("{fid}", &fid.to_string())
}

/// Open a profile page in the system default browser.
pub fn open_profile(template: &str, fid: u64) -> String {
    let url = profile_url(template, fid);
    tracing::info!(fid, "Opening profile {}", url);
    open_browser(&url);
    url
}

fn open_browser(url: &str) {
    #[cfg(target_os = "linux")]
    let mut command = Command::new("xdg-open");
    #[cfg(target_os = "macos")]
    let mut command = Command::new("open");
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut command = Command::new("cmd");
        command.args(["/c", "start"]);
        command
    };
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    let mut command = Command::new("xdg-open");

    if let Err(err) = spawn_detached(command.arg(url)) {
        tracing::warn!("Failed to open browser for {}: {}", url, err);
    }
}

/// Spawn `command` with its output silenced and reap it on a background
/// thread, so finished launchers do not linger as zombies.
fn spawn_detached(command: &mut Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    // The launcher must not write into the alternate screen.
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    Ok(thread::spawn(move || child.wait()))
}
