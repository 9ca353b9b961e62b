//! Native OS notification support for completed analyses.
//!
//! Sends macOS Notification Center banners when a disease analysis
//! finishes. Uses `osascript` on macOS for reliable delivery from terminal
//! apps (no bundle identifier or permissions needed).

/// Send a native OS notification for a finished analysis.
///
/// Spawns a background task so the notification dispatch never blocks
/// the event loop. Errors are logged and silently discarded.
pub fn notify_analysis_complete(disease_name: &str) {
    let body = format!("Analysis complete - {}", disease_name);

    tracing::debug!("Sending OS notification: {}", body);

    tokio::spawn(async move {
        let _ = tokio::task::spawn_blocking(move || {
            send_notification("verdant", &body);
        })
        .await;
    });
}

#[cfg(target_os = "macos")]
fn send_notification(title: &str, body: &str) {
    use std::process::Command;

    // Escape double quotes and backslashes for AppleScript string literals
    let escaped_title = title.replace('\\', "\\\\").replace('"', "\\\"");
    let escaped_body = body.replace('\\', "\\\\").replace('"', "\\\"");

    let script = format!(
        "display notification \"{}\" with title \"{}\"",
        escaped_body, escaped_title
    );

    match Command::new("osascript").arg("-e").arg(&script).output() {
        Ok(output) if !output.status.success() => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!("osascript notification failed: {}", stderr.trim());
        }
        Err(e) => {
            tracing::warn!("Failed to spawn osascript: {}", e);
        }
        _ => {}
    }
}

#[cfg(not(target_os = "macos"))]
fn send_notification(_title: &str, _body: &str) {
    // No-op on non-macOS platforms for now
}
