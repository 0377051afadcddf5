//! ICMP reachability through the system `ping` binary.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time;

use crate::probe::latency::parse_latency;

/// Extra time granted to the child process beyond its own reply timeout.
const SPAWN_GRACE: Duration = Duration::from_secs(2);

/// Outcome of one `ping` invocation.
#[derive(Debug, Clone)]
pub struct PingReply {
    pub success: bool,
    pub stdout: String,
}

impl PingReply {
    pub fn latency_ms(&self) -> Option<u32> {
        if !self.success {
            return None;
        }
        parse_latency(&self.stdout)
    }
}

/// Single-echo ping runner.
#[derive(Debug, Clone)]
pub struct PingProbe {
    timeout: Duration,
}

impl PingProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Arguments for one echo with a reply timeout, per platform.
    fn args(&self, address: &str) -> Vec<String> {
        let secs = self.timeout.as_secs().max(1);
        if cfg!(windows) {
            vec![
                "-n".into(),
                "1".into(),
                "-w".into(),
                (secs * 1000).to_string(),
                address.into(),
            ]
        } else if cfg!(target_os = "macos") {
            vec![
                "-c".into(),
                "1".into(),
                "-W".into(),
                (secs * 1000).to_string(),
                address.into(),
            ]
        } else {
            vec!["-c".into(), "1".into(), "-W".into(), secs.to_string(), address.into()]
        }
    }

    /// Run `ping` once. Returns `None` when the process could not be run
    /// or did not finish in time.
    pub async fn run(&self, address: &str) -> Option<PingReply> {
        let mut command = Command::new("ping");
        command
            .args(self.args(address))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        match time::timeout(self.timeout + SPAWN_GRACE, command.output()).await {
            Ok(Ok(output)) => Some(PingReply {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            }),
            Ok(Err(e)) => {
                tracing::warn!(address = %address, error = %e, "Failed to run ping");
                None
            }
            Err(_) => {
                tracing::warn!(address = %address, "Ping did not finish in time");
                None
            }
        }
    }
}
