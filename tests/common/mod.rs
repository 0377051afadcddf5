//! Shared fakes for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use camera_watch::alert::{Alert, Notifier, NotifyError};
use camera_watch::monitor::CycleReport;
use camera_watch::observability::{CycleLog, CycleLogError};
use camera_watch::probe::{ProbeResult, Prober};

/// Start a mock camera answering every request with `status`.
/// Returns the bound address.
pub async fn start_mock_camera<F>(status: F) -> SocketAddr
where
    F: Fn() -> u16 + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let status = Arc::new(status);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let status = status.clone();
                    tokio::spawn(async move {
                        let mut buf = [0u8; 1024];
                        let _ = socket.read(&mut buf).await;

                        let code = status();
                        let status_text = match code {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let body = "jpeg";
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: image/jpeg\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a camera that accepts connections but never answers.
pub async fn start_silent_camera() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    });

    addr
}

/// Prober replaying a fixed script of results, one per cycle.
/// The last entry repeats once the script runs out.
pub struct ScriptedProber {
    state: Mutex<(VecDeque<ProbeResult>, ProbeResult)>,
}

impl ScriptedProber {
    pub fn new(script: Vec<ProbeResult>) -> Self {
        Self {
            state: Mutex::new((script.into(), ProbeResult::unreachable())),
        }
    }

    pub fn repeat(result: ProbeResult) -> Self {
        Self::new(vec![result])
    }

    fn current(&self) -> ProbeResult {
        self.state.lock().unwrap().1
    }
}

impl Prober for ScriptedProber {
    async fn check_reachable(&self, _address: &str) -> bool {
        let mut state = self.state.lock().unwrap();
        let next = match state.0.len() {
            0 => state.1,
            1 => state.0[0],
            _ => state.0.pop_front().unwrap(),
        };
        state.1 = next;
        next.reachable
    }

    async fn check_feed(&self, _address: &str) -> bool {
        self.current().feed_ok
    }

    async fn measure_latency(&self, _address: &str) -> Option<u32> {
        self.current().latency_ms
    }
}

/// Notifier recording every alert it is asked to send.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub sent: Arc<Mutex<Vec<Alert>>>,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(alert.clone());
        Ok(())
    }
}

/// Notifier whose transport always times out.
#[derive(Clone, Default)]
pub struct FailingNotifier {
    pub attempts: Arc<Mutex<u32>>,
}

impl Notifier for FailingNotifier {
    async fn notify(&self, _alert: &Alert) -> Result<(), NotifyError> {
        *self.attempts.lock().unwrap() += 1;
        Err(NotifyError::Timeout(30))
    }
}

/// Cycle log keeping reports in memory.
#[derive(Clone, Default)]
pub struct MemoryCycleLog {
    pub reports: Arc<Mutex<Vec<CycleReport>>>,
}

impl MemoryCycleLog {
    pub fn failures(&self) -> usize {
        self.reports.lock().unwrap().iter().filter(|r| r.failed).count()
    }
}

impl CycleLog for MemoryCycleLog {
    fn record(&mut self, report: &CycleReport) -> Result<(), CycleLogError> {
        self.reports.lock().unwrap().push(report.clone());
        Ok(())
    }
}

/// Cycle log whose writes always fail.
pub struct BrokenCycleLog;

impl CycleLog for BrokenCycleLog {
    fn record(&mut self, _report: &CycleReport) -> Result<(), CycleLogError> {
        Err(CycleLogError::Io(std::io::Error::other("disk full")))
    }
}
