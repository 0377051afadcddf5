//! Feed probe against mock cameras.

use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use camera_watch::probe::feed::FeedProbe;

mod common;

fn probe_for(port: u16, timeout: Duration) -> FeedProbe {
    FeedProbe::new(port, "/shot.jpg", timeout).unwrap()
}

#[tokio::test]
async fn test_streaming_camera_passes() {
    let addr = common::start_mock_camera(|| 200).await;
    let probe = probe_for(addr.port(), Duration::from_secs(5));

    assert!(probe.check("127.0.0.1").await);
}

#[tokio::test]
async fn test_error_status_fails() {
    let status = Arc::new(AtomicU16::new(503));
    let s = status.clone();
    let addr = common::start_mock_camera(move || s.load(Ordering::SeqCst)).await;
    let probe = probe_for(addr.port(), Duration::from_secs(5));

    assert!(!probe.check("127.0.0.1").await);

    status.store(404, Ordering::SeqCst);
    assert!(!probe.check("127.0.0.1").await);

    status.store(200, Ordering::SeqCst);
    assert!(probe.check("127.0.0.1").await);
}

#[tokio::test]
async fn test_refused_connection_fails() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let probe = probe_for(port, Duration::from_secs(2));
    assert!(!probe.check("127.0.0.1").await);
}

#[tokio::test]
async fn test_silent_camera_times_out() {
    let addr = common::start_silent_camera().await;
    let probe = probe_for(addr.port(), Duration::from_secs(1));

    let start = Instant::now();
    assert!(!probe.check("127.0.0.1").await);
    assert!(start.elapsed() < Duration::from_secs(4), "Timeout should bound the check");
}
