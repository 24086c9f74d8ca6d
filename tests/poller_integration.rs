// Poller against a page file that grows on disk
use comment_sentiment::extractor::Extractor;
use comment_sentiment::page::{FilePage, PageSource};
use comment_sentiment::poller::Poller;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::mpsc;

fn write_page(path: &Path, count: usize) {
    let comments: String = (0..count)
        .map(|i| {
            format!(
                "<ytd-comment-thread-renderer><span id=\"content-text\">loaded comment {}</span></ytd-comment-thread-renderer>",
                i
            )
        })
        .collect();
    std::fs::write(path, format!("<html><body>{}</body></html>", comments)).unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_poller_tracks_lazy_loading() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("watch.html");
    write_page(&path, 20);

    let source: Arc<dyn PageSource> = Arc::new(FilePage::new(&path));
    let extractor = Arc::new(Extractor::with_defaults().unwrap());
    let (tx, mut rx) = mpsc::unbounded_channel();

    let poller = Poller::start(source, extractor, Duration::from_secs(2), move |count| {
        let _ = tx.send(count);
    })
    .unwrap();
    assert_eq!(poller.interval(), Duration::from_secs(2));

    assert_eq!(rx.recv().await, Some(20));

    write_page(&path, 40);
    assert_eq!(rx.recv().await, Some(40));

    // Growth past the cap is not visible
    write_page(&path, 500);
    assert_eq!(rx.recv().await, Some(200));
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(rx.try_recv().is_err());

    assert_eq!(poller.last_seen_count(), 200);
    poller.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_poller_survives_missing_page() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("not-yet.html");

    let source: Arc<dyn PageSource> = Arc::new(FilePage::new(&path));
    let extractor = Arc::new(Extractor::with_defaults().unwrap());
    let (tx, mut rx) = mpsc::unbounded_channel();

    let poller = Poller::start(source, extractor, Duration::from_millis(500), move |count| {
        let _ = tx.send(count);
    })
    .unwrap();

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(poller.last_seen_count(), 0);

    write_page(&path, 3);
    assert_eq!(rx.recv().await, Some(3));

    poller.shutdown().await;
}
