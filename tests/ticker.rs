use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use zoneglance::ticker::Ticker;

#[tokio::test]
async fn test_ticker_fires_repeatedly() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);

    let ticker = Ticker::spawn(Duration::from_millis(10), move || {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    });

    sleep(Duration::from_millis(200)).await;
    assert!(count.load(Ordering::SeqCst) >= 2, "expected repeated ticks");
    assert!(!ticker.is_finished());
}

#[tokio::test]
async fn test_ticker_survives_tick_errors() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);

    let ticker = Ticker::spawn(Duration::from_millis(10), move || {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            anyhow::bail!("tick went wrong")
        }
    });

    sleep(Duration::from_millis(200)).await;
    assert!(count.load(Ordering::SeqCst) >= 2, "errors must not stop the cycle");
    assert!(!ticker.is_finished());
}

#[tokio::test]
async fn test_drop_cancels_the_task() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);

    let ticker = Ticker::spawn(Duration::from_millis(10), move || {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    });

    sleep(Duration::from_millis(50)).await;
    drop(ticker);
    sleep(Duration::from_millis(20)).await;

    let after_drop = count.load(Ordering::SeqCst);
    sleep(Duration::from_millis(100)).await;
    assert_eq!(count.load(Ordering::SeqCst), after_drop, "dropped ticker kept running");
}

#[tokio::test]
async fn test_abort_stops_the_task() {
    let ticker = Ticker::spawn(Duration::from_millis(10), || async { Ok(()) });
    sleep(Duration::from_millis(30)).await;

    ticker.abort();
    sleep(Duration::from_millis(30)).await;
    assert!(ticker.is_finished());
}
