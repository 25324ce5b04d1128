use crossbeam_channel::{Receiver, unbounded};
use monitor_core::coins::CoinId;
use monitor_core::generator::{MarketEvent, MarketFeed};
use monitor_core::quote::{CoinQuote, HISTORY_LEN};
use std::time::Duration;

fn expect_snapshot(rx: &Receiver<MarketEvent>) -> Vec<CoinQuote> {
    match rx.recv_timeout(Duration::from_secs(2)) {
        Ok(MarketEvent::Snapshot(quotes)) => quotes,
        other => panic!("expected a snapshot, got {:?}", other),
    }
}

#[test]
fn feed_emits_an_initial_snapshot_immediately() {
    let (data_tx, data_rx) = unbounded();
    let (stop_tx, stop_rx) = unbounded();
    let feed = MarketFeed::new(vec![CoinId::Btc, CoinId::Eth], Duration::from_secs(60));
    let handle = feed.start(data_tx, stop_rx);

    let quotes = expect_snapshot(&data_rx);
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].id, CoinId::Btc);
    assert_eq!(quotes[1].id, CoinId::Eth);
    assert!(quotes.iter().all(|q| q.history.len() == HISTORY_LEN));
    assert!(quotes.iter().all(|q| q.price > 0.0));

    stop_tx.send(()).unwrap();
    handle.join().unwrap();
}

#[test]
fn feed_ticks_and_honors_the_stop_signal() {
    let (data_tx, data_rx) = unbounded();
    let (stop_tx, stop_rx) = unbounded();
    let feed = MarketFeed::new(CoinId::ALL.to_vec(), Duration::from_millis(20));
    let handle = feed.start(data_tx, stop_rx);

    let first = expect_snapshot(&data_rx);
    let second = expect_snapshot(&data_rx);
    assert_eq!(second.len(), first.len());
    for (before, after) in first.iter().zip(&second) {
        assert_eq!(before.id, after.id);
        assert_eq!(before.volume_24h, after.volume_24h);
        assert!(after.price > 0.0);
    }

    stop_tx.send(()).unwrap();
    // Snapshots may race in ahead of the stop signal; Shutdown must follow.
    loop {
        match data_rx.recv_timeout(Duration::from_secs(2)).unwrap() {
            MarketEvent::Shutdown => break,
            MarketEvent::Snapshot(_) => continue,
        }
    }
    handle.join().unwrap();
}

#[test]
fn feed_stops_when_the_stop_sender_is_dropped() {
    let (data_tx, data_rx) = unbounded();
    let (stop_tx, stop_rx) = unbounded::<()>();
    let feed = MarketFeed::new(vec![CoinId::Sol], Duration::from_secs(60));
    let handle = feed.start(data_tx, stop_rx);

    drop(stop_tx);
    let mut saw_shutdown = false;
    while let Ok(event) = data_rx.recv_timeout(Duration::from_secs(2)) {
        if matches!(event, MarketEvent::Shutdown) {
            saw_shutdown = true;
            break;
        }
    }
    assert!(saw_shutdown);
    handle.join().unwrap();
}
