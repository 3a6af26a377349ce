//! End-to-end behaviour of the search/favorites controller.

use eventsearch::app::{Change, Controller};
use eventsearch::fetch::{FetchResponse, RecordingFetcher};
use eventsearch::storage::{JsonFileStore, KeyValueStore, MemoryStore, FAVORITES_KEY};
use eventsearch::{initialize, Config, Event};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tempfile::TempDir;

const WINDOW: Duration = Duration::from_millis(600);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn controller() -> Controller<MemoryStore, RecordingFetcher> {
    Controller::new(MemoryStore::new(), RecordingFetcher::new(), WINDOW)
}

fn sent_queries(controller: &Controller<MemoryStore, RecordingFetcher>) -> Vec<String> {
    controller
        .fetcher()
        .requests()
        .iter()
        .map(|r| r.query.clone())
        .collect()
}

fn record_changes<S: KeyValueStore>(
    controller: &mut Controller<S, RecordingFetcher>,
) -> Rc<RefCell<Vec<Change>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    controller.subscribe(move |change| sink.borrow_mut().push(change));
    seen
}

#[test]
fn test_query_fetches_once_after_quiet_period() {
    let t0 = Instant::now();
    let mut controller = controller();

    controller.set_query_at("boston red sox", t0);
    assert!(!controller.tick(t0 + ms(599)));
    assert!(sent_queries(&controller).is_empty());

    assert!(controller.tick(t0 + WINDOW));
    assert!(!controller.tick(t0 + ms(5000)));

    assert_eq!(sent_queries(&controller), vec!["boston+red+sox"]);
}

#[test]
fn test_rapid_typing_fetches_latest_only() {
    let t0 = Instant::now();
    let mut controller = controller();

    for (i, query) in ["b", "bo", "bos", "bost", "boston"].iter().enumerate() {
        controller.set_query_at(*query, t0 + ms(100 * i as u64));
        controller.tick(t0 + ms(100 * i as u64));
    }
    assert_eq!(controller.next_deadline(), Some(t0 + ms(400) + WINDOW));

    controller.tick(t0 + ms(1000));
    assert_eq!(sent_queries(&controller), vec!["boston"]);
}

#[test]
fn test_duplicate_query_does_not_refetch() {
    let t0 = Instant::now();
    let mut controller = controller();

    controller.set_query_at("opera", t0);
    controller.tick(t0 + WINDOW);
    controller.set_query_at("opera", t0 + ms(2000));
    controller.tick(t0 + ms(5000));

    assert_eq!(sent_queries(&controller).len(), 1);
    assert_eq!(controller.next_deadline(), None);
}

#[test]
fn test_empty_query_clears_without_fetch() {
    let t0 = Instant::now();
    let mut controller = controller();

    controller.set_query_at("opera", t0);
    controller.tick(t0 + WINDOW);
    let id = controller.fetcher().last().unwrap().id;
    controller.complete_fetch(FetchResponse::success(id, vec![Event::new(1, "Tosca")]));
    assert_eq!(controller.fetched_events().map(<[Event]>::len), Some(1));

    controller.set_query_at("", t0 + ms(1000));
    assert!(controller.tick(t0 + ms(1000) + WINDOW));

    assert!(controller.fetched_events().is_none());
    assert_eq!(sent_queries(&controller).len(), 1);
}

#[test]
fn test_successful_empty_result_is_some_empty() {
    let t0 = Instant::now();
    let mut controller = controller();

    controller.set_query_at("nothing matches", t0);
    controller.tick(t0 + WINDOW);
    let id = controller.fetcher().last().unwrap().id;
    controller.complete_fetch(FetchResponse::success(id, vec![]));

    assert_eq!(controller.fetched_events().map(<[Event]>::len), Some(0));
}

#[test]
fn test_late_response_for_old_query_is_dropped() {
    let t0 = Instant::now();
    let mut controller = controller();

    controller.set_query_at("jazz", t0);
    controller.tick(t0 + WINDOW);
    let old = controller.fetcher().last().unwrap().id;

    controller.set_query_at("blues", t0 + ms(1000));
    controller.tick(t0 + ms(1000) + WINDOW);
    let new = controller.fetcher().last().unwrap().id;

    controller.complete_fetch(FetchResponse::success(new, vec![Event::new(2, "Blues Night")]));
    controller.complete_fetch(FetchResponse::success(old, vec![Event::new(1, "Jazz Brunch")]));

    assert_eq!(controller.fetched_events(), Some(&[Event::new(2, "Blues Night")][..]));
}

#[test]
fn test_response_after_clear_is_dropped() {
    let t0 = Instant::now();
    let mut controller = controller();

    controller.set_query_at("jazz", t0);
    controller.tick(t0 + WINDOW);
    let id = controller.fetcher().last().unwrap().id;

    controller.set_query_at("", t0 + ms(700));
    controller.tick(t0 + ms(700) + WINDOW);
    controller.complete_fetch(FetchResponse::success(id, vec![Event::new(1, "Jazz Brunch")]));

    assert!(controller.fetched_events().is_none());
}

#[test]
fn test_observers_see_query_and_results() {
    let t0 = Instant::now();
    let mut controller = controller();
    let seen = record_changes(&mut controller);

    controller.set_query_at("folk", t0);
    controller.set_query_at("folk", t0);
    controller.tick(t0 + WINDOW);
    let id = controller.fetcher().last().unwrap().id;
    controller.complete_fetch(FetchResponse::success(id, vec![]));

    assert_eq!(*seen.borrow(), vec![Change::Query, Change::FetchedEvents]);
}

#[test]
fn test_favorites_persist_and_notify() {
    let mut controller = Controller::new(MemoryStore::new(), RecordingFetcher::new(), WINDOW);
    let event = Event::new(42, "Jazz in the Park");
    let seen = record_changes(&mut controller);

    controller.add_favorite(&event);

    assert!(controller.is_favorite(&event));
    assert!(!controller.favorites_is_empty());
    assert_eq!(controller.store().get(FAVORITES_KEY).unwrap(), Some(b"[42]".to_vec()));
    assert_eq!(*seen.borrow(), vec![Change::Favorites]);

    controller.remove_favorite(&event);
    assert!(controller.favorites_is_empty());
    assert_eq!(controller.store().get(FAVORITES_KEY).unwrap(), Some(b"[]".to_vec()));
}

#[test]
fn test_favorites_reload_from_store() {
    let mut first = controller();
    first.add_favorite(&Event::new(3, "a"));
    first.add_favorite(&Event::new(1, "b"));
    first.add_favorite(&Event::new(3, "a"));

    let second = Controller::new(first.into_store(), RecordingFetcher::new(), WINDOW);
    assert_eq!(second.favorite_ids().iter().copied().collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn test_corrupt_favorites_load_empty() {
    let store = MemoryStore::with_entry(FAVORITES_KEY, b"not json".to_vec());
    let controller = Controller::new(store, RecordingFetcher::new(), WINDOW);
    assert!(controller.favorites_is_empty());
}

#[test]
fn test_unsubscribed_listener_is_silent() {
    let mut controller = controller();
    let count = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&count);
    let id = controller.subscribe(move |_| *counter.borrow_mut() += 1);

    controller.add_favorite(&Event::new(1, "a"));
    assert!(controller.unsubscribe(id));
    controller.add_favorite(&Event::new(2, "b"));

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_format_date_through_controller() {
    let controller = controller();
    assert_eq!(controller.format_date("2021-06-15T15:04:00"), "Tuesday Jun 15, 2021 10:04 AM");
    assert_eq!(controller.format_date("not-a-date"), "");
}

#[test]
fn test_initialize_with_file_store_survives_restart() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        store_path: Some(dir.path().join("state").join("eventsearch.json")),
        ..Config::default()
    };

    {
        let mut controller = initialize(&config, RecordingFetcher::new()).unwrap();
        controller.add_favorite(&Event::new(7, "Symphony"));
        controller.add_favorite(&Event::new(11, "Ballet"));
    }

    let controller = initialize(&config, RecordingFetcher::new()).unwrap();
    assert!(controller.is_favorite(&Event::new(7, "")));
    assert!(controller.is_favorite(&Event::new(11, "")));
    assert_eq!(controller.favorite_ids().len(), 2);
}

#[test]
fn test_initialize_discards_corrupt_store_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("eventsearch.json");
    std::fs::write(&path, "garbage").unwrap();

    let config = Config {
        store_path: Some(path.clone()),
        ..Config::default()
    };
    let mut controller = initialize(&config, RecordingFetcher::new()).unwrap();
    assert!(controller.favorites_is_empty());

    controller.add_favorite(&Event::new(5, "Recital"));
    drop(controller);

    let store = JsonFileStore::open(path).unwrap();
    assert_eq!(store.get(FAVORITES_KEY).unwrap(), Some(b"[5]".to_vec()));
}

#[test]
fn test_initialize_discards_non_utf8_store_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("eventsearch.json");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let config = Config {
        store_path: Some(path),
        ..Config::default()
    };
    let controller = initialize(&config, RecordingFetcher::new()).unwrap();
    assert!(controller.favorites_is_empty());
}
