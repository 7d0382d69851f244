use sdex_core::Timeline;

#[test]
fn fires_in_deadline_order() {
    let mut tl: Timeline<&str> = Timeline::new();
    tl.schedule(300, "c");
    tl.schedule(100, "a");
    tl.schedule(200, "b");

    let mut seen = Vec::new();
    while let Some((_, p)) = tl.poll(1_000) {
        seen.push(p);
    }
    tl.settle(1_000);

    assert_eq!(seen, vec!["a", "b", "c"]);
    assert_eq!(tl.now_ms, 1_000);
}

#[test]
fn same_deadline_fires_in_schedule_order() {
    let mut tl: Timeline<&str> = Timeline::new();
    tl.schedule(100, "first");
    tl.schedule(100, "second");

    assert_eq!(tl.poll(100).map(|(_, p)| p), Some("first"));
    assert_eq!(tl.poll(100).map(|(_, p)| p), Some("second"));
    assert_eq!(tl.poll(100), None);
}

#[test]
fn cancelled_entry_never_surfaces() {
    let mut tl: Timeline<&str> = Timeline::new();
    tl.schedule(100, "keep");
    let doomed = tl.schedule(100, "drop");
    tl.cancel(doomed);

    let mut seen = Vec::new();
    while let Some((_, p)) = tl.poll(1_000) {
        seen.push(p);
    }
    assert_eq!(seen, vec!["keep"]);
    assert_eq!(tl.pending(), 0);
}

#[test]
fn clock_parks_at_deadline_between_polls() {
    let mut tl: Timeline<u8> = Timeline::new();
    tl.schedule(500, 1);

    let (_, first) = tl.poll(2_000).expect("due entry");
    assert_eq!(first, 1);
    assert_eq!(tl.now_ms, 500);

    // A follow-up scheduled in response lands after the entry that caused it.
    tl.schedule(0, 2);
    let (_, second) = tl.poll(2_000).expect("follow-up");
    assert_eq!(second, 2);
    assert_eq!(tl.now_ms, 500);

    tl.settle(2_000);
    assert_eq!(tl.now_ms, 2_000);
}

#[test]
fn entries_beyond_the_window_wait() {
    let mut tl: Timeline<&str> = Timeline::new();
    tl.schedule(100, "later");

    assert_eq!(tl.poll(99), None);
    tl.settle(99);
    assert_eq!(tl.now_ms, 99);
    assert_eq!(tl.pending(), 1);

    assert_eq!(tl.poll(100).map(|(_, p)| p), Some("later"));
    assert_eq!(tl.now_ms, 100);
}

#[test]
fn pending_excludes_cancelled_entries() {
    let mut tl: Timeline<&str> = Timeline::new();
    let a = tl.schedule(10, "a");
    tl.schedule(20, "b");
    tl.cancel(a);
    assert_eq!(tl.pending(), 1);
}

#[test]
fn clear_drops_everything() {
    let mut tl: Timeline<&str> = Timeline::new();
    tl.schedule(10, "a");
    tl.schedule(20, "b");
    tl.clear();
    assert_eq!(tl.pending(), 0);
    assert_eq!(tl.poll(1_000), None);
}
