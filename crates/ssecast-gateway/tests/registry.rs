//! Connection registry properties.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::sync::mpsc::error::TryRecvError;

use ssecast_gateway::realtime::{Connection, ConnectionRegistry};

fn conn() -> Connection {
    // receiver is dropped; fine for pure bookkeeping tests
    Connection::channel(4).0
}

#[test]
fn list_ids_tracks_register_unregister_sequence() {
    let reg = ConnectionRegistry::new();
    let ops: [(&str, bool); 9] = [
        ("alice", true),
        ("bob", true),
        ("carol", true),
        ("bob", false),
        ("dave", false),
        ("alice", true),
        ("erin", true),
        ("carol", false),
        ("carol", false),
    ];

    let mut model = BTreeSet::new();
    for (id, add) in ops {
        if add {
            reg.register(id, conn());
            model.insert(id.to_string());
        } else {
            reg.unregister(id);
            model.remove(id);
        }
        let ids: BTreeSet<String> = reg.list_ids().into_iter().collect();
        assert_eq!(ids, model);
    }
    assert_eq!(reg.len(), 2);
}

#[test]
fn re_register_keeps_one_entry_bound_to_latest() {
    let reg = ConnectionRegistry::new();
    let (first, _rx1) = Connection::channel(4);
    let (second, _rx2) = Connection::channel(4);

    let r1 = reg.register("alice", first.clone());
    let r2 = reg.register("alice", second.clone());

    assert_eq!(reg.list_ids(), vec!["alice".to_string()]);
    let current = reg.get("alice").unwrap();
    assert!(current.same_stream(&second));
    assert!(!current.same_stream(&first));
    assert!(r2.seq() > r1.seq());
}

#[test]
fn superseded_stream_is_closed() {
    let reg = ConnectionRegistry::new();
    let (first, mut rx1) = Connection::channel(4);
    reg.register("alice", first);
    reg.register("alice", Connection::channel(4).0);

    // registry held the only sender
    assert!(matches!(rx1.try_recv(), Err(TryRecvError::Disconnected)));
}

#[test]
fn stale_session_cannot_remove_successor() {
    let reg = ConnectionRegistry::new();
    let old = reg.register("alice", conn());
    let new = reg.register("alice", conn());

    assert!(!reg.unregister_session(&old));
    assert_eq!(reg.list_ids(), vec!["alice".to_string()]);

    assert!(reg.unregister_session(&new));
    assert!(!reg.unregister_session(&new));
    assert!(reg.is_empty());
}

#[test]
fn unregister_absent_is_noop() {
    let reg = ConnectionRegistry::new();
    assert!(reg.unregister("ghost").is_none());
    assert!(reg.get("ghost").is_none());
}

#[test]
fn for_each_sees_snapshot_while_callback_mutates() {
    let reg = ConnectionRegistry::new();
    reg.register("alice", conn());
    reg.register("bob", conn());

    let mut seen = Vec::new();
    reg.for_each(|id, _| {
        seen.push(id.to_string());
        reg.unregister(id);
        reg.register(format!("{id}-2"), conn());
    });
    seen.sort();

    assert_eq!(seen, vec!["alice".to_string(), "bob".to_string()]);
    assert_eq!(reg.list_ids(), vec!["alice-2".to_string(), "bob-2".to_string()]);
}

#[test]
fn clear_drops_everything() {
    let reg = ConnectionRegistry::new();
    let (c, mut rx) = Connection::channel(4);
    reg.register("alice", c);
    reg.register("bob", conn());

    assert_eq!(reg.clear(), 2);
    assert!(reg.is_empty());
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Disconnected)));
}

#[test]
fn concurrent_register_unregister_settles() {
    let reg = Arc::new(ConnectionRegistry::new());
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let reg = Arc::clone(&reg);
            std::thread::spawn(move || {
                for i in 0..200 {
                    let id = format!("c{t}-{i}");
                    reg.register(id.clone(), conn());
                    if i % 2 == 0 {
                        reg.unregister(&id);
                    }
                    let _ = reg.snapshot();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(reg.len(), 8 * 100);
    assert!(reg.list_ids().iter().all(|id| {
        let i: usize = id.rsplit('-').next().unwrap().parse().unwrap();
        i % 2 == 1
    }));
}
