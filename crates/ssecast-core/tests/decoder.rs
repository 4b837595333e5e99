//! Event-stream decoder behavior on chunked input.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use ssecast_core::protocol::{Event, EventDecoder, KEEPALIVE_COMMENT};

#[test]
fn back_to_back_frames_stay_separate() {
    let mut wire = Vec::new();
    wire.extend_from_slice(&Event::message("hi").encode().unwrap());
    wire.extend_from_slice(&Event::message("bye").encode().unwrap());

    let mut dec = EventDecoder::new();
    let events = dec.push(&wire).unwrap();
    let data: Vec<&str> = events.iter().map(|e| e.data.as_str()).collect();
    assert_eq!(data, vec!["hi", "bye"]);
}

#[test]
fn byte_by_byte_feeding_yields_same_events() {
    let wire = Event::message("one\ntwo").with_event("status").encode().unwrap();

    let mut dec = EventDecoder::new();
    let mut events = Vec::new();
    for b in wire.iter() {
        events.extend(dec.push(std::slice::from_ref(b)).unwrap());
    }
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].data, "one\ntwo");
    assert_eq!(events[0].event.as_deref(), Some("status"));
}

#[test]
fn crlf_split_across_chunks_is_one_line_break() {
    let mut dec = EventDecoder::new();
    assert!(dec.push(b"data: a\r").unwrap().is_empty());
    assert!(dec.push(b"\ndata: b\r\n").unwrap().is_empty());
    let events = dec.push(b"\r\n").unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].data, "a\nb");
}

#[test]
fn comments_are_counted_not_dispatched() {
    let mut dec = EventDecoder::new();
    let events = dec.push(KEEPALIVE_COMMENT).unwrap();
    assert!(events.is_empty());
    assert_eq!(dec.comments(), 1);
}

#[test]
fn incomplete_frame_is_held_back() {
    let mut dec = EventDecoder::new();
    assert!(dec.push(b"data: partial\n").unwrap().is_empty());
    let events = dec.push(b"\n").unwrap();
    assert_eq!(events[0].data, "partial");
}

#[test]
fn invalid_utf8_is_bad_request() {
    let mut dec = EventDecoder::new();
    let e = dec.push(b"data: \xff\xfe\n").expect_err("must fail");
    assert_eq!(e.client_code().as_str(), "BAD_REQUEST");
}
