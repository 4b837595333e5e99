//! JSON test vector loader for event frame tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use serde::Deserialize;

use ssecast_core::protocol::Event;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    pub event: EventData,
    #[serde(default)]
    pub expect_wire: Option<String>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct EventData {
    pub data: String,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

impl EventData {
    pub fn build(&self) -> Event {
        let mut ev = Event::message(self.data.clone());
        if let Some(name) = &self.event {
            ev = ev.with_event(name.clone());
        }
        if let Some(id) = &self.id {
            ev = ev.with_id(id.clone());
        }
        ev
    }
}

pub fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

pub const ALL: [&str; 8] = [
    "message_single_line.json",
    "message_multiline_lf.json",
    "message_crlf_and_cr.json",
    "message_empty.json",
    "message_trailing_newline.json",
    "named_with_id.json",
    "event_name_with_newline.json",
    "id_with_nul.json",
];
