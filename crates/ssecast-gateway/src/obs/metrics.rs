//! Minimal metrics registry for the gateway.
//!
//! Labels are flattened into sorted key vectors to keep deterministic
//! ordering inside one series.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for one label set (0 if never touched).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        for r in self.map.iter() {
            let val = r.value().load(Ordering::Relaxed);
            if r.key().is_empty() {
                let _ = writeln!(out, "{} {}", name, val);
                continue;
            }
            let label_str = r
                .key()
                .iter()
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
        }
    }
}

#[derive(Default)]
pub struct GatewayMetrics {
    pub streams_opened: CounterVec,
    pub streams_closed: CounterVec,
    pub frames_delivered: CounterVec,
    pub delivery_failures: CounterVec,
    draining: AtomicBool,
}

impl GatewayMetrics {
    pub fn set_draining(&self) {
        self.draining.store(true, Ordering::Relaxed);
    }

    pub fn is_draining(&self) -> bool {
        self.draining.load(Ordering::Relaxed)
    }

    /// Render all counters plus gauge lines provided by callers.
    pub fn render(&self, extra: &[(&str, u64)]) -> String {
        let mut out = String::new();
        self.streams_opened.render("ssecast_streams_opened_total", &mut out);
        self.streams_closed.render("ssecast_streams_closed_total", &mut out);
        self.frames_delivered.render("ssecast_frames_delivered_total", &mut out);
        self.delivery_failures.render("ssecast_delivery_failures_total", &mut out);

        let _ = writeln!(
            out,
            "# TYPE ssecast_draining gauge\nssecast_draining {}",
            if self.is_draining() { 1 } else { 0 }
        );
        for (k, v) in extra {
            let _ = writeln!(out, "# TYPE {} gauge\n{} {}", k, k, v);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_order_does_not_split_series() {
        let c = CounterVec::default();
        c.inc(&[("mode", "unicast"), ("reason", "closed")]);
        c.inc(&[("reason", "closed"), ("mode", "unicast")]);
        assert_eq!(c.get(&[("mode", "unicast"), ("reason", "closed")]), 2);
    }

    #[test]
    fn render_includes_extra_gauges() {
        let m = GatewayMetrics::default();
        m.streams_opened.inc(&[]);
        let text = m.render(&[("ssecast_clients_connected", 3)]);
        assert!(text.contains("ssecast_streams_opened_total 1"));
        assert!(text.contains("ssecast_clients_connected 3"));
        assert!(text.contains("ssecast_draining 0"));
    }
}
