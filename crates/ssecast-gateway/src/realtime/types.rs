use bytes::Bytes;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Write side of one client's event stream.
///
/// The transport owns the receiving half and closes it when the client goes
/// away; the registry only holds this sender.
#[derive(Clone, Debug)]
pub struct Connection {
    tx: mpsc::Sender<Bytes>,
}

impl Connection {
    pub fn new(tx: mpsc::Sender<Bytes>) -> Self {
        Self { tx }
    }

    /// Connection plus the receiver the transport drains into the response body.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Bytes>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self::new(tx), rx)
    }

    /// Queue one encoded frame. Never waits.
    pub fn write(&self, frame: Bytes) -> Result<(), WriteError> {
        match self.tx.try_send(frame) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(WriteError::QueueFull),
            Err(TrySendError::Closed(_)) => Err(WriteError::Closed),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// True if both handles write into the same stream.
    pub fn same_stream(&self, other: &Connection) -> bool {
        self.tx.same_channel(&other.tx)
    }
}

/// Why a single write did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WriteError {
    #[error("stream closed")]
    Closed,
    #[error("outbound queue full")]
    QueueFull,
}

impl WriteError {
    /// Metric label.
    pub fn label(self) -> &'static str {
        match self {
            WriteError::Closed => "closed",
            WriteError::QueueFull => "queue_full",
        }
    }
}

/// Handle returned by `register`; identifies one registration of an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    id: String,
    seq: u64,
}

impl Registration {
    pub(crate) fn new(id: String, seq: u64) -> Self {
        Self { id, seq }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Outcome of one broadcast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub delivered: usize,
    /// Ids whose write failed; they have been unregistered.
    pub failed: Vec<String>,
}

impl DeliveryReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
