//! Event log
//!
//! Where an auction sends its [`Event`]s. Writers decide what happens to
//! them: forwarding to `tracing`, keeping them in memory to be read back,
//! or printing them for a human.
mod in_memory;

pub use self::in_memory::*;

use crate::event::{Event, DEFAULT_CURRENCY};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

pub type Offset = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub offset: Offset,
    pub details: Event,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithOffset<T> {
    pub offset: Offset,
    pub data: T,
}

pub trait Reader {
    /// Read up to `limit` events starting at `offset`
    ///
    /// The returned offset is the one to continue reading from.
    fn read(&self, offset: Offset, limit: usize) -> Result<WithOffset<Vec<LogEvent>>>;

    fn get_start_offset(&self) -> Offset;
}

pub trait Writer {
    fn write(&self, event: &Event);
}

pub type SharedReader = Arc<dyn Reader + Send + Sync + 'static>;
pub type SharedWriter = Arc<dyn Writer + Send + Sync + 'static>;

/// Forwards every event to `tracing` at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingWriter;

impl TracingWriter {
    pub fn new_shared() -> SharedWriter {
        Arc::new(Self)
    }
}

impl Writer for TracingWriter {
    fn write(&self, event: &Event) {
        for line in event.lines(DEFAULT_CURRENCY) {
            info!(target: "lot_auction::event", "{line}");
        }
    }
}
