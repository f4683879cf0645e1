use super::*;
use anyhow::format_err;
use parking_lot::RwLock;

type InMemoryLogInner = Vec<Event>;

/// Keeps every written event, in order
#[derive(Debug, Default)]
pub struct InMemoryLog {
    inner: RwLock<InMemoryLogInner>,
}

impl InMemoryLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reader for InMemoryLog {
    fn read(&self, offset: Offset, limit: usize) -> Result<WithOffset<Vec<LogEvent>>> {
        let offset_usize = usize::try_from(offset)?;

        let read = self.inner.read();

        let data: Vec<_> = read
            .get(offset_usize..)
            .ok_or_else(|| format_err!("offset {offset} out of bounds"))?
            .iter()
            .take(limit)
            .zip(offset..)
            .map(|(e, offset)| LogEvent {
                offset,
                details: e.clone(),
            })
            .collect();

        Ok(WithOffset {
            offset: offset + u64::try_from(data.len())?,
            data,
        })
    }

    fn get_start_offset(&self) -> Offset {
        0
    }
}

impl Writer for InMemoryLog {
    fn write(&self, event: &Event) {
        self.inner.write().push(event.clone());
    }
}

pub fn new_in_memory_shared() -> (SharedWriter, SharedReader) {
    let log = Arc::new(InMemoryLog::new());
    (log.clone(), log)
}
