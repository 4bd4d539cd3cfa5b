use chrono::Utc;

use super::item::ItemId;

/// Hands out item ids from the wall clock, never repeating.
///
/// Ids are milliseconds since the epoch, bumped past the previous id when
/// two adds land in the same millisecond or the clock steps backwards.
#[derive(Debug, Clone, Default)]
pub(crate) struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub(crate) fn next(&mut self) -> ItemId {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_ms: i64) -> ItemId {
        let id = match self.last {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last = Some(id);
        ItemId::new(id)
    }
}
