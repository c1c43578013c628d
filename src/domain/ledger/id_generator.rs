use super::value_objects::EntryId;
use crate::domain::logging::get_time_provider;

/// Source of uniformly distributed values in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Produces candidate entry ids; uniqueness is enforced by the ledger.
pub trait IdGenerator {
    fn next_id(&mut self) -> EntryId;
}

/// Timestamp + random suffix, read from the global time provider.
pub struct TimestampIdGenerator<R> {
    random: R,
}

impl<R: RandomSource> TimestampIdGenerator<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }
}

impl<R: RandomSource> IdGenerator for TimestampIdGenerator<R> {
    fn next_id(&mut self) -> EntryId {
        let timestamp = get_time_provider().current_timestamp();
        EntryId::from_parts(timestamp, self.random.next_unit())
    }
}
