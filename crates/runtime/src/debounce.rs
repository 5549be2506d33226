/// Identifies one scheduled firing of a [`Debouncer`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DebounceTicket(u64);

/// Trailing-edge debounce bookkeeping.
///
/// Every `schedule` supersedes the previous ticket; only the most recent ticket
/// is allowed to fire, and only once. The host owns the actual timer and
/// calls `fire` when it elapses.
#[derive(Debug)]
pub struct Debouncer {
    delay_ms: u32,
    generation: u64,
    pending: bool,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: false,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn schedule(&mut self) -> DebounceTicket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        DebounceTicket(self.generation)
    }

    /// Returns `true` if `ticket` is the latest one and has not fired yet.
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        if self.pending && ticket.0 == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{DebounceTicket, Debouncer};
    use pretty_assertions::assert_eq;

    /// Timers that fire in deadline order, like a single-threaded event loop.
    struct ManualTimers {
        pending: Vec<(u32, DebounceTicket, u32)>,
    }

    impl ManualTimers {
        fn new() -> Self {
            Self {
                pending: Vec::new(),
            }
        }

        fn set(&mut self, deadline: u32, ticket: DebounceTicket, state: u32) {
            self.pending.push((deadline, ticket, state));
        }

        fn run_all(&mut self, debouncer: &mut Debouncer) -> Vec<u32> {
            self.pending.sort_by_key(|(deadline, _, _)| *deadline);
            let mut fired = Vec::new();
            for (_, ticket, state) in self.pending.drain(..) {
                if debouncer.fire(ticket) {
                    fired.push(state);
                }
            }
            fired
        }
    }

    #[test]
    fn burst_collapses_into_one_firing_with_last_state() {
        let mut d = Debouncer::new(66);
        let mut timers = ManualTimers::new();

        for (i, now) in [0u32, 10, 20, 30, 40, 50, 60].into_iter().enumerate() {
            let ticket = d.schedule();
            timers.set(now + d.delay_ms(), ticket, i as u32);
        }

        assert_eq!(timers.run_all(&mut d), vec![6]);
        assert!(!d.is_pending());
    }

    #[test]
    fn ticket_fires_only_once() {
        let mut d = Debouncer::new(66);
        let t = d.schedule();
        assert!(d.fire(t));
        assert!(!d.fire(t));
    }

    #[test]
    fn cancel_invalidates_pending_ticket() {
        let mut d = Debouncer::new(66);
        let t = d.schedule();
        d.cancel();
        assert!(!d.fire(t));
    }

    #[test]
    fn separated_events_each_fire() {
        let mut d = Debouncer::new(66);
        let a = d.schedule();
        assert!(d.fire(a));
        let b = d.schedule();
        assert!(d.fire(b));
    }
}
