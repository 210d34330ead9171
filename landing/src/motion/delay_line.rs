use std::collections::VecDeque;

/// Bounded queue of pending deferred work, keyed by ticket.
///
/// `H` is whatever cancels the work (a timeout handle in the browser). The
/// line never holds more than `capacity` entries: pushing into a full line
/// hands back the oldest handle so the caller can cancel it.
#[derive(Debug)]
pub struct DelayLine<H> {
    pending: VecDeque<(u64, H)>,
    capacity: usize,
    next_ticket: u64,
}

impl<H> DelayLine<H> {
    pub fn new(capacity: usize) -> Self {
        Self {
            pending: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            next_ticket: 0,
        }
    }

    /// Reserve an id for work about to be scheduled.
    pub fn ticket(&mut self) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        ticket
    }

    /// Track `handle`. Returns the evicted oldest handle when the line is full.
    #[must_use]
    pub fn push(&mut self, ticket: u64, handle: H) -> Option<H> {
        let evicted = if self.pending.len() >= self.capacity {
            self.pending.pop_front().map(|(_, h)| h)
        } else {
            None
        };
        self.pending.push_back((ticket, handle));
        evicted
    }

    /// Work for `ticket` ran; forget it. Unknown tickets are ignored.
    pub fn complete(&mut self, ticket: u64) {
        if let Some(pos) = self.pending.iter().position(|(t, _)| *t == ticket) {
            self.pending.remove(pos);
        }
    }

    /// Take every pending handle, oldest first.
    pub fn drain(&mut self) -> Vec<H> {
        self.pending.drain(..).map(|(_, h)| h).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tickets_are_unique() {
        let mut line = DelayLine::<()>::new(4);
        let a = line.ticket();
        let b = line.ticket();
        assert_ne!(a, b);
    }

    #[test]
    fn completed_work_leaves_the_line() {
        let mut line = DelayLine::new(4);
        let t0 = line.ticket();
        let t1 = line.ticket();
        assert!(line.push(t0, "first").is_none());
        assert!(line.push(t1, "second").is_none());

        line.complete(t0);
        assert_eq!(line.len(), 1);
        line.complete(t0);
        assert_eq!(line.drain(), vec!["second"]);
        assert!(line.is_empty());
    }

    #[test]
    fn full_line_evicts_oldest() {
        let mut line = DelayLine::new(2);
        let mut evicted = Vec::new();
        for handle in 0..5 {
            let ticket = line.ticket();
            evicted.extend(line.push(ticket, handle));
            assert!(line.len() <= 2);
        }
        assert_eq!(evicted, vec![0, 1, 2]);
        assert_eq!(line.drain(), vec![3, 4]);
    }

    #[test]
    fn zero_capacity_still_keeps_latest() {
        let mut line = DelayLine::new(0);
        let t = line.ticket();
        assert!(line.push(t, 'a').is_none());
        let t = line.ticket();
        assert_eq!(line.push(t, 'b'), Some('a'));
    }
}
