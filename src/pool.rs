//! Ordered parallel map over a unit stream
//!
//! A single producer assigns each unit a monotonically increasing submission
//! index and fans it out to a bounded pool of worker threads. Workers complete
//! out of order; a reordering buffer keyed by submission index releases results
//! to the consumer strictly in submission order. Total in-flight units are
//! capped proportionally to the worker count, so a slow consumer or one slow
//! worker exerts backpressure on the producer instead of growing memory.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::thread;

use crossbeam_channel::bounded;

use crate::Result;

/// In-flight unit budget per worker
///
/// Bounds the submission queue, the completion queue, and the reordering
/// buffer taken together.
pub const SLOTS_PER_WORKER: usize = 8;

/// A completed unit tagged with its submission index
///
/// Ordered by index alone, reversed so that a `BinaryHeap` acts as a min-heap
/// releasing the lowest outstanding index first.
struct Sequenced<U>(u64, U);

impl<U> PartialEq for Sequenced<U> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<U> Eq for Sequenced<U> {}
impl<U> PartialOrd for Sequenced<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<U> Ord for Sequenced<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

/// Apply `eval` to every unit using `num_threads` workers, delivering results
/// to `consume` strictly in submission order.
///
/// The unit stream itself yields `Result`s so that reader errors travel
/// through the pipeline and surface at their submission position. The first
/// error, whether from the stream or from an evaluation, aborts the run: the
/// producer stops, the channels disconnect, and every worker is joined before
/// the error is returned. Results already delivered are not rolled back.
///
/// `num_threads` is clamped to at least 1; a single worker degrades to fully
/// sequential, deterministic execution.
pub fn ordered_map<I, T, U, E, C>(
    units: I,
    num_threads: usize,
    eval: E,
    mut consume: C,
) -> Result<()>
where
    I: Iterator<Item = Result<T>> + Send,
    T: Send,
    U: Send,
    E: Fn(T) -> Result<U> + Sync,
    C: FnMut(U) -> Result<()>,
{
    let num_threads = num_threads.max(1);
    let capacity = num_threads * SLOTS_PER_WORKER;

    thread::scope(|scope| -> Result<()> {
        // Tickets cap total in-flight units, reordering buffer included
        let (ticket_tx, ticket_rx) = bounded::<()>(capacity);
        let (unit_tx, unit_rx) = bounded::<(u64, Result<T>)>(capacity);
        let (done_tx, done_rx) = bounded::<(u64, Result<U>)>(capacity);

        // Producer: index units at submission, stop at the first stream error
        scope.spawn(move || {
            for (index, unit) in (0u64..).zip(units) {
                let halt = unit.is_err();
                if ticket_tx.send(()).is_err() {
                    return;
                }
                if unit_tx.send((index, unit)).is_err() {
                    return;
                }
                if halt {
                    return;
                }
            }
        });

        // Workers: evaluate out of order, pass stream errors through untouched
        for _ in 0..num_threads {
            let unit_rx = unit_rx.clone();
            let done_tx = done_tx.clone();
            let eval = &eval;
            scope.spawn(move || {
                while let Ok((index, unit)) = unit_rx.recv() {
                    let outcome = unit.and_then(eval);
                    if done_tx.send((index, outcome)).is_err() {
                        return;
                    }
                }
            });
        }
        drop(unit_rx);
        drop(done_tx);

        // Consumer: drain completions into the reordering buffer and release
        // them strictly in index order
        let mut next_index = 0u64;
        let mut pending = BinaryHeap::new();
        for (index, outcome) in done_rx {
            pending.push(Sequenced(index, outcome));
            while pending.peek().is_some_and(|entry| entry.0 == next_index) {
                let Sequenced(_, outcome) = pending.pop().unwrap();
                consume(outcome?)?;
                let _ = ticket_rx.recv();
                next_index += 1;
            }
        }
        Ok(())
    })
}
