// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Counts {
    created: Cell<usize>,
    dropped: Cell<usize>,
}

/// Counts creations and drops of the [`Tracked`] values it hands out.
///
/// Used to check that containers release every value exactly once: after
/// the container is gone, `live()` must be back to zero.
#[derive(Debug, Clone, Default)]
pub struct DropCounter {
    counts: Rc<Counts>,
}

impl DropCounter {
    /// Creates a counter with no tracked values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracked value carrying `value`.
    pub fn track(&self, value: u32) -> Tracked {
        self.counts.created.set(self.counts.created.get() + 1);

        Tracked {
            value,
            counter: Some(self.clone()),
        }
    }

    /// Number of tracked values created so far (clones included).
    pub fn created(&self) -> usize {
        self.counts.created.get()
    }

    /// Number of tracked values dropped so far.
    pub fn dropped(&self) -> usize {
        self.counts.dropped.get()
    }

    /// Number of tracked values still alive.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }
}

/// A value whose lifetime is reported to a [`DropCounter`].
///
/// `Tracked::default()` is untracked, so containers can fill spare slots
/// with defaults without disturbing the counts.
#[derive(Debug, Default)]
pub struct Tracked {
    value: u32,
    counter: Option<DropCounter>,
}

impl Tracked {
    /// The carried value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns `true` if this value reports to a counter.
    pub fn is_tracked(&self) -> bool {
        self.counter.is_some()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        match &self.counter {
            Some(counter) => counter.track(self.value),
            None => Self {
                value: self.value,
                counter: None,
            },
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(counter) = &self.counter {
            counter
                .counts
                .dropped
                .set(counter.counts.dropped.get() + 1);
        }
    }
}
