//! Reuse pool for scratch objects.
//!
//! Incremental hull construction allocates and discards identically shaped
//! scratch state (candidate index lists, horizon edge buffers) once per
//! inserted point. The pool keeps released instances around and hands the
//! most recently released one back first, so the allocation behind it stays
//! warm.

/// LIFO cache of released scratch objects.
///
/// Not synchronized: the `&mut self` API ties the pool to a single
/// construction pass, and sharing one across threads requires external
/// locking.
#[derive(Debug, Default)]
pub struct Pool<T: Default> {
    data: Vec<T>,
}

impl<T: Default> Pool<T> {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Take an exclusively owned instance out of the pool.
    ///
    /// Returns the most recently reclaimed instance, or a freshly
    /// default-constructed one when the pool is empty. Reclaimed instances
    /// come back with whatever state they held at
    /// [`reclaim`](Pool::reclaim) time; resetting is the caller's job.
    pub fn get(&mut self) -> T {
        self.data.pop().unwrap_or_default()
    }

    /// Move an instance back into the pool.
    ///
    /// The pool never inspects or clears the value. A later
    /// [`get`](Pool::get) returns it as-is, stale contents included.
    pub fn reclaim(&mut self, value: T) {
        self.data.push(value);
    }

    /// Drop every cached instance, releasing their memory.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Number of instances currently cached.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when no instances are cached.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
