/// Seeded pseudo-random picker.
///
/// Each pick computes `floor(|sin(seed)| * len) mod len` and then advances the seed by
/// one (wrapping at `i64::MAX`), so a given starting seed always yields the same sequence of picks. The formula
/// relies on the platform's `f64::sin`; results are stable within one numeric runtime.
#[derive(Debug, Clone)]
pub struct SeededSelector {
    seed: i64,
}

impl SeededSelector {
    pub fn new(seed: i64) -> Self {
        Self { seed }
    }

    /// Seed the next pick will use.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Next index in `0..len`. Returns `None` for an empty range without advancing.
    pub fn next_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let unit = (self.seed as f64).sin().abs();
        self.seed = self.seed.wrapping_add(1);
        Some((unit * len as f64).floor() as usize % len)
    }

    /// Pick one item from a slice.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        self.next_index(items.len()).map(|i| items[i])
    }
}
