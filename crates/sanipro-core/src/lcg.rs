use std::time::{SystemTime, UNIX_EPOCH};

const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;
const MODULUS: u64 = 1 << 31;

/// Linear congruential generator used for reproducible shuffles.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % MODULUS,
        }
    }

    /// Seed from the system clock.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(nanos)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = (MULTIPLIER * self.state + INCREMENT) % MODULUS;
        self.state as u32
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_u32() as usize % (i + 1);
            items.swap(i, j);
        }
    }
}
