/// Fires on every `every`-th frame, starting with frame 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Cadence {
    every: u64,
}

impl Cadence {
    /// An interval of 0 is treated as 1 (fire every frame).
    pub const fn every(frames: u64) -> Self {
        Self {
            every: if frames == 0 { 1 } else { frames },
        }
    }

    pub const fn interval(self) -> u64 {
        self.every
    }

    #[inline]
    pub const fn fires(self, frame_index: u64) -> bool {
        frame_index % self.every == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_on_multiples_only() {
        let c = Cadence::every(60);
        let fired: Vec<u64> = (0..=180).filter(|&i| c.fires(i)).collect();
        assert_eq!(fired, vec![0, 60, 120, 180]);
    }

    #[test]
    fn zero_interval_fires_every_frame() {
        let c = Cadence::every(0);
        assert_eq!(c.interval(), 1);
        assert!((0..10).all(|i| c.fires(i)));
    }
}
