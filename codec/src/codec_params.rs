#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CodecParams {
    pub(crate) sample_rate: u32,
    pub(crate) channels: usize,
}

impl CodecParams {
    #[must_use]
    pub const fn new(sample_rate: u32, channels: usize) -> Self {
        Self {
            sample_rate,
            channels,
        }
    }

    #[must_use]
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    #[must_use]
    pub const fn channels(&self) -> usize {
        self.channels
    }
}
