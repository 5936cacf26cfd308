//! Fixed short-time analysis parameters shared by every feature.

/// FFT size and analysis frame length, samples.
pub const N_FFT: usize = 2048;

/// Step between analysis frames, samples.
pub const FRAME_HOP: usize = 512;

/// Mel bands in the filterbank.
pub const N_MELS: usize = 128;

/// Cepstral coefficients kept from the DCT.
pub const N_MFCC: usize = 20;

/// Dynamic range floor below the peak, dB.
pub const TOP_DB: f32 = 80.0;

/// Smallest power considered distinguishable from silence.
pub const AMIN: f32 = 1e-10;
