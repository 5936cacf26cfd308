use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("format: {0}")]
    Format(#[from] symphonia::core::errors::Error),

    #[error("no audio track")]
    NoAudioTrack,

    #[error("sample rate is not declared")]
    UnknownSampleRate,

    #[error("channel layout is not declared")]
    UnknownChannelLayout,

    #[error(transparent)]
    ResamplerConstruction(#[from] rubato::ResamplerConstructionError),

    #[error("resample: {0}")]
    Resample(#[from] rubato::ResampleError),
}
