use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{Decoder as PacketDecoder, DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::{CodecParams, DecodeError};

/// One decoded chunk of interleaved `f32` samples.
pub struct AudioFrame {
    pub samples: Vec<f32>,
    pub channels: usize,
}

#[non_exhaustive]
pub struct Decoder {
    reader: Box<dyn FormatReader>,
    decoder: Box<dyn PacketDecoder>,
    track_id: u32,
    params: CodecParams,
    finished: bool,
}

impl Decoder {
    pub fn open(path: &Path) -> Result<Self, DecodeError> {
        let file = File::open(path)?;
        let source = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe().format(
            &hint,
            source,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )?;
        let reader = probed.format;

        let track = reader
            .tracks()
            .iter()
            .find(|track| track.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or(DecodeError::NoAudioTrack)?;
        let track_id = track.id;
        let codec_params = track.codec_params.clone();

        let sample_rate = codec_params
            .sample_rate
            .ok_or(DecodeError::UnknownSampleRate)?;
        let channels = codec_params
            .channels
            .ok_or(DecodeError::UnknownChannelLayout)?
            .count();

        let decoder =
            symphonia::default::get_codecs().make(&codec_params, &DecoderOptions::default())?;

        Ok(Self {
            reader,
            decoder,
            track_id,
            params: CodecParams::new(sample_rate, channels),
            finished: false,
        })
    }

    #[must_use]
    pub const fn codec_params(&self) -> CodecParams {
        self.params
    }
}

impl Iterator for Decoder {
    type Item = Result<AudioFrame, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let packet = match self.reader.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(ref err))
                    if err.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    self.finished = true;
                    return None;
                }
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err.into()));
                }
            };

            if packet.track_id() != self.track_id {
                continue;
            }

            match self.decoder.decode(&packet) {
                Ok(decoded) => {
                    if decoded.frames() == 0 {
                        continue;
                    }
                    let spec = *decoded.spec();
                    let mut buffer = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
                    buffer.copy_interleaved_ref(decoded);
                    return Some(Ok(AudioFrame {
                        samples: buffer.samples().to_vec(),
                        channels: spec.channels.count(),
                    }));
                }
                // A corrupt packet inside an otherwise valid stream, skip it.
                Err(SymphoniaError::DecodeError(_)) => continue,
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err.into()));
                }
            }
        }
    }
}
