use candle_core::{Module, Tensor, D};
use candle_nn::{conv2d, linear, seq, Conv2dConfig, Sequential, VarBuilder};

/// Class count the models ship with: music vs advertisement.
pub const DEFAULT_CLASSES: usize = 2;

/// Convolutional classifier over single-channel log-mel spectrograms.
///
/// Four conv blocks double the channel width while halving both spatial
/// dimensions, then global average pooling collapses whatever time extent
/// is left. Inputs of any `(bands, frames)` size map to one logit row per
/// batch item.
pub struct CnnWithGap {
    net: Sequential,
}

impl CnnWithGap {
    pub fn new(vs: VarBuilder, n_classes: usize) -> candle_core::Result<Self> {
        let cfg = Conv2dConfig {
            padding: 1,
            ..Default::default()
        };

        let net = seq()
            // (B, 1, H, W) -> (B, 32, H/2, W/2)
            .add(conv2d(1, 32, 3, cfg, vs.pp("first"))?)
            .add_fn(|xs| xs.relu())
            .add_fn(|xs| xs.max_pool2d(2))
            // -> (B, 64, H/4, W/4)
            .add(conv2d(32, 64, 3, cfg, vs.pp("second"))?)
            .add_fn(|xs| xs.relu())
            .add_fn(|xs| xs.max_pool2d(2))
            // -> (B, 128, H/8, W/8)
            .add(conv2d(64, 128, 3, cfg, vs.pp("third"))?)
            .add_fn(|xs| xs.relu())
            .add_fn(|xs| xs.max_pool2d(2))
            // -> (B, 256, H/16, W/16)
            .add(conv2d(128, 256, 3, cfg, vs.pp("fourth"))?)
            .add_fn(|xs| xs.relu())
            .add_fn(|xs| xs.max_pool2d(2))
            // Global average pool over both spatial dims: (B, 256)
            .add_fn(|xs| xs.mean(D::Minus1)?.mean(D::Minus1))
            .add(linear(256, n_classes, vs.pp("dense"))?);

        Ok(Self { net })
    }
}

impl Module for CnnWithGap {
    /// Raw logits, `(batch, n_classes)`. No softmax is applied.
    fn forward(&self, xs: &Tensor) -> candle_core::Result<Tensor> {
        self.net.forward(xs)
    }
}

#[cfg(test)]
mod tests {
    use candle_core::{DType, Device};
    use candle_nn::VarMap;

    use super::*;

    #[test]
    fn test_logit_shape_follows_batch_and_classes() {
        let device = Device::Cpu;
        let vs = VarBuilder::zeros(DType::F32, &device);
        let model = CnnWithGap::new(vs, DEFAULT_CLASSES).unwrap();

        let input = Tensor::zeros((2, 1, 128, 16), DType::F32, &device).unwrap();
        let output = model.forward(&input).unwrap();

        assert_eq!(output.dims(), &[2, DEFAULT_CLASSES]);
    }

    #[test]
    fn test_class_count_is_configurable() {
        let device = Device::Cpu;
        let vs = VarBuilder::zeros(DType::F32, &device);
        let model = CnnWithGap::new(vs, 3).unwrap();

        let input = Tensor::zeros((1, 1, 128, 938), DType::F32, &device).unwrap();
        let output = model.forward(&input).unwrap();

        assert_eq!(output.dims(), &[1, 3]);
    }

    #[test]
    fn test_forward_is_deterministic() {
        let device = Device::Cpu;
        let varmap = VarMap::new();
        let vs = VarBuilder::from_varmap(&varmap, DType::F32, &device);
        let model = CnnWithGap::new(vs, DEFAULT_CLASSES).unwrap();

        let input = Tensor::ones((1, 1, 64, 16), DType::F32, &device).unwrap();
        let first = model.forward(&input).unwrap().to_vec2::<f32>().unwrap();
        let second = model.forward(&input).unwrap().to_vec2::<f32>().unwrap();

        assert_eq!(first, second);
    }
}
