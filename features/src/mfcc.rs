use ndarray::Array2;

/// First `n_out` rows of the orthonormal DCT-II applied along the first axis.
/// For a log-mel input of `(n_mels, frames)` this yields `(n_out, frames)`
/// cepstral coefficients.
pub(crate) fn dct_2(input: &Array2<f32>, n_out: usize) -> Array2<f32> {
    use std::f32::consts::PI;

    let n = input.nrows();
    let scale_first = (1.0 / n as f32).sqrt();
    let scale_rest = (2.0 / n as f32).sqrt();

    let mut basis = Array2::<f32>::zeros((n_out, n));
    for k in 0..n_out {
        let scale = if k == 0 { scale_first } else { scale_rest };
        for j in 0..n {
            basis[[k, j]] =
                scale * (PI * k as f32 * (2 * j + 1) as f32 / (2 * n) as f32).cos();
        }
    }

    basis.dot(input)
}
