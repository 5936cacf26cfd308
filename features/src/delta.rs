use ndarray::Array2;

/// Local linear-regression slope along the time axis (columns), two frames on
/// each side, indices clamped at the edges. Apply twice for the second order.
pub(crate) fn delta(input: &Array2<f32>) -> Array2<f32> {
    let frames = input.ncols();
    let mut output = Array2::<f32>::zeros(input.raw_dim());

    for t in 0..frames {
        let a2 = input.column(t.saturating_sub(2));
        let a1 = input.column(t.saturating_sub(1));
        let b1 = input.column((t + 1).min(frames - 1));
        let b2 = input.column((t + 2).min(frames - 1));

        // n = 2, denom = 2 * (1^2 + 2^2)
        let d = ((&b1 - &a1) + 2.0 * (&b2 - &a2)) / 10.0;
        output.column_mut(t).assign(&d);
    }

    output
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn test_delta() {
        let input = array![
            [1.0, 2.0, 3.0, 4.0, 5.0],
            [1.0, 3.0, 5.0, 7.0, 9.0],
            [2.0, 2.0, 2.0, 2.0, 2.0],
        ];
        assert_eq!(
            delta(&input),
            array![
                [0.5, 0.8, 1.0, 0.8, 0.5],
                [1.0, 1.6, 2.0, 1.6, 1.0],
                [0.0, 0.0, 0.0, 0.0, 0.0],
            ]
        );
    }

    #[test]
    fn test_delta_of_linear_ramp_is_the_slope_inside() {
        let input = array![[0.0, 3.0, 6.0, 9.0, 12.0, 15.0, 18.0]];
        let d = delta(&input);

        // Edges are damped by clamping; interior frames see the exact slope.
        for t in 2..5 {
            assert_eq!(d[[0, t]], 3.0);
        }
        assert!(d[[0, 0]] < 3.0);
        assert!(d[[0, 6]] < 3.0);
    }

    #[test]
    fn test_second_order_of_constant_is_zero() {
        let input = array![[4.0, 4.0, 4.0, 4.0, 4.0]];
        let d2 = delta(&delta(&input));
        assert!(d2.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_single_frame() {
        let input = array![[1.5], [2.5]];
        assert_eq!(delta(&input), array![[0.0], [0.0]]);
    }
}
