use std::ops::Range;

/// Number of full windows of `window` samples that fit into `len` when
/// advancing by `step`. A trailing remainder shorter than one window does not
/// count.
pub(crate) fn stepped_windows(len: usize, window: usize, step: usize) -> usize {
    assert!(window > 0, "Window size must be greater than 0");
    assert!(step > 0, "Step size must be greater than 0");

    if len < window {
        0
    } else {
        (len - window) / step + 1
    }
}

#[inline(always)]
pub(crate) fn stepped_window_ranges(len: usize, window: usize, step: usize) -> Vec<Range<usize>> {
    (0..stepped_windows(len, window, step))
        .map(|i| i * step..i * step + window)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepped_windows_1_1() {
        assert_eq!(0, stepped_windows(0, 1, 1));
        assert_eq!(1, stepped_windows(1, 1, 1));
        assert_eq!(5, stepped_windows(5, 1, 1));
    }

    #[test]
    fn test_stepped_windows_3_2() {
        assert_eq!(4, stepped_windows(10, 3, 2));
        assert_eq!(5, stepped_windows(11, 3, 2));
    }

    #[test]
    fn test_stepped_windows_5_2() {
        assert_eq!(0, stepped_windows(4, 5, 2));
        assert_eq!(1, stepped_windows(5, 5, 2));
    }

    #[test]
    fn test_stepped_windows_one_second_at_48k() {
        assert_eq!(0, stepped_windows(47_999, 48_000, 48_000));
        assert_eq!(1, stepped_windows(48_000, 48_000, 48_000));
        assert_eq!(1, stepped_windows(95_999, 48_000, 48_000));
        assert_eq!(2, stepped_windows(96_000, 48_000, 48_000));
    }

    #[test]
    fn test_stepped_windows_25s_clip_10s_window_10s_hop_at_48k() {
        // 25 s at 48 kHz: two full 10 s windows, the 5 s tail does not fit.
        assert_eq!(2, stepped_windows(1_200_000, 480_000, 480_000));
        assert_eq!(3, stepped_windows(1_440_000, 480_000, 480_000));
    }

    #[test]
    fn test_stepped_window_ranges_1_1() {
        assert!(stepped_window_ranges(0, 1, 1).is_empty());
        assert_eq!(vec![0usize..1], stepped_window_ranges(1, 1, 1));
        assert_eq!(
            vec![0..1, 1..2, 2..3, 3..4, 4..5],
            stepped_window_ranges(5, 1, 1)
        );
    }

    #[test]
    fn test_stepped_window_ranges_3_2() {
        assert_eq!(vec![0..3, 2..5, 4..7, 6..9], stepped_window_ranges(10, 3, 2));
        assert_eq!(
            vec![0..3, 2..5, 4..7, 6..9, 8..11],
            stepped_window_ranges(11, 3, 2)
        );
    }

    #[test]
    fn test_stepped_window_ranges_keep_window_length() {
        for range in stepped_window_ranges(1_200_000, 480_000, 480_000) {
            assert_eq!(480_000, range.len());
        }
    }
}
