//! Frame geometry: lengths in samples, frame counts and frame iteration

use crate::error::{FeatureError, Result};

/// Convert a duration to a sample count, rounding half to even
///
/// # Errors
/// `InvalidParameter` if the product does not round to at least one sample
pub fn duration_to_samples(name: &'static str, sample_rate: f64, duration: f64) -> Result<usize> {
    let samples = (sample_rate * duration).round_ties_even();
    if !(samples.is_finite() && samples >= 1.0) {
        return Err(FeatureError::invalid_parameter(
            name,
            format!("{duration} s at {sample_rate} Hz is less than one sample"),
        ));
    }
    // usize::MAX as f64 rounds up to 2^64, which is already out of range
    if samples >= usize::MAX as f64 {
        return Err(FeatureError::invalid_parameter(
            name,
            format!("{duration} s at {sample_rate} Hz exceeds the addressable sample count"),
        ));
    }
    Ok(samples as usize)
}

/// Number of complete frames analysed in a signal of `len` samples
///
/// `floor((len - frame_length) / hop_length)`, or 0 when the signal is
/// shorter than one frame. Trailing samples that do not fill a frame are
/// dropped.
pub fn num_frames(len: usize, frame_length: usize, hop_length: usize) -> usize {
    if len < frame_length {
        0
    } else {
        (len - frame_length) / hop_length
    }
}

/// Iterator over the analysed frames of a signal, in temporal order
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    signal: &'a [f64],
    frame_length: usize,
    hop_length: usize,
    next: usize,
    count: usize,
}

impl<'a> Frames<'a> {
    pub fn new(signal: &'a [f64], frame_length: usize, hop_length: usize) -> Self {
        Self {
            signal,
            frame_length,
            hop_length,
            next: 0,
            count: num_frames(signal.len(), frame_length, hop_length),
        }
    }
}

impl<'a> Iterator for Frames<'a> {
    type Item = &'a [f64];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let start = self.next * self.hop_length;
        self.next += 1;
        Some(&self.signal[start..start + self.frame_length])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_lengths() {
        assert_eq!(duration_to_samples("frame_duration", 16000.0, 0.04).unwrap(), 640);
        assert_eq!(duration_to_samples("hop_duration", 16000.0, 0.02).unwrap(), 320);
    }

    #[test]
    fn test_ties_round_to_even() {
        assert_eq!(duration_to_samples("frame_duration", 10.0, 0.25).unwrap(), 2);
        assert_eq!(duration_to_samples("frame_duration", 2.0, 1.75).unwrap(), 4);
        assert_eq!(duration_to_samples("frame_duration", 1.0, 2.5).unwrap(), 2);
    }

    #[test]
    fn test_sub_sample_duration_rejected() {
        assert!(duration_to_samples("hop_duration", 100.0, 0.004).is_err());
    }

    #[test]
    fn test_oversized_duration_rejected() {
        assert!(matches!(
            duration_to_samples("frame_duration", 1e30, 1.0),
            Err(FeatureError::InvalidParameter { name: "frame_duration", .. })
        ));
        assert!(duration_to_samples("hop_duration", f64::MAX, 2.0).is_err());
    }

    #[test]
    fn test_frame_count() {
        assert_eq!(num_frames(400, 640, 320), 0);
        assert_eq!(num_frames(640, 640, 320), 0);
        assert_eq!(num_frames(640 + 3 * 320, 640, 320), 3);
        assert_eq!(num_frames(640 + 3 * 320 + 319, 640, 320), 3);
    }

    #[test]
    fn test_frame_boundaries() {
        let signal: Vec<f64> = (0..10).map(f64::from).collect();
        let frames: Vec<&[f64]> = Frames::new(&signal, 4, 2).collect();

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(frames[1], &[2.0, 3.0, 4.0, 5.0]);
        assert_eq!(frames[2], &[4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_frames_exact_size() {
        let signal = vec![0.0; 100];
        let mut frames = Frames::new(&signal, 10, 5);

        assert_eq!(frames.len(), 18);
        frames.next();
        assert_eq!(frames.len(), 17);
    }

    proptest! {
        #[test]
        fn prop_frame_count_law(len in 0usize..5000, frame_length in 1usize..800, hop_length in 1usize..400) {
            let expected = if len >= frame_length { (len - frame_length) / hop_length } else { 0 };
            let signal = vec![0.0; len];

            prop_assert_eq!(num_frames(len, frame_length, hop_length), expected);
            prop_assert_eq!(Frames::new(&signal, frame_length, hop_length).count(), expected);
        }
    }
}
