//! Spectral frame analysis

pub mod dft;

pub use dft::{dft_magnitude, DftMagnitude, DEFAULT_N_FFT};
