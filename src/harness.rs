//! Benchmark and validation driver: seeded random grids, timed repeated transforms, and comparison against the
//! `rustfft` reference.

use std::time::{Duration, Instant};

use num_complex::Complex;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use crate::buffer::AlignedBuffer;
use crate::error::FftError;
use crate::isa::Isa;
use crate::oracle::ReferenceFft2d;
use crate::plan::Fft2dPlanner;
use crate::radix::Radix;
use crate::{Fft2d, Length2d};

/// Largest relative error a validated transform may show against the reference
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// A `width` x `height` row-major grid whose real and imaginary parts are uniform in `[-0.5, 0.5)`.
///
/// The same seed always produces the same grid.
pub fn random_grid(width: usize, height: usize, seed: u64) -> Vec<Complex<f32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(-0.5f32, 0.5f32);
    (0..width * height)
        .map(|_| Complex::new(dist.sample(&mut rng), dist.sample(&mut rng)))
        .collect()
}

/// The L2 norm of `actual - expected`, divided by the L2 norm of `expected`.
///
/// If `expected` is all zeros, returns the L2 norm of `actual` instead.
pub fn relative_error(actual: &[Complex<f32>], expected: &[Complex<f32>]) -> f64 {
    assert_eq!(actual.len(), expected.len());
    let mut difference = 0f64;
    let mut magnitude = 0f64;
    for (a, e) in actual.iter().zip(expected) {
        let re = a.re as f64 - e.re as f64;
        let im = a.im as f64 - e.im as f64;
        difference += re * re + im * im;
        magnitude += e.re as f64 * e.re as f64 + e.im as f64 * e.im as f64;
    }
    if magnitude == 0.0 {
        difference.sqrt()
    } else {
        (difference / magnitude).sqrt()
    }
}

/// Logs every bin of a spectrum at trace level
pub fn dump_spectrum(label: &str, spectrum: &[Complex<f32>]) {
    for (bin, value) in spectrum.iter().enumerate() {
        trace!(label, bin, re = value.re, im = value.im);
    }
}

#[derive(Clone, Debug)]
pub struct BenchmarkConfig {
    pub width: usize,
    pub height: usize,
    pub radix: Radix,
    /// Number of timed transforms. Must be at least 1.
    pub iterations: usize,
    /// Seed of the random input grid
    pub seed: u64,
    /// Instruction set to run on. `None` picks the widest one available.
    pub isa: Option<Isa>,
    /// Compare the result against the reference and fail if it is off by more than `tolerance`
    pub validate: bool,
    pub tolerance: f64,
    /// Also time the reference library on the same input
    pub compare_reference: bool,
    /// Log the spectrum at trace level
    pub dump: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            radix: Radix::Radix8,
            iterations: 10,
            seed: 0,
            isa: None,
            validate: true,
            tolerance: DEFAULT_TOLERANCE,
            compare_reference: false,
            dump: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BenchmarkReport {
    pub width: usize,
    pub height: usize,
    pub radix: Radix,
    pub isa: Isa,
    pub iterations: usize,
    /// Wall time of all timed transforms together
    pub total: Duration,
    /// Set if the reference library was timed
    pub reference_total: Option<Duration>,
    /// Set if the result was validated
    pub relative_error: Option<f64>,
}

impl BenchmarkReport {
    /// Mean wall time of one transform
    pub fn per_iteration(&self) -> Duration {
        self.total / self.iterations as u32
    }

    /// Mean wall time of one reference transform
    pub fn reference_per_iteration(&self) -> Option<Duration> {
        self.reference_total
            .map(|total| total / self.iterations as u32)
    }
}

/// Transforms one seeded random grid `config.iterations` times, reusing the same buffers, and reports the timings.
///
/// With `config.validate`, the final spectrum is compared against the reference, and a relative error above
/// `config.tolerance` is reported as `FftError::Mismatch`.
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkReport, FftError> {
    FftError::check_size(config.width, config.height)?;
    if config.iterations == 0 {
        return Err(FftError::NoIterations);
    }

    let mut planner = match config.isa {
        Some(isa) => Fft2dPlanner::with_isa(isa).ok_or(FftError::UnsupportedIsa(isa))?,
        None => Fft2dPlanner::new(),
    };
    let fft = planner.plan_fft2d_forward(config.width, config.height, config.radix);

    let input = AlignedBuffer::from_slice(&random_grid(config.width, config.height, config.seed))?;
    let mut output = AlignedBuffer::new(fft.len())?;
    let mut scratch = AlignedBuffer::new(fft.get_scratch_len())?;

    debug!(
        width = config.width,
        height = config.height,
        radix = %config.radix,
        isa = %fft.isa(),
        iterations = config.iterations,
        "starting benchmark"
    );

    let start = Instant::now();
    for _ in 0..config.iterations {
        fft.process_outofplace_with_scratch(&input, &mut output, &mut scratch);
    }
    let total = start.elapsed();

    let reference = (config.validate || config.compare_reference)
        .then(|| ReferenceFft2d::new(config.width, config.height));

    let reference_total = match (&reference, config.compare_reference) {
        (Some(reference), true) => {
            let mut reference_output = AlignedBuffer::new(fft.len())?;
            let start = Instant::now();
            for _ in 0..config.iterations {
                reference.transform_into(&input, &mut reference_output);
            }
            Some(start.elapsed())
        }
        _ => None,
    };

    if config.dump {
        dump_spectrum(&config.radix.to_string(), &output);
    }

    let relative_error = match (&reference, config.validate) {
        (Some(reference), true) => {
            let expected = reference.transform(&input);
            let error = relative_error(&output, &expected);
            if error > config.tolerance {
                return Err(FftError::Mismatch {
                    radix: config.radix,
                    error,
                    tolerance: config.tolerance,
                });
            }
            Some(error)
        }
        _ => None,
    };

    let report = BenchmarkReport {
        width: config.width,
        height: config.height,
        radix: config.radix,
        isa: fft.isa(),
        iterations: config.iterations,
        total,
        reference_total,
        relative_error,
    };
    info!(
        radix = %report.radix,
        isa = %report.isa,
        per_iteration_us = report.per_iteration().as_secs_f64() * 1e6,
        relative_error = ?report.relative_error,
        "benchmark finished"
    );
    Ok(report)
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_random_grid_is_seeded() {
        let first = random_grid(8, 4, 7);
        assert_eq!(first.len(), 32);
        assert_eq!(first, random_grid(8, 4, 7));
        assert_ne!(first, random_grid(8, 4, 8));
        assert!(first
            .iter()
            .all(|v| (-0.5..0.5).contains(&v.re) && (-0.5..0.5).contains(&v.im)));
    }

    #[test]
    fn test_relative_error() {
        let expected = vec![Complex::new(3.0f32, 0.0), Complex::new(0.0, 4.0)];
        assert_eq!(relative_error(&expected, &expected), 0.0);

        let actual = vec![Complex::new(3.0f32, 0.0), Complex::new(0.0, 3.5)];
        assert!((relative_error(&actual, &expected) - 0.1).abs() < 1e-12);

        let zeros = vec![Complex::new(0.0f32, 0.0); 2];
        assert_eq!(relative_error(&zeros, &zeros), 0.0);
    }

    #[test]
    fn test_run_benchmark() {
        for radix in Radix::ALL {
            let config = BenchmarkConfig {
                width: 64,
                height: 32,
                radix,
                iterations: 2,
                compare_reference: true,
                ..Default::default()
            };
            let report = run_benchmark(&config).unwrap();
            assert_eq!(report.iterations, 2);
            assert!(report.relative_error.unwrap() < DEFAULT_TOLERANCE);
            assert!(report.reference_per_iteration().is_some());
        }
    }

    #[test]
    fn test_run_benchmark_rejects_bad_configs() {
        let config = BenchmarkConfig {
            width: 48,
            ..Default::default()
        };
        assert!(matches!(run_benchmark(&config), Err(FftError::InvalidSize { .. })));

        let config = BenchmarkConfig {
            iterations: 0,
            ..Default::default()
        };
        assert!(matches!(run_benchmark(&config), Err(FftError::NoIterations)));
    }
}
