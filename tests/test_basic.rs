use radix2d::num_complex::Complex;
use radix2d::{Fft2d, Fft2dPlanner, Length2d, Radix};

fn zeros(len: usize) -> Vec<Complex<f32>> {
    vec![Complex::new(0.0, 0.0); len]
}

fn forward(width: usize, height: usize, radix: Radix, input: &[Complex<f32>]) -> Vec<Complex<f32>> {
    let fft = Fft2dPlanner::new().plan_fft2d_forward(width, height, radix);
    let mut output = zeros(input.len());
    fft.process_outofplace(input, &mut output);
    output
}

fn assert_close(actual: Complex<f32>, expected: Complex<f32>, tolerance: f32, context: &str) {
    assert!(
        (actual - expected).norm() <= tolerance,
        "{}: expected {}, got {}",
        context,
        expected,
        actual
    );
}

fn signal(len: usize) -> Vec<Complex<f32>> {
    (0..len)
        .map(|i| {
            let x = i as f32;
            Complex::new((x * 0.37).sin() + 0.25, (x * 0.11).cos() - 0.5)
        })
        .collect()
}

#[test]
fn impulse_is_flat() {
    for radix in Radix::ALL {
        for &(width, height) in [(8, 8), (32, 16), (2, 128)].iter() {
            let mut input = zeros(width * height);
            input[0] = Complex::new(1.0, 0.0);
            let output = forward(width, height, radix, &input);
            for (i, value) in output.iter().enumerate() {
                let context = format!("{} {}x{} bin {}", radix, width, height, i);
                assert_close(*value, Complex::new(1.0, 0.0), 1e-6, &context);
            }
        }
    }
}

#[test]
fn constant_is_spike() {
    for radix in Radix::ALL {
        let input = vec![Complex::new(1.0f32, 0.0); 8 * 8];
        let output = forward(8, 8, radix, &input);
        assert_close(output[0], Complex::new(64.0, 0.0), 1e-4, &format!("{} dc", radix));
        for (i, value) in output.iter().enumerate().skip(1) {
            assert_close(*value, Complex::new(0.0, 0.0), 1e-4, &format!("{} bin {}", radix, i));
        }
    }
}

#[test]
fn single_frequency() {
    // exp(2*pi*i*(3x/16 + 5y/8)) lands entirely in bin (3, 5)
    let (width, height) = (16, 8);
    let input: Vec<Complex<f32>> = (0..width * height)
        .map(|i| {
            let (x, y) = ((i % width) as f64, (i / width) as f64);
            let angle = 2.0 * std::f64::consts::PI * (3.0 * x / width as f64 + 5.0 * y / height as f64);
            Complex::new(angle.cos() as f32, angle.sin() as f32)
        })
        .collect();
    for radix in Radix::ALL {
        let output = forward(width, height, radix, &input);
        for (i, value) in output.iter().enumerate() {
            let expected = if i == 5 * width + 3 { (width * height) as f32 } else { 0.0 };
            assert_close(*value, Complex::new(expected, 0.0), 1e-3, &format!("{} bin {}", radix, i));
        }
    }
}

#[test]
fn linearity() {
    let (width, height) = (64, 32);
    let a = signal(width * height);
    let b: Vec<Complex<f32>> = a.iter().rev().map(|v| *v * Complex::new(0.5, -2.0)).collect();
    let combined: Vec<Complex<f32>> = a.iter().zip(b.iter()).map(|(x, y)| *x * 3.0 + *y).collect();

    for radix in Radix::ALL {
        let fa = forward(width, height, radix, &a);
        let fb = forward(width, height, radix, &b);
        let fc = forward(width, height, radix, &combined);
        for i in 0..fc.len() {
            assert_close(fc[i], fa[i] * 3.0 + fb[i], 1e-2, &format!("{} bin {}", radix, i));
        }
    }
}

#[test]
fn round_trip_through_conjugation() {
    // the inverse transform is conj(forward(conj(x))) / len
    let (width, height) = (32, 64);
    let input = signal(width * height);
    for radix in Radix::ALL {
        let spectrum = forward(width, height, radix, &input);
        let conjugated: Vec<Complex<f32>> = spectrum.iter().map(|v| v.conj()).collect();
        let back = forward(width, height, radix, &conjugated);
        let scale = (width * height) as f32;
        for i in 0..input.len() {
            assert_close(back[i].conj() / scale, input[i], 1e-4, &format!("{} sample {}", radix, i));
        }
    }
}

#[test]
fn vector_matches_scalar_exactly() {
    let mut scalar_planner = Fft2dPlanner::new_scalar();
    let mut planner = Fft2dPlanner::new();
    for &(width, height) in [(1, 1), (2, 4), (8, 8), (32, 16), (4, 256), (256, 8)].iter() {
        let input = signal(width * height);
        for radix in Radix::ALL {
            let scalar = scalar_planner.plan_fft2d_forward(width, height, radix);
            let vector = planner.plan_fft2d_forward(width, height, radix);

            let mut scalar_output = zeros(input.len());
            let mut vector_output = zeros(input.len());
            scalar.process_outofplace(&input, &mut scalar_output);
            vector.process_outofplace(&input, &mut vector_output);
            assert_eq!(
                scalar_output,
                vector_output,
                "{}x{} {} on {}",
                width,
                height,
                radix,
                vector.isa()
            );
        }
    }
}

#[test]
fn single_row_matches_naive_dft() {
    let width = 64;
    let input = signal(width);
    let expected: Vec<Complex<f32>> = (0..width)
        .map(|k| {
            let mut sum = Complex::new(0.0f64, 0.0);
            for (n, x) in input.iter().enumerate() {
                let angle = -2.0 * std::f64::consts::PI * ((k * n) % width) as f64 / width as f64;
                sum += Complex::new(x.re as f64, x.im as f64) * Complex::from_polar(1.0, angle);
            }
            Complex::new(sum.re as f32, sum.im as f32)
        })
        .collect();

    for radix in Radix::ALL {
        let row = forward(width, 1, radix, &input);
        let column = forward(1, width, radix, &input);
        for k in 0..width {
            assert_close(row[k], expected[k], 1e-3, &format!("{} row bin {}", radix, k));
            assert_close(column[k], expected[k], 1e-3, &format!("{} column bin {}", radix, k));
        }
    }
}

#[test]
fn radix_families_agree() {
    let (width, height) = (128, 64);
    let input = signal(width * height);
    let radix2 = forward(width, height, Radix::Radix2, &input);
    let radix4 = forward(width, height, Radix::Radix4, &input);
    let radix8 = forward(width, height, Radix::Radix8, &input);
    for i in 0..input.len() {
        let tolerance = 1e-5 * (1.0 + radix2[i].norm()) * 8.0;
        assert_close(radix4[i], radix2[i], tolerance, &format!("radix-4 bin {}", i));
        assert_close(radix8[i], radix2[i], tolerance, &format!("radix-8 bin {}", i));
    }
}

#[test]
fn scratch_contents_do_not_matter() {
    let fft = Fft2dPlanner::new().plan_fft2d_forward(32, 32, Radix::Radix8);
    let input = signal(fft.len());

    let mut clean = zeros(fft.len());
    fft.process_outofplace_with_scratch(&input, &mut clean, &mut zeros(fft.get_scratch_len()));

    let mut dirty = vec![Complex::new(f32::NAN, 1e30); fft.len()];
    let mut garbage_scratch = vec![Complex::new(-7.0, f32::INFINITY); fft.get_scratch_len() + 5];
    fft.process_outofplace_with_scratch(&input, &mut dirty, &mut garbage_scratch);

    assert_eq!(clean, dirty);
}

#[test]
#[should_panic]
fn wrong_output_len_panics() {
    let fft = Fft2dPlanner::new().plan_fft2d_forward(8, 8, Radix::Radix4);
    let input = zeros(64);
    let mut output = zeros(63);
    fft.process_outofplace(&input, &mut output);
}
