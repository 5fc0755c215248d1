use num_complex::Complex;
use num_traits::Zero;

use rand::distributions::{Distribution, Uniform};
use rand::{rngs::StdRng, SeedableRng};

use crate::vector::ComplexVector;
use crate::FftDirection;

/// The seed for the random number generator used to generate
/// random signals. It's defined here so that we have deterministic
/// tests
const RNG_SEED: [u8; 32] = [
    1, 9, 1, 0, 1, 1, 4, 3, 1, 4, 9, 8, 4, 1, 4, 8, 2, 8, 1, 2, 2, 2, 6, 2, 7, 8, 3, 1, 4, 1, 5, 9,
];

pub fn random_signal(length: usize) -> Vec<Complex<f32>> {
    let mut sig = Vec::with_capacity(length);
    let dist: Uniform<f32> = Uniform::new(-10.0, 10.0);
    let mut rng: StdRng = SeedableRng::from_seed(RNG_SEED);
    for _ in 0..length {
        sig.push(Complex {
            re: dist.sample(&mut rng),
            im: dist.sample(&mut rng),
        });
    }
    sig
}

pub fn compare_vectors(vec1: &[Complex<f32>], vec2: &[Complex<f32>]) -> bool {
    assert_eq!(vec1.len(), vec2.len());
    let mut error = 0f64;
    let mut magnitude = 0f64;
    for (&a, &b) in vec1.iter().zip(vec2.iter()) {
        error += (a - b).norm_sqr() as f64;
        magnitude += b.norm_sqr() as f64;
    }
    // a handful of ulps relative to the signal, with an absolute floor for near-zero expectations
    error.sqrt() <= 1e-5 * magnitude.sqrt() + 1e-5
}

/// Naive O(n^2) DFT of one axis, accumulated in f64
pub fn dft(input: &[Complex<f32>], direction: FftDirection) -> Vec<Complex<f32>> {
    let len = input.len();
    (0..len)
        .map(|k| {
            let mut sum = Complex::<f64>::zero();
            for (n, x) in input.iter().enumerate() {
                let angle =
                    direction.sign() * 2.0 * std::f64::consts::PI * ((k * n) % len) as f64 / len as f64;
                let x = Complex::new(x.re as f64, x.im as f64);
                sum = sum + x * Complex::from_polar(1.0, angle);
            }
            Complex::new(sum.re as f32, sum.im as f32)
        })
        .collect()
}

/// Naive forward 2D DFT of a row-major grid: a naive DFT of every row, then of every column
pub fn dft_2d(input: &[Complex<f32>], width: usize, height: usize) -> Vec<Complex<f32>> {
    assert_eq!(input.len(), width * height);
    let mut rows = Vec::with_capacity(input.len());
    for row in input.chunks_exact(width) {
        rows.extend(dft(row, FftDirection::Forward));
    }

    let mut output = vec![Complex::zero(); input.len()];
    for x in 0..width {
        let column: Vec<Complex<f32>> = (0..height).map(|y| rows[y * width + x]).collect();
        for (y, value) in dft(&column, FftDirection::Forward).into_iter().enumerate() {
            output[y * width + x] = value;
        }
    }
    output
}

/// Checks a vector type against the scalar `Complex<f32>` implementation. Arithmetic and butterflies must match the
/// scalar results bit for bit in every lane, and every packed transpose must produce the transposed layout.
pub unsafe fn check_complex_vector<V: ComplexVector>() {
    let width = V::COMPLEX_PER_VECTOR;
    let signal = random_signal(8 * width);
    let rows: [V; 8] = std::array::from_fn(|m| V::load_complex(signal.as_ptr().add(m * width)));
    let lane = |m: usize, j: usize| signal[m * width + j];

    let store_all = |vectors: &[V]| {
        let mut out = vec![Complex::zero(); vectors.len() * width];
        for (n, vector) in vectors.iter().enumerate() {
            V::store_complex(out.as_mut_ptr().add(n * width), *vector);
        }
        out
    };

    // complex multiplication
    let product = store_all(&[V::mul_complex(rows[0], rows[1])]);
    for j in 0..width {
        assert_eq!(product[j], lane(0, j) * lane(1, j), "mul_complex lane {}", j);
    }

    // butterflies, one scalar butterfly per lane
    for direction in [FftDirection::Forward, FftDirection::Inverse] {
        let rotation = V::make_rotation90(direction);
        let scalar_rotation = Complex::<f32>::make_rotation90(direction);

        let butterfly2 = store_all(&V::column_butterfly2([rows[0], rows[1]]));
        let butterfly4 = store_all(&V::column_butterfly4([rows[0], rows[1], rows[2], rows[3]], rotation));
        let butterfly8 = store_all(&V::column_butterfly8(rows, rotation));
        for j in 0..width {
            let expected2 = Complex::<f32>::column_butterfly2([lane(0, j), lane(1, j)]);
            let expected4 = Complex::<f32>::column_butterfly4(
                [lane(0, j), lane(1, j), lane(2, j), lane(3, j)],
                scalar_rotation,
            );
            let expected8 =
                Complex::<f32>::column_butterfly8(std::array::from_fn(|m| lane(m, j)), scalar_rotation);
            for q in 0..2 {
                assert_eq!(butterfly2[q * width + j], expected2[q], "butterfly2 lane {} output {}", j, q);
            }
            for q in 0..4 {
                assert_eq!(butterfly4[q * width + j], expected4[q], "butterfly4 lane {} output {}", j, q);
            }
            for q in 0..8 {
                assert_eq!(butterfly8[q * width + j], expected8[q], "butterfly8 lane {} output {}", j, q);
            }
        }
    }

    // packed transposes: lane j of row m ends up at j * N + m
    let transposed2 = store_all(&V::transpose2_packed([rows[0], rows[1]]));
    let transposed4 = store_all(&V::transpose4_packed([rows[0], rows[1], rows[2], rows[3]]));
    let transposed8 = store_all(&V::transpose8_packed(rows));
    for j in 0..width {
        for m in 0..2 {
            assert_eq!(transposed2[j * 2 + m], lane(m, j), "transpose2 row {} lane {}", m, j);
        }
        for m in 0..4 {
            assert_eq!(transposed4[j * 4 + m], lane(m, j), "transpose4 row {} lane {}", m, j);
        }
        for m in 0..8 {
            assert_eq!(transposed8[j * 8 + m], lane(m, j), "transpose8 row {} lane {}", m, j);
        }
    }
}

#[test]
fn test_dft_known_values() {
    let signal = vec![
        Complex::new(0f32, 1f32),
        Complex::new(2.5f32, -3f32),
        Complex::new(-1f32, -1f32),
        Complex::new(4f32, 0f32),
    ];
    let spectrum = vec![
        Complex::new(5.5f32, -3f32),
        Complex::new(-2f32, 3.5f32),
        Complex::new(-7.5f32, 3f32),
        Complex::new(4f32, 0.5f32),
    ];
    assert!(compare_vectors(&dft(&signal, FftDirection::Forward), &spectrum));
}
