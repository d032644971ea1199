/*
 * Fast Trigonometry Module
 *
 * Table-driven approximations of sin, cos, and atan2. The tables are built
 * once per process and shared immutably afterwards. All three functions are
 * deterministic with a small bounded absolute error (well under 0.01), so
 * callers comparing against the exact transcendental values must allow a
 * tolerance.
 */

use std::sync::OnceLock;

pub const PI: f32 = std::f32::consts::PI;
pub const TWO_PI: f32 = std::f32::consts::TAU;
pub const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;

// 4096 sine/cosine samples covering one full turn.
const SIN_BITS: u32 = 12;
const SIN_MASK: i32 = (1 << SIN_BITS) - 1;
const SIN_COUNT: usize = (SIN_MASK + 1) as usize;
const RAD_TO_INDEX: f32 = SIN_COUNT as f32 / TWO_PI;

// 128x128 atan2 samples over normalized first-quadrant ratios.
const ATAN2_BITS: u32 = 7;
const ATAN2_DIM: usize = 1 << ATAN2_BITS;
const ATAN2_DIM_MINUS_1: f32 = (ATAN2_DIM - 1) as f32;

struct SinCosTable {
    sin: Vec<f32>,
    cos: Vec<f32>,
}

static SIN_COS: OnceLock<SinCosTable> = OnceLock::new();
static ATAN2: OnceLock<Vec<f32>> = OnceLock::new();

fn sin_cos_table() -> &'static SinCosTable {
    SIN_COS.get_or_init(|| {
        let mut sin = vec![0.0f32; SIN_COUNT];
        let mut cos = vec![0.0f32; SIN_COUNT];
        for i in 0..SIN_COUNT {
            // Sample at bin centers to halve the worst-case error.
            let angle = (i as f32 + 0.5) / SIN_COUNT as f32 * TWO_PI;
            sin[i] = angle.sin();
            cos[i] = angle.cos();
        }
        SinCosTable { sin, cos }
    })
}

fn atan2_table() -> &'static [f32] {
    ATAN2.get_or_init(|| {
        let mut table = vec![0.0f32; ATAN2_DIM * ATAN2_DIM];
        for i in 0..ATAN2_DIM {
            for j in 0..ATAN2_DIM {
                let x = i as f32 / ATAN2_DIM as f32;
                let y = j as f32 / ATAN2_DIM as f32;
                table[j * ATAN2_DIM + i] = y.atan2(x);
            }
        }
        table
    })
}

/// Table-driven sine of an angle in radians.
pub fn sin(rad: f32) -> f32 {
    sin_cos_table().sin[((rad * RAD_TO_INDEX) as i32 & SIN_MASK) as usize]
}

/// Table-driven cosine of an angle in radians.
pub fn cos(rad: f32) -> f32 {
    sin_cos_table().cos[((rad * RAD_TO_INDEX) as i32 & SIN_MASK) as usize]
}

/// Table-driven polar angle of the point `(x, y)`, in `(-pi, pi]`.
///
/// The lookup covers the first quadrant; the other three are handled by
/// reflecting the inputs and correcting sign afterwards. With both inputs
/// exactly zero the origin cell is indexed and the result is 0.
pub fn atan2(y: f32, x: f32) -> f32 {
    let (x, y, add, mul) = if x < 0.0 {
        if y < 0.0 {
            (-x, -y, -PI, 1.0)
        } else {
            (-x, y, -PI, -1.0)
        }
    } else if y < 0.0 {
        (x, -y, 0.0, -1.0)
    } else {
        (x, y, 0.0, 1.0)
    };

    let inv_div = ATAN2_DIM_MINUS_1 / if x < y { y } else { x };
    let xi = (x * inv_div) as usize;
    let yi = (y * inv_div) as usize;
    (atan2_table()[yi * ATAN2_DIM + xi] + add) * mul
}

/// Converts degrees to radians.
pub fn to_radians(degrees: f32) -> f32 {
    degrees / 180.0 * PI
}

/// Converts radians to degrees.
pub fn to_degrees(radians: f32) -> f32 {
    radians * 180.0 / PI
}
