use std::fmt;

use glam::{Mat4, Vec3};

/// Bit pattern used for equality and hashing of a single component.
/// All NaNs collapse to one pattern, `0.0` and `-0.0` stay distinct.
#[inline]
pub fn canonical_bits(f: f32) -> u32 {
    if f.is_nan() {
        f32::NAN.to_bits()
    } else {
        f.to_bits()
    }
}

pub fn vec3_bits(v: Vec3) -> [u32; 3] {
    [canonical_bits(v.x), canonical_bits(v.y), canonical_bits(v.z)]
}

pub fn vec3_bits_eq(a: Vec3, b: Vec3) -> bool {
    vec3_bits(a) == vec3_bits(b)
}

/// Deterministic hash over the canonical bits: seed 1, prime 31, x then y then z.
pub fn vec3_hash_code(v: Vec3) -> i32 {
    const PRIME: i32 = 31;

    vec3_bits(v).iter().fold(1i32, |acc, &bits| {
        acc.wrapping_mul(PRIME).wrapping_add(bits as i32)
    })
}

/// Maps `p` as a point: `M * (p, 1)`. The w component of the result is dropped,
/// there is no perspective divide.
#[inline]
pub fn transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    (*m * p.extend(1.)).truncate()
}

/// Like `Vec3::try_normalize`, but finite non-zero vectors whose length
/// overflows or underflows are rescaled by their largest component first.
/// Only zero-length and non-finite inputs give `None`.
pub fn try_normalize_rescaled(v: Vec3) -> Option<Vec3> {
    v.try_normalize().or_else(|| {
        if !v.is_finite() || v == Vec3::ZERO {
            return None;
        }

        (v / v.abs().max_element()).try_normalize()
    })
}

/// Zero-length and non-finite inputs become the zero vector.
pub fn normalize_or_zero_logged(v: Vec3) -> Vec3 {
    match try_normalize_rescaled(v) {
        Some(n) => n,
        None => {
            log::warn!("Can't normalize degenerate direction {v}, falling back to zero");
            Vec3::ZERO
        }
    }
}

/// Writes `(x,y,z)`. Floats use Rust's debug form, so large values print in
/// full (`10000000000.0`) rather than in exponent notation.
pub fn fmt_vec3(f: &mut fmt::Formatter<'_>, v: Vec3) -> fmt::Result {
    write!(f, "({:?},{:?},{:?})", v.x, v.y, v.z)
}

// TODO: calculate epsilon automatically
pub fn vec3_cmp_assert(a: Vec3, b: Vec3) {
    assert!(a.abs_diff_eq(b, 0.0001), "{a} != {b}");
}
