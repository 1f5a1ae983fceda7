use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Mul, MulAssign},
};

use eyre::{eyre, Result};
use glam::{Mat4, Vec3};

use crate::vecmath::{
    fmt_vec3, normalize_or_zero_logged, transform_point, try_normalize_rescaled, vec3_bits_eq,
    vec3_hash_code,
};

/// A ray with a starting point and a direction.
///
/// `dir` has to be unit length for `end_point` to land at the requested distance.
/// Nothing here enforces that except the `*normalize*` constructors and setters.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    pub orig: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub const ZERO: Ray = Ray {
        orig: Vec3::ZERO,
        dir: Vec3::ZERO,
    };

    /// Takes both vectors verbatim, `dir` is not normalized.
    pub fn new(orig: Vec3, dir: Vec3) -> Self {
        Self { orig, dir }
    }

    pub fn with_normalize(orig: Vec3, dir: Vec3, normalize: bool) -> Self {
        let mut ray = Self::new(orig, dir);
        if normalize {
            ray.normalize_dir();
        }
        ray
    }

    /// Like `with_normalize(orig, dir, true)`, but a direction that can't be
    /// normalized is an error instead of a zero vector.
    pub fn try_new_normalized(orig: Vec3, dir: Vec3) -> Result<Self> {
        let dir = try_normalize_rescaled(dir)
            .ok_or_else(|| eyre!("Ray direction can't be normalized: '{}'", dir))?;

        Ok(Self { orig, dir })
    }

    pub fn copy(&self) -> Ray {
        *self
    }

    /// `orig + dir * distance`
    pub fn end_point(&self, distance: f32) -> Vec3 {
        self.orig + self.dir * distance
    }

    pub fn end_point_into<'o>(&self, out: &'o mut Vec3, distance: f32) -> &'o mut Vec3 {
        *out = self.end_point(distance);
        out
    }

    /// Moves the ray into another coordinate system.
    ///
    /// The origin and the point one unit along the ray are both mapped as points,
    /// the new direction is their difference. The result is not renormalized, so a
    /// scaling matrix changes the length of `dir`.
    pub fn transform(&mut self, matrix: &Mat4) -> &mut Self {
        let end = transform_point(matrix, self.orig + self.dir);
        self.orig = transform_point(matrix, self.orig);
        self.dir = end - self.orig;
        self
    }

    pub fn transformed(&self, matrix: &Mat4) -> Ray {
        let mut ray = *self;
        ray.transform(matrix);
        ray
    }

    pub fn set(&mut self, orig: Vec3, dir: Vec3) -> &mut Self {
        self.orig = orig;
        self.dir = dir;
        self
    }

    pub fn set_normalize(&mut self, orig: Vec3, dir: Vec3) -> &mut Self {
        self.set(orig, dir).normalize_dir()
    }

    pub fn set_components(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
        dx: f32,
        dy: f32,
        dz: f32,
    ) -> &mut Self {
        self.orig = Vec3::new(x, y, z);
        self.dir = Vec3::new(dx, dy, dz);
        self
    }

    pub fn set_normalize_components(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
        dx: f32,
        dy: f32,
        dz: f32,
    ) -> &mut Self {
        self.set_components(x, y, z, dx, dy, dz).normalize_dir()
    }

    pub fn set_from(&mut self, other: &Ray) -> &mut Self {
        self.set(other.orig, other.dir)
    }

    /// A degenerate direction (zero length, or infinite/NaN components) becomes
    /// the zero vector. Any other finite direction comes out unit length.
    pub fn normalize_dir(&mut self) -> &mut Self {
        self.dir = normalize_or_zero_logged(self.dir);
        self
    }

    pub fn is_normalized(&self) -> bool {
        self.dir.is_normalized()
    }

    /// Stable across runs. Equal rays always have equal hash codes.
    pub fn hash_code(&self) -> i32 {
        const PRIME: i32 = 73;

        let mut result = 1i32;
        result = result.wrapping_mul(PRIME).wrapping_add(vec3_hash_code(self.dir));
        result = result.wrapping_mul(PRIME).wrapping_add(vec3_hash_code(self.orig));
        result
    }
}

/// Components are compared by their bit patterns, so NaN equals NaN and
/// `0.0 != -0.0`. This keeps `Eq` and `Hash` consistent.
impl PartialEq for Ray {
    fn eq(&self, other: &Self) -> bool {
        vec3_bits_eq(self.dir, other.dir) && vec3_bits_eq(self.orig, other.orig)
    }
}

impl Eq for Ray {}

impl Hash for Ray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ray [")?;
        fmt_vec3(f, self.orig)?;
        write!(f, ":")?;
        fmt_vec3(f, self.dir)?;
        write!(f, "]")
    }
}

impl Mul<Ray> for Mat4 {
    type Output = Ray;

    fn mul(self, ray: Ray) -> Ray {
        ray.transformed(&self)
    }
}

impl MulAssign<Mat4> for Ray {
    fn mul_assign(&mut self, matrix: Mat4) {
        self.transform(&matrix);
    }
}
