use std::collections::HashMap;

use glam::{vec3, Mat4, Quat, Vec3};
use rt_ray::{vecmath::vec3_cmp_assert, Ray};

#[test]
fn test_end_point_after_transform() {
    let world_to_local = Mat4::from_rotation_translation(
        Quat::from_rotation_y(180f32.to_radians()),
        vec3(0., 10., 0.),
    );

    let mut ray = Ray::with_normalize(vec3(1., 0., 0.), vec3(0., 0., 3.), true);
    ray.transform(&world_to_local);

    vec3_cmp_assert(ray.orig, vec3(-1., 10., 0.));
    vec3_cmp_assert(ray.dir, vec3(0., 0., -1.));
    vec3_cmp_assert(ray.end_point(4.), vec3(-1., 10., -4.));
}

#[test]
fn test_transform_roundtrip_through_inverse() {
    let m = Mat4::from_scale_rotation_translation(
        vec3(1., 3., 0.5),
        Quat::from_rotation_x(0.7),
        vec3(-4., 2., 8.),
    );

    let ray = Ray::new(vec3(0.25, -1., 6.), vec3(0., 0.6, 0.8));
    let back = m.inverse() * (m * ray);

    vec3_cmp_assert(back.orig, ray.orig);
    vec3_cmp_assert(back.dir, ray.dir);
}

#[test]
fn test_rays_as_map_keys() {
    let mut hits: HashMap<Ray, u32> = HashMap::new();

    let a = Ray::new(Vec3::ZERO, Vec3::Z);
    let mut b = Ray::default();
    b.set_from(&a);

    *hits.entry(a).or_default() += 1;
    *hits.entry(b).or_default() += 1;
    *hits.entry(Ray::new(Vec3::ZERO, Vec3::NEG_Z)).or_default() += 1;

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[&a], 2);
}

#[test]
fn test_setter_chaining() {
    let mut ray = Ray::default();
    ray.set_normalize_components(0., 0., 0., 0., 5., 0.)
        .transform(&Mat4::from_translation(vec3(0., 0., 1.)));

    assert_eq!(ray, Ray::new(vec3(0., 0., 1.), vec3(0., 1., 0.)));
    assert_eq!(ray.to_string(), "ray [(0.0,0.0,1.0):(0.0,1.0,0.0)]");
}
