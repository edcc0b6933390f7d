use minkow::na::{Point3, Vector3};
use minkow::query::SupportEvaluator;
use minkow::shape::{Ball, Cone, ConvexShape, Cuboid, Cylinder, SupportMap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn test_shapes() -> Vec<ConvexShape> {
    vec![
        Ball::new(0.7).unwrap().into(),
        Cuboid::new(Vector3::new(0.5, 1.0, 2.0)).unwrap().into(),
        Cylinder::new(1.0, 2.0).unwrap().into(),
        Cone::new(1.0, 2.0).unwrap().into(),
    ]
}

fn scale_if_allowed(shape: &mut ConvexShape, scale: Vector3<f32>) {
    if shape.can_scale(&scale) {
        shape.set_scale(&scale).unwrap();
    }
}

fn random_directions(count: usize, seed: u64) -> Vec<Vector3<f32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut dirs = Vec::with_capacity(count);
    while dirs.len() < count {
        let dir = Vector3::new(
            rng.gen_range(-1.0f32..1.0),
            rng.gen_range(-1.0f32..1.0),
            rng.gen_range(-1.0f32..1.0),
        );
        if dir.norm() > 1e-3 {
            dirs.push(dir);
        }
    }
    dirs
}

#[test]
fn support_point_ignores_direction_magnitude() {
    for mut shape in test_shapes() {
        scale_if_allowed(&mut shape, Vector3::new(2.0, 3.0, 2.0));

        for dir in random_directions(100, 0xd15) {
            let p = shape.local_support_point(&dir);
            // Power-of-two rescaling is exactly invariant.
            assert_eq!(p, shape.local_support_point(&(dir * 4.0)));
            assert_eq!(p, shape.local_support_point(&(dir * 0.25)));

            let q = shape.local_support_point(&(dir * 3.7));
            assert!(approx::relative_eq!(p, q, epsilon = 1.0e-4));
        }
    }
}

#[test]
fn support_point_lies_inside_margin_inflated_aabb() {
    for mut shape in test_shapes() {
        scale_if_allowed(&mut shape, Vector3::new(1.5, 0.5, 1.5));
        shape.set_margin(0.1).unwrap();
        let aabb = shape.local_aabb();

        for dir in random_directions(200, 0xb0b) {
            let p = shape.local_support_point(&dir);
            assert!(
                aabb.contains_local_point(&p),
                "{p:?} outside {aabb:?} for dir {dir:?}"
            );
        }
    }
}

#[test]
fn support_point_is_maximal_among_samples() {
    // For every queried direction, no sampled support point may beat the
    // returned one's dot product.
    for shape in test_shapes() {
        let dirs = random_directions(100, 0xcafe);
        let samples: Vec<Point3<f32>> = dirs
            .iter()
            .map(|dir| shape.local_support_point(dir))
            .collect();

        for dir in &dirs {
            let best = shape.local_support_point(dir).coords.dot(dir);
            for sample in &samples {
                assert!(sample.coords.dot(dir) <= best + 1.0e-4 * dir.norm());
            }
        }
    }
}

#[test]
fn cylinder_axial_direction_returns_canonical_rim_point() {
    let cylinder = Cylinder::new(1.0, 2.0).unwrap();

    let top = cylinder.local_support_point(&Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(top, Point3::new(1.0, 1.0, 0.0));

    let bottom = cylinder.local_support_point(&Vector3::new(0.0, -3.0, 0.0));
    assert_eq!(bottom, Point3::new(1.0, -1.0, 0.0));

    // Reproducible across calls.
    assert_eq!(
        top,
        cylinder.local_support_point(&Vector3::new(0.0, 1.0, 0.0))
    );
    assert!(top.coords.iter().all(|x| x.is_finite()));
}

#[test]
fn cone_axial_direction_returns_canonical_axis_point() {
    let cone = Cone::new(1.0, 2.0).unwrap();

    let up = cone.local_support_point(&Vector3::new(0.0, 2.0, 0.0));
    assert_eq!(up, Point3::new(0.0, 1.0, 0.0));

    let down = cone.local_support_point(&Vector3::new(0.0, -1.0, 0.0));
    assert_eq!(down, Point3::new(0.0, -1.0, 0.0));
    assert!(down.coords.iter().all(|x| x.is_finite()));
}

#[test]
fn cone_support_selects_apex_or_base_rim() {
    let cone = Cone::new(1.0, 2.0).unwrap();

    // Steep upward direction: the apex wins.
    let apex = cone.local_support_point(&Vector3::new(0.1, 1.0, 0.0));
    assert_eq!(apex, Point3::new(0.0, 1.0, 0.0));

    // Lateral direction: a base rim point wins.
    let rim = cone.local_support_point(&Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(rim, Point3::new(1.0, -1.0, 0.0));
}

#[test]
fn max_radius_bounds_all_support_points() {
    for mut shape in test_shapes() {
        scale_if_allowed(&mut shape, Vector3::new(2.0, 0.5, 2.0));
        let com = shape.local_center_of_mass();
        let max_radius = shape.max_radius();

        for dir in random_directions(200, 0xfeed) {
            let p = shape.local_support_point(&dir);
            assert!((p - com).norm() <= max_radius + 1.0e-4);
        }
    }
}

#[test]
fn bounding_sphere_includes_margin() {
    let mut cylinder = Cylinder::new(1.0, 2.0).unwrap();
    cylinder.set_margin(0.25).unwrap();

    let sphere = cylinder.local_bounding_sphere();
    assert_eq!(sphere.center, Point3::origin());
    assert!(approx::relative_eq!(
        sphere.radius,
        2.0f32.sqrt() + 0.25,
        epsilon = 1.0e-6
    ));
}

#[test]
fn support_evaluator_owns_its_scratch() {
    let shape = ConvexShape::from(Cylinder::new(1.0, 2.0).unwrap());
    let mut eval_a = SupportEvaluator::new();
    let mut eval_b = SupportEvaluator::new();

    let dir_a = Vector3::new(1.0, 0.5, 0.0);
    let dir_b = Vector3::new(-1.0, -0.5, 0.0);
    let pa = *eval_a.eval(&shape, &dir_a);
    let pb = *eval_b.eval(&shape, &dir_b);

    // Each evaluator keeps its own result.
    assert_eq!(*eval_a.last(), pa);
    assert_eq!(*eval_b.last(), pb);
    assert_ne!(pa, pb);
    assert_eq!(pa, shape.local_support_point(&dir_a));
}
