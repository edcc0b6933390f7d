use minkow::na::Vector3;
use minkow::shape::{Ball, Cone, Cuboid, Cylinder, InvalidScaleError};

#[test]
fn symmetry_constraints_per_family() {
    let ball = Ball::new(1.0).unwrap();
    let cuboid = Cuboid::new(Vector3::new(1.0, 1.0, 1.0)).unwrap();
    let cylinder = Cylinder::new(1.0, 2.0).unwrap();
    let cone = Cone::new(1.0, 2.0).unwrap();

    // A ball must stay a ball: only uniform scaling.
    assert!(ball.can_scale(&Vector3::new(2.0, 2.0, 2.0)));
    assert!(!ball.can_scale(&Vector3::new(1.0, 2.0, 1.0)));

    // A cuboid accepts any positive per-axis scale.
    assert!(cuboid.can_scale(&Vector3::new(1.0, 2.0, 3.0)));

    // Cylinders and cones must keep their circular cross-section.
    assert!(cylinder.can_scale(&Vector3::new(1.0, 2.0, 1.0)));
    assert!(!cylinder.can_scale(&Vector3::new(2.0, 1.0, 1.0)));
    assert!(cone.can_scale(&Vector3::new(3.0, 0.5, 3.0)));
    assert!(!cone.can_scale(&Vector3::new(2.0, 1.0, 1.0)));

    // Non-positive components are rejected everywhere.
    for scale in [
        Vector3::new(0.0, 1.0, 1.0),
        Vector3::new(1.0, -1.0, 1.0),
        Vector3::new(1.0, 1.0, 0.0),
    ] {
        assert!(!ball.can_scale(&scale));
        assert!(!cuboid.can_scale(&scale));
        assert!(!cylinder.can_scale(&scale));
        assert!(!cone.can_scale(&scale));
    }
}

#[test]
fn rejected_scale_leaves_shape_unchanged() {
    let mut cylinder = Cylinder::new(1.0, 2.0).unwrap();
    cylinder.set_scale(&Vector3::new(2.0, 3.0, 2.0)).unwrap();
    let before = cylinder;

    let err = cylinder.set_scale(&Vector3::new(2.0, 1.0, 1.0)).unwrap_err();
    assert_eq!(
        err,
        InvalidScaleError::AsymmetricCrossSection(Vector3::new(2.0, 1.0, 1.0))
    );

    // Transactional failure: scale, scaled dimensions, and inertia are all
    // exactly as they were.
    assert_eq!(cylinder, before);
    assert_eq!(*cylinder.scale(), Vector3::new(2.0, 3.0, 2.0));
}

#[test]
fn non_positive_scale_fails_with_dedicated_error() {
    let mut ball = Ball::new(1.0).unwrap();
    let scale = Vector3::new(-1.0, -1.0, -1.0);
    assert_eq!(
        ball.set_scale(&scale).unwrap_err(),
        InvalidScaleError::NonPositive(scale)
    );

    let mut ball2 = Ball::new(1.0).unwrap();
    let nonuniform = Vector3::new(1.0, 2.0, 1.0);
    assert_eq!(
        ball2.set_scale(&nonuniform).unwrap_err(),
        InvalidScaleError::NonUniform(nonuniform)
    );
}

#[test]
fn set_scale_is_idempotent() {
    let scale = Vector3::new(2.0, 0.5, 2.0);

    let mut once = Cylinder::new(1.0, 2.0).unwrap();
    once.set_scale(&scale).unwrap();

    let mut twice = Cylinder::new(1.0, 2.0).unwrap();
    twice.set_scale(&scale).unwrap();
    twice.set_scale(&scale).unwrap();

    assert_eq!(once, twice);
    assert_eq!(once.scaled_radius(), twice.scaled_radius());
    assert_eq!(once.scaled_height(), twice.scaled_height());
    assert_eq!(once.unit_inertia(), twice.unit_inertia());
}

#[test]
fn scaled_dimensions_track_the_scale() {
    let mut cylinder = Cylinder::new(1.0, 2.0).unwrap();
    cylinder.set_scale(&Vector3::new(2.0, 3.0, 2.0)).unwrap();

    assert_eq!(cylinder.scaled_radius(), 2.0);
    assert_eq!(cylinder.scaled_height(), 6.0);
    // Unscaled dimensions are untouched.
    assert_eq!(cylinder.radius(), 1.0);
    assert_eq!(cylinder.height(), 2.0);

    let mut cuboid = Cuboid::new(Vector3::new(0.5, 1.0, 2.0)).unwrap();
    cuboid.set_scale(&Vector3::new(2.0, 2.0, 0.5)).unwrap();
    assert_eq!(*cuboid.scaled_half_extents(), Vector3::new(1.0, 2.0, 1.0));
}

#[test]
fn inertia_is_recomputed_inside_set_scale() {
    let mut cylinder = Cylinder::new(1.0, 2.0).unwrap();
    cylinder.set_scale(&Vector3::new(2.0, 3.0, 2.0)).unwrap();

    // r = 2, h = 6: iy = r^2/2, ixz = r^2/4 + h^2/12.
    let inertia = cylinder.unit_inertia();
    assert!(approx::relative_eq!(inertia.y, 2.0, epsilon = 1.0e-5));
    assert!(approx::relative_eq!(inertia.x, 4.0, epsilon = 1.0e-5));
    assert!(approx::relative_eq!(inertia.z, 4.0, epsilon = 1.0e-5));
}

#[test]
fn negative_margin_is_rejected() {
    let mut ball = Ball::new(1.0).unwrap();
    assert!(ball.set_margin(-0.1).is_err());
    // The failed call left the previous margin in place.
    assert_eq!(ball.margin(), minkow::shape::DEFAULT_MARGIN);

    ball.set_margin(0.0).unwrap();
    assert_eq!(ball.margin(), 0.0);
}
