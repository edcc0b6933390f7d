use minkow::na::Vector3;
use minkow::shape::{Ball, Cone, ConvexShape, Cuboid, Cylinder};
use std::f32::consts::PI;

#[test]
fn cylinder_volume_matches_closed_form() {
    let mut cylinder = Cylinder::new(1.0, 2.0).unwrap();
    cylinder.set_margin(0.0).unwrap();
    assert!(approx::relative_eq!(
        cylinder.scaled_volume(),
        PI * 2.0,
        epsilon = 1.0e-4
    ));

    // Margin inflates the radius by m and the height by 2m.
    cylinder.set_margin(0.1).unwrap();
    let expected = PI * 1.1 * 1.1 * 2.2;
    assert!(approx::relative_eq!(
        cylinder.scaled_volume(),
        expected,
        epsilon = 1.0e-4
    ));
}

#[test]
fn volumes_match_closed_forms_at_zero_margin() {
    let mut ball = Ball::new(0.5).unwrap();
    ball.set_margin(0.0).unwrap();
    assert!(approx::relative_eq!(
        ball.scaled_volume(),
        4.0 / 3.0 * PI * 0.125,
        epsilon = 1.0e-4
    ));

    let mut cuboid = Cuboid::new(Vector3::new(0.5, 1.0, 2.0)).unwrap();
    cuboid.set_margin(0.0).unwrap();
    assert!(approx::relative_eq!(
        cuboid.scaled_volume(),
        8.0 * 0.5 * 1.0 * 2.0,
        epsilon = 1.0e-4
    ));

    let mut cone = Cone::new(1.0, 2.0).unwrap();
    cone.set_margin(0.0).unwrap();
    assert!(approx::relative_eq!(
        cone.scaled_volume(),
        PI * 2.0 / 3.0,
        epsilon = 1.0e-4
    ));
}

#[test]
fn volume_is_monotonic_in_margin() {
    let shapes: Vec<ConvexShape> = vec![
        Ball::new(0.7).unwrap().into(),
        Cuboid::new(Vector3::new(0.5, 1.0, 2.0)).unwrap().into(),
        Cylinder::new(1.0, 2.0).unwrap().into(),
        Cone::new(1.0, 2.0).unwrap().into(),
    ];

    for mut shape in shapes {
        let mut previous = 0.0;
        for margin in [0.0, 0.01, 0.1, 0.5, 1.0] {
            shape.set_margin(margin).unwrap();
            let volume = shape.scaled_volume();
            assert!(volume > previous, "volume not increasing at margin {margin}");
            previous = volume;
        }
    }
}

#[test]
fn volume_is_strictly_positive_and_scales_with_the_shape() {
    let mut cylinder = Cylinder::new(1.0, 2.0).unwrap();
    cylinder.set_margin(0.0).unwrap();
    let unscaled = cylinder.scaled_volume();
    assert!(unscaled > 0.0);

    cylinder.set_scale(&Vector3::new(2.0, 2.0, 2.0)).unwrap();
    assert!(approx::relative_eq!(
        cylinder.scaled_volume(),
        unscaled * 8.0,
        epsilon = 1.0e-3
    ));
}

#[test]
fn unit_inertia_matches_closed_forms() {
    let ball = Ball::new(0.5).unwrap();
    let i = 2.0 / 5.0 * 0.25;
    assert!(approx::relative_eq!(*ball.unit_inertia(), Vector3::repeat(i), epsilon = 1.0e-6));

    let cuboid = Cuboid::new(Vector3::new(0.5, 1.0, 2.0)).unwrap();
    let (hx2, hy2, hz2) = (0.25, 1.0, 4.0);
    let expected = Vector3::new(hy2 + hz2, hx2 + hz2, hx2 + hy2) / 3.0;
    assert!(approx::relative_eq!(*cuboid.unit_inertia(), expected, epsilon = 1.0e-6));

    let cylinder = Cylinder::new(1.0, 2.0).unwrap();
    let transverse = 0.25 + 4.0 / 12.0;
    let expected = Vector3::new(transverse, 0.5, transverse);
    assert!(approx::relative_eq!(*cylinder.unit_inertia(), expected, epsilon = 1.0e-6));

    let cone = Cone::new(1.0, 2.0).unwrap();
    let transverse = 3.0 / 20.0 + 3.0 * 4.0 / 80.0;
    let expected = Vector3::new(transverse, 0.3, transverse);
    assert!(approx::relative_eq!(*cone.unit_inertia(), expected, epsilon = 1.0e-6));
}

#[test]
fn inertia_excludes_margin() {
    let mut a = Cylinder::new(1.0, 2.0).unwrap();
    let mut b = Cylinder::new(1.0, 2.0).unwrap();
    a.set_margin(0.0).unwrap();
    b.set_margin(0.5).unwrap();
    assert_eq!(a.unit_inertia(), b.unit_inertia());
}
