use jump_planner::solver::TANGENCY_EPSILON;
use jump_planner::{Vec2, minimum_jump_distance, solve_jump_points, time_to_cover};

/// Deterministic spread of paths, targets and radii across a 4000 m map
fn scenarios() -> Vec<(Vec2, Vec2, Vec2, f64)> {
    let coords = [-250.0, 0.0, 137.5, 1000.0, 2999.9, 4000.0];
    let radii = [0.0, 10.0, 640.0, 1250.0, 3000.0];

    let mut scenarios = Vec::new();
    for (i, &ax) in coords.iter().enumerate() {
        for (j, &by) in coords.iter().enumerate() {
            let a = Vec2::new(ax, coords[(i + 2) % coords.len()]);
            let b = Vec2::new(coords[(j + 3) % coords.len()], by);
            for &tx in &coords {
                let target = Vec2::new(tx, coords[(i + j) % coords.len()]);
                for &d in &radii {
                    scenarios.push((a, b, target, d));
                }
            }
        }
    }
    scenarios
}

#[test]
fn jump_points_lie_on_circle_and_segment() {
    for (a, b, target, d) in scenarios() {
        let length = a.distance_to(b);
        for point in solve_jump_points(a, b, target, d) {
            let context = format!("a={a:?} b={b:?} t={target:?} d={d}: {point:?}");
            assert!((point.glide_distance(target) - d).abs() < 1e-6, "{context}");
            assert!(point.distance >= 0.0, "{context}");
            assert!(point.distance <= length, "{context}");
        }
    }
}

#[test]
fn targets_just_off_a_long_path() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(4000.0, 0.0);

    for offset in [1e-3, 1e-6] {
        for x in [0.0, 1234.5, 2000.0, 4000.0] {
            let target = Vec2::new(x, offset);
            for d in [0.0, 1e-3] {
                let points = solve_jump_points(a, b, target, d);
                let context = format!("t={target:?} d={d}: {points:?}");

                // the circle can only reach the path if it is at least as
                // wide as the offset
                if d < offset {
                    assert!(points.is_empty(), "{context}");
                }
                for point in &points {
                    assert!((point.glide_distance(target) - d).abs() < 1e-6, "{context}");
                }
            }
        }
    }
}

#[test]
fn exactly_one_recommended_point_first() {
    for (a, b, target, d) in scenarios() {
        let points = solve_jump_points(a, b, target, d);
        let recommended = points.iter().filter(|p| p.is_recommended).count();

        assert!(points.len() <= 2);
        assert_eq!(recommended, usize::from(!points.is_empty()));
        if let Some(first) = points.first() {
            assert!(first.is_recommended);
        }
        assert!(points.windows(2).all(|w| w[0].distance <= w[1].distance));
    }
}

#[test]
fn minimum_distance_is_reachable() {
    for (a, b, target, _) in scenarios() {
        if a == b {
            continue;
        }

        let minimum = minimum_jump_distance(a, b, target);
        let points = solve_jump_points(a, b, target, minimum);
        let context = format!("a={a:?} b={b:?} t={target:?} min={minimum}");

        assert!((1..=2).contains(&points.len()), "{context}");
        for point in &points {
            assert!((point.glide_distance(target) - minimum).abs() < 1e-6, "{context}");
        }
    }
}

#[test]
fn tangent_roots_stay_clustered() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(3000.0, 1700.0);
    let target = Vec2::new(1200.0, 1500.0);

    let minimum = minimum_jump_distance(a, b, target);
    let points = solve_jump_points(a, b, target, minimum);

    if let [first, second] = points.as_slice() {
        assert!(first.position.distance_to(second.position) < TANGENCY_EPSILON);
    }
}

#[test]
fn shorter_radius_than_minimum_is_unreachable() {
    for (a, b, target, _) in scenarios() {
        let minimum = minimum_jump_distance(a, b, target);
        if minimum < 1.0 {
            continue;
        }

        assert!(solve_jump_points(a, b, target, minimum - 0.5).is_empty());
    }
}

#[test]
fn solvers_are_idempotent() {
    for (a, b, target, d) in scenarios() {
        assert_eq!(
            solve_jump_points(a, b, target, d),
            solve_jump_points(a, b, target, d)
        );
        assert_eq!(
            minimum_jump_distance(a, b, target).to_bits(),
            minimum_jump_distance(a, b, target).to_bits()
        );
    }
}

#[test]
fn degenerate_path() {
    let a = Vec2::new(100.0, 100.0);
    let target = Vec2::new(150.0, 100.0);

    for d in [0.0, 50.0, 100.0, 1e6] {
        assert!(solve_jump_points(a, a, target, d).is_empty());
    }
    assert_eq!(minimum_jump_distance(a, a, target), 50.0);
}

#[test]
fn no_intersection() {
    let points = solve_jump_points(
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
        Vec2::new(50.0, 200.0),
        50.0,
    );
    assert!(points.is_empty());
}

#[test]
fn two_intersections() {
    let points = solve_jump_points(
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
        Vec2::new(50.0, 0.0),
        25.0,
    );

    assert_eq!(points.len(), 2);
    assert!((points[0].distance - 25.0).abs() < 1e-9);
    assert!((points[1].distance - 75.0).abs() < 1e-9);
    assert!(points[0].is_recommended);
    assert!(!points[1].is_recommended);
}

#[test]
fn single_intersection() {
    let points = solve_jump_points(
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
        Vec2::new(120.0, 0.0),
        50.0,
    );

    assert_eq!(points.len(), 1);
    assert!((points[0].distance - 70.0).abs() < 1e-9);
    assert!(points[0].is_recommended);
}

#[test]
fn time_estimates() {
    assert_eq!(time_to_cover(1000.0, 100.0), 10.0);
    assert_eq!(time_to_cover(100.0, 0.0), f64::INFINITY);
    for speed in [0.5, 75.0, 1e9] {
        assert_eq!(time_to_cover(0.0, speed), 0.0);
    }
}
