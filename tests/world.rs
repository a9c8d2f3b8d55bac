use approx::assert_relative_eq;
use bounce2d::*;
use rand::{SeedableRng as _, rngs::SmallRng};
use rigid2d::{BodyError, BodyOptions, Edge, Vector, VectorExt as _};

#[path = "tracing.rs"]
mod tracing_helper;
use tracing_helper::*;

fn at(x: f64, y: f64) -> BodyOptions {
    BodyOptions {
        pos: Some(Vector::new(x, y)),
        ..Default::default()
    }
}

#[test]
fn rejects_bad_bounds() {
    for bounds in [
        Vector::new(-1., 10.),
        Vector::new(10., f64::NAN),
        Vector::new(f64::INFINITY, 10.),
    ] {
        assert!(matches!(
            World::new(bounds),
            Err(WorldError::InvalidBounds { .. })
        ));
    }
    assert!(World::new(Vector::ZERO).unwrap().is_empty());
}

#[test]
fn ids_follow_insertion_order() {
    let mut world = World::new(Vector::new(100., 100.)).unwrap();
    let ids: Vec<_> = (0..3u8)
        .map(|i| world.spawn(at(f64::from(i), 0.)).unwrap())
        .collect();
    assert_eq!(ids, [BodyId(0), BodyId(1), BodyId(2)]);
    assert_eq!(world.len(), 3);
    assert_eq!(world.get(BodyId(1)).unwrap().pos, Vector::new(1., 0.));
    assert_eq!(
        world.try_get(BodyId(3)).unwrap_err(),
        WorldError::UnknownBody(BodyId(3))
    );
}

#[test]
fn spawn_propagates_body_errors() {
    let mut world = World::new(Vector::new(100., 100.)).unwrap();
    let err = world
        .spawn(BodyOptions {
            mass: Some(-1.),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        WorldError::Body(BodyError::InvalidConfiguration { field: "mass", .. })
    ));
    assert!(world.is_empty());
}

#[test]
fn step_updates_then_bounces() {
    init_tracing();
    let mut world = World::new(Vector::new(100., 100.)).unwrap();
    world
        .spawn(BodyOptions {
            pos: Some(Vector::new(95., 10.)),
            vel: Some(Vector::new(10., 0.)),
            ..Default::default()
        })
        .unwrap();
    world.spawn(at(50., 50.)).unwrap();

    let report = world.step();
    assert_eq!(report.tick, Tick(1));
    assert_eq!(report.bounces.len(), 1);
    assert_eq!(report.bounces[0].0, BodyId(0));
    assert_eq!(report.bounces[0].1.as_slice(), &[Edge::Right]);

    let body = world.get(BodyId(0)).unwrap();
    assert_eq!(body.pos, Vector::new(100., 10.));
    assert_eq!(body.vel, Vector::new(-10., 0.));
    assert_eq!(world.get(BodyId(1)).unwrap().pos, Vector::new(50., 50.));

    assert!(world.step().bounces.is_empty());
    assert_eq!(world.tick(), Tick(2));
}

#[test]
fn gravity_reaches_late_bodies() {
    let mut world = World::new(Vector::new(100., 100.)).unwrap();
    let early = world.spawn(at(10., 10.)).unwrap();
    world.set_gravity(Some(0.));
    assert_eq!(world.gravity(), Some(1.));
    let late = world.spawn(at(20., 10.)).unwrap();
    assert_eq!(world.get(early).unwrap().gravity(), 1.);
    assert_eq!(world.get(late).unwrap().gravity(), 1.);

    world.step();
    for body in world.bodies() {
        assert_eq!(body.vel, Vector::new(0., 1.));
        assert_eq!(body.pos.y, 11.);
        assert_eq!(body.acc.modulus(), 0.);
    }
}

#[test]
fn world_gravity_overrides_body_gravity() {
    let mut world = World::new(Vector::new(100., 100.)).unwrap();
    world.set_gravity(Some(2.));
    let mut body = rigid2d::Body::new(BodyOptions {
        vel: Some(Vector::new(6., 0.)),
        ..Default::default()
    })
    .unwrap();
    body.set_g(Some(3.));
    let id = world.add(body);
    let body = world.get(id).unwrap();
    assert_eq!(body.gravity(), 2.);
    // the damping factor was already taken with the body's own gravity
    assert_relative_eq!(body.cf().unwrap().x, 0.2);
}

#[test]
fn late_world_gravity_keeps_construction_damping() {
    let mut world = World::new(Vector::new(1000., 1000.)).unwrap();
    let id = world
        .spawn(BodyOptions {
            pos: Some(Vector::new(10., 10.)),
            vel: Some(Vector::new(4., 0.)),
            ..Default::default()
        })
        .unwrap();
    world.apply_force(Vector::new(16., 0.));
    world.step();
    world.set_gravity(Some(2.));
    let body = world.get(id).unwrap();
    assert_eq!(body.vel, Vector::new(20., 0.));
    assert_relative_eq!(body.cf().unwrap().x, 0.2);
}

#[test]
fn applied_force_lasts_one_tick() {
    let mut world = World::new(Vector::new(100., 100.)).unwrap();
    world.spawn(at(10., 10.)).unwrap();
    world.apply_force(Vector::new(2., 3.));
    world.step();
    world.step();
    let body = &world.bodies()[0];
    assert_eq!(body.vel, Vector::new(2., 3.));
    assert_eq!(body.pos, Vector::new(14., 16.));
}

#[test]
fn collisions_are_coincident_pairs() {
    let mut world = World::new(Vector::new(100., 100.)).unwrap();
    for (x, y) in [(1., 1.), (2., 2.), (1., 1.), (2., 2.5)] {
        world.spawn(at(x, y)).unwrap();
    }
    assert_eq!(world.collisions(), [(BodyId(0), BodyId(2))]);
}

#[test]
fn from_config() {
    let world = World::from_config(WorldConfig {
        bounds: Vector::new(300., 200.),
        gravity: Some(2.),
        bodies: vec![
            at(10., 20.),
            BodyOptions {
                vel: Some(Vector::new(4., 0.)),
                shape: Some("CIRCLE".into()),
                ..Default::default()
            },
        ],
    })
    .unwrap();
    assert_eq!(world.bounds(), Vector::new(300., 200.));
    assert_eq!(world.len(), 2);
    let circle = &world.bodies()[1];
    assert_eq!(circle.shape().label(), Some("CIRCLE"));
    assert_eq!(circle.gravity(), 2.);
    assert_relative_eq!(circle.cf().unwrap().x, 0.2);

    let weightless = World::from_config(WorldConfig {
        bodies: vec![at(1., 1.)],
        ..Default::default()
    })
    .unwrap();
    assert_eq!(weightless.bounds(), WorldConfig::DEFAULT_BOUNDS);
    assert_eq!(weightless.gravity(), None);
    assert!(!weightless.bodies()[0].has_gravity());
}

#[test]
fn scatter_is_reproducible_and_in_bounds() {
    let template = BodyOptions {
        vel: Some(Vector::new(3., -1.)),
        ..Default::default()
    };
    let scatter = |seed| {
        let mut world = World::new(Vector::new(640., 480.)).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        let ids = world.scatter(&mut rng, 50, &template).unwrap();
        assert_eq!(ids.len(), 50);
        world
    };
    let a = scatter(7);
    let b = scatter(7);
    let c = scatter(8);
    let positions = |world: &World| world.bodies().iter().map(|b| b.pos).collect::<Vec<_>>();
    assert_eq!(positions(&a), positions(&b));
    assert_ne!(positions(&a), positions(&c));
    for body in a.bodies() {
        assert!((0. ..=640.).contains(&body.pos.x));
        assert!((0. ..=480.).contains(&body.pos.y));
        assert_eq!(body.vel, Vector::new(3., -1.));
    }
}

#[test]
fn long_run_stays_inside() {
    init_tracing();
    let bounds = Vector::new(320., 240.);
    let mut world = World::new(bounds).unwrap();
    world.set_gravity(Some(0.5));
    let mut rng = SmallRng::seed_from_u64(42);
    world
        .scatter(
            &mut rng,
            20,
            &BodyOptions {
                vel: Some(Vector::new(5., 2.)),
                ..Default::default()
            },
        )
        .unwrap();
    let mut bounced = 0;
    for _ in 0..1000 {
        bounced += world.step().bounces.len();
        for body in world.bodies() {
            assert!((0. ..=bounds.x).contains(&body.pos.x));
            assert!((0. ..=bounds.y).contains(&body.pos.y));
        }
    }
    assert_eq!(world.tick(), Tick(1000));
    assert!(bounced > 0);
}

#[cfg(feature = "serde")]
#[test]
fn config_from_json() {
    let config: WorldConfig = serde_json::from_str(
        r#"{
            "bounds": [200, 100],
            "gravity": 2,
            "bodies": [
                { "pos": [10, 10] },
                { "shape": [[0, 0], [4, 0], [0, 4]], "vel": [1, 0] }
            ]
        }"#,
    )
    .unwrap();
    let world = World::from_config(config).unwrap();
    assert_eq!(world.len(), 2);
    assert_eq!(world.gravity(), Some(2.));
    assert!(world.bodies()[1].shape().polygon().is_some());

    let config: WorldConfig =
        serde_json::from_str(r#"{ "bodies": [{ "shape": [[0, 0]] }] }"#).unwrap();
    assert!(matches!(
        World::from_config(config),
        Err(WorldError::Body(BodyError::InvalidConfiguration { field: "shape", .. }))
    ));
}
