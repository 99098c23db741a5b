use approx::assert_relative_eq;
use paddle_core::{StrokeOverrides, units::drag_coefficient_si};
use paddle_sim::{BoatOverrides, Paddler, Sample, simulate};
use paddle_strokes::{
    ConstantShapeOverrides, ConstantStroke, DriveRecoveryShapeOverrides, DriveRecoveryStroke,
};
use uom::si::{
    f64::Force, force::newton, length::meter, time::second, velocity::meter_per_second,
};

fn constant(force: f64) -> StrokeOverrides<ConstantShapeOverrides> {
    StrokeOverrides {
        stroke_rate: None,
        shape: ConstantShapeOverrides {
            force: Some(Force::new::<newton>(force)),
        },
    }
}

fn speed(sample: &Sample) -> f64 {
    sample.speed.get::<meter_per_second>()
}

fn distance(sample: &Sample) -> f64 {
    sample.distance.get::<meter>()
}

#[test]
fn single_constant_paddler_two_steps() {
    let mass = 350.0;
    let drag = 30.0;
    let dt = 0.5;
    let boat = BoatOverrides::default()
        .mass_si(mass)
        .drag_coefficient_si(drag)
        .initial_speed_si(0.0)
        .duration_si(1.0)
        .time_step_si(dt);

    let result = simulate(&ConstantStroke, &[Paddler::new("solo")], &boat, &constant(300.0))
        .expect("valid configuration");
    let samples = result.samples();

    assert_eq!(samples.len(), 3);

    // Initial condition.
    assert_relative_eq!(samples[0].time.get::<second>(), 0.0);
    assert_relative_eq!(speed(&samples[0]), 0.0);
    assert_relative_eq!(distance(&samples[0]), 0.0);
    assert_relative_eq!(samples[0].paddle_force.get::<newton>(), 300.0);

    // First step starts from rest, so there is no drag yet.
    let accel_1 = 300.0 / mass;
    let speed_1 = accel_1 * dt;
    let distance_1 = speed_1 * dt;
    assert_relative_eq!(samples[1].time.get::<second>(), 0.5);
    assert_relative_eq!(samples[1].drag_force.get::<newton>(), 0.0);
    assert_relative_eq!(speed(&samples[1]), speed_1, max_relative = 1e-9);
    assert_relative_eq!(speed(&samples[1]), 0.428_571_428_571, max_relative = 1e-9);
    assert_relative_eq!(distance(&samples[1]), distance_1, max_relative = 1e-9);
    assert_relative_eq!(distance(&samples[1]), 0.214_285_714_286, max_relative = 1e-9);

    // Second step drags against the speed reached after the first.
    let drag_2 = drag * speed_1 * speed_1;
    let net_2 = 300.0 - drag_2;
    let speed_2 = speed_1 + net_2 / mass * dt;
    let distance_2 = distance_1 + speed_2 * dt;
    assert_relative_eq!(samples[2].drag_force.get::<newton>(), drag_2, max_relative = 1e-9);
    assert_relative_eq!(samples[2].net_force.get::<newton>(), net_2, max_relative = 1e-9);
    assert_relative_eq!(speed(&samples[2]), speed_2, max_relative = 1e-9);
    assert_relative_eq!(distance(&samples[2]), distance_2, max_relative = 1e-9);

    let summary = result.summary();
    assert_relative_eq!(summary.total_time.get::<second>(), 1.0);
    assert_relative_eq!(
        summary.final_speed.get::<meter_per_second>(),
        speed_2,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        summary.final_distance.get::<meter>(),
        distance_2,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        summary.average_speed.get::<meter_per_second>(),
        (speed_1 + speed_2) / 3.0,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        summary.average_net_force.get::<newton>(),
        (300.0 + 300.0 + net_2) / 3.0,
        max_relative = 1e-9
    );
    assert_eq!(summary.steps, 2);
}

#[test]
fn duration_shorter_than_time_step_still_takes_one_step() {
    let boat = BoatOverrides::default().duration_si(0.2).time_step_si(0.5);

    let result =
        simulate(&ConstantStroke, &[Paddler::new("a")], &boat, &constant(100.0)).unwrap();

    assert_eq!(result.samples().len(), 2);
    assert_relative_eq!(result.samples()[1].time.get::<second>(), 0.5);
    // The configured duration is reported, not the last sample time.
    assert_relative_eq!(result.summary().total_time.get::<second>(), 0.2);
}

#[test]
fn empty_roster_only_decelerates() {
    let initial_speed = 4.0;
    let duration = 20.0;
    let boat = BoatOverrides::default()
        .initial_speed_si(initial_speed)
        .duration_si(duration)
        .time_step_si(0.05);

    let result = simulate(&ConstantStroke, &[], &boat, &constant(300.0)).unwrap();
    let samples = result.samples();

    for sample in samples {
        assert_eq!(sample.paddle_force, Force::new::<newton>(0.0));
        assert!(sample.net_force.get::<newton>() <= 0.0);
    }
    for pair in samples.windows(2) {
        assert!(speed(&pair[1]) <= speed(&pair[0]));
    }

    let final_distance = result.summary().final_distance.get::<meter>();
    assert!(final_distance.is_finite());
    assert!(final_distance > 0.0);
    assert!(final_distance <= initial_speed * duration);

    let at_rest = simulate(
        &ConstantStroke,
        &[],
        &boat.initial_speed_si(0.0),
        &constant(300.0),
    )
    .unwrap();
    assert_eq!(at_rest.summary().final_distance.get::<meter>(), 0.0);
}

#[test]
fn frictionless_constant_force_accelerates_linearly() {
    let mass = 200.0;
    let force = 50.0;
    let boat = BoatOverrides::default()
        .mass_si(mass)
        .drag_coefficient_si(0.0)
        .duration_si(10.0)
        .time_step_si(0.01);

    let result = simulate(&ConstantStroke, &[Paddler::new("a")], &boat, &constant(force)).unwrap();

    for sample in result.samples() {
        let t = sample.time.get::<second>();
        assert_relative_eq!(speed(sample), force / mass * t, epsilon = 1e-9, max_relative = 1e-9);
    }
}

#[test]
fn identical_inputs_give_identical_trajectories() {
    let crew = [
        Paddler::new("1"),
        Paddler::new("2").with_phase_offset(0.1),
        Paddler::new("3").with_phase_offset(0.55).with_strength(1.3),
    ];
    let boat = BoatOverrides::default().duration_si(15.0);
    let stroke = StrokeOverrides {
        stroke_rate: Some(72.0),
        shape: DriveRecoveryShapeOverrides::default(),
    };

    let first = simulate(&DriveRecoveryStroke, &crew, &boat, &stroke).unwrap();
    let again = simulate(&DriveRecoveryStroke, &crew, &boat, &stroke).unwrap();

    assert_eq!(first, again);
}

#[test]
fn two_half_strength_paddlers_equal_one_full() {
    let boat = BoatOverrides::default().duration_si(10.0);
    let stroke = StrokeOverrides::default();

    let pair = [
        Paddler::new("left").with_phase_offset(0.2).with_strength(0.5),
        Paddler::new("right").with_phase_offset(0.2).with_strength(0.5),
    ];
    let single = [Paddler::new("both").with_phase_offset(0.2)];

    let pair = simulate(&DriveRecoveryStroke, &pair, &boat, &stroke).unwrap();
    let single = simulate(&DriveRecoveryStroke, &single, &boat, &stroke).unwrap();

    for (a, b) in pair.samples().iter().zip(single.samples()) {
        assert_relative_eq!(speed(a), speed(b), epsilon = 1e-12, max_relative = 1e-12);
        assert_relative_eq!(distance(a), distance(b), epsilon = 1e-12, max_relative = 1e-12);
    }
}

#[test]
fn negative_strength_mirrors_paddle_force() {
    let boat = BoatOverrides::default().duration_si(5.0);
    let stroke = StrokeOverrides::default();

    let with = simulate(&DriveRecoveryStroke, &[Paddler::new("a")], &boat, &stroke).unwrap();
    let against = simulate(
        &DriveRecoveryStroke,
        &[Paddler::new("a").with_strength(-1.0)],
        &boat,
        &stroke,
    )
    .unwrap();

    for (a, b) in with.samples().iter().zip(against.samples()) {
        assert_eq!(a.paddle_force, -b.paddle_force);
    }
}

#[test]
fn offset_crew_smooths_the_paddle_force() {
    let boat = BoatOverrides::default().duration_si(10.0);
    let stroke = StrokeOverrides::default();

    let in_phase: Vec<_> = (0..4).map(|i| Paddler::new(i.to_string())).collect();
    let staggered: Vec<_> = (0..4)
        .map(|i| Paddler::new(i.to_string()).with_phase_offset(f64::from(i) * 0.25))
        .collect();

    let spread = |paddlers: &[Paddler]| {
        let result = simulate(&DriveRecoveryStroke, paddlers, &boat, &stroke).unwrap();
        let forces = result
            .samples()
            .iter()
            .map(|sample| sample.paddle_force.get::<newton>());
        let max = forces.clone().fold(f64::NEG_INFINITY, f64::max);
        let min = forces.fold(f64::INFINITY, f64::min);
        max - min
    };

    assert!(spread(&staggered) < spread(&in_phase));
}

#[test]
fn echoes_resolved_parameters() {
    let boat = BoatOverrides::default().mass_si(420.0).drag_coefficient_si(12.0);

    let result = simulate(&ConstantStroke, &[], &boat, &constant(10.0)).unwrap();

    assert_relative_eq!(result.boat().mass().get::<uom::si::mass::kilogram>(), 420.0);
    assert_eq!(result.boat().drag_coefficient(), drag_coefficient_si(12.0));
    assert_relative_eq!(result.boat().duration().get::<second>(), 60.0);
    assert_relative_eq!(result.stroke().shape().force.get::<newton>(), 10.0);
    assert!(result.roster().is_empty());
}
