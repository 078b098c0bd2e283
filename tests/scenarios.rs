mod common;

use common::ModelBuilder;
use predprey_lib::sim::config::{GeometryPolicy, SimConfig};
use predprey_lib::sim::{GrassLogic, Model, SimError};
use predprey_lib::data::{Grass, Position, Prey, Steering, Velocity};

#[test]
fn test_zero_steps_records_initial_state_only() {
    let mut config = SimConfig::default();
    config.model.steps = 0;
    assert_eq!(config.model.seed, 12);

    let mut model = Model::new(config).unwrap();
    let log = model.run().unwrap();

    assert_eq!(log.len(), 1);
    assert_eq!(log.prey, vec![200]);
    assert_eq!(log.predators, vec![50]);
    assert_eq!(log.grass, vec![250.0]);
    assert_eq!(model.tick(), 0);
}

#[test]
fn test_coincident_hungry_predator_eats_prey() {
    let mut model = ModelBuilder::new()
        .without_reproduction()
        .with_prey(0.2, -0.1, 30.0)
        .with_predator(0.2, -0.1, 50.0)
        .build();

    let report = model.step().unwrap();

    assert_eq!(report.prey_eaten, 1);
    assert_prey_removed!(model, 1);
    // One life spent moving, then the predator food gain.
    assert_predator_life!(model, 1, 49.0 + 100.0);
    assert_counts!(model, 0, 1);
}

#[test]
fn test_coincident_agents_fault_when_configured() {
    let mut model = ModelBuilder::new()
        .without_reproduction()
        .with_config(|c| c.policy.coincident_agents = GeometryPolicy::Fault)
        .with_prey(0.5, 0.5, 30.0)
        .with_predator(0.5, 0.5, 50.0)
        .build();

    let err = model.step().unwrap_err();
    match err.downcast_ref::<SimError>() {
        Some(SimError::DegenerateGeometry { id, other_id, .. }) => {
            assert_eq!((*id, *other_id), (1, 1));
        }
        other => panic!("expected a geometry fault, got {other:?}"),
    }
    assert!(err.to_string().contains("step 1 aborted"));
    // The failed step is not logged.
    assert_eq!(model.log().len(), 1);
    assert_eq!(model.tick(), 0);
}

#[test]
fn test_hungry_prey_grazes_nearby_patch() {
    let mut model = ModelBuilder::new()
        .without_reproduction()
        .with_prey(0.01, 0.0, 20.0)
        .with_grass(0.0, 0.0)
        .build();
    assert_eq!(model.log().grass, vec![1.0 / 20.0]);

    let report = model.step().unwrap();
    assert_eq!(report.grass_eaten, 1);

    let patch = &model.population().grass[0];
    assert!(!patch.available);
    // Reset to 0 when grazed, then advanced once by the regrowth pass that
    // closes the same step.
    assert_eq!(patch.dead_cycles, 1);

    let prey = model.population().find_prey(1).unwrap();
    assert_eq!(prey.life, 20.0 - 1.0 + 80.0);
    assert_eq!(model.log().grass, vec![0.05, 0.0]);
}

#[test]
fn test_grazed_patch_counter_is_zero_before_regrowth() {
    let config = SimConfig::default();
    let herd = vec![Prey {
        id: 1,
        position: Position::new(0.01, 0.0),
        velocity: Velocity::default(),
        steering: Steering::default(),
        life: 20.0,
    }];
    let mut patch = Grass::new(Position::new(0.0, 0.0));

    assert_eq!(patch.eaten(&herd, &config), Some(0));
    assert!(!patch.available);
    assert_eq!(patch.dead_cycles, 0);
}

#[test]
fn test_sated_prey_ignores_grass() {
    let mut model = ModelBuilder::new()
        .without_reproduction()
        .with_prey(0.0, 0.0, 150.0)
        .with_grass(0.0, 0.0)
        .build();

    model.step().unwrap();
    assert!(model.population().grass[0].available);
    assert_eq!(model.population().find_prey(1).unwrap().life, 149.0);
}

#[test]
fn test_starving_agents_are_removed() {
    let mut model = ModelBuilder::new()
        .without_reproduction()
        .with_prey(-0.5, -0.5, 1.0)
        .with_prey(0.5, 0.5, 2.0)
        .with_predator(0.9, -0.9, 1.0)
        .build();

    let report = model.step().unwrap();
    assert_eq!(report.prey_starved, 1);
    assert_eq!(report.predators_starved, 1);
    assert_prey_removed!(model, 1);
    assert!(model.population().find_prey(2).is_some());
    assert_counts!(model, 1, 0);
}

#[test]
fn test_predator_closes_in_on_prey() {
    let mut model = ModelBuilder::new()
        .without_reproduction()
        .with_prey(0.1, 0.0, 40.0)
        .with_predator(0.0, 0.0, 40.0)
        .build();

    model.step().unwrap();
    let predator = model.population().find_predator(1).unwrap();
    let prey = model.population().find_prey(1).unwrap();
    assert!(predator.position.x > 0.0);
    assert!(prey.position.x > 0.1, "prey should flee along +x");
    assert!(predator.velocity.speed() <= 1.0 + 1e-12);
}
