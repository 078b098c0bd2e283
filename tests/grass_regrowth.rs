mod common;

use common::ModelBuilder;

#[test]
fn test_grazed_patch_returns_after_twenty_one_regrowth_passes() {
    let mut model = ModelBuilder::new()
        .without_reproduction()
        .with_prey(0.0, 0.01, 20.0)
        .with_grass(0.0, 0.0)
        .with_grass(0.9, 0.9)
        .build();

    model.step().unwrap();
    assert!(!model.population().grass[0].available);

    for step in 2..=20 {
        model.step().unwrap();
        let patch = &model.population().grass[0];
        assert!(!patch.available, "patch back too early at step {step}");
        assert_eq!(patch.dead_cycles, step as u32);
    }

    let report = model.step().unwrap();
    assert_eq!(report.grass_regrown, 1);
    let patch = &model.population().grass[0];
    assert!(patch.available);
    assert_eq!(patch.dead_cycles, 0);

    let log = model.log();
    assert_eq!(log.grass[0], 0.1);
    assert!(log.grass[1..=20].iter().all(|&g| g == 0.05));
    assert_eq!(log.grass[21], 0.1);
}

#[test]
fn test_regrown_patch_is_grazed_again() {
    let mut model = ModelBuilder::new()
        .without_reproduction()
        .with_prey(0.0, 0.01, 20.0)
        .with_grass(0.0, 0.0)
        .build();

    model.run_for(22).unwrap();
    let totals = model.metrics().totals();
    assert_eq!(totals.grass_eaten, 2);
    assert_eq!(totals.grass_regrown, 1);

    // Two meals, twenty-two steps of movement.
    let prey = model.population().find_prey(1).unwrap();
    assert_eq!(prey.life, 20.0 + 2.0 * 80.0 - 22.0);
}
