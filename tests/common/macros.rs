/// Asserts that no prey with the given id remains in the model.
#[macro_export]
macro_rules! assert_prey_removed {
    ($model:expr, $id:expr) => {
        assert!(
            $model.population().find_prey($id).is_none(),
            "Prey {} should have been removed",
            $id
        );
    };
}

/// Asserts the exact life of a predator that must still be alive.
#[macro_export]
macro_rules! assert_predator_life {
    ($model:expr, $id:expr, $life:expr) => {
        let predator = $model
            .population()
            .find_predator($id)
            .expect("Predator not found in model");
        assert_eq!(
            predator.life, $life,
            "Predator {} life {} is not {}",
            $id, predator.life, $life
        );
    };
}

/// Asserts the prey and predator counts of the latest log entry.
#[macro_export]
macro_rules! assert_counts {
    ($model:expr, $prey:expr, $predators:expr) => {
        let last = $model.log().last().expect("Log is empty");
        assert_eq!(last.prey, $prey, "Prey count mismatch");
        assert_eq!(last.predators, $predators, "Predator count mismatch");
    };
}
