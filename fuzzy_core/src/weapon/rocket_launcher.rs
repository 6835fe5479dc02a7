//! The rocket launcher's desirability rule base

use crate::error::FuzzyResult;
use crate::inference::FuzzyModule;

pub const DISTANCE_VARIABLE: &str = "DistToTarget";
pub const AMMO_VARIABLE: &str = "AmmoStatus";
pub const DESIRABILITY_VARIABLE: &str = "Desirability";

/// `(distance set, ammo set, desirability set)` for each rule
pub const ROCKET_LAUNCHER_RULES: [(&str, &str, &str); 25] = [
    ("Target_Close", "Ammo_VeryLow", "Undesirable"),
    ("Target_Close", "Ammo_Low", "Undesirable"),
    ("Target_Close", "Ammo_Okay", "Undesirable"),
    ("Target_Close", "Ammo_Preferable", "Undesirable"),
    ("Target_Close", "Ammo_Loads", "Undesirable"),
    ("Target_CloseMedium", "Ammo_VeryLow", "LessDesirable"),
    ("Target_CloseMedium", "Ammo_Low", "LessDesirable"),
    ("Target_CloseMedium", "Ammo_Okay", "LessDesirable"),
    ("Target_CloseMedium", "Ammo_Preferable", "LessDesirable"),
    ("Target_CloseMedium", "Ammo_Loads", "LessDesirable"),
    ("Target_Medium", "Ammo_VeryLow", "LessDesirable"),
    ("Target_Medium", "Ammo_Low", "Desirable"),
    ("Target_Medium", "Ammo_Okay", "MoreDesirable"),
    ("Target_Medium", "Ammo_Preferable", "VeryDesirable"),
    ("Target_Medium", "Ammo_Loads", "VeryDesirable"),
    ("Target_MediumFar", "Ammo_VeryLow", "LessDesirable"),
    ("Target_MediumFar", "Ammo_Low", "Desirable"),
    ("Target_MediumFar", "Ammo_Okay", "MoreDesirable"),
    ("Target_MediumFar", "Ammo_Preferable", "VeryDesirable"),
    ("Target_MediumFar", "Ammo_Loads", "VeryDesirable"),
    ("Target_Far", "Ammo_VeryLow", "Undesirable"),
    ("Target_Far", "Ammo_Low", "Undesirable"),
    ("Target_Far", "Ammo_Okay", "LessDesirable"),
    ("Target_Far", "Ammo_Preferable", "Desirable"),
    ("Target_Far", "Ammo_Loads", "Desirable"),
];

/// Build the 5 x 5 x 5 rocket launcher module with its 25 rules
pub fn rocket_launcher_module() -> FuzzyResult<FuzzyModule> {
    let mut module = FuzzyModule::new();

    let distance = module.create_variable(DISTANCE_VARIABLE)?;
    distance.add_left_shoulder_set("Target_Close", 0.0, 25.0, 87.5)?;
    distance.add_triangular_set("Target_CloseMedium", 25.0, 87.5, 150.0)?;
    distance.add_triangular_set("Target_Medium", 87.5, 150.0, 225.0)?;
    distance.add_triangular_set("Target_MediumFar", 150.0, 225.0, 300.0)?;
    distance.add_right_shoulder_set("Target_Far", 225.0, 300.0, 1000.0)?;

    let desirability = module.create_variable(DESIRABILITY_VARIABLE)?;
    desirability.add_left_shoulder_set("Undesirable", 0.0, 12.5, 25.0)?;
    desirability.add_triangular_set("LessDesirable", 12.5, 25.0, 50.0)?;
    desirability.add_triangular_set("Desirable", 25.0, 50.0, 75.0)?;
    desirability.add_triangular_set("MoreDesirable", 50.0, 75.0, 87.5)?;
    desirability.add_right_shoulder_set("VeryDesirable", 75.0, 87.5, 100.0)?;

    let ammo = module.create_variable(AMMO_VARIABLE)?;
    ammo.add_triangular_set("Ammo_VeryLow", 0.0, 0.0, 10.0)?;
    ammo.add_triangular_set("Ammo_Low", 0.0, 10.0, 30.0)?;
    ammo.add_triangular_set("Ammo_Okay", 10.0, 30.0, 50.0)?;
    ammo.add_triangular_set("Ammo_Preferable", 30.0, 50.0, 70.0)?;
    ammo.add_right_shoulder_set("Ammo_Loads", 50.0, 70.0, 100.0)?;

    for (distance, ammo, desirability) in ROCKET_LAUNCHER_RULES {
        module.add_rule(
            &[(DISTANCE_VARIABLE, distance), (AMMO_VARIABLE, ammo)],
            (DESIRABILITY_VARIABLE, desirability),
        )?;
    }

    Ok(module)
}
