//! Integration test: Load weapons -> Build rule bases -> Score -> Select -> Fire
//!
//! This test validates the full flow from bundled configuration to weapon choice.

use fuzzy_core::{
    config::parse_rule_base, default_weapons, rocket_launcher_module, DefuzzifyMethod,
    EngineConstants, FuzzyError, FuzzyModule, Weapon, WeaponSystem,
};

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

/// Helper to print the degrees and firing strengths of a module
fn print_module(module: &FuzzyModule) {
    for variable in module.variables() {
        println!("  {}:", variable.name());
        for set in variable.sets() {
            println!(
                "    - {:20} degree {:.3}  firing {:.3}",
                set.name(),
                set.degree(),
                set.firing_strength()
            );
        }
    }
}

/// The set of `variable` whose firing strength is highest
fn strongest_output(module: &FuzzyModule, variable: &str) -> String {
    let output = module.variable(variable).unwrap();
    let mut best = &output.sets()[0];
    for set in output.sets() {
        if set.firing_strength() > best.firing_strength() {
            best = set;
        }
    }
    best.name().to_string()
}

#[test]
fn test_full_config_to_selection_flow() {
    separator("INTEGRATION TEST: Config -> Rule Bases -> Scoring -> Selection");

    // =========================================================================
    // STEP 1: Load the bundled weapons
    // =========================================================================
    separator("STEP 1: Loading Bundled Weapons");

    let configs = default_weapons().expect("Failed to load bundled weapons");
    for config in &configs {
        println!(
            "  {} ({}): {} variables, {} rules",
            config.name,
            config.id,
            config.rule_base.variables.len(),
            config.rule_base.rules.len()
        );
    }
    assert_eq!(configs.len(), 3);

    let constants = EngineConstants::default();
    let mut system = WeaponSystem::from_configs(&configs, &constants)
        .expect("Failed to build weapon system");

    // =========================================================================
    // STEP 2: Rocket launcher bands
    // =========================================================================
    separator("STEP 2: Rocket Launcher Desirability Bands");

    for method in DefuzzifyMethod::all() {
        let mut module = rocket_launcher_module().expect("Failed to build rocket launcher");
        module.fuzzify("DistToTarget", 0.0).unwrap();
        module.fuzzify("AmmoStatus", 0.0).unwrap();
        let score = module.defuzzify("Desirability", *method).unwrap();
        println!("  {} at (0, 0): {:.2}", method.name(), score);
        print_module(&module);
        assert_eq!(strongest_output(&module, "Desirability"), "Undesirable");
        assert!(score < 25.0);

        module.fuzzify("DistToTarget", 150.0).unwrap();
        module.fuzzify("AmmoStatus", 50.0).unwrap();
        let score = module.defuzzify("Desirability", *method).unwrap();
        println!("  {} at (150, 50): {:.2}", method.name(), score);
        assert_eq!(strongest_output(&module, "Desirability"), "VeryDesirable");
        assert!(score > 75.0);
    }

    // =========================================================================
    // STEP 3: Selection across ranges
    // =========================================================================
    separator("STEP 3: Selecting Weapons Across Ranges");

    for distance in [10.0, 60.0, 150.0, 250.0, 500.0] {
        let scores = system.scores(distance).unwrap();
        let pick = system.select_weapon(distance).unwrap().unwrap();
        println!("  {:>5.0} units -> {:16} {:?}", distance, pick.name(), scores);

        let best = scores
            .iter()
            .map(|(_, s)| *s)
            .fold(0.0_f64, f64::max);
        assert!((pick.last_desirability() - best).abs() < 1e-9);
    }

    system.select_weapon(20.0).unwrap();
    assert_eq!(system.current().unwrap().id(), "shotgun");

    // =========================================================================
    // STEP 4: Empty the shotgun
    // =========================================================================
    separator("STEP 4: Firing Until Empty");

    let mut now = 0.0;
    let mut shots = 0;
    while system.current().unwrap().id() == "shotgun" {
        if system.shoot_at(now) {
            shots += 1;
        }
        now += 0.25;
        system.select_weapon(20.0).unwrap();
        assert!(shots <= 40, "shotgun never ran dry");
    }

    println!("  Shotgun fired {} shots before switching", shots);
    assert_eq!(shots, 20);
    assert_eq!(system.weapon("shotgun").unwrap().rounds_left(), 0);
    assert!(system.weapon("shotgun").unwrap().last_desirability().abs() < f64::EPSILON);
    assert_eq!(system.current().unwrap().id(), "blaster");

    separator("INTEGRATION TEST COMPLETE");
}

#[test]
fn test_custom_rule_base_from_toml() {
    let toml = r#"
rules = [
    { when = [["Ammo", "Low"]], then = ["Desirability", "Undesirable"] },
    { when = [["Ammo", "Loads"]], then = ["Desirability", "VeryDesirable"] },
]

[[variables]]
name = "Ammo"
sets = [
    { name = "Low", shape = "left_shoulder", points = [0.0, 10.0, 40.0] },
    { name = "Loads", shape = "right_shoulder", points = [10.0, 40.0, 100.0] },
]

[[variables]]
name = "Desirability"
sets = [
    { name = "Undesirable", shape = "left_shoulder", points = [0.0, 20.0, 50.0] },
    { name = "VeryDesirable", shape = "right_shoulder", points = [50.0, 80.0, 100.0] },
]
"#;

    let mut module = parse_rule_base(toml, &EngineConstants::default()).unwrap();

    let mut previous = f64::MIN;
    for ammo in (0..=100).step_by(5) {
        module.fuzzify("Ammo", f64::from(ammo)).unwrap();
        let score = module.defuzzify("Desirability", DefuzzifyMethod::Centroid).unwrap();
        assert!(score >= previous - 1e-9, "ammo {}: {} < {}", ammo, score, previous);
        previous = score;
    }

    let err = module.fuzzify("Distance", 10.0).unwrap_err();
    assert_eq!(err, FuzzyError::UnknownVariable("Distance".to_string()));
}

#[test]
fn test_snapshot_reports_last_cycle() {
    let mut rocket = Weapon::rocket_launcher().unwrap();
    rocket.desirability(150.0).unwrap();

    let snapshot = rocket.module().snapshot();
    assert_eq!(snapshot.rules.len(), 25);

    let distance = snapshot.variable("DistToTarget").unwrap();
    let medium = distance.sets.iter().find(|s| s.name == "Target_Medium").unwrap();
    assert!((medium.degree - 1.0).abs() < 1e-9);

    let json = snapshot.to_json().unwrap();
    assert!(json.contains("VeryDesirable"));
}
