//! Integration test: Load catalog -> Parse node -> Plan skills -> Run waves
//!
//! This test validates the full flow from the bundled catalog to per-wave
//! damage and refund reports.

use np_core::config::{default_catalog, parse_node, ConfigError};
use np_core::damage::{calculate_np, calculate_np_rolled};
use np_core::node::{run, Node, NodeDamage};
use np_core::{ScaledInt, Servant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::thread;

const DRAGON_HUNT: &str = r#"
name = "Dragon Hunt"
template_name = "Siegfried + Zhuge"
waves = [["Wyvern", "Spriggan", "Wyvern"], ["Wyvern", "Lamia"], ["Doorman"]]

[[party]]
servant = "Siegfried"
level = 90
np_level = 5
fou_attack = 1000
craft_essence = "The Black Grail"

[[party]]
servant = "Zhuge Liang"
level = 90

[[party]]
servant = "Jack the Ripper"
level = 90
np_level = 2

[[turns]]
clearer = 0

[[turns]]
clearer = 2

[[turns]]
clearer = 0

[[activations]]
member = 1
skill = 0
turn = 0
target = 0

[[activations]]
member = 1
skill = 1
turn = 0
"#;

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

/// Helper to print a node report
fn print_report(report: &NodeDamage) {
    for (index, wave) in report.waves.iter().enumerate() {
        match wave {
            Ok(wave) => {
                println!("  Wave {} ({}):", index + 1, wave.clearer);
                for enemy in &wave.enemies {
                    match &enemy.result {
                        Ok(np) => println!(
                            "    - {} ({} HP): {} / {} / {}",
                            enemy.enemy, enemy.hit_points, np.damage.low, np.damage.average, np.damage.high
                        ),
                        Err(err) => println!("    - {}: {}", enemy.enemy, err),
                    }
                }
                println!(
                    "    Refund: {}% / {}% / {}%",
                    wave.refund.low, wave.refund.average, wave.refund.high
                );
            }
            Err(err) => println!("  Wave {}: {}", index + 1, err),
        }
    }
}

fn dragon_hunt() -> Node {
    parse_node(DRAGON_HUNT, &default_catalog()).expect("Failed to parse node")
}

#[test]
fn test_full_node_run() {
    separator("DRAGON HUNT");

    let node = dragon_hunt();
    let report = run(&node);
    print_report(&report);

    assert_eq!(report.name, "Dragon Hunt");
    assert_eq!(report.waves.len(), 3);
    assert!(report.is_complete());

    let first = report.waves[0].as_ref().unwrap();
    assert_eq!(first.clearer, "Siegfried");
    assert_eq!(first.enemies.len(), 3);

    // Same class and attribute matchup; only the dragon trait differs
    let wyvern = first.enemies[0].result.as_ref().unwrap();
    let spriggan = first.enemies[1].result.as_ref().unwrap();
    let ratio = wyvern.damage.average as f64 / spriggan.damage.average as f64;
    assert!((ratio - 1.5).abs() < 0.01, "ratio was {}", ratio);
}

#[test]
fn test_wave_refund_sums_each_component() {
    let report = run(&dragon_hunt());

    for wave in report.waves.iter().map(|w| w.as_ref().unwrap()) {
        let mut low = ScaledInt::ZERO;
        let mut average = ScaledInt::ZERO;
        let mut high = ScaledInt::ZERO;
        for enemy in &wave.enemies {
            let np = enemy.result.as_ref().unwrap();
            low = low + np.refund.low.refunded;
            average = average + np.refund.average.refunded;
            high = high + np.refund.high.refunded;
        }
        assert_eq!(wave.refund.low, low);
        assert_eq!(wave.refund.average, average);
        assert_eq!(wave.refund.high, high);
    }

    // Quick NP on the second wave refunds gauge; Buster NPs refund nothing
    assert!(report.waves[1].as_ref().unwrap().refund.low > ScaledInt::ZERO);
    assert_eq!(report.waves[0].as_ref().unwrap().refund.high, ScaledInt::ZERO);

    let total = report.total_refund();
    let summed: ScaledInt = report
        .waves
        .iter()
        .map(|w| w.as_ref().unwrap().refund.average)
        .sum();
    assert_eq!(total.average, summed);
}

#[test]
fn test_planned_skills_raise_damage() {
    let with_skills = run(&dragon_hunt());

    let mut node = dragon_hunt();
    node.template.activations.clear();
    let without_skills = run(&node);

    let damage = |report: &NodeDamage, wave: usize| {
        report.waves[wave].as_ref().unwrap().enemies[0]
            .result
            .as_ref()
            .unwrap()
            .damage
            .average
    };

    // Three-turn buffs from turn 0 cover every wave
    for wave in 0..3 {
        assert!(damage(&with_skills, wave) > damage(&without_skills, wave));
    }
}

#[test]
fn test_runs_are_deterministic() {
    let node = dragon_hunt();
    assert_eq!(run(&node), run(&node));
}

#[test]
fn test_concurrent_runs_across_np_levels() {
    let base = dragon_hunt();

    let reports: Vec<NodeDamage> = thread::scope(|scope| {
        let handles: Vec<_> = (1..=5u8)
            .map(|np_level| {
                let mut node = base.clone();
                node.template.party[0].servant.np_level = np_level;
                scope.spawn(move || run(&node))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let averages: Vec<i64> = reports
        .iter()
        .map(|r| r.waves[0].as_ref().unwrap().enemies[0].result.as_ref().unwrap().damage.average)
        .collect();
    assert!(averages.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", averages);

    // The NP level 5 run matches a sequential run
    assert_eq!(reports[4], run(&base));
}

#[test]
fn test_support_np_deals_no_damage() {
    let mut node = dragon_hunt();
    for turn in &mut node.template.turns {
        turn.clearer = 1;
    }
    let report = run(&node);

    let wave = report.waves[0].as_ref().unwrap();
    assert_eq!(wave.clearer, "Zhuge Liang");
    for enemy in &wave.enemies {
        let np = enemy.result.as_ref().unwrap();
        assert_eq!((np.damage.low, np.damage.average, np.damage.high), (0, 0, 0));
        assert_eq!(np.refund.average.overkill_hits, 0);
    }
    assert!(!report.guaranteed_clear());
}

#[test]
fn test_errors_stay_in_their_wave() {
    let mut node = dragon_hunt();
    node.template.turns[1].clearer = 7;
    node.template.turns.pop();
    let report = run(&node);

    assert!(report.waves[0].is_ok());
    assert!(report.waves[1].is_err());
    assert!(report.waves[2].is_err());
    assert!(!report.is_complete());
    assert_eq!(
        report.total_refund().average,
        report.waves[0].as_ref().unwrap().refund.average
    );
}

#[test]
fn test_unknown_names_fail_to_load() {
    let bad = DRAGON_HUNT.replace("\"Lamia\"", "\"Basilisk\"");
    let result = parse_node(&bad, &default_catalog());
    assert!(matches!(result, Err(ConfigError::ValidationError(msg)) if msg.contains("Basilisk")));
}

#[test]
fn test_rolled_damage_stays_in_range() {
    let catalog = default_catalog();
    let jack = Servant::new(catalog.servant("Jack the Ripper").unwrap().clone(), 90);
    let lamia = catalog.enemy("Lamia").unwrap();

    let range = calculate_np(&jack, None, lamia, &[], None).unwrap().damage;
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let damage = calculate_np_rolled(&jack, None, lamia, &[], None, &mut rng).unwrap();
        assert!(range.low <= damage && damage <= range.high, "{} outside {:?}", damage, range);
    }
}

#[test]
fn test_class_override_from_catalog() {
    let catalog = default_catalog();
    let martha = Servant::new(catalog.servant("Martha (Ruler)").unwrap().clone(), 90);
    let mut plain = martha.clone();
    plain.data.class_overrides.clear();
    let ghost = catalog.enemy("Ghost").unwrap();

    let boosted = calculate_np(&martha, None, ghost, &[], None).unwrap().damage.average;
    let normal = calculate_np(&plain, None, ghost, &[], None).unwrap().damage.average;
    let ratio = boosted as f64 / normal as f64;
    assert!((ratio - 2.0).abs() < 0.01, "ratio was {}", ratio);
}
