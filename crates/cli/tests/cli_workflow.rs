//! End-to-end tests driving the `ev` binary against a temporary species
//! database and tracker file.

use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const SPECIES_CSV: &str = "\
1,Bulbasaur,0,0,0,1,0,0
4,Charmander,0,0,0,0,0,1
25,Pikachu,0,0,0,0,0,2
";

struct Harness {
    dir: TempDir,
}

impl Harness {
    /// Temporary workspace with the species database already imported.
    fn new() -> Self {
        let harness = Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        };
        let csv = harness.dir.path().join("species.csv");
        std::fs::write(&csv, SPECIES_CSV).unwrap();

        let output = harness.run(&["import", csv.to_str().unwrap()]);
        assert!(output.status.success(), "import failed: {:?}", output);
        assert_eq!(stdout(&output), "Imported 3 species (0 alternate forms)\n");
        harness
    }

    fn tracker_path(&self) -> PathBuf {
        self.dir.path().join(".ev-tracker")
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_ev"))
            .arg("--infile")
            .arg(self.tracker_path())
            .arg("--pokedex")
            .arg(self.dir.path().join("pokedex.db"))
            .args(args)
            .env("RUST_LOG", "error")
            .env_remove("EV_TRACKER_CONFIG")
            .output()
            .expect("Failed to run ev")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_lookup_by_number_and_name() {
    let harness = Harness::new();

    let output = harness.run(&["ev", "1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "#001 Bulbasaur  +1 Special Attack\n");

    let output = harness.run(&["ev", "PIKACHU"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("#025 Pikachu"));
}

#[test]
fn test_fuzzy_miss_suggests_candidates() {
    let harness = Harness::new();

    let output = harness.run(&["ev", "charmandr"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "No match found for 'charmandr'.\nDid you mean:\n  Charmander\n");
}

#[test]
fn test_unknown_number_has_no_suggestions() {
    let harness = Harness::new();

    let output = harness.run(&["ev", "999"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "No match found for '999'.\n");

    let output = harness.run(&["ev", "zzzzzz"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "No match found for 'zzzzzz'.\n");
}

#[test]
fn test_training_workflow() {
    let harness = Harness::new();

    let output = harness.run(&["list"]);
    assert_eq!(stdout(&output), "No tracked Pokemon\n");

    let output = harness.run(&["status"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "No tracked Pokemon is marked as active.\n\
         Set an active pokemon using the 'active --switch' command.\n"
    );

    let output = harness.run(&["track", "pikachu", "--name", "Sparky", "--item", "power anklet"]);
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout(&output), "1 Sparky (Pikachu)\n");

    let output = harness.run(&["track", "4"]);
    assert_eq!(stdout(&output), "2 Charmander\n");

    let output = harness.run(&["active", "--switch", "1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1 Sparky (Pikachu)\n");

    let output = harness.run(&["list"]);
    assert_eq!(stdout(&output), "* 1 Sparky (Pikachu)\n  2 Charmander\n");

    // (1 + 4) * 2 defeats
    let output = harness.run(&["battle", "charmander", "--count", "2"]);
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout(&output), "+10 Speed\n1 Sparky (Pikachu)\n");

    let output = harness.run(&["status"]);
    assert_eq!(stdout(&output), "1 Sparky (Pikachu)\nPower Anklet\nSpeed: 10\n");

    let output = harness.run(&["update", "--id", "2", "--pokerus"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2 Charmander\nPokerus\nNo EVs\n");

    let output = harness.run(&["update", "--no-item", "--name", "Zap"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1 Zap (Pikachu)\nSpeed: 10\n");

    let output = harness.run(&["status", "--id", "7"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "No tracked Pokemon with id '7' was found.\n");

    let output = harness.run(&["release", "1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "No longer tracking 1 Zap (Pikachu)\n");

    let output = harness.run(&["list"]);
    assert_eq!(stdout(&output), "  2 Charmander\n");
}

#[test]
fn test_tracker_file_and_backup() {
    let harness = Harness::new();

    harness.run(&["track", "bulbasaur", "--pokerus"]);
    harness.run(&["active", "--switch", "1"]);

    let path = harness.tracker_path();
    let document: Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(document["active"], 1);
    assert_eq!(document["pokemon"]["1"]["species"], 1);
    assert_eq!(document["pokemon"]["1"]["pokerus"], true);

    let backup = path.with_file_name(".ev-tracker.bak");
    assert!(backup.exists());
    let previous: Value =
        serde_json::from_str(&std::fs::read_to_string(&backup).unwrap()).unwrap();
    assert!(previous.get("active").map_or(true, Value::is_null));
}

#[test]
fn test_unknown_item_is_rejected() {
    let harness = Harness::new();

    let output = harness.run(&["track", "pikachu", "--item", "Leftovers"]);
    assert!(!output.status.success());
    assert!(!harness.tracker_path().exists());
}
