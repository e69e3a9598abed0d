//! Integration tests for swapcache

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Temporary store with a config file pointing at it
    struct Fixture {
        temp: TempDir,
        config: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            let root = temp.path();
            for dir in ["preinstalled", "own", "presets", "live"] {
                fs::create_dir_all(root.join(dir)).unwrap();
            }
            fs::write(
                root.join("functions.json"),
                r#"["0123456789abcdef0123456789abcdef - Skybox", "fedcba9876543210fedcba9876543210 - Grass"]"#,
            )
            .unwrap();

            let config = root.join("config.toml");
            let content = format!(
                "[paths]\npreinstalled_dir = {:?}\nown_dir = {:?}\npresets_dir = {:?}\nfunctions_file = {:?}\nlive_dir = {:?}\n",
                root.join("preinstalled"),
                root.join("own"),
                root.join("presets"),
                root.join("functions.json"),
                root.join("live"),
            );
            fs::write(&config, content).unwrap();

            Self { temp, config }
        }

        fn path(&self, rel: &str) -> PathBuf {
            self.temp.path().join(rel)
        }

        fn write(&self, rel: &str, content: &str) {
            let path = self.path(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }

        fn cmd(&self) -> Command {
            let mut cmd = swapcache();
            cmd.env("SWAPCACHE_CONFIG", &self.config).env("CI", "1");
            cmd
        }
    }

    fn swapcache() -> Command {
        cargo_bin_cmd!("swapcache")
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn help_displays() {
        swapcache()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("runtime cache entries"));
    }

    #[test]
    fn version_displays() {
        swapcache()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("swapcache"));
    }

    #[test]
    fn list_plain_shows_display_names() {
        let fx = Fixture::new();
        fx.write("preinstalled/AAA - Night Sky", "pre");
        fx.write("own/BBB - Grass", "own");
        fx.write("own/readme.txt", "ignored");

        fx.cmd()
            .args(["list", "--format", "plain"])
            .assert()
            .success()
            .stdout("Night Sky\nGrass\n");
    }

    #[test]
    fn list_json_includes_hash_and_layer() {
        let fx = Fixture::new();
        fx.write("own/BBB - Grass", "own");

        let output = fx.cmd().args(["list", "-f", "json"]).output().unwrap();
        assert!(output.status.success());
        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed[0]["hash"], "BBB");
        assert_eq!(parsed[0]["display_name"], "Grass");
        assert_eq!(parsed[0]["origin"]["name"], "own");
    }

    #[test]
    fn list_presets_plain() {
        let fx = Fixture::new();
        fx.write("presets/Winter/H1 - Snow", "s");
        fx.write("presets/Autumn/H2 - Leaves", "l");

        fx.cmd()
            .args(["list", "--presets", "-f", "plain"])
            .assert()
            .success()
            .stdout("Autumn\nWinter\n");
    }

    #[test]
    fn apply_prefers_preinstalled_entry() {
        let fx = Fixture::new();
        fx.write("preinstalled/AAA - Foo", "from preinstalled");
        fx.write("own/BBB - Foo", "from own");

        fx.cmd()
            .args(["apply", "Foo"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Replaced 'AAA'"));

        assert_eq!(read(&fx.path("live/AAA")), "from preinstalled");
        assert!(!fx.path("live/BBB").exists());
    }

    #[test]
    fn apply_unknown_label_fails_with_hint() {
        let fx = Fixture::new();

        fx.cmd()
            .args(["apply", "NoSuchLabel"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Cache entry not found: NoSuchLabel"))
            .stderr(predicate::str::contains("swapcache list"));

        assert_eq!(fs::read_dir(fx.path("live")).unwrap().count(), 0);
    }

    #[test]
    fn apply_preset_copies_named_files() {
        let fx = Fixture::new();
        fx.write("presets/Night/H1 - X", "x bytes");
        fx.write("presets/Night/H2 - Y", "y bytes");
        fx.write("presets/Night/notes.txt", "notes");

        fx.cmd()
            .args(["apply", "--preset", "Night"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Applied 2 file(s)"));

        assert_eq!(read(&fx.path("live/H1")), "x bytes");
        assert_eq!(read(&fx.path("live/H2")), "y bytes");
        assert_eq!(fs::read_dir(fx.path("live")).unwrap().count(), 2);
    }

    #[test]
    fn apply_label_suffix_keeps_layer_priority() {
        let fx = Fixture::new();
        fx.write("preinstalled/AAA - Night - Foo", "from preinstalled");
        fx.write("own/BBB - Foo", "from own");

        fx.cmd().args(["apply", "Foo"]).assert().success();

        assert_eq!(read(&fx.path("live/AAA")), "from preinstalled");
        assert!(!fx.path("live/BBB").exists());
    }

    #[test]
    fn apply_preset_reports_unusable_members() {
        let fx = Fixture::new();
        fx.write("presets/Odd/H1 - X", "x bytes");
        fx.write("presets/Odd/ - NoHash", "n");

        fx.cmd()
            .args(["apply", "--preset", "Odd"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Applied 1 file(s) from preset 'Odd' with 1 error(s)",
            ))
            .stdout(predicate::str::contains("empty hash or display name"));

        assert_eq!(read(&fx.path("live/H1")), "x bytes");
    }

    #[test]
    fn apply_missing_preset_fails() {
        let fx = Fixture::new();

        fx.cmd()
            .args(["apply", "--preset", "Ghost"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Preset not found: Ghost"));
    }

    #[test]
    fn create_then_overwrite_requires_force() {
        let fx = Fixture::new();
        fx.write("src.bin", "first");
        let src = fx.path("src.bin");
        let target = fx.path("own/ABC123 - MyCache");

        fx.cmd()
            .arg("create")
            .arg(&src)
            .args(["--name", "MyCache", "--hash", "ABC123"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Created cache 'ABC123 - MyCache'"));
        assert_eq!(read(&target), "first");

        fx.write("src.bin", "second");
        fx.cmd()
            .arg("create")
            .arg(&src)
            .args(["--name", "MyCache", "--hash", "ABC123"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"))
            .stderr(predicate::str::contains("--force"));
        assert_eq!(read(&target), "first");

        fx.cmd()
            .arg("create")
            .arg(&src)
            .args(["--name", "MyCache", "--hash", "ABC123", "--force"])
            .assert()
            .success();
        assert_eq!(read(&target), "second");
    }

    #[test]
    fn create_with_registry_function() {
        let fx = Fixture::new();
        fx.write("sky.png", "sky");

        fx.cmd()
            .arg("create")
            .arg(fx.path("sky.png"))
            .args(["--name", "Blue Sky", "--function", "Skybox"])
            .assert()
            .success();

        assert!(fx
            .path("own/0123456789abcdef0123456789abcdef - Blue Sky")
            .is_file());
    }

    #[test]
    fn create_without_hash_fails_non_interactive() {
        let fx = Fixture::new();
        fx.write("sky.png", "sky");

        fx.cmd()
            .arg("create")
            .arg(fx.path("sky.png"))
            .args(["--name", "Blue Sky"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("hash is required"));
    }

    #[test]
    fn created_entry_round_trips_to_live() {
        let fx = Fixture::new();
        fx.write("src.bin", "round trip");

        fx.cmd()
            .arg("create")
            .arg(fx.path("src.bin"))
            .args(["--name", "D", "--hash", "H"])
            .assert()
            .success();
        fx.cmd().args(["apply", "D"]).assert().success();

        assert_eq!(read(&fx.path("live/H")), "round trip");
    }

    #[test]
    fn clear_without_yes_aborts() {
        let fx = Fixture::new();
        fx.write("live/f1", "1");

        fx.cmd()
            .arg("clear")
            .assert()
            .success()
            .stdout(predicate::str::contains("Aborted"));
        assert!(fx.path("live/f1").exists());
    }

    #[test]
    fn clear_yes_removes_everything() {
        let fx = Fixture::new();
        fx.write("live/f1", "1");
        fx.write("live/f2", "2");
        fx.write("live/d1/inner", "i");

        fx.cmd()
            .args(["clear", "--yes"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cleared 3 item(s)"));

        assert!(fx.path("live").is_dir());
        assert_eq!(fs::read_dir(fx.path("live")).unwrap().count(), 0);
    }

    #[test]
    fn clear_missing_live_dir_is_not_an_error() {
        let fx = Fixture::new();
        fs::remove_dir(fx.path("live")).unwrap();

        fx.cmd()
            .args(["clear", "--yes"])
            .assert()
            .success()
            .stdout(predicate::str::contains("nothing to clear"));
    }

    #[test]
    fn functions_plain_lists_registry() {
        let fx = Fixture::new();

        fx.cmd()
            .args(["functions", "-f", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "0123456789abcdef0123456789abcdef - Skybox",
            ));
    }

    #[test]
    fn broken_registry_is_not_fatal() {
        let fx = Fixture::new();
        fx.write("functions.json", "{\"not\": \"a list\"}");

        fx.cmd()
            .args(["functions", "-f", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[]"));
    }

    #[test]
    fn status_runs() {
        let fx = Fixture::new();
        fx.cmd()
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("live"));
    }

    #[test]
    fn config_path() {
        let fx = Fixture::new();
        fx.cmd()
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let fx = Fixture::new();
        fx.cmd()
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[paths]"));
    }

    #[test]
    fn completions_bash() {
        swapcache()
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("swapcache"));
    }
}
