//! Integration tests for webboot

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use serial_test::serial;

    fn webboot() -> Command {
        let mut cmd = cargo_bin_cmd!("webboot");
        cmd.env_remove("WEBBOOT_CONFIG")
            .env_remove("WEBBOOT_PROJECT")
            .env_remove("WEBBOOT_PACKAGE_MANAGER");
        cmd
    }

    #[test]
    #[serial]
    fn help_displays() {
        webboot()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("bootstrap for Node web apps"));
    }

    #[test]
    #[serial]
    fn version_displays() {
        webboot()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("webboot"));
    }

    #[test]
    #[serial]
    fn missing_project_dir_fails() {
        webboot()
            .args(["-C", "/nonexistent/webboot-project"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Project directory not found"));
    }

    #[test]
    #[serial]
    fn missing_explicit_config_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        webboot()
            .arg("-C")
            .arg(temp.path())
            .args(["--config", "/nonexistent/webboot.toml"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Configuration file not found"));
    }

    #[test]
    #[serial]
    fn dry_run_prints_plan_without_running() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("node_modules")).unwrap();

        webboot()
            .arg("-C")
            .arg(temp.path())
            .args(["--dry-run", "--package-manager", "webboot-no-such-program"])
            .assert()
            .success()
            .stdout(predicate::str::contains("skip install"))
            .stdout(predicate::str::contains("run  build"))
            .stdout(predicate::str::contains("webboot-no-such-program start"))
            .stdout(predicate::str::contains("PORT=7860"))
            .stdout(predicate::str::contains("HOSTNAME=0.0.0.0"));
    }

    #[test]
    #[serial]
    fn missing_package_manager_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        webboot()
            .arg("-C")
            .arg(temp.path())
            .args(["--package-manager", "webboot-no-such-program"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to launch"));
    }

    #[test]
    #[serial]
    fn unlaunchable_start_command_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("node_modules")).unwrap();
        std::fs::create_dir(temp.path().join(".next")).unwrap();

        webboot()
            .arg("-C")
            .arg(temp.path())
            .args(["--package-manager", "webboot-no-such-program"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Failed to launch `webboot-no-such-program start`",
            ))
            .stderr(predicate::str::contains("on PATH"));
    }
}

#[cfg(unix)]
mod bootstrap_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use serial_test::serial;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Stand-in for npm: logs each invocation with the PORT/HOSTNAME it sees,
    /// creates the directories real npm would, and fails the step named in
    /// `FAKE_PM_FAIL`.
    const FAKE_PM: &str = r#"#!/bin/sh
echo "$* PORT=${PORT:-} HOSTNAME=${HOSTNAME:-}" >> "$FAKE_PM_LOG"
case "$1" in
  install)
    [ "$FAKE_PM_FAIL" = install ] && exit 1
    mkdir -p node_modules ;;
  run)
    [ "$FAKE_PM_FAIL" = build ] && exit 2
    mkdir -p .next ;;
  start)
    [ "$FAKE_PM_FAIL" = start ] && exit 3 ;;
esac
exit 0
"#;

    struct Fixture {
        _bin: TempDir,
        project: TempDir,
        script: PathBuf,
        log: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let bin = TempDir::new().unwrap();
            let project = TempDir::new().unwrap();
            let script = bin.path().join("fake-npm");
            std::fs::write(&script, FAKE_PM).unwrap();
            std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
            let log = bin.path().join("calls.log");
            Self {
                _bin: bin,
                project,
                script,
                log,
            }
        }

        fn dir(&self) -> &Path {
            self.project.path()
        }

        fn command(&self) -> Command {
            let mut cmd = cargo_bin_cmd!("webboot");
            cmd.env_remove("WEBBOOT_CONFIG")
                .env_remove("FAKE_PM_FAIL")
                .env("WEBBOOT_PACKAGE_MANAGER", &self.script)
                .env("FAKE_PM_LOG", &self.log)
                .arg("-C")
                .arg(self.project.path());
            cmd
        }

        fn calls(&self) -> Vec<String> {
            std::fs::read_to_string(&self.log)
                .unwrap_or_default()
                .lines()
                .map(|l| l.split(" PORT=").next().unwrap_or_default().to_string())
                .collect()
        }

        fn raw_log(&self) -> String {
            std::fs::read_to_string(&self.log).unwrap_or_default()
        }
    }

    #[test]
    #[serial]
    fn fresh_project_installs_builds_and_starts() {
        let fx = Fixture::new();

        fx.command()
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "[OK] Dependencies installed successfully",
            ))
            .stdout(predicate::str::contains("[OK] Application built successfully"));

        assert_eq!(fx.calls(), vec!["install", "run build", "start"]);
        assert!(fx.dir().join("node_modules").exists());
        assert!(fx.dir().join(".next").exists());
    }

    #[test]
    #[serial]
    fn second_run_only_starts() {
        let fx = Fixture::new();
        fx.command().assert().success();
        std::fs::remove_file(&fx.log).unwrap();

        fx.command()
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "[SKIP] Dependencies already installed (node_modules exists)",
            ))
            .stdout(predicate::str::contains(
                "[SKIP] Application already built (.next exists)",
            ));

        assert_eq!(fx.calls(), vec!["start"]);
    }

    #[test]
    #[serial]
    fn existing_dependencies_skip_install() {
        let fx = Fixture::new();
        std::fs::create_dir(fx.dir().join("node_modules")).unwrap();

        fx.command().assert().success();

        assert_eq!(fx.calls(), vec!["run build", "start"]);
    }

    #[test]
    #[serial]
    fn install_failure_exits_one_without_build_or_start() {
        let fx = Fixture::new();

        fx.command()
            .env("FAKE_PM_FAIL", "install")
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "[FAIL] Failed to install dependencies",
            ));

        assert_eq!(fx.calls(), vec!["install"]);
    }

    #[test]
    #[serial]
    fn build_failure_exits_one_without_start() {
        let fx = Fixture::new();

        fx.command()
            .env("FAKE_PM_FAIL", "build")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to build application"))
            .stderr(predicate::str::contains("exited with status 2"));

        assert_eq!(fx.calls(), vec!["install", "run build"]);
    }

    #[test]
    #[serial]
    fn start_failure_exits_one() {
        let fx = Fixture::new();

        fx.command()
            .env("FAKE_PM_FAIL", "start")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to start server"));
    }

    #[test]
    #[serial]
    fn start_sees_platform_env_over_inherited_values() {
        let fx = Fixture::new();

        fx.command()
            .env("PORT", "1234")
            .env("HOSTNAME", "inherited.example")
            .assert()
            .success();

        let log = fx.raw_log();
        let start = log
            .lines()
            .find(|l| l.starts_with("start "))
            .expect("start was invoked");
        assert_eq!(start, "start PORT=7860 HOSTNAME=0.0.0.0");
    }

    #[test]
    #[serial]
    fn local_config_changes_port_and_build_dir() {
        let fx = Fixture::new();
        std::fs::create_dir(fx.dir().join("dist")).unwrap();
        std::fs::write(
            fx.dir().join(".webboot.toml"),
            "[paths]\nbuild_dir = \"dist\"\n\n[server]\nport = 8080\nhostname = \"127.0.0.1\"\n",
        )
        .unwrap();

        fx.command().assert().success();

        assert_eq!(fx.calls(), vec!["install", "start"]);
        assert!(fx
            .raw_log()
            .contains("start PORT=8080 HOSTNAME=127.0.0.1"));
    }

    #[test]
    #[serial]
    fn json_log_format_writes_json_lines() {
        let fx = Fixture::new();

        let output = fx
            .command()
            .args(["-v", "--log-format", "json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
        assert!(!lines.is_empty(), "expected log output on stderr");
        for line in lines {
            assert!(line.starts_with('{'), "not a JSON line: {line}");
        }
    }
}
