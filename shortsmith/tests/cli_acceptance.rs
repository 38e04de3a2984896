use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct CliTestEnv {
    _temp_dir: TempDir,
    home: PathBuf,
    xdg_config: PathBuf,
    xdg_state: PathBuf,
    work: PathBuf,
}

impl CliTestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let home = base.join("home");
        let xdg_config = base.join("xdg-config");
        let xdg_state = base.join("xdg-state");
        let work = base.join("work");

        for dir in [&home, &xdg_config, &xdg_state, &work] {
            fs::create_dir_all(dir).expect("failed to create test directory");
        }

        Self {
            _temp_dir: temp_dir,
            home,
            xdg_config,
            xdg_state,
            work,
        }
    }

    fn write_config(&self, contents: &str) {
        let dir = self.xdg_config.join("shortsmith");
        fs::create_dir_all(&dir).expect("failed to create config dir");
        fs::write(dir.join("config.toml"), contents).expect("failed to write config");
    }

    fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.work.join(name);
        fs::write(&path, contents).expect("failed to write fixture");
        path
    }
}

fn run_bin(env: &CliTestEnv, args: &[&str]) -> Output {
    let bin_path = PathBuf::from(assert_cmd::cargo::cargo_bin!("shortsmith"));

    Command::new(bin_path)
        .args(args)
        .current_dir(&env.work)
        .env("HOME", &env.home)
        .env("XDG_CONFIG_HOME", &env.xdg_config)
        .env("XDG_STATE_HOME", &env.xdg_state)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to execute shortsmith: {e}"))
}

fn assert_success(args: &[&str], output: &Output) {
    if output.status.success() {
        return;
    }

    let rendered_args = args
        .iter()
        .map(|arg| OsString::from(arg).to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    panic!(
        "shortsmith {rendered_args} failed\nstatus: {}\nstdout:\n{}\nstderr:\n{}",
        output.status, stdout, stderr
    );
}

fn json_plan(env: &CliTestEnv, args: &[&str]) -> serde_json::Value {
    let output = run_bin(env, args);
    assert_success(args, &output);
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn text_report_shows_every_section() {
    let env = CliTestEnv::new();
    let args = ["--seed", "7"];

    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    for heading in ["IDEAS", "SCRIPT", "SHOT LIST", "SCHEDULE", "TASKS"] {
        assert!(stdout.contains(heading), "missing {heading} in:\n{stdout}");
    }
    assert!(stdout.contains("Daily Shorts Lab"));
    assert!(stdout.contains("Runtime: 58s"));
    assert!(stdout.contains("Pre-production (2 tasks)"));
}

#[test]
fn json_plan_uses_profile_flags() {
    let env = CliTestEnv::new();
    let plan = json_plan(
        &env,
        &[
            "--format",
            "json",
            "--seed",
            "3",
            "--channel",
            "Trail Notes",
            "--niche",
            "ultralight backpacking",
            "--keywords",
            "gear list, , trail food",
        ],
    );

    assert_eq!(plan["profile"]["channelName"], "Trail Notes");
    assert_eq!(
        plan["profile"]["keywords"],
        serde_json::json!(["gear list", "trail food"])
    );
    assert_eq!(plan["schedule"].as_array().map(Vec::len), Some(4));
    assert_eq!(plan["shotlist"].as_array().map(Vec::len), Some(4));
    assert_eq!(plan["schedule"][0]["hashtags"][0], "#ultralightBackpacking");
    assert_eq!(plan["tasks"][0]["items"][0]["owner"], "Trail Notes");
}

#[test]
fn seed_makes_runs_repeatable_apart_from_dates() {
    let env = CliTestEnv::new();
    let args = ["--format", "json", "--seed", "11"];
    let first = json_plan(&env, &args);
    let second = json_plan(&env, &args);

    assert_eq!(first["idea"], second["idea"]);
    assert_eq!(first["script"], second["script"]);
    assert_eq!(first["shotlist"], second["shotlist"]);
}

#[test]
fn select_switches_script_and_patches_script_tasks() {
    let env = CliTestEnv::new();
    let plan = json_plan(&env, &["--format", "json", "--seed", "5", "--select", "3"]);

    let title = plan["idea"]["title"].as_str().expect("idea title");
    assert_eq!(plan["script"]["ideaId"], plan["idea"]["id"]);
    assert_eq!(plan["script"]["title"], title);

    let items: Vec<&serde_json::Value> = plan["tasks"]
        .as_array()
        .expect("tasks")
        .iter()
        .flat_map(|column| column["items"].as_array().expect("items"))
        .collect();
    for item in items {
        let notes = item["notes"].as_str().expect("notes");
        if item["type"] == "script" {
            assert_eq!(notes, format!("Craft script using idea \"{title}\""));
        } else {
            assert!(!notes.contains("Craft script"));
        }
    }
}

#[test]
fn out_of_range_selection_fails() {
    let env = CliTestEnv::new();
    for choice in ["0", "7"] {
        let output = run_bin(&env, &["--select", choice]);
        assert!(!output.status.success(), "--select {choice} should fail");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("select"), "unexpected stderr: {stderr}");
    }
}

#[test]
fn export_writes_json_file() {
    let env = CliTestEnv::new();
    let out_dir = env.work.join("exports");
    let out_arg = out_dir.to_string_lossy().into_owned();
    let args = ["--export", "--seed", "1", "--out", out_arg.as_str()];

    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let path = out_dir.join("daily-shorts-lab-shorts-automation.json");
    assert!(path.exists(), "export should exist at {}", path.display());
    let plan: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read export")).expect("valid JSON");
    assert_eq!(plan["profile"]["channelName"], "Daily Shorts Lab");
    assert!(String::from_utf8_lossy(&output.stdout).contains("Exported plan to"));
}

#[test]
fn config_and_profile_files_are_honoured() {
    let env = CliTestEnv::new();
    env.write_config(
        r#"
[profile]
channelName = "Budget Bites"
niche = "cheap dinners"

[planner]
owner = "Sam"
seed = 9
"#,
    );

    let plan = json_plan(&env, &["--format", "json"]);
    assert_eq!(plan["profile"]["channelName"], "Budget Bites");
    assert_eq!(plan["tasks"][1]["items"][0]["owner"], "Sam");

    let profile = env.write_file(
        "profile.toml",
        "channelName = \"Trail Notes\"\nniche = \"hiking\"\nkeywords = []\n",
    );
    let profile_arg = profile.to_string_lossy().into_owned();
    let plan = json_plan(&env, &["--format", "json", "--profile", profile_arg.as_str()]);
    assert_eq!(plan["profile"]["channelName"], "Trail Notes");
    // Keywordless profiles draw from the niche
    assert_eq!(plan["schedule"][0]["hashtags"][2], "#hiking");
}

#[test]
fn markdown_brief_renders() {
    let env = CliTestEnv::new();
    let args = ["--format", "md", "--seed", "2"];
    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("# Daily Shorts Lab: "));
    assert!(stdout.contains("## Schedule"));
}

#[test]
fn broken_config_is_reported() {
    let env = CliTestEnv::new();
    env.write_config("[planner\nseed = 1");

    let output = run_bin(&env, &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load configuration"), "{stderr}");
}

#[test]
fn run_writes_log_file_to_state_dir() {
    let env = CliTestEnv::new();
    let args = ["--seed", "4"];
    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    assert!(
        has_log_file(&env.xdg_state.join("shortsmith")),
        "expected a shortsmith.log* file under {}",
        env.xdg_state.display()
    );
}

fn has_log_file(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .any(|entry| entry.file_name().to_string_lossy().starts_with("shortsmith.log."))
        })
        .unwrap_or(false)
}
