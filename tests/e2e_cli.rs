mod support;

use std::fs;

use tempfile::tempdir;

use support::{describe, run_resprobe, write_proc_fixture};

fn proc_root() -> Result<(tempfile::TempDir, String), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let root = dir.path().join("proc");
    write_proc_fixture(&root)?;
    Ok((dir, root.to_string_lossy().into_owned()))
}

#[test]
fn e2e_fixture_session_reports_every_series() -> Result<(), String> {
    let (_dir, root) = proc_root()?;
    let output = run_resprobe([
        "--proc-root",
        root.as_str(),
        "--interval",
        "100ms",
        "-t",
        "650ms",
        "-p",
        "run=e2e",
        "--no-color",
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.contains("Test params: {run=e2e}") {
        return Err(format!("Missing header\n{}", describe(&output)));
    }
    for name in [
        "cpu-seconds",
        "active-memory-mibs",
        "receive-bytes",
        "transmit-bytes",
    ] {
        if !stdout.contains(&format!("{}: samples=", name)) {
            return Err(format!("Missing summary for {}\n{}", name, describe(&output)));
        }
    }
    if stdout.contains("WARNING: No metrics") {
        return Err(format!("Unexpected warning\n{}", describe(&output)));
    }
    if !stdout.contains("active-memory-mibs: samples=") || !stdout.contains("last=2000.00") {
        return Err(format!("Unexpected memory summary\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_exports_json_and_influx() -> Result<(), String> {
    let (dir, root) = proc_root()?;
    let json_path = dir.path().join("session.json");
    let influx_path = dir.path().join("live.lp");
    let output = run_resprobe([
        "--proc-root".to_owned(),
        root,
        "--interval".to_owned(),
        "100ms".to_owned(),
        "-t".to_owned(),
        "450ms".to_owned(),
        "--export-json".to_owned(),
        json_path.to_string_lossy().into_owned(),
        "--influx".to_owned(),
        influx_path.to_string_lossy().into_owned(),
        "--no-color".to_owned(),
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let json = fs::read_to_string(&json_path).map_err(|err| format!("read json failed: {}", err))?;
    let parsed: serde_json::Value =
        serde_json::from_str(&json).map_err(|err| format!("parse json failed: {}", err))?;
    if parsed["metrics"]["active-memory-mibs"]["series"]
        .as_array()
        .is_none_or(Vec::is_empty)
    {
        return Err(format!("Expected memory series in export: {}", json));
    }

    let influx =
        fs::read_to_string(&influx_path).map_err(|err| format!("read influx failed: {}", err))?;
    if !influx
        .lines()
        .any(|line| line.starts_with("resprobe,metric=active-memory-mibs value=2097152000 "))
    {
        return Err(format!("Expected raw memory readings: {}", influx));
    }
    Ok(())
}

#[test]
fn e2e_config_file_supplies_params() -> Result<(), String> {
    let (dir, root) = proc_root()?;
    let config_path = dir.path().join("sampler.toml");
    let config = format!(
        "interval = \"100ms\"\nduration = \"350ms\"\nproc_root = \"{}\"\n\n[params]\nsource = \"config\"\n",
        root.replace('\\', "\\\\")
    );
    fs::write(&config_path, config).map_err(|err| format!("write config failed: {}", err))?;

    let output = run_resprobe([
        "-c".to_owned(),
        config_path.to_string_lossy().into_owned(),
        "-p".to_owned(),
        "run=cli".to_owned(),
        "--no-color".to_owned(),
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.contains("Test params: {run=cli, source=config}") {
        return Err(format!("Unexpected header\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_missing_proc_root_fails() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let missing = dir.path().join("nope");
    let output = run_resprobe([
        "--proc-root".to_owned(),
        missing.to_string_lossy().into_owned(),
        "-t".to_owned(),
        "1s".to_owned(),
    ])?;
    if output.status.success() {
        return Err(format!("Expected failure\n{}", describe(&output)));
    }
    Ok(())
}

#[cfg(unix)]
#[test]
fn e2e_failing_workload_stops_sampling_and_fails() -> Result<(), String> {
    let (_dir, root) = proc_root()?;
    let output = run_resprobe([
        "--proc-root",
        root.as_str(),
        "--no-color",
        "--",
        "sh",
        "-c",
        "exit 3",
    ])?;
    if output.status.success() {
        return Err(format!("Expected workload failure\n{}", describe(&output)));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.contains("Test params: {}") {
        return Err(format!("Report must still be emitted\n{}", describe(&output)));
    }
    if !stdout.contains("WARNING: No metrics for cpu-seconds!") {
        return Err(format!("Expected empty-series warning\n{}", describe(&output)));
    }
    Ok(())
}

#[cfg(unix)]
#[test]
fn e2e_workload_exit_ends_session() -> Result<(), String> {
    let (_dir, root) = proc_root()?;
    let output = run_resprobe([
        "--proc-root",
        root.as_str(),
        "--interval",
        "100ms",
        "--no-color",
        "--",
        "sleep",
        "1",
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.contains("active-memory-mibs: samples=") {
        return Err(format!("Expected memory samples\n{}", describe(&output)));
    }
    Ok(())
}
