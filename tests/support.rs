use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const STAT: &str = "\
cpu  300 0 100 5000 10 0 5 2 0 0
cpu0 200 0 50 2500 5 0 3 1 0 0
cpu1 100 0 50 2500 5 0 2 1 0 0
intr 12345 0 0
";

const MEMINFO: &str = "\
MemTotal:       16384000 kB
Active:          2048000 kB
Inactive:        1024000 kB
";

const NET_DEV: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
    lo:     500       5    0    0    0     0          0         0      500       5    0    0    0     0       0          0
  eth0:    1000      10    0    0    0     0          0         0     2000      20    0    0    0     0       0          0
";

/// Write a minimal `/proc` tree with static counters under `root`.
///
/// # Errors
///
/// Returns an error if any fixture file cannot be written.
pub fn write_proc_fixture(root: &Path) -> Result<(), String> {
    fs::create_dir_all(root.join("net")).map_err(|err| format!("create net dir failed: {}", err))?;
    fs::write(root.join("stat"), STAT).map_err(|err| format!("write stat failed: {}", err))?;
    fs::write(root.join("meminfo"), MEMINFO)
        .map_err(|err| format!("write meminfo failed: {}", err))?;
    fs::write(root.join("net").join("dev"), NET_DEV)
        .map_err(|err| format!("write net/dev failed: {}", err))?;
    Ok(())
}

/// Run the `resprobe` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_resprobe<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = resprobe_bin()?;
    Command::new(bin)
        .args(args)
        .env("RESPROBE_LOG", "info")
        .output()
        .map_err(|err| format!("run resprobe failed: {}", err))
}

#[must_use]
pub fn describe(output: &Output) -> String {
    format!(
        "status: {}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

fn resprobe_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_resprobe").map_or_else(
        || Err("CARGO_BIN_EXE_resprobe missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
