//! Name generator CLI.
//!
//! This binary wires settings, logging, and the built-in profile registry,
//! then delegates to `namegen::cli` so the CLI behaviour stays testable
//! without spawning a process.

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use namegen::ProfileRegistry;
use namegen::cli::{parse_args, run};
use namegen::settings::NamegenSettings;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> ExitCode {
    let args = parse_args(env::args_os()).unwrap_or_else(|err| err.exit());

    let loaded = NamegenSettings::load_from_iter([OsString::from("namegen")]);
    init_tracing(loaded.as_ref().is_ok_and(|values| values.json_logs));
    let settings = loaded.unwrap_or_else(|err| {
        warn!(error = %err, "settings failed to load; using defaults");
        NamegenSettings::default()
    });

    let registry = ProfileRegistry::with_builtin_profiles();
    let mut out = io::stdout().lock();
    match run(&args, &registry, &settings, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(err) = result {
        if let Err(write_err) = writeln!(io::stderr().lock(), "tracing init failed: {err}") {
            drop(write_err);
        }
    }
}
