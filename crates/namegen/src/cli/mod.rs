//! Command-line front end for the name generator.
//!
//! The `namegen` binary delegates to this module for argument parsing,
//! profile resolution, and output, so the CLI behaviour can be exercised in
//! tests without spawning a process.

mod error;

use std::ffi::OsString;
use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{DEFAULT_REALISM, Gender, ProfileConfig};
use crate::profile::{INFO_NOTES, NameProfile};
use crate::random::RANDOM_SEED;
use crate::registry::{ProfileRegistry, normalize_profile_name};
use crate::settings::NamegenSettings;

pub use error::CliError;

/// Header printed before the development-mode configuration dump.
pub const DEV_MODE_HEADER: &str = "Dev Mode Active - Config:";

/// `namegen` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "namegen",
    about = "Generate culture-flavoured personal names from curated lists and syllable grammars",
    version
)]
pub struct CliArgs {
    /// Profile to generate with. Unknown profiles fall back to the configured
    /// fallback.
    #[arg(long = "mode", visible_alias = "lang", value_name = "profile")]
    pub mode: Option<String>,
    /// Gender of the generated names: male, female, or neutral.
    #[arg(long, value_name = "gender", default_value_t = Gender::Neutral)]
    pub gender: Gender,
    /// Realism from 0 (invented) to 100 (real-looking); out-of-range values
    /// are clamped.
    #[arg(
        long,
        value_name = "n",
        default_value_t = i64::from(DEFAULT_REALISM),
        allow_negative_numbers = true
    )]
    pub realism: i64,
    /// Surname rule hint, such as a culture key.
    #[arg(long, value_name = "key")]
    pub family: Option<String>,
    /// Seed for reproducible output; 0 picks a random seed.
    #[arg(short = 's', long, value_name = "seed", default_value_t = RANDOM_SEED)]
    pub seed: u64,
    /// Number of names to print; values below one print a single name.
    #[arg(
        short = 'c',
        long,
        value_name = "n",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    pub count: i64,
    /// Include a surname.
    #[arg(short = 'l', long = "last")]
    pub last: bool,
    /// Print the surname first.
    #[arg(short = 'r', long)]
    pub reverse: bool,
    /// Dump the request configuration before the names.
    #[arg(short = 'd', long = "dev")]
    pub dev: bool,
    /// List the registered profiles and exit.
    #[arg(long)]
    pub list: bool,
}

impl CliArgs {
    /// Builds the profile configuration described by the flags.
    ///
    /// # Example
    ///
    /// ```
    /// use namegen::cli::parse_args;
    ///
    /// let args = parse_args(["namegen", "--realism", "-5", "-c", "0", "-l"]).expect("parse");
    /// let config = args.to_config();
    ///
    /// assert_eq!(config.realism(), 0);
    /// assert_eq!(config.count(), 1);
    /// assert!(config.include_last());
    /// ```
    #[must_use]
    pub fn to_config(&self) -> ProfileConfig {
        ProfileConfig::new()
            .with_count(self.count)
            .with_seed(self.seed)
            .with_realism(self.realism)
            .with_gender(self.gender)
            .with_family(self.family.clone())
            .with_include_last(self.last)
            .with_reverse(self.reverse)
            .with_dev_mode(self.dev)
    }
}

/// Parses command-line arguments, including the program name.
///
/// # Errors
///
/// Returns [`clap::Error`] for unknown flags, invalid values, or when help or
/// version output was requested.
pub fn parse_args<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::try_parse_from(args)
}

/// A profile chosen for a request.
#[derive(Clone)]
pub struct ResolvedProfile {
    /// Normalised name of the profile in use.
    pub name: String,
    /// The generator.
    pub profile: Arc<dyn NameProfile>,
    /// `true` when the requested profile was missing and the fallback is used.
    pub fell_back: bool,
}

/// Looks up `requested`, falling back to `fallback` when it is unknown.
///
/// # Errors
///
/// Returns [`CliError::FallbackUnavailable`] when neither profile is
/// registered.
pub fn resolve_profile(
    registry: &ProfileRegistry,
    requested: &str,
    fallback: &str,
) -> Result<ResolvedProfile, CliError> {
    match registry.get(requested) {
        Ok(profile) => Ok(ResolvedProfile {
            name: normalize_profile_name(requested),
            profile,
            fell_back: false,
        }),
        Err(err) => {
            warn!(error = %err, fallback, "profile not found; using fallback");
            let profile = registry
                .get(fallback)
                .map_err(|_| CliError::FallbackUnavailable {
                    requested: normalize_profile_name(requested),
                    fallback: normalize_profile_name(fallback),
                })?;
            Ok(ResolvedProfile {
                name: normalize_profile_name(fallback),
                profile,
                fell_back: true,
            })
        }
    }
}

/// Runs one CLI invocation, writing names (or the profile list) to `out`.
///
/// # Errors
///
/// Returns [`CliError`] when no usable profile exists, generation fails, or
/// `out` cannot be written.
///
/// # Example
///
/// ```
/// use namegen::ProfileRegistry;
/// use namegen::cli::{parse_args, run};
/// use namegen::settings::NamegenSettings;
///
/// let registry = ProfileRegistry::with_builtin_profiles();
/// let args = parse_args(["namegen", "--mode", "nordic", "-s", "7", "-c", "3", "-l"])
///     .expect("parse");
/// let mut out = Vec::new();
///
/// run(&args, &registry, &NamegenSettings::default(), &mut out).expect("run");
///
/// let text = String::from_utf8(out).expect("utf-8");
/// assert_eq!(text.lines().count(), 3);
/// ```
pub fn run<W: Write>(
    args: &CliArgs,
    registry: &ProfileRegistry,
    settings: &NamegenSettings,
    out: &mut W,
) -> Result<(), CliError> {
    if args.list {
        return write_profile_list(registry, out);
    }

    let config = args.to_config();
    let requested = args
        .mode
        .as_deref()
        .unwrap_or_else(|| settings.default_profile());

    if config.dev_mode() {
        write_dev_dump(requested, &config, out)?;
    }

    let resolved = resolve_profile(registry, requested, settings.fallback_profile())?;
    debug!(
        profile = %resolved.name,
        fell_back = resolved.fell_back,
        count = config.count(),
        "generating names"
    );

    for index in 0..config.count() {
        let request = config
            .clone()
            .with_seed(seed_for_index(config.seed(), index));
        let name = resolved.profile.generate(&request)?;
        writeln!(out, "{}", name.display(config.reverse()))?;
    }
    Ok(())
}

/// Derives the seed for the `index`-th name of a run.
///
/// A fixed seed yields a reproducible sequence of different names rather than
/// the same name repeated; a random seed stays random.
fn seed_for_index(base: u64, index: usize) -> u64 {
    if base == RANDOM_SEED {
        return RANDOM_SEED;
    }
    let offset = u64::try_from(index).unwrap_or(u64::MAX);
    match base.wrapping_add(offset) {
        RANDOM_SEED => 1,
        seed => seed,
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DevDump<'a> {
    mode: &'a str,
    #[serde(flatten)]
    config: &'a ProfileConfig,
}

fn write_dev_dump<W: Write>(
    mode: &str,
    config: &ProfileConfig,
    out: &mut W,
) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(&DevDump { mode, config })?;
    writeln!(out, "{DEV_MODE_HEADER}")?;
    writeln!(out, "{json}")?;
    Ok(())
}

fn write_profile_list<W: Write>(registry: &ProfileRegistry, out: &mut W) -> Result<(), CliError> {
    for name in registry.list() {
        let notes = registry
            .info(&name)
            .ok()
            .and_then(|mut info| info.remove(INFO_NOTES))
            .unwrap_or_default();
        if notes.is_empty() {
            writeln!(out, "{name}")?;
        } else {
            writeln!(out, "{name}\t{notes}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
