use std::path::{Path, PathBuf};

use clap::Parser;
use eyre::WrapErr;
use newton_raphson::{NewtonSettings, Num};
use serde::{Deserialize, Serialize};

use crate::functions::SampleFunction;

pub const DEFAULT_INITIAL_GUESS: Num = 1.0;
pub const DEFAULT_RELATIVE_ERROR_THRESHOLD: Num = 1e-3;
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;

/// Finds a root of a sample function with the Newton-Raphson method.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct DemoArgs {
    /// JSON file with any of the parameters below; flags take precedence.
    #[clap(long, short)]
    pub params: Option<PathBuf>,

    #[clap(long, short, value_enum)]
    pub function: Option<SampleFunction>,

    #[clap(long, short, allow_negative_numbers = true)]
    pub initial_guess: Option<Num>,

    #[clap(long, short)]
    pub relative_error_threshold: Option<Num>,

    #[clap(long, short)]
    pub max_iterations: Option<usize>,
}

/// Contents of a parameter file. Every field may be left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParamsFile {
    pub function: Option<SampleFunction>,
    pub initial_guess: Option<Num>,
    pub relative_error_threshold: Option<Num>,
    pub max_iterations: Option<usize>,
}

impl ParamsFile {
    pub fn from_json(json: &str) -> eyre::Result<Self> {
        serde_json::from_str(json).wrap_err("Invalid parameter file")
    }

    pub fn load(path: &Path) -> eyre::Result<Self> {
        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Unable to read parameter file {}", path.display()))?;

        Self::from_json(&json).wrap_err_with(|| format!("While parsing {}", path.display()))
    }
}

/// Fully resolved demo parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoParams {
    pub function: SampleFunction,
    pub initial_guess: Num,
    pub settings: NewtonSettings,
}

impl Default for DemoParams {
    fn default() -> Self {
        Self {
            function: SampleFunction::default(),
            initial_guess: DEFAULT_INITIAL_GUESS,
            settings: NewtonSettings::new(DEFAULT_RELATIVE_ERROR_THRESHOLD, DEFAULT_MAX_ITERATIONS),
        }
    }
}

impl DemoParams {
    pub fn from_args(args: &DemoArgs) -> eyre::Result<Self> {
        let file = match &args.params {
            Some(path) => ParamsFile::load(path)?,
            None => ParamsFile::default(),
        };

        Ok(Self::merge(args, &file))
    }

    /// Command line flags override the file, the file overrides the defaults.
    pub fn merge(args: &DemoArgs, file: &ParamsFile) -> Self {
        let defaults = Self::default();

        Self {
            function: args.function.or(file.function).unwrap_or(defaults.function),
            initial_guess: args
                .initial_guess
                .or(file.initial_guess)
                .unwrap_or(defaults.initial_guess),
            settings: NewtonSettings::new(
                args.relative_error_threshold
                    .or(file.relative_error_threshold)
                    .unwrap_or(defaults.settings.relative_error_threshold),
                args.max_iterations
                    .or(file.max_iterations)
                    .unwrap_or(defaults.settings.max_iterations),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> DemoArgs {
        DemoArgs::parse_from(std::iter::once("newton-demo").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_without_flags_or_file() {
        let params = DemoParams::merge(&parse(&[]), &ParamsFile::default());

        assert_eq!(params, DemoParams::default());
        assert_eq!(params.function, SampleFunction::Ionic);
        assert_eq!(params.initial_guess, 1.0);
        assert_eq!(params.settings.relative_error_threshold, 1e-3);
        assert_eq!(params.settings.max_iterations, 1_000_000);
    }

    #[test]
    fn flags_override_file() {
        let file = ParamsFile::from_json(
            r#"{ "function": "exponential", "initial_guess": 3.0, "max_iterations": 10 }"#,
        )
        .unwrap();
        let args = parse(&["--initial-guess", "-0.5", "--relative-error-threshold", "1e-8"]);

        let params = DemoParams::merge(&args, &file);

        assert_eq!(params.function, SampleFunction::Exponential);
        assert_eq!(params.initial_guess, -0.5);
        assert_eq!(params.settings.relative_error_threshold, 1e-8);
        assert_eq!(params.settings.max_iterations, 10);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(ParamsFile::from_json(r#"{ "tolerance": 1.0 }"#).is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        let args = parse(&["--params", "/definitely/not/here.json"]);
        let err = DemoParams::from_args(&args).unwrap_err();

        assert!(err.to_string().contains("Unable to read parameter file"));
    }
}
