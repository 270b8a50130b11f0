//! Run parameters that can be tuned from environment variables.
use std::str::FromStr;

use thiserror::Error;

use crate::engine::{KnapsackDpEngine, MipEngine, SolverEngine};
use crate::output::DEFAULT_OUTPUT_NAME;

pub static ENGINE: EnvParam = EnvParam::new("FLATOPT_ENGINE", "mip");
pub static OUTPUT: EnvParam = EnvParam::new("FLATOPT_OUTPUT", DEFAULT_OUTPUT_NAME);

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid value {value:?} for {name}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
}

/// An environment variable with a default, read on every access.
pub struct EnvParam {
    env: &'static str,
    default: &'static str,
}

impl EnvParam {
    pub const fn new(env: &'static str, default: &'static str) -> EnvParam {
        EnvParam { env, default }
    }

    pub fn name(&self) -> &'static str {
        self.env
    }

    pub fn raw(&self) -> String {
        std::env::var(self.env).unwrap_or_else(|_| self.default.to_string())
    }

    pub fn parse<T: FromStr>(&self) -> Result<T, ConfigError> {
        let raw = self.raw();
        raw.parse::<T>().map_err(|_| ConfigError {
            name: self.env,
            value: raw,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineKind {
    Mip,
    Dp,
}

impl EngineKind {
    pub fn engine(&self) -> Box<dyn SolverEngine> {
        match self {
            EngineKind::Mip => Box::new(MipEngine::new()),
            EngineKind::Dp => Box::new(KnapsackDpEngine::new()),
        }
    }
}

impl FromStr for EngineKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mip" => Ok(EngineKind::Mip),
            "dp" => Ok(EngineKind::Dp),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub engine: EngineKind,
    /// File name of the result, written next to the input file.
    pub output_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            engine: EngineKind::Mip,
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Settings, ConfigError> {
        Settings::from_params(&ENGINE, &OUTPUT)
    }

    /// The output name must be a bare file name.
    fn from_params(engine: &EnvParam, output: &EnvParam) -> Result<Settings, ConfigError> {
        let output_name = output.raw();
        if output_name.is_empty() || output_name.contains(|c: char| c == '/' || c == '\\') {
            return Err(ConfigError {
                name: output.name(),
                value: output_name,
            });
        }
        Ok(Settings {
            engine: engine.parse()?,
            output_name,
        })
    }
}
