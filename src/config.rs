//! Command-line configuration for the `flatras` binary.

use std::fmt;
use std::path::PathBuf;

use flatras::colors::{self, Color};
use flatras::math::Vec3;
use flatras::{RenderSettings, RenderStrategy};

pub const DEFAULT_WIDTH: u32 = 500;
pub const DEFAULT_HEIGHT: u32 = 500;
pub const DEFAULT_INPUT: &str = "face.obj";
pub const DEFAULT_OUTPUT: &str = "output.tga";

pub const USAGE: &str = "\
usage: flatras [--wireframe|--filled] [--size WxH] [--color R,G,B]
               [--scale S] [--offset X,Y,Z] [INPUT] [OUTPUT]

  --scale   uniform model scale after the offset (default: 0.9)
  --offset  model translation before scaling (default: 1,1,0)

  INPUT    Wavefront OBJ mesh (default: face.obj)
  OUTPUT   image file, format from extension (default: output.tga)";

/// Everything one run of the binary needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub base_color: Color,
    pub strategy: RenderStrategy,
    pub settings: RenderSettings,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            base_color: colors::WHITE,
            strategy: RenderStrategy::default(),
            settings: RenderSettings::default(),
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    HelpRequested,
    MissingValue(&'static str),
    InvalidSize(String),
    InvalidColor(String),
    InvalidScale(String),
    InvalidOffset(String),
    UnknownFlag(String),
    UnexpectedArgument(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HelpRequested => write!(f, "{USAGE}"),
            ConfigError::MissingValue(flag) => write!(f, "{flag} needs a value\n\n{USAGE}"),
            ConfigError::InvalidSize(s) => write!(f, "invalid size {s:?}, expected WxH"),
            ConfigError::InvalidColor(s) => write!(f, "invalid color {s:?}, expected R,G,B"),
            ConfigError::InvalidScale(s) => {
                write!(f, "invalid scale {s:?}, expected a positive number")
            }
            ConfigError::InvalidOffset(s) => write!(f, "invalid offset {s:?}, expected X,Y,Z"),
            ConfigError::UnknownFlag(s) => write!(f, "unknown flag {s}\n\n{USAGE}"),
            ConfigError::UnexpectedArgument(s) => {
                write!(f, "unexpected argument {s:?}\n\n{USAGE}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Parse arguments, not including the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut positional = Vec::new();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Err(ConfigError::HelpRequested),
                "--wireframe" => config.strategy = RenderStrategy::Wireframe,
                "--filled" => config.strategy = RenderStrategy::Filled,
                "--size" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--size"))?;
                    (config.width, config.height) = parse_size(&value)?;
                }
                "--color" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--color"))?;
                    config.base_color = parse_color(&value)?;
                }
                "--scale" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--scale"))?;
                    config.settings.transform.set_scale(parse_scale(&value)?);
                }
                "--offset" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--offset"))?;
                    config.settings.transform.set_offset(parse_offset(&value)?);
                }
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()))
                }
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        if let Some(input) = positional.next() {
            config.input = PathBuf::from(input);
        }
        if let Some(output) = positional.next() {
            config.output = PathBuf::from(output);
        }
        if let Some(extra) = positional.next() {
            return Err(ConfigError::UnexpectedArgument(extra));
        }

        Ok(config)
    }
}

fn parse_size(value: &str) -> Result<(u32, u32), ConfigError> {
    let invalid = || ConfigError::InvalidSize(value.to_string());
    let (w, h) = value.split_once(|c| c == 'x' || c == 'X').ok_or_else(invalid)?;
    let w: u32 = w.trim().parse().map_err(|_| invalid())?;
    let h: u32 = h.trim().parse().map_err(|_| invalid())?;
    if w == 0 || h == 0 {
        return Err(invalid());
    }
    Ok((w, h))
}

fn parse_color(value: &str) -> Result<Color, ConfigError> {
    let invalid = || ConfigError::InvalidColor(value.to_string());
    let channels = value
        .split(',')
        .map(|c| c.trim().parse::<u8>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;
    match channels[..] {
        [r, g, b] => Ok(Color::rgb(r, g, b)),
        [r, g, b, a] => Ok(Color::new(r, g, b, a)),
        _ => Err(invalid()),
    }
}

fn parse_scale(value: &str) -> Result<f32, ConfigError> {
    match value.trim().parse::<f32>() {
        Ok(scale) if scale.is_finite() && scale > 0.0 => Ok(scale),
        _ => Err(ConfigError::InvalidScale(value.to_string())),
    }
}

fn parse_offset(value: &str) -> Result<Vec3, ConfigError> {
    let invalid = || ConfigError::InvalidOffset(value.to_string());
    let parts = value
        .split(',')
        .map(|c| match c.trim().parse::<f32>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(invalid()),
        })
        .collect::<Result<Vec<_>, _>>()?;
    match parts[..] {
        [x, y, z] => Ok(Vec3::new(x, y, z)),
        _ => Err(invalid()),
    }
}
