//! Command-line dispatch.
//!
//! The argument grammar is a bare keyword followed by positional values, e.g.
//! `impose place out.png bg.png mark.png 200x200 100x100`, so there are no flags to parse.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use strum::{EnumString, IntoStaticStr, VariantArray};

use crate::{
    error::ImposeError,
    plan::{PlacePlan, WatermarkPlan},
};

pub const INVALID_COMMAND: &str = "Please enter a valid command.";
pub const HELP_SUGGESTION: &str = "Use the 'help' command for reference.";
pub const LEGACY_USAGE: &str = "The program takes five arguments. Use 'help' for reference.";

#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    Watermark,
    Place,
    Help,
}

impl Command {
    /// Names of the positional arguments following the keyword
    pub fn arg_names(&self) -> &'static [&'static str] {
        match self {
            Command::Watermark => &["background-name", "watermark-name"],
            Command::Place => &[
                "output-name",
                "background-name",
                "watermark-name",
                "watermark-dimensions",
                "location",
            ],
            Command::Help => &[],
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            Command::Watermark => {
                "Add a watermark over an image. Location for watermark is the bottom right."
            }
            Command::Place => "Places an image over the other.",
            Command::Help => "View this content.",
        }
    }

    /// Printed when the command is given too few arguments
    fn usage_hint(&self) -> String {
        let count = match self.arg_names().len() {
            2 => "two".to_owned(),
            5 => "five".to_owned(),
            n => n.to_string(),
        };
        let name: &'static str = self.into();
        format!("The {name} command takes {count} arguments. {HELP_SUGGESTION}")
    }
}

/// What a single run of the program is going to do
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Help,
    /// Arguments were missing or unrecognized; print this and exit cleanly
    Usage(String),
    Place(PlacePlan),
    Watermark(WatermarkPlan),
}

/// Interprets `args`, where `args[0]` is the path to our binary.
pub fn parse_args(args: Vec<OsString>) -> Result<Invocation, ImposeError> {
    let mut iter = args.into_iter().skip(1); // skip argv[0], path to our binary
    let Some(raw_command) = iter.next() else {
        return Ok(invalid_command());
    };
    let Some(command) = raw_command
        .to_str()
        .and_then(|s| Command::try_from(s).ok())
    else {
        return Ok(invalid_command());
    };

    let values: Vec<OsString> = iter.collect();
    // extra trailing arguments are ignored
    if values.len() < command.arg_names().len() {
        return Ok(Invocation::Usage(command.usage_hint()));
    }

    match command {
        Command::Help => Ok(Invocation::Help),
        Command::Watermark => Ok(Invocation::Watermark(WatermarkPlan::new(
            PathBuf::from(&values[0]),
            PathBuf::from(&values[1]),
        ))),
        Command::Place => Ok(Invocation::Place(place_plan(&values)?)),
    }
}

/// The older form without a command keyword: `<output> <background> <mark> <size> <location>`.
pub fn parse_legacy_args(args: Vec<OsString>) -> Result<Invocation, ImposeError> {
    let values: Vec<OsString> = args.into_iter().skip(1).collect();
    if values.first().map(OsString::as_os_str) == Some(OsStr::new("help")) {
        return Ok(Invocation::Help);
    }
    if values.len() < Command::Place.arg_names().len() {
        return Ok(Invocation::Usage(LEGACY_USAGE.to_owned()));
    }
    Ok(Invocation::Place(place_plan(&values)?))
}

fn place_plan(values: &[OsString]) -> Result<PlacePlan, ImposeError> {
    PlacePlan::new(
        PathBuf::from(&values[0]),
        PathBuf::from(&values[1]),
        PathBuf::from(&values[2]),
        &values[3],
        &values[4],
    )
}

fn invalid_command() -> Invocation {
    Invocation::Usage(format!("{INVALID_COMMAND} {HELP_SUGGESTION}"))
}
