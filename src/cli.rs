// SPDX-License-Identifier: MPL-2.0
//! Command-line parsing.

use crate::app::Flags;
use std::ffi::OsString;

pub const HELP: &str = "\
Sprite Cycler - sprite sheet animation demo

USAGE:
    sprite_cycler [OPTIONS]

OPTIONS:
    --lang <LOCALE>        Interface language (e.g. en-US, es)
    --config-dir <DIR>     Directory holding settings.toml
    --headless             Run the character animation without a window
    --ticks <N>            Headless: number of frames to print [default: 16]
    --frames <N>           Headless: frame count override
    --fps <F>              Headless: frames per second override
    -h, --help             Print this help
";

/// Options of a headless run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeadlessArgs {
    pub ticks: Option<u32>,
    pub frames: Option<i64>,
    pub fps: Option<f64>,
}

/// What the binary was asked to do.
#[derive(Debug)]
pub enum Command {
    Help,
    Gui(Flags),
    Headless { flags: Flags, args: HeadlessArgs },
}

/// Parses the process arguments.
pub fn parse_env() -> Result<Command, pico_args::Error> {
    parse(pico_args::Arguments::from_env())
}

/// Parses an explicit argument list, without the program name.
pub fn parse_from(args: Vec<OsString>) -> Result<Command, pico_args::Error> {
    parse(pico_args::Arguments::from_vec(args))
}

fn parse(mut args: pico_args::Arguments) -> Result<Command, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };
    let headless = args.contains("--headless");
    let headless_args = HeadlessArgs {
        ticks: args.opt_value_from_str("--ticks")?,
        frames: args.opt_value_from_str("--frames")?,
        fps: args.opt_value_from_str("--fps")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {:?}", rest),
        });
    }

    if headless {
        Ok(Command::Headless {
            flags,
            args: headless_args,
        })
    } else {
        if headless_args != HeadlessArgs::default() {
            log::warn!("--ticks, --frames and --fps only apply with --headless");
        }
        Ok(Command::Gui(flags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn no_arguments_launches_gui() {
        match parse_from(args(&[])).expect("valid arguments") {
            Command::Gui(flags) => {
                assert!(flags.lang.is_none());
                assert!(flags.config_dir.is_none());
            }
            other => panic!("expected Gui, got {other:?}"),
        }
    }

    #[test]
    fn help_wins_over_everything() {
        assert!(matches!(
            parse_from(args(&["--lang", "es", "--help"])),
            Ok(Command::Help)
        ));
    }

    #[test]
    fn headless_options_are_parsed() {
        let parsed = parse_from(args(&[
            "--headless",
            "--ticks",
            "4",
            "--fps",
            "12.5",
            "--config-dir",
            "/tmp/sc",
        ]))
        .expect("valid arguments");
        match parsed {
            Command::Headless { flags, args } => {
                assert_eq!(flags.config_dir.as_deref(), Some("/tmp/sc"));
                assert_eq!(args.ticks, Some(4));
                assert_eq!(args.fps, Some(12.5));
                assert_eq!(args.frames, None);
            }
            other => panic!("expected Headless, got {other:?}"),
        }
    }

    #[test]
    fn zero_frames_parse_and_are_validated_later() {
        match parse_from(args(&["--headless", "--frames", "0"])) {
            Ok(Command::Headless { args, .. }) => assert_eq!(args.frames, Some(0)),
            other => panic!("expected Headless, got {other:?}"),
        }
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        assert!(parse_from(args(&["--bogus"])).is_err());
    }

    #[test]
    fn malformed_number_is_rejected() {
        assert!(parse_from(args(&["--headless", "--ticks", "many"])).is_err());
    }
}
