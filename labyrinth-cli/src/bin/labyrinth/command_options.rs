//! Command line option parsing.

use std::str::FromStr;

use clap::Parser;

use labyrinth::math::{CellCoordinate, CellPoint, CellSize};
use labyrinth_cli::logging::LoggingArgs;

/// Generates a perfect maze and prints it as text.
#[derive(Clone, Debug, Parser)]
#[command(
    name = "labyrinth", version,
    help_template = "\
{name} {version}
{about-with-newline}
{usage-heading}
    {usage}

{all-args}{after-help}",
)]
pub(crate) struct LabyrinthArgs {
    /// Number of cells from west to east.
    #[arg(long = "width", default_value_t = 10, allow_negative_numbers = true)]
    pub(crate) width: CellCoordinate,

    /// Number of cells from south to north.
    #[arg(long = "height", default_value_t = 10, allow_negative_numbers = true)]
    pub(crate) height: CellCoordinate,

    /// Cell to start carving from. (0,0) is the southwest corner.
    #[arg(
        long = "start",
        value_name = "X,Y",
        default_value = "0,0",
        allow_hyphen_values = true
    )]
    pub(crate) start: PointArg,

    /// Seed value for the random choices made while carving.
    ///
    /// May be an integer between 0 and 18446744073709551615 (2⁶⁴ - 1).
    ///
    /// If not specified, a randomly chosen seed will be used.
    #[arg(long = "seed")]
    pub(crate) seed: Option<u64>,

    /// Cell to mark with `@` in the output.
    #[arg(long = "highlight", value_name = "X,Y", allow_hyphen_values = true)]
    pub(crate) highlight: Option<PointArg>,

    #[command(flatten)]
    pub(crate) logging: LoggingArgs,
}

impl LabyrinthArgs {
    pub(crate) fn size(&self) -> CellSize {
        CellSize::new(self.width, self.height)
    }
}

/// A cell coordinate written as two integers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct PointArg(pub CellPoint);

impl FromStr for PointArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coords: [CellCoordinate; 2] = s
            .split(&[',', ';', ' '][..])
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<CellCoordinate>()
                    .map_err(|_| format!("{s:?} not an integer"))
            })
            .collect::<Result<Vec<CellCoordinate>, String>>()?
            .try_into()
            .map_err(|_| String::from("must be two integers, like \"3,4\""))?;
        Ok(PointArg(CellPoint::from(coords)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> clap::error::Result<LabyrinthArgs> {
        LabyrinthArgs::try_parse_from(std::iter::once("labyrinth").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.size(), CellSize::new(10, 10));
        assert_eq!(args.start, PointArg(CellPoint::new(0, 0)));
        assert_eq!(args.seed, None);
        assert_eq!(args.highlight, None);
        assert!(!args.logging.verbose);
    }

    #[test]
    fn all_options() {
        let args = parse(&[
            "--width",
            "4",
            "--height",
            "7",
            "--start",
            "3,6",
            "--seed",
            "99",
            "--highlight",
            "1,2",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.size(), CellSize::new(4, 7));
        assert_eq!(args.start, PointArg(CellPoint::new(3, 6)));
        assert_eq!(args.seed, Some(99));
        assert_eq!(args.highlight, Some(PointArg(CellPoint::new(1, 2))));
        assert!(args.logging.verbose);
    }

    /// Out-of-range values are left for the maze generator to reject, with its own message.
    #[test]
    fn negative_values_are_parsed() {
        let args = parse(&["--width", "-2", "--start", "-1,0"]).unwrap();
        assert_eq!(args.width, -2);
        assert_eq!(args.start, PointArg(CellPoint::new(-1, 0)));
    }

    #[test]
    fn point_syntax() {
        assert_eq!("5, 6".parse(), Ok(PointArg(CellPoint::new(5, 6))));
        assert_eq!("5;6".parse(), Ok(PointArg(CellPoint::new(5, 6))));
        assert_eq!(
            "5".parse::<PointArg>(),
            Err(String::from("must be two integers, like \"3,4\""))
        );
        assert_eq!(
            "1,2,3".parse::<PointArg>(),
            Err(String::from("must be two integers, like \"3,4\""))
        );
        assert_eq!(
            "a,2".parse::<PointArg>(),
            Err(String::from("\"a\" not an integer"))
        );
    }

    #[test]
    fn invalid_start() {
        let e = parse(&["--start", "x"]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::ValueValidation);
    }
}
