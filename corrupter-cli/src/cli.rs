use std::path::PathBuf;

use clap::Parser;

use data_error::CorrupterError;
use fs_corrupt::{ConsoleProgress, Corrupter, FastRandom, Target};

use crate::error::AppError;

#[derive(Parser, Debug)]
#[clap(name = "corrupter")]
#[clap(about = "Corrupt any file with random data.", long_about = None)]
pub struct Cli {
    #[clap(short, long, value_parser, help = "Input file name or path")]
    pub file: PathBuf,

    #[clap(short, long, value_parser, help = "Output file name or path")]
    pub out: Option<PathBuf>,

    #[clap(
        short,
        long,
        default_value_t = 1000,
        help = "Insert 1 random byte per N bytes"
    )]
    pub ratio: i64,

    #[clap(
        short = 'p',
        long,
        help = "[WARNING] makes all changes into input"
    )]
    pub inplace: bool,
}

impl Cli {
    pub fn run(&self) -> Result<(), AppError> {
        if self.ratio < 1 {
            return Err(CorrupterError::Config(format!(
                "ratio must be a positive integer, got {}",
                self.ratio
            ))
            .into());
        }

        let mut target = if self.inplace {
            Target::in_place(&self.file)?
        } else {
            let out = self.out.as_ref().ok_or_else(|| {
                CorrupterError::Config(
                    "when --inplace is false, --out should be specified"
                        .to_owned(),
                )
            })?;
            Target::separate(&self.file, out)?
        };

        let mut corrupter = Corrupter::new(
            self.ratio as u64,
            FastRandom::new(),
            ConsoleProgress,
        )?;
        let summary = corrupter.run(&mut target)?;

        log::info!(
            "issued {} of {} corrupting writes ({} beyond end of file)",
            summary.written,
            summary.candidates,
            summary.skipped
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_flags() {
        let cli = Cli::try_parse_from([
            "corrupter", "-f", "in.bin", "-o", "out.bin", "-r", "250",
        ])
        .unwrap();

        assert_eq!(cli.file, PathBuf::from("in.bin"));
        assert_eq!(cli.out, Some(PathBuf::from("out.bin")));
        assert_eq!(cli.ratio, 250);
        assert!(!cli.inplace);
    }

    #[test]
    fn ratio_defaults_to_1000() {
        let cli =
            Cli::try_parse_from(["corrupter", "--file", "in.bin", "--inplace"])
                .unwrap();

        assert_eq!(cli.ratio, 1000);
        assert!(cli.inplace);
        assert_eq!(cli.out, None);
    }

    #[test]
    fn input_file_flag_is_required() {
        let result = Cli::try_parse_from(["corrupter", "-o", "out.bin"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_out_without_inplace_is_a_configuration_error() {
        let cli =
            Cli::try_parse_from(["corrupter", "-f", "in.bin"]).unwrap();

        let err = cli.run().unwrap_err();
        assert!(err
            .to_string()
            .contains("--out should be specified"));
    }

    #[test]
    fn missing_input_file_surfaces_as_not_found() {
        let cli = Cli::try_parse_from([
            "corrupter",
            "-f",
            "definitely-not-here.bin",
            "-o",
            "out.bin",
        ])
        .unwrap();

        let err = cli.run().unwrap_err();
        assert!(matches!(
            err,
            AppError::Corrupter(CorrupterError::NotFound(_))
        ));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn non_positive_ratio_is_a_configuration_error() {
        let cli =
            Cli::try_parse_from(["corrupter", "-f", "in.bin", "-r", "0", "-p"])
                .unwrap();

        let err = cli.run().unwrap_err();
        assert!(err.to_string().contains("positive integer"));
    }
}
