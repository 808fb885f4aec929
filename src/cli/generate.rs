//! Headless password generation.

use crate::cli::common::{CliError, CliResult};
use crate::generator::{GeneratedPassword, PasswordGenerator};
use crate::models::{CharacterClass, CharacterPool, GenerationOptions};
use crate::validation::{validate_classes, validate_length};
use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::debug;

/// Most passwords a single invocation may print.
pub const MAX_COUNT: usize = 100;

/// Character class names accepted by `--classes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClassArg {
    /// a-z
    Lower,
    /// A-Z
    Upper,
    /// 0-9
    Digits,
    /// !@#$%^&*()_+
    Symbols,
}

impl From<ClassArg> for CharacterClass {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::Lower => Self::Lowercase,
            ClassArg::Upper => Self::Uppercase,
            ClassArg::Digits => Self::Digits,
            ClassArg::Symbols => Self::Symbols,
        }
    }
}

/// Generate passwords without opening the UI
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Password length (4-16)
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub length: String,

    /// Character sets to draw from
    #[arg(
        short,
        long,
        value_enum,
        value_delimiter = ',',
        num_args = 0..,
        default_values_t = [ClassArg::Lower]
    )]
    pub classes: Vec<ClassArg>,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output (not for real passwords)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct GenerateOutput {
    length: usize,
    classes: Vec<CharacterClass>,
    pool_size: usize,
    entropy_bits: f64,
    passwords: Vec<String>,
}

impl GenerateArgs {
    /// Validates the arguments into generation options.
    pub fn options(&self) -> CliResult<GenerationOptions> {
        let length = validate_length(&self.length).map_err(|e| CliError::validation(e.to_string()))?;
        let classes: Vec<CharacterClass> = self.classes.iter().map(|c| (*c).into()).collect();
        let options = GenerationOptions::with_classes(length, &classes);
        validate_classes(&options).map_err(|e| CliError::validation(e.to_string()))?;
        Ok(options)
    }

    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        if self.count == 0 || self.count > MAX_COUNT {
            return Err(CliError::validation(format!(
                "Count must be between 1 and {MAX_COUNT}"
            )));
        }

        let options = self.options()?;
        let passwords = match self.seed {
            Some(seed) => run(&mut PasswordGenerator::seeded(seed), &options, self.count)?,
            None => run(&mut PasswordGenerator::new(), &options, self.count)?,
        };
        debug!(count = passwords.len(), seeded = self.seed.is_some(), "generated passwords");

        let pool = CharacterPool::from_options(&options);
        if self.json {
            let output = GenerateOutput {
                length: options.length,
                classes: options.enabled_classes(),
                pool_size: pool.len(),
                entropy_bits: pool.entropy_bits(options.length),
                passwords: passwords.into_iter().map(GeneratedPassword::into_string).collect(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for password in passwords {
                println!("{}", password.as_str());
            }
        }

        Ok(())
    }
}

fn run<R: rand::Rng>(
    generator: &mut PasswordGenerator<R>,
    options: &GenerationOptions,
    count: usize,
) -> CliResult<Vec<GeneratedPassword>> {
    (0..count)
        .map(|_| {
            generator
                .generate(options)
                .map_err(|e| CliError::validation(e.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::ExitCode;

    fn args(length: &str, classes: Vec<ClassArg>) -> GenerateArgs {
        GenerateArgs {
            length: length.to_string(),
            classes,
            count: 1,
            seed: None,
            json: false,
        }
    }

    #[test]
    fn test_options_from_args() {
        let options = args("8", vec![ClassArg::Lower, ClassArg::Digits])
            .options()
            .unwrap();
        assert_eq!(options.length, 8);
        assert!(options.include_lowercase);
        assert!(options.include_digits);
        assert!(!options.include_uppercase);
    }

    #[test]
    fn test_length_errors_use_form_messages() {
        let err = args("17", vec![ClassArg::Lower]).options().unwrap_err();
        assert_eq!(err.exit_code, ExitCode::ValidationError);
        assert_eq!(err.message, "Password should not exceed 16 characters");
    }

    #[test]
    fn test_empty_class_list_rejected() {
        let err = args("5", vec![]).options().unwrap_err();
        assert_eq!(err.message, "Select at least one character set");
    }

    #[test]
    fn test_count_bounds() {
        let mut a = args("8", vec![ClassArg::Lower]);
        a.count = 0;
        assert!(a.execute().is_err());
        a.count = MAX_COUNT + 1;
        assert!(a.execute().is_err());
    }
}
