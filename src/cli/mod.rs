pub mod parser;

use crate::commands::Bootstrapper;
use crate::config::Field;
use crate::result::Result;
use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser};
use parser::ArgumentResolver;

#[derive(Parser, Debug)]
#[command(name = "repo-bootstrap")]
#[command(about = "Create a GitHub repository from a template, clone it, link Turborepo remote cache and upload CI secrets")]
#[command(version)]
#[command(args_override_self = true)]
#[command(
    help_template = "{before-help}{name} v{version}\n\n{about-with-newline}\n{usage-heading} {usage}\n\n{all-args}{after-help}"
)]
pub struct Cli {
    #[arg(long, help = "Skip uploading TURBO_TOKEN / TURBO_TEAM as Actions secrets")]
    pub skip_secrets: bool,
}

impl Cli {
    /** Builds the clap command, adding one value flag per configuration field
     *
     * The value flags exist so `--help` documents them and unknown flags are
     * rejected. Their values are not read from clap: the argument resolver
     * applies its own precedence over raw argv.
     */
    pub fn command_with_fields() -> clap::Command {
        Field::ALL.iter().fold(Self::command(), |command, field| {
            let spec = field.spec();
            let help = match spec.default {
                Some(default) => format!(
                    "{} [env: {}] [default: {}]",
                    spec.label, spec.env_var, default
                ),
                None => format!("{} [env: {}]", spec.label, spec.env_var),
            };
            command.arg(
                Arg::new(spec.long)
                    .long(spec.long)
                    .value_name("VALUE")
                    .action(ArgAction::Set)
                    .allow_hyphen_values(true)
                    .help(help),
            )
        })
    }

    pub fn try_parse_from_env() -> std::result::Result<Self, clap::Error> {
        let matches = Self::command_with_fields().try_get_matches()?;
        Self::from_arg_matches(&matches)
    }

    pub async fn execute(self) -> Result<()> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut resolver = ArgumentResolver::new(&args, |key: &str| std::env::var(key).ok());
        let resolved = resolver.resolve_config(!self.skip_secrets);

        for notice in resolver.notices() {
            println!("{}", notice);
        }
        let config = resolved?;

        let base_dir = std::env::current_dir()?;
        Bootstrapper::new(&config, base_dir)?.run(&config).await
    }
}
