use crate::config::{CacheCredentials, Configuration, Field};
use crate::result::{BootstrapError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use smol_str::SmolStr;

static GITHUB_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").unwrap());

/** Resolves configuration fields from argv, the environment and defaults
 *
 * # Precedence
 * 1. `--flag=value` (first occurrence)
 * 2. `--flag value` (first occurrence of the bare flag)
 * 3. environment variable
 * 4. the field's static default, if it has one
 *
 * Empty values count as absent at every layer. Using a default records a
 * notice instead of failing; callers print them with [`notices`].
 *
 * The environment is injected as a lookup closure so resolution stays a
 * pure function of its inputs.
 *
 * [`notices`]: ArgumentResolver::notices
 */
pub struct ArgumentResolver<'a, E> {
    args: &'a [String],
    env: E,
    notices: Vec<String>,
}

impl<'a, E> ArgumentResolver<'a, E>
where
    E: Fn(&str) -> Option<String>,
{
    /// `args` excludes the program name.
    pub fn new(args: &'a [String], env: E) -> Self {
        Self {
            args,
            env,
            notices: Vec::new(),
        }
    }

    pub fn resolve(&mut self, field: Field) -> Result<SmolStr> {
        let spec = field.spec();
        let flag = spec.flag();

        let equal_prefix = format!("{}=", flag);
        if let Some(value) = self
            .args
            .iter()
            .find_map(|arg| arg.strip_prefix(equal_prefix.as_str()))
            .filter(|value| !value.is_empty())
        {
            return Ok(value.into());
        }

        if let Some(value) = self
            .args
            .iter()
            .position(|arg| *arg == flag)
            .and_then(|index| self.args.get(index + 1))
            .filter(|value| !value.is_empty())
        {
            return Ok(value.as_str().into());
        }

        if let Some(value) = (self.env)(spec.env_var).filter(|value| !value.is_empty()) {
            return Ok(value.into());
        }

        if let Some(default) = spec.default {
            let notice = format!("{} not provided, defaulting to: {}", spec.label, default);
            log::info!("{}", notice);
            self.notices.push(notice);
            return Ok(default.into());
        }

        Err(BootstrapError::config(format!(
            "{} not provided. Use {} argument or set {} environment variable",
            spec.label, flag, spec.env_var
        )))
    }

    /** Resolves the whole configuration, failing on the first missing field
     *
     * Fields are resolved in table order, so the template defaults are
     * noticed before any required field can fail. With `with_secrets` off
     * the Turbo fields are never looked at.
     */
    pub fn resolve_config(&mut self, with_secrets: bool) -> Result<Configuration> {
        let template_owner = self.resolve(Field::TemplateOwner)?;
        let template_repo = self.resolve(Field::TemplateRepo)?;
        let new_owner = self.resolve(Field::NewOwner)?;
        let new_repo = self.resolve(Field::NewRepo)?;
        let token = self.resolve(Field::Token)?;

        let cache = if with_secrets {
            Some(CacheCredentials {
                token: self.resolve(Field::TurboToken)?,
                team: self.resolve(Field::TurboTeam)?,
            })
        } else {
            None
        };

        let config = Configuration {
            template_owner,
            template_repo,
            new_owner,
            new_repo,
            token,
            cache,
        };
        CliParser::validate_config(&config)?;

        Ok(config)
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}

pub struct CliParser;

impl CliParser {
    /// The repository name becomes the clone directory, so it must stay a
    /// single plain path component.
    pub fn validate_repo_name(name: &str) -> Result<&str> {
        if name == "." || name == ".." || !GITHUB_NAME_REGEX.is_match(name) {
            return Err(BootstrapError::config(format!(
                "Invalid repository name: {:?} (allowed: letters, digits, '.', '-', '_')",
                name
            )));
        }

        Ok(name)
    }

    pub fn validate_owner(owner: &str) -> Result<&str> {
        if !GITHUB_NAME_REGEX.is_match(owner) {
            return Err(BootstrapError::config(format!(
                "Invalid owner: {:?} (allowed: letters, digits, '.', '-', '_')",
                owner
            )));
        }

        Ok(owner)
    }

    pub fn validate_config(config: &Configuration) -> Result<()> {
        Self::validate_owner(&config.template_owner)?;
        Self::validate_repo_name(&config.template_repo)?;
        Self::validate_owner(&config.new_owner)?;
        Self::validate_repo_name(&config.new_repo)?;
        Ok(())
    }
}
