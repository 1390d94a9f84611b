use smol_str::SmolStr;

pub const DEFAULT_TEMPLATE_OWNER: &str = "dewinterjack";
pub const DEFAULT_TEMPLATE_REPO: &str = "t3-turbo-and-clerk";

/// Static metadata for one configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentSpec {
    /// Long flag name without the leading dashes, e.g. `template-owner`.
    pub long: &'static str,
    pub env_var: &'static str,
    pub label: &'static str,
    pub default: Option<&'static str>,
}

impl ArgumentSpec {
    /// The flag as typed on the command line, e.g. `--template-owner`.
    pub fn flag(&self) -> String {
        format!("--{}", self.long)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TemplateOwner,
    TemplateRepo,
    NewOwner,
    NewRepo,
    Token,
    TurboToken,
    TurboTeam,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::TemplateOwner,
        Field::TemplateRepo,
        Field::NewOwner,
        Field::NewRepo,
        Field::Token,
        Field::TurboToken,
        Field::TurboTeam,
    ];

    /// Fields that only exist in the secret-managing variant.
    pub const CACHE_CREDENTIALS: [Field; 2] = [Field::TurboToken, Field::TurboTeam];

    pub fn spec(self) -> &'static ArgumentSpec {
        &ARGUMENT_SPECS[self as usize]
    }
}

/// Indexed by `Field` discriminant.
static ARGUMENT_SPECS: [ArgumentSpec; 7] = [
    ArgumentSpec {
        long: "template-owner",
        env_var: "TEMPLATE_OWNER",
        label: "Template owner",
        default: Some(DEFAULT_TEMPLATE_OWNER),
    },
    ArgumentSpec {
        long: "template-repo",
        env_var: "TEMPLATE_REPO",
        label: "Template repository",
        default: Some(DEFAULT_TEMPLATE_REPO),
    },
    ArgumentSpec {
        long: "owner",
        env_var: "GITHUB_OWNER",
        label: "New owner",
        default: None,
    },
    ArgumentSpec {
        long: "name",
        env_var: "GITHUB_REPO_NAME",
        label: "Repository name",
        default: None,
    },
    ArgumentSpec {
        long: "token",
        env_var: "GITHUB_TOKEN",
        label: "GitHub token",
        default: None,
    },
    ArgumentSpec {
        long: "turbo-token",
        env_var: "TURBO_TOKEN",
        label: "Turbo token",
        default: None,
    },
    ArgumentSpec {
        long: "turbo-team",
        env_var: "TURBO_TEAM",
        label: "Turbo team",
        default: None,
    },
];

/// Turborepo remote cache credentials, uploaded as Actions secrets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheCredentials {
    pub token: SmolStr,
    pub team: SmolStr,
}

impl CacheCredentials {
    /// Secrets in upload order: `TURBO_TOKEN` first, then `TURBO_TEAM`.
    pub fn as_secrets(&self) -> [(&'static str, &str); 2] {
        [
            (Field::TurboToken.spec().env_var, self.token.as_str()),
            (Field::TurboTeam.spec().env_var, self.team.as_str()),
        ]
    }
}

/// Everything a bootstrap run needs, resolved once before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub template_owner: SmolStr,
    pub template_repo: SmolStr,
    pub new_owner: SmolStr,
    pub new_repo: SmolStr,
    pub token: SmolStr,
    /// `None` in the variant that skips secret upload.
    pub cache: Option<CacheCredentials>,
}
