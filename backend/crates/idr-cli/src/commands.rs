use clap::{Subcommand, ValueEnum};

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new login
    Create {
        login_name: String,

        /// Defaults to your local account name
        real_name: Option<String>,

        /// Require this password for later modify/delete
        #[arg(long, short = 'p')]
        password: Option<String>,
    },

    /// Look up a login by name
    Lookup { login_name: String },

    /// Look up a login by id
    ReverseLookup { id: String },

    /// Rename a login
    Modify {
        old_name: String,
        new_name: String,

        #[arg(long, short = 'p')]
        password: Option<String>,
    },

    /// Remove a login
    Delete {
        login_name: String,

        #[arg(long, short = 'p')]
        password: Option<String>,
    },

    /// List the directory
    Get {
        #[arg(value_enum, ignore_case = true)]
        kind: InfoKindArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InfoKindArg {
    /// All login names
    Users,
    /// All ids
    Ids,
    /// Same as ids
    Uuids,
    /// Every record
    All,
}

impl InfoKindArg {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Ids => "ids",
            Self::Uuids => "uuids",
            Self::All => "all",
        }
    }
}
