//! Clap argument types and their mapping onto console forms.

use clap::{ArgAction, Parser};

use usermgr::config::{Config, OutputFormat};
use usermgr::console::{Action, Forms};
use usermgr::messages::Locale;

/// User management console for a REST users API.
#[derive(Parser, Debug)]
#[command(name = "usermgr", version = usermgr::constants::VERSION)]
pub struct Cli {
    /// API base URL (overrides config and USERMGR_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Message language: en, th.
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Output format.
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Load and render the user list.
    List,

    /// Fetch a single user.
    Get(GetArgs),

    /// Create a user.
    Create(CreateArgs),

    /// Update fields of an existing user.
    Update(UpdateArgs),

    /// Delete a user.
    Delete(DeleteArgs),

    /// Check API health.
    Health,

    /// Print version information.
    Version,
}

/// Arguments for the `get` subcommand.
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// User ID.
    #[arg(default_value = "")]
    pub id: String,
}

/// Arguments for the `create` subcommand.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Display name (required).
    #[arg(long, default_value = "")]
    pub name: String,

    /// Email address (required).
    #[arg(long, default_value = "")]
    pub email: String,

    /// Role, e.g. admin.
    #[arg(long, default_value = "")]
    pub role: String,

    /// Custom user ID; the server assigns one when omitted.
    #[arg(long, default_value = "")]
    pub id: String,
}

/// Arguments for the `update` subcommand.
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// User ID.
    #[arg(default_value = "")]
    pub id: String,

    /// New display name.
    #[arg(long, default_value = "")]
    pub name: String,

    /// New email address.
    #[arg(long, default_value = "")]
    pub email: String,

    /// New role.
    #[arg(long, default_value = "")]
    pub role: String,
}

/// Arguments for the `delete` subcommand.
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// User ID.
    #[arg(default_value = "")]
    pub id: String,

    /// Skip the confirmation prompt.
    #[arg(long, short = 'y', default_value_t = false)]
    pub yes: bool,
}

impl Cli {
    /// Apply CLI flags on top of loaded config (layer 1).
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(ref url) = self.base_url {
            config.api.base_url = url.clone();
        }
        if let Some(locale) = self.locale {
            config.ui.locale = locale;
        }
        if let Some(format) = self.format {
            config.ui.format = format;
        }
    }

    /// Whether deletes should skip the interactive prompt.
    pub fn assume_yes(&self) -> bool {
        matches!(self.command, Command::Delete(DeleteArgs { yes: true, .. }))
    }
}

impl Command {
    /// Console action for this command. `version` has none.
    pub fn action(&self) -> Option<Action> {
        match self {
            Command::List => Some(Action::List),
            Command::Get(_) => Some(Action::Get),
            Command::Create(_) => Some(Action::Create),
            Command::Update(_) => Some(Action::Update),
            Command::Delete(_) => Some(Action::Delete),
            Command::Health => Some(Action::Health),
            Command::Version => None,
        }
    }

    /// Copy command arguments into the matching console form.
    pub fn fill(&self, forms: &mut Forms) {
        match self {
            Command::Get(args) => forms.get_id = args.id.clone(),
            Command::Create(args) => {
                forms.create.name = args.name.clone();
                forms.create.email = args.email.clone();
                forms.create.role = args.role.clone();
                forms.create.id = args.id.clone();
            }
            Command::Update(args) => {
                forms.update.id = args.id.clone();
                forms.update.name = args.name.clone();
                forms.update.email = args.email.clone();
                forms.update.role = args.role.clone();
            }
            Command::Delete(args) => forms.delete_id = args.id.clone(),
            Command::List | Command::Health | Command::Version => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_parses_all_fields() {
        let cli = Cli::try_parse_from([
            "usermgr", "create", "--name", "A", "--email", "a@x.com", "--role", "admin", "--id", "u1",
        ])
        .unwrap();
        let mut forms = Forms::default();
        cli.command.fill(&mut forms);
        assert_eq!(forms.create.name, "A");
        assert_eq!(forms.create.email, "a@x.com");
        assert_eq!(forms.create.role, "admin");
        assert_eq!(forms.create.id, "u1");
    }

    #[test]
    fn create_without_name_still_parses() {
        // Missing fields are reported by the console, not by clap.
        let cli = Cli::try_parse_from(["usermgr", "create", "--email", "a@x.com"]).unwrap();
        let mut forms = Forms::default();
        cli.command.fill(&mut forms);
        assert!(forms.create.name.is_empty());
    }

    #[test]
    fn update_fills_update_form() {
        let cli = Cli::try_parse_from(["usermgr", "update", "7", "--email", "n@x.com"]).unwrap();
        let mut forms = Forms::default();
        cli.command.fill(&mut forms);
        assert_eq!(forms.update.id, "7");
        assert_eq!(forms.update.email, "n@x.com");
        assert!(forms.update.name.is_empty());
    }

    #[test]
    fn delete_yes_flag() {
        let cli = Cli::try_parse_from(["usermgr", "delete", "7", "-y"]).unwrap();
        assert!(cli.assume_yes());
        let cli = Cli::try_parse_from(["usermgr", "delete", "7"]).unwrap();
        assert!(!cli.assume_yes());
    }

    #[test]
    fn global_flags_override_config() {
        let cli = Cli::try_parse_from([
            "usermgr",
            "list",
            "--base-url",
            "http://cli",
            "--locale",
            "th",
            "--format",
            "html",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply_to(&mut config);
        assert_eq!(config.api.base_url, "http://cli");
        assert_eq!(config.ui.locale, Locale::Th);
        assert_eq!(config.ui.format, OutputFormat::Html);
    }

    #[test]
    fn commands_map_to_actions() {
        let cli = Cli::try_parse_from(["usermgr", "delete", "3"]).unwrap();
        assert_eq!(cli.command.action(), Some(Action::Delete));
        let cli = Cli::try_parse_from(["usermgr", "version"]).unwrap();
        assert_eq!(cli.command.action(), None);
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::try_parse_from(["usermgr", "-vv", "health"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn unknown_locale_is_rejected() {
        assert!(Cli::try_parse_from(["usermgr", "list", "--locale", "xx"]).is_err());
    }
}
