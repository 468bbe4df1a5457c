use clap::{Args as ClapArgs, Parser, Subcommand};
use common_services::access::SmartAlbumKind;
use common_types::ViewerContext;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Query a photo gallery as a given viewer", long_about = None)]
pub struct Args {
    /// Settings file, overridden by `APP__` environment variables.
    #[clap(long, default_value = app_state::DEFAULT_SETTINGS_PATH)]
    pub config: PathBuf,

    /// JSON file with `albums` and `photos`. Without it the database is queried.
    #[clap(long)]
    pub fixture: Option<PathBuf>,

    #[command(flatten)]
    pub viewer: ViewerArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ViewerArgs {
    /// Id of the logged-in user. Omit for an anonymous viewer.
    #[clap(long)]
    pub user: Option<i32>,

    #[clap(long, default_value_t = false, requires = "user", action)]
    pub admin: bool,

    #[clap(long, default_value_t = false, requires = "user", action)]
    pub can_upload: bool,

    /// Password-protected albums unlocked in this session.
    #[clap(long = "unlocked", value_delimiter = ',')]
    pub unlocked: Vec<String>,
}

impl ViewerArgs {
    #[must_use]
    pub fn to_viewer(&self) -> ViewerContext {
        let viewer = match (self.user, self.admin) {
            (Some(id), true) => ViewerContext::admin(id),
            (Some(id), false) => ViewerContext::user(id, self.can_upload),
            (None, _) => ViewerContext::anonymous(),
        };
        viewer.with_unlocked_albums(self.unlocked.iter().cloned())
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Top-level albums, or the children of `--parent`.
    Albums {
        #[clap(long)]
        parent: Option<String>,
    },
    /// A single album by id.
    Album { id: String },
    /// Photos matching every whitespace-separated term.
    Search {
        #[clap(default_value = "")]
        query: String,
    },
    /// Photos of a smart album.
    Smart { kind: SmartAlbumKind },
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_types::ViewerRole;

    #[test]
    fn test_anonymous_by_default() {
        let args = Args::parse_from(["gallery_cli", "albums"]);

        assert_eq!(args.viewer.to_viewer().role(), ViewerRole::Anonymous);
        assert!(matches!(args.command, Command::Albums { parent: None }));
    }

    #[test]
    fn test_admin_viewer() {
        let args = Args::parse_from([
            "gallery_cli",
            "--user",
            "4",
            "--admin",
            "--unlocked",
            "a,b",
            "smart",
            "starred",
        ]);
        let viewer = args.viewer.to_viewer();

        assert!(viewer.is_admin());
        assert_eq!(viewer.user_id(), Some(4));
        assert!(viewer.has_unlocked("b"));
        assert!(matches!(
            args.command,
            Command::Smart {
                kind: SmartAlbumKind::Starred
            }
        ));
    }

    #[test]
    fn test_admin_requires_user() {
        assert!(Args::try_parse_from(["gallery_cli", "--admin", "albums"]).is_err());
    }
}
