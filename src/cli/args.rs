/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::Parser;

/// Collect the public SSH keys of a GitHub organization's members.
#[derive(Debug, Parser)]
#[command(
    name = "orgkeys",
    about = "Collect the public SSH keys of a GitHub organization's members",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// GitHub organization whose members to collect keys from.
    pub organization: String,

    /// Restrict to members of this team (exact name or slug).
    pub team: Option<String>,

    /// Write keys to this file (mode 0600) instead of stdout.
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Personal access token for authenticated requests.
    #[arg(short = 't', long, value_name = "TOKEN")]
    pub token: Option<String>,
}
