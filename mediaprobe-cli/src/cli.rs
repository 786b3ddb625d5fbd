// mediaprobe-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};

use crate::config::ENV_BACKEND;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mediaprobe: media metadata and orientation tool",
    long_about = "Probes media files through ffprobe, mediainfo or the built-in image reader \
                  and reports metadata, portrait/landscape orientation and type summaries."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG takes precedence when set)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prints probed metadata as JSON (an object for one MEDIA, an array otherwise)
    Info(InfoArgs),

    /// Exits 0 when MEDIA is portrait, 1 when it is not
    IsPortrait(PredicateArgs),

    /// Exits 0 when MEDIA is landscape, 1 when it is not
    IsLandscape(PredicateArgs),

    /// Prints "portrait" or "landscape" for MEDIA
    Orientation(OrientationArgs),

    /// Counts files and total sizes grouped by type guessed from the name
    SummaryByType(SummaryArgs),

    /// Lists the registered probing backends
    Backends,
}

/// Backend selection shared by the probing commands.
#[derive(Args, Debug, Clone, Default)]
pub struct BackendArgs {
    /// Probing backend to use (e.g. ffprobe, mediainfo, image). Tries the
    /// defaults in order when omitted.
    #[arg(short, long, value_name = "NAME", env = ENV_BACKEND)]
    pub backend: Option<String>,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Media files or URLs to probe
    #[arg(required = true, num_args = 1.., value_name = "MEDIA")]
    pub media: Vec<String>,

    #[command(flatten)]
    pub backend: BackendArgs,

    /// Print single-line JSON instead of pretty-printed JSON
    #[arg(long, default_value_t = false)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct PredicateArgs {
    /// Media file or URL to check
    #[arg(value_name = "MEDIA")]
    pub media: String,

    #[command(flatten)]
    pub backend: BackendArgs,

    /// Do not print the result sentence; rely on the exit code only
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Args, Debug)]
pub struct OrientationArgs {
    /// Media file or URL to check
    #[arg(value_name = "MEDIA")]
    pub media: String,

    #[command(flatten)]
    pub backend: BackendArgs,

    /// Print the full orientation report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Media files to summarize
    #[arg(required = true, num_args = 1.., value_name = "MEDIA")]
    pub media: Vec<String>,

    /// Skip files whose size cannot be read instead of failing
    #[arg(long, default_value_t = false)]
    pub skip_missing: bool,

    /// Print the rows as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_info_multiple_media() {
        let cli = Cli::parse_from(["mediaprobe", "info", "a.mp4", "b.jpg", "--backend", "ffprobe"]);
        match cli.command {
            Commands::Info(args) => {
                assert_eq!(args.media, vec!["a.mp4", "b.jpg"]);
                assert_eq!(args.backend.backend.as_deref(), Some("ffprobe"));
                assert!(!args.compact);
            }
            other => panic!("Expected Info command, got {other:?}"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_is_portrait_quiet() {
        let cli = Cli::parse_from(["mediaprobe", "is-portrait", "-q", "clip.mov", "-v"]);
        match cli.command {
            Commands::IsPortrait(args) => {
                assert_eq!(args.media, "clip.mov");
                assert!(args.quiet);
            }
            other => panic!("Expected IsPortrait command, got {other:?}"),
        }
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_summary_flags() {
        let cli = Cli::parse_from([
            "mediaprobe",
            "summary-by-type",
            "a.mp4",
            "--skip-missing",
            "--json",
        ]);
        match cli.command {
            Commands::SummaryByType(args) => {
                assert_eq!(args.media, vec!["a.mp4"]);
                assert!(args.skip_missing);
                assert!(args.json);
            }
            other => panic!("Expected SummaryByType command, got {other:?}"),
        }
    }

    #[test]
    fn test_media_is_required() {
        assert!(Cli::try_parse_from(["mediaprobe", "info"]).is_err());
        assert!(Cli::try_parse_from(["mediaprobe", "is-landscape"]).is_err());
        assert!(Cli::try_parse_from(["mediaprobe", "summary-by-type"]).is_err());
    }

    #[test]
    fn test_predicates_take_one_media() {
        assert!(Cli::try_parse_from(["mediaprobe", "is-portrait", "a.mp4", "b.mp4"]).is_err());
    }
}
