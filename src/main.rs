use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process;

use autover::domain::{AutoIncrement, Version};
use autover::{config, FacadeLogger};

#[derive(clap::Parser)]
#[command(
    name = "autover",
    version,
    about = "Compute a SemVer 2.0 version from git tags and commit height"
)]
struct Args {
    /// Working directory to version
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    directory: PathBuf,

    #[arg(short = 'p', long, help = "Tag prefix stripped before parsing versions")]
    tag_prefix: Option<String>,

    #[arg(
        short = 'm',
        long,
        value_name = "MAJOR.MINOR",
        help = "Minimum major.minor floor for the computed version"
    )]
    min_version: Option<String>,

    #[arg(
        short = 'b',
        long,
        help = "Build metadata appended to the computed version"
    )]
    build_metadata: Option<String>,

    #[arg(
        short = 'a',
        long,
        value_enum,
        help = "Component bumped when height applies to a release tag"
    )]
    auto_increment: Option<AutoIncrement>,

    #[arg(
        long,
        value_name = "IDENTIFIERS",
        help = "Dot-separated pre-release identifiers for the default version"
    )]
    default_prerelease: Option<String>,

    #[arg(long, help = "Do not fold commit height into the version")]
    ignore_height: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(
        long,
        value_enum,
        default_value = "full",
        help = "Print a single component instead of the full version"
    )]
    show: Show,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Show {
    Full,
    Major,
    Minor,
    Patch,
    Prerelease,
    Metadata,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut options = match config::load(args.config.as_deref()) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    };

    if let Some(tag_prefix) = args.tag_prefix {
        options.tag_prefix = tag_prefix;
    }
    if let Some(min_version) = args.min_version {
        options.min_major_minor = match min_version.parse() {
            Ok(min) => min,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        };
    }
    if let Some(build_metadata) = args.build_metadata {
        options.build_metadata = build_metadata;
    }
    if let Some(auto_increment) = args.auto_increment {
        options.auto_increment = auto_increment;
    }
    if let Some(default_prerelease) = args.default_prerelease {
        options.default_prerelease = default_prerelease.split('.').map(str::to_string).collect();
    }
    if args.ignore_height {
        options.ignore_height = true;
    }

    let version = match autover::get_version(&args.directory, options, &FacadeLogger) {
        Ok(version) => version,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("{}", render(&version, args.show));
    Ok(())
}

fn render(version: &Version, show: Show) -> String {
    match show {
        Show::Full => version.to_string(),
        Show::Major => version.major.to_string(),
        Show::Minor => version.minor.to_string(),
        Show::Patch => version.patch.to_string(),
        Show::Prerelease => version.pre_release.join("."),
        Show::Metadata => version.build_metadata.join("."),
    }
}
