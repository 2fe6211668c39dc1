use std::path::Path;

use anyhow::Result;
use clap::Parser;

use release_tag::config;
use release_tag::git::SystemGit;
use release_tag::tagger::ReleaseTagger;
use release_tag::ui;
use release_tag::ReleaseTagError;

#[derive(clap::Parser)]
#[command(
    name = "release-tag",
    about = "Create and push an annotated release tag from conventional commits"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview the tag and message without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("release-tag {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Locate the repository
    let git = match SystemGit::open(Path::new(".")) {
        Ok(git) => git,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(e.exit_code());
        }
    };

    let tagger = ReleaseTagger::new(git, config);

    ui::display_status("Syncing repository and tags from remote...");
    if let Err(e) = tagger.sync_repository() {
        fail(e);
    }

    if args.dry_run {
        match tagger.preview() {
            Ok((tag, message)) => {
                ui::display_proposed_tag(&tag, &message);
                ui::display_status("Dry run: no tag created, nothing pushed");
            }
            Err(e) => fail(e),
        }
        return Ok(());
    }

    match tagger.create_and_push_tag() {
        Ok(tag) => {
            ui::display_success(&format!("Created and pushed tag: {}", tag));
            println!("{}", tag);
            Ok(())
        }
        Err(e) => fail(e),
    }
}

/// Surface the underlying error text and propagate the exit status.
fn fail(e: ReleaseTagError) -> ! {
    ui::display_error(&e.to_string());
    std::process::exit(e.exit_code());
}
