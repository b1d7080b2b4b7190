use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use version_stamp::cli::{run_stamp_workflow, StampWorkflowArgs};
use version_stamp::config;
use version_stamp::ui::Console;

#[derive(clap::Parser)]
#[command(
    name = "version-stamp",
    version,
    about = "Substitute version placeholders in a text file"
)]
struct Args {
    #[arg(short, long, value_name = "PATH", help = "Version file to stamp")]
    file: PathBuf,

    #[arg(short, long, value_name = "VERSION", help = "Value for {SOFTWARE_VERSION}")]
    software_version: String,

    #[arg(short, long, value_name = "VERSION", help = "Value for {API_VERSION}")]
    api_version: String,

    #[arg(short, long, value_name = "REF", help = "Value for {RELEASE_REF}, usually a commit hash")]
    release_ref: String,

    #[arg(short, long, value_name = "NAME", help = "Source branch; release branches skip the dev suffix")]
    branch: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(long, help = "Hold an exclusive lock on <file>.lock while stamping")]
    lock: bool,

    #[arg(short, long, help = "Only print warnings and errors")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let console = Console::new(args.quiet);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            console.error(&e.to_string());
            std::process::exit(1);
        }
    };

    let workflow_args = StampWorkflowArgs {
        file: args.file,
        software_version: args.software_version,
        api_version: args.api_version,
        release_ref: args.release_ref,
        branch: args.branch,
        dry_run: args.dry_run,
        lock: args.lock,
    };

    if let Err(e) = run_stamp_workflow(workflow_args, &config, &console) {
        console.error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
