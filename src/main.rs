use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use nuget_frameworks::config::{DEFAULT_LOG_FILTER, LOG_FILTER_ENV, load_user_provider};
use nuget_frameworks::framework::providers::default_name_provider;
use nuget_frameworks::framework::{FrameworkComparer, FrameworkNameProvider, NuGetFramework};

#[derive(Parser)]
#[command(name = "nuget-frameworks")]
#[command(version, about = "Parse and compare target framework folder names")]
struct Cli {
    /// Mapping tables file replacing the built-in tables
    #[arg(long, global = true)]
    mappings: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse folder names and print their full framework names
    Parse {
        folders: Vec<String>,
        /// Print one JSON object per folder
        #[arg(long)]
        json: bool,
    },
    /// Compare two folder names under every equality relation
    Compare { left: String, right: String },
    /// Print the compact folder name of each folder name
    ShortName { folders: Vec<String> },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_file.as_deref())?;

    let user_provider = load_user_provider(cli.mappings.as_deref())?;
    let provider: &dyn FrameworkNameProvider = match &user_provider {
        Some(provider) => provider,
        None => default_name_provider(),
    };

    match cli.command {
        Command::Parse { folders, json } => {
            for folder in &folders {
                let framework = NuGetFramework::parse_with(folder, provider);
                if json {
                    println!("{}", describe(folder, &framework, provider));
                } else {
                    println!("{folder}\t{framework}");
                }
            }
        }
        Command::Compare { left, right } => {
            let left = NuGetFramework::parse_with(&left, provider);
            let right = NuGetFramework::parse_with(&right, provider);
            println!("left:    {left}");
            println!("right:   {right}");
            println!("full:    {}", NuGetFramework::comparer().equals(&left, &right));
            println!(
                "name:    {}",
                NuGetFramework::name_comparer().equals(&left, &right)
            );
            println!(
                "profile: {}",
                NuGetFramework::profile_comparer().equals(&left, &right)
            );
        }
        Command::ShortName { folders } => {
            for folder in &folders {
                let framework = NuGetFramework::parse_with(folder, provider);
                println!("{folder}\t{}", framework.short_folder_name(provider));
            }
        }
    }

    Ok(())
}

fn describe(
    folder: &str,
    framework: &NuGetFramework,
    provider: &dyn FrameworkNameProvider,
) -> serde_json::Value {
    json!({
        "folder": folder,
        "framework": framework.framework(),
        "version": framework.version().to_string(),
        "profile": framework.profile(),
        "fullName": framework.full_framework_name(),
        "shortFolderName": framework.short_folder_name(provider),
        "isPcl": framework.is_pcl(),
        "allVersions": framework.all_versions(),
        "isUnsupported": framework.is_unsupported(),
    })
}

/// Install the tracing subscriber; the returned guard flushes file logs on drop
fn init_logging(
    log_file: Option<&std::path::Path>,
) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log file path has no file name: {path:?}"))?;

    std::fs::create_dir_all(directory)?;
    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .json()
        .init();

    Ok(Some(guard))
}
