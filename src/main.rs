//! AssetHub CLI entry point.
//!
//! Wires the repositories, the transfer backend, and the move engine
//! together, and exposes the folder move both as a direct command and
//! through the queued-job boundary.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};
use uuid::Uuid;

use assethub_core::config::AppConfig;
use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::traits::{NoopBudget, ProgressSink};
use assethub_database::DatabasePool;
use assethub_database::repositories::{
    AssetstoreRepository, FileRepository, FolderRepository, JobRepository, UserRepository,
};
use assethub_engine::MoveOrchestrator;
use assethub_entity::assetstore::AssetstoreStore;
use assethub_entity::folder::FolderStore;
use assethub_entity::job::{CreateJob, JobStatus, JobStore, JobUpdate};
use assethub_entity::user::UserStore;
use assethub_storage::LocalAssetstoreTransfer;
use assethub_worker::jobs::folder_move::{FolderMoveJobHandler, FolderMovePayload};
use assethub_worker::{JobExecutionError, JobExecutor};

#[derive(Parser)]
#[command(name = "assethub", about = "Folder-to-assetstore migration engine")]
struct Cli {
    /// Configuration environment (selects config/<env>.toml overlay).
    #[arg(long, default_value = "development", global = true)]
    env: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Move a folder tree into a target assetstore.
    Move(MoveArgs),
    /// Create a queued folder move job without running it.
    Enqueue(MoveArgs),
    /// Run a queued job through the registered handlers.
    RunJob {
        /// The job to run.
        job_id: Uuid,
    },
    /// Request cancellation of a running job.
    Cancel {
        /// The job to cancel.
        job_id: Uuid,
    },
    /// Print a job's status and log.
    Show {
        /// The job to inspect.
        job_id: Uuid,
    },
    /// List the known assetstores.
    Stores,
}

#[derive(clap::Args)]
struct MoveArgs {
    /// The root folder to move.
    #[arg(long)]
    folder: Uuid,
    /// The target assetstore.
    #[arg(long)]
    assetstore: Uuid,
    /// The user the move runs as.
    #[arg(long)]
    user: Uuid,
    /// Skip files that were ingested by reference.
    #[arg(long)]
    ignore_imported: bool,
    /// Suppress progress output.
    #[arg(long)]
    no_progress: bool,
}

/// Progress sink that prints to stderr, keeping stdout for results.
#[derive(Debug, Default)]
struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn update(&self, message: &str) {
        eprintln!("{message}");
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    match run(cli, config).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Everything a command needs, wired from one database pool.
struct App {
    jobs: Arc<JobRepository>,
    folders: Arc<FolderRepository>,
    assetstores: Arc<AssetstoreRepository>,
    users: Arc<UserRepository>,
    orchestrator: Arc<MoveOrchestrator>,
}

impl App {
    async fn connect(config: &AppConfig, progress_enabled: bool) -> AppResult<Self> {
        let db = DatabasePool::connect(&config.database).await?;
        assethub_database::migration::run_migrations(db.pool()).await?;

        let jobs = Arc::new(JobRepository::new(db.pool().clone()));
        let folders = Arc::new(FolderRepository::new(db.pool().clone()));
        let files = Arc::new(FileRepository::new(db.pool().clone()));
        let assetstores = Arc::new(AssetstoreRepository::new(db.pool().clone()));
        let users = Arc::new(UserRepository::new(db.pool().clone()));

        let transfer = Arc::new(LocalAssetstoreTransfer::new(
            assetstores.clone(),
            files.clone(),
        ));
        let progress: Arc<dyn ProgressSink> = if progress_enabled {
            Arc::new(ConsoleProgress)
        } else {
            Arc::new(assethub_core::traits::NullProgress)
        };
        let orchestrator = Arc::new(MoveOrchestrator::new(
            jobs.clone(),
            folders.clone(),
            files.clone(),
            transfer,
            Arc::new(NoopBudget),
            progress,
            &config.transfer,
        ));

        Ok(Self {
            jobs,
            folders,
            assetstores,
            users,
            orchestrator,
        })
    }
}

async fn run(cli: Cli, config: AppConfig) -> AppResult<i32> {
    match cli.command {
        Command::Move(args) => {
            let app = App::connect(&config, !args.no_progress).await?;
            let user = app
                .users
                .find_by_id(args.user)
                .await?
                .ok_or_else(|| AppError::not_found(format!("User {} not found", args.user)))?;
            let folder = app
                .folders
                .find_by_id(args.folder)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Folder {} not found", args.folder)))?;
            let target = app.assetstores.find_by_id(args.assetstore).await?.ok_or_else(|| {
                AppError::not_found(format!("Assetstore {} not found", args.assetstore))
            })?;

            let (job_id, outcome) = app
                .orchestrator
                .move_folder_tracked(
                    &user,
                    &folder,
                    &target,
                    args.ignore_imported,
                    !args.no_progress,
                )
                .await?;

            println!("{outcome} (job {job_id})");
            Ok(match outcome {
                assethub_engine::MoveOutcome::Failed => 1,
                _ => 0,
            })
        }
        Command::Enqueue(args) => {
            let app = App::connect(&config, false).await?;
            let payload = FolderMovePayload {
                user_id: args.user,
                folder_id: args.folder,
                assetstore_id: args.assetstore,
                ignore_imported: args.ignore_imported,
                progress: !args.no_progress,
            };
            let job = app
                .jobs
                .create(CreateJob {
                    job_type: assethub_engine::lifecycle::FOLDER_MOVE_JOB_TYPE.to_string(),
                    title: format!("Move folder {} to assetstore {}", args.folder, args.assetstore),
                    payload: serde_json::to_value(&payload)?,
                    created_by: Some(args.user),
                })
                .await?;
            let job = app
                .jobs
                .update(job.id, JobUpdate::status(JobStatus::Queued))
                .await?;

            println!("Queued job {}", job.id);
            Ok(0)
        }
        Command::RunJob { job_id } => {
            let app = App::connect(&config, true).await?;
            let job = app.jobs.reload(job_id).await?;
            if job.status != JobStatus::Queued {
                return Err(AppError::validation(format!(
                    "Job {} is {}, not queued",
                    job.id, job.status
                )));
            }

            let mut executor = JobExecutor::new();
            executor.register(Arc::new(FolderMoveJobHandler::new(
                app.users.clone(),
                app.folders.clone(),
                app.assetstores.clone(),
                app.orchestrator.clone(),
            )));

            match executor.execute(&job).await {
                Ok(result) => {
                    app.jobs
                        .update(job.id, JobUpdate::status(JobStatus::Success))
                        .await?;
                    if let Some(result) = result {
                        println!("{result}");
                    }
                    Ok(0)
                }
                // Transient failures stay queued so a later run can retry.
                Err(e @ JobExecutionError::Transient(_)) => Err(AppError::internal(e.to_string())),
                Err(e) => {
                    app.jobs
                        .update(job.id, JobUpdate::status(JobStatus::Error))
                        .await?;
                    Err(AppError::internal(e.to_string()))
                }
            }
        }
        Command::Cancel { job_id } => {
            let app = App::connect(&config, false).await?;
            match app.jobs.cancel(job_id).await? {
                Some(job) => {
                    println!("Canceled job {}", job.id);
                    Ok(0)
                }
                None => Err(AppError::not_found(format!("Job {job_id} not found"))),
            }
        }
        Command::Show { job_id } => {
            let app = App::connect(&config, false).await?;
            let job = app.jobs.reload(job_id).await?;
            println!("{} [{}] {}", job.id, job.status, job.title);
            for line in &job.log {
                println!("{line}");
            }
            Ok(0)
        }
        Command::Stores => {
            let app = App::connect(&config, false).await?;
            for store in app.assetstores.find_all().await? {
                let marker = if store.current { " (current)" } else { "" };
                println!(
                    "{} [{}] {} root={}{marker}",
                    store.id, store.kind, store.name, store.root
                );
            }
            Ok(0)
        }
    }
}
