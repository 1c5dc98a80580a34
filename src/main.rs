use clap::{Parser, Subcommand};
use vault::service::{boot, run_sweep, seed_demo, ProfitScheduler};

#[derive(Parser, Debug)]
#[command(name = "vault", version, about = "Custodial wallet backend core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Boot the system and run the daily profit scheduler until ctrl-c
    Run,
    /// Run one manual profit sweep over all registered accounts
    Sweep,
    /// Seed demo accounts and run one sweep against them
    Demo {
        /// Number of demo accounts to create
        #[arg(short, long, default_value = "10", value_name = "COUNT")]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Cli::parse();
    let service = boot().await;

    match args.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let scheduler =
                ProfitScheduler::start(service.registry().clone(), service.directory());
            let status = scheduler.status();
            tracing::info!("next profit calculation at {}", status.next_run);

            tokio::signal::ctrl_c().await?;

            scheduler.stop();
            service.shutdown().await;
        }
        Commands::Sweep => {
            let outcome = run_sweep(service.registry(), service.directory().as_ref()).await;
            println!(
                "sweep complete: {} credited, {} skipped, {} failed",
                outcome.credited, outcome.skipped, outcome.failed
            );
            service.shutdown().await;
        }
        Commands::Demo { count } => {
            let accounts = seed_demo(&service, count).await?;
            let outcome = run_sweep(service.registry(), service.directory().as_ref()).await;
            println!(
                "seeded {} accounts; sweep: {} credited, {} skipped, {} failed",
                accounts.len(),
                outcome.credited,
                outcome.skipped,
                outcome.failed
            );

            for account_id in &accounts {
                let balances = service.balances(*account_id).await?;
                println!(
                    "{}: deposit={:.2} profit={:.2} total={:.2}",
                    account_id, balances.deposit, balances.profit, balances.total
                );
            }
            service.shutdown().await;
        }
    }

    Ok(())
}
