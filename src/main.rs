use agentflow_bench::cli::Args;
use agentflow_bench::error::failure_message;
use clap::Parser;
use dotenv::dotenv;
use log::error;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut stdout = std::io::stdout();
    if let Err(e) = agentflow_bench::run(&args, &mut stdout).await {
        error!("Benchmark aborted: {:?}", e);
        println!("{}", failure_message(&e));
    }
}
