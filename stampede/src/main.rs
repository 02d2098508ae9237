use clap::Parser;
use stampede::args::StampedeArgs;
use stampede::error::StampedeError;
use stampede::runner::LoadRunner;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), StampedeError> {
    let args = StampedeArgs::parse();
    args.validate();
    tracing_subscriber::fmt::init();

    let output_dir = args.output_dir.clone();
    let runner = LoadRunner::new(args);
    let report = runner.run().await?;
    report.print_summary();

    if let Some(output_dir) = output_dir {
        report.dump_to_json(&output_dir);
        info!("Report written to {output_dir}/report.json");
    }
    Ok(())
}
