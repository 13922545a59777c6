use clap::Parser;
use ipc_potentials::cli::PotentialConfig;
use ipc_potentials::run;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Get commandline arguments
    let config = PotentialConfig::parse();
    if config.input().is_empty() {
        println!("No input provided. Using default parameters");
    } else {
        println!("Using requested input: {}", config.input());
    }

    println!("Writing output to {}", config.output_dir());
    run(&config)?;

    println!("Done!");
    Ok(())
}
