use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = keylightctl::cli::Cli::parse();
    let exit_code = keylightctl::run(cli).await;
    std::process::exit(exit_code);
}
