use anyhow::Result;
use clap::Parser;
use qf_provision::catalog;
use qf_provision::client::AdminClient;
use qf_provision::config::Config;
use qf_provision::provisioner;

#[derive(Parser, Debug)]
#[command(author, version, about = "Ensure the store's metaobject and metafield definitions exist")]
struct Args {
    /// Override the Admin API endpoint (e.g. a local stub or staging proxy)
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let client = match args.endpoint {
        Some(endpoint) => AdminClient::with_endpoint(endpoint, config.admin_token.clone()),
        None => AdminClient::new(&config),
    };

    provisioner::provision_all(&client, &catalog::metaobjects(), &catalog::metafields()).await?;

    println!("All metaobject and metafield definitions are in place.");
    Ok(())
}
