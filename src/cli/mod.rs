use clap::Parser;
use std::net::SocketAddr;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Seconds a player gets to explore each round before it times out.
    #[arg(long)]
    #[arg(default_value_t = crate::games::consts::DEFAULT_ROUND_DURATION_SECS)]
    pub round_duration_secs: u64,
    #[arg(long)]
    #[arg(default_value = "https://maps.googleapis.com")]
    pub imagery_api_url: Url,
    #[arg(long)]
    #[arg(default_value = "https://vision.googleapis.com")]
    pub recognition_api_url: Url,
}
