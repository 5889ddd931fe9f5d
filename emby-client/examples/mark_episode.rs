// Resolve an episode on a live Emby server and write skip markers.
//
// Usage:
//   EMBY_HOST=http://emby.local:8096 EMBY_API_KEY=... \
//     cargo run --example mark_episode -- <show_id> <season> <episode> <intro_end_secs>

use anyhow::{bail, Context, Result};
use emby_client::{EmbyClient, EmbyConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,emby_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let usage = "usage: mark_episode <show_id> <season> <episode> <intro_end_secs>";
    let mut args = std::env::args().skip(1);
    let show_id = args.next().context(usage)?;
    let season: i64 = args.next().context(usage)?.parse()?;
    let episode: i64 = args.next().context(usage)?.parse()?;
    let intro_end_secs: f64 = args.next().context(usage)?.parse()?;

    let config = EmbyConfig::from_env_or(None, None)?;
    let client = EmbyClient::new(config)?;

    let Some(item_id) = client.episode_id(&show_id, season, episode).await else {
        bail!("episode S{season:02}E{episode:02} not found for show {show_id}");
    };

    let runtime_secs = client.total_runtime_secs(&item_id).await;
    tracing::info!(item_id = %item_id, runtime_secs, "resolved episode");

    if client.update_intro(&item_id, intro_end_secs).await.is_none() {
        bail!("intro marker update failed");
    }

    // Place the credits marker at the last 5% of the runtime when known
    if runtime_secs > 0.0 {
        let credits_start = runtime_secs * 0.95;
        if client.update_credits(&item_id, credits_start).await.is_none() {
            bail!("credits marker update failed");
        }
    }

    tracing::info!(item_id = %item_id, "skip markers written");
    Ok(())
}
