use std::time::Duration;

use knx_bus::devices::{Light, LightConfig};
use knx_bus::knx::{TelegramQueue, DEFAULT_QUEUE_CAPACITY};
use tokio::time::sleep;
use tracing::info;

/// Dims a light up fast and down slow, then switches it off.
/// A stand-in transport prints what would go on the bus.
#[tokio::main]
async fn main() -> knx_bus::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let (queue, mut outgoing) = TelegramQueue::channel(DEFAULT_QUEUE_CAPACITY);
    let transport = tokio::spawn(async move {
        while let Some(telegram) = outgoing.recv().await {
            info!("-> {}", telegram);
        }
    });

    let config = LightConfig {
        group_address_switch: Some("1/0/12".parse()?),
        group_address_dimm: Some("1/0/14".parse()?),
        ..Default::default()
    };
    let mut light = Light::new(queue, "TestLight2", &config);

    light.start_dimming_up(3).await?;
    sleep(Duration::from_secs(1)).await;
    light.stop_dimming().await?;
    sleep(Duration::from_secs(1)).await;
    light.start_dimming_down(1).await?;
    sleep(Duration::from_secs(1)).await;
    light.stop_dimming().await?;

    light.set_off().await?;

    drop(light);
    let _ = transport.await;
    Ok(())
}
