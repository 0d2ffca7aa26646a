//! WiFi association.

use embassy_net::Stack;
use embassy_time::{Duration, Timer, WithTimeout};
use esp_radio::wifi::{ClientConfig, ModeConfig, WifiController};
use log::{info, warn};

use crate::app_state::{AppError, message};

/// How long DHCP may take once the link is up.
const DHCP_TIMEOUT_SECS: u64 = 20;
/// Pause between association attempts.
const ATTEMPT_BACKOFF_MS: u64 = 500;

/// Associate with the access point and wait for an IPv4 lease.
///
/// Gives up after `max_attempts` failed associations, so a missing network
/// costs a bounded amount of battery before the device goes back to sleep.
pub async fn connect(
    controller: &mut WifiController<'static>,
    stack: Stack<'static>,
    ssid: &str,
    password: &str,
    max_attempts: u32,
) -> Result<(), AppError> {
    let client_config = ModeConfig::Client(
        ClientConfig::default()
            .with_ssid(ssid.into())
            .with_password(password.into()),
    );
    controller
        .set_config(&client_config)
        .map_err(|err| AppError::Wifi(message(format_args!("config: {:?}", err))))?;

    if !matches!(controller.is_started(), Ok(true)) {
        controller
            .start_async()
            .await
            .map_err(|err| AppError::Wifi(message(format_args!("start: {:?}", err))))?;
        info!("WiFi started");
    }

    let mut attempt = 1;
    loop {
        info!("Connecting to {} (attempt {}/{})", ssid, attempt, max_attempts);
        match controller.connect_async().await {
            Ok(()) => break,
            Err(err) if attempt >= max_attempts => {
                return Err(AppError::Wifi(message(format_args!(
                    "{:?} after {} attempts",
                    err, attempt
                ))));
            }
            Err(err) => {
                warn!("WiFi connect failed: {:?}", err);
                attempt += 1;
                Timer::after(Duration::from_millis(ATTEMPT_BACKOFF_MS)).await;
            }
        }
    }

    stack
        .wait_config_up()
        .with_timeout(Duration::from_secs(DHCP_TIMEOUT_SECS))
        .await
        .map_err(|_| AppError::Wifi(message("DHCP timed out")))?;
    if let Some(config) = stack.config_v4() {
        info!("Got IP: {}", config.address);
    }
    Ok(())
}

/// Drop the association before deep sleep.
pub async fn disconnect(controller: &mut WifiController<'static>) {
    if let Err(err) = controller.disconnect_async().await {
        warn!("WiFi disconnect failed: {:?}", err);
    }
    if let Err(err) = controller.stop_async().await {
        warn!("WiFi stop failed: {:?}", err);
    }
}
