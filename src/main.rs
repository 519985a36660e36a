use anyhow::{bail, Result};

mod config;
mod github;
mod log;
mod notify;
mod slack;
mod status;

fn main() -> Result<()> {
    log::init();

    let config = match config::get_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Unable to load config: {:#}", e);
            return Err(e);
        }
    };

    let log = log::get_logger(&config);
    log.start();

    log.info(&format!(
        "Notifying: `{}` {} for `{}`",
        config.github.workflow, config.job_status, config.github.repository
    ));

    let response = match notify::notify(&config) {
        Ok(response) => response,
        Err(e) => {
            log.error(&format!("Unable to send notify: {:#}", e));
            return Err(e);
        }
    };

    println!("{} {}", response.status.as_u16(), response.body);

    if !response.status.is_success() {
        log.warning(&format!("Webhook rejected the message: {}", response.status));
        bail!("Webhook returned {}", response.status);
    }

    Ok(())
}
