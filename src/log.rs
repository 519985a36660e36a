use crate::config::Config;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

pub trait Logger {
    fn start(&self);
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

struct TracingLogger {
    application: String,
    repository: String,
    run_id: String,
}

impl Logger for TracingLogger {
    fn start(&self) {
        tracing::info!(
            application = %self.application,
            repository = %self.repository,
            run_id = %self.run_id,
            "Starting notify-slack-deploy"
        );
    }

    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warning(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// Diagnostics go to stderr; stdout is reserved for the webhook response.
pub fn init() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn get_logger(config: &Config) -> Box<dyn Logger> {
    Box::new(TracingLogger {
        application: config.github.event.repository.name.clone(),
        repository: config.github.repository.clone(),
        run_id: config.github.run_id.clone(),
    })
}
