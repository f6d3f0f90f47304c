mod cli;
mod repl;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use solace_chat::{ChatController, ChatOptions, HttpGateway, HttpGatewayConfig};
use solace_config::schema::SolaceConfig;
use solace_config::ThemePreference;
use tracing_subscriber::EnvFilter;

/// Resolve the config file and load it, falling back to defaults.
fn load_config(args: &cli::Args) -> (SolaceConfig, Option<PathBuf>, Option<String>) {
    let explicit = args.config.as_ref().map(PathBuf::from);
    let result = match &explicit {
        Some(path) => solace_config::load_config_from(path),
        None => solace_config::load_config(),
    };
    let path = explicit.or_else(|| solace_config::toml_loader::default_config_path().ok());

    match result {
        Ok(config) => (config, path, None),
        Err(e) => {
            let mut config = SolaceConfig::default();
            solace_config::apply_env_overrides(&mut config);
            (config, path, Some(e.to_string()))
        }
    }
}

fn chat_options(config: &SolaceConfig) -> ChatOptions {
    ChatOptions::default()
        .with_greeting(config.chat.greeting.clone())
        .with_max_input_chars(config.chat.max_input_chars as usize)
        .with_restore_input_on_error(config.chat.restore_input_on_error)
}

fn gateway_config(config: &SolaceConfig) -> HttpGatewayConfig {
    let mut gateway = HttpGatewayConfig::new(config.gateway.url.clone()).with_connect_timeout(
        Duration::from_secs(u64::from(config.gateway.connect_timeout_secs)),
    );
    if let Some(secs) = config.gateway.request_timeout_secs {
        gateway = gateway.with_request_timeout(Duration::from_secs(u64::from(secs)));
    }
    gateway
}

/// Build the controller and drive the terminal until the user leaves.
async fn run(
    config: &SolaceConfig,
    theme: &mut Option<ThemePreference>,
) -> solace_common::Result<()> {
    let gateway = HttpGateway::new(gateway_config(config))?;
    let controller = ChatController::start(Arc::new(gateway), chat_options(config));

    let result = repl::run(&controller, theme).await;
    controller.teardown();
    result?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::parse();

    // Config is read before logging so its level can seed the filter.
    let (mut config, config_path, config_error) = load_config(&args);

    let default_directive = format!("solace={}", config.logging.level.to_ascii_lowercase());
    let log_directive = args.log_level.clone().unwrap_or(default_directive);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "solace=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Solace v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Some(url) = args.gateway_url.as_deref() {
        tracing::info!("Using gateway override: {url}");
        config.gateway.url = url.to_string();
    }
    tracing::info!("Config loaded (gateway: {})", config.gateway.url);

    let mut theme = match config_path.map(ThemePreference::load) {
        Some(Ok(pref)) => Some(pref),
        Some(Err(e)) => {
            tracing::warn!("Theme preference unavailable: {e}");
            None
        }
        None => None,
    };

    if let Err(e) = run(&config, &mut theme).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_options_follow_config() {
        let mut config = SolaceConfig::default();
        config.chat.greeting = "Hello friend".into();
        config.chat.max_input_chars = 12;
        config.chat.restore_input_on_error = false;

        let options = chat_options(&config);
        assert_eq!(options.greeting, "Hello friend");
        assert_eq!(options.max_input_chars, 12);
        assert!(!options.restore_input_on_error);
    }

    #[test]
    fn default_config_matches_default_chat_options() {
        assert_eq!(chat_options(&SolaceConfig::default()), ChatOptions::default());
    }

    #[test]
    fn gateway_config_maps_timeouts() {
        let mut config = SolaceConfig::default();
        config.gateway.connect_timeout_secs = 3;

        let gateway = gateway_config(&config);
        assert_eq!(gateway.url, config.gateway.url);
        assert_eq!(gateway.connect_timeout, Duration::from_secs(3));
        assert_eq!(gateway.request_timeout, None);

        config.gateway.request_timeout_secs = Some(30);
        assert_eq!(
            gateway_config(&config).request_timeout,
            Some(Duration::from_secs(30))
        );
    }
}
