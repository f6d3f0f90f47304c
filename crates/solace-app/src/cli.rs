use clap::Parser;

/// Solace: a terminal chat client for a proxied assistant.
#[derive(Parser, Debug)]
#[command(name = "solace", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Gateway URL override (takes precedence over config and environment).
    #[arg(long)]
    pub gateway_url: Option<String>,

    /// Log filter directive override (e.g. `solace=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "solace",
            "--config",
            "/tmp/solace.toml",
            "--gateway-url",
            "http://127.0.0.1:3000/api/chat",
            "--log-level",
            "solace=debug",
        ])
        .unwrap();
        assert_eq!(args.config.as_deref(), Some("/tmp/solace.toml"));
        assert_eq!(
            args.gateway_url.as_deref(),
            Some("http://127.0.0.1:3000/api/chat")
        );
        assert_eq!(args.log_level.as_deref(), Some("solace=debug"));
    }

    #[test]
    fn flags_are_optional() {
        let args = Args::try_parse_from(["solace"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.gateway_url.is_none());
        assert!(args.log_level.is_none());
    }
}
