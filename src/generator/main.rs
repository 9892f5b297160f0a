use std::convert::Infallible;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};

use deploy_dashboard::config::LogFormat;
use deploy_dashboard::services::{load_template, render_template, TemplateOptions};
use deploy_dashboard::telemetry::init_tracing;

/// `nginx-config` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "nginx-config",
    about = "Render an nginx config for the dashboard frontend from an environment template",
    version
)]
struct CliArgs {
    /// Template environment; selects `nginx-<env>.conf`.
    #[arg(long, default_value = "dev")]
    env: String,
    /// Public domain substituted for `example.com`.
    #[arg(long, default_value = "example.com")]
    domain: String,
    /// API upstream substituted for the template's backend URL.
    #[arg(long = "api", value_name = "url", default_value = "http://api:8080")]
    api_url: String,
    /// Keep TLS directives; only `--ssl=false` comments them out.
    #[arg(long, default_value = "true", action = ArgAction::Set, value_parser = parse_ssl_flag)]
    ssl: bool,
    /// Where the rendered config is written.
    #[arg(long, value_name = "path", default_value = "./nginx.conf")]
    output: PathBuf,
    /// Directory holding the `nginx-<env>.conf` templates.
    #[arg(long, value_name = "dir", default_value = "templates")]
    templates: PathBuf,
}

/// Any value other than `false` leaves TLS enabled.
fn parse_ssl_flag(raw: &str) -> Result<bool, Infallible> {
    Ok(raw != "false")
}

fn main() -> anyhow::Result<()> {
    init_tracing(LogFormat::Pretty, "info");

    let args = CliArgs::parse();

    let template = load_template(&args.templates, &args.env)?;
    let options = TemplateOptions {
        domain: args.domain,
        api_url: args.api_url,
        ssl_enabled: args.ssl,
    };
    let rendered = render_template(&template, &options);

    std::fs::write(&args.output, rendered)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    tracing::info!(
        env = %args.env,
        ssl = options.ssl_enabled,
        "Nginx configuration generated at: {}",
        args.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ssl_from(args: &[&str]) -> bool {
        let argv = std::iter::once("nginx-config").chain(args.iter().copied());
        CliArgs::try_parse_from(argv).unwrap().ssl
    }

    #[test]
    fn test_ssl_defaults_to_enabled() {
        assert!(ssl_from(&[]));
    }

    #[test]
    fn test_only_false_disables_ssl() {
        assert!(!ssl_from(&["--ssl=false"]));
        assert!(ssl_from(&["--ssl=true"]));
        assert!(ssl_from(&["--ssl=no"]));
        assert!(ssl_from(&["--ssl=0"]));
    }

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["nginx-config"]).unwrap();
        assert_eq!(args.env, "dev");
        assert_eq!(args.domain, "example.com");
        assert_eq!(args.api_url, "http://api:8080");
        assert_eq!(args.output, PathBuf::from("./nginx.conf"));
    }
}
