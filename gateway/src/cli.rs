use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the API server (default if no command specified)
    Serve(ServeArgs),
    /// Load the configuration and print it with secrets redacted
    Check,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Host to bind, overrides `http.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overrides `http.port`
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_is_optional() {
        let cli = Cli::parse_from(["answer-judge"]);
        assert_eq!(cli.config, "config.yaml");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from([
            "answer-judge",
            "--config",
            "judge.yaml",
            "serve",
            "--host",
            "127.0.0.1",
            "-p",
            "9000",
        ]);
        assert_eq!(cli.config, "judge.yaml");
        match cli.command {
            Some(Commands::Serve(args)) => {
                assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
                assert_eq!(args.port, Some(9000));
            }
            _ => panic!("expected serve"),
        }
    }
}
