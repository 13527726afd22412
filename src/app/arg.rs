use std::path::PathBuf;

use clap::Parser;

/// Send an HTTP/1.1 request and print the parsed response.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// HTTP method to use.
    #[clap(long, default_value = "GET")]
    pub method: String,

    /// Host to connect to. Also sent as the `Host` header.
    #[clap(long, default_value = "localhost")]
    pub host: String,

    /// Path to request.
    #[clap(long, default_value = "/")]
    pub path: String,

    /// Port to connect to.
    #[clap(long, default_value_t = 8080)]
    pub port: u16,

    /// Request body.
    #[clap(long, default_value = "")]
    pub body: String,

    #[clap(long, default_value = "warn")]
    pub log_level: super::logging::Level,

    #[clap(long)]
    pub log_file: Option<PathBuf>,

    #[clap(long)]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["sendreq"]).unwrap();

        assert_eq!(args.method, "GET");
        assert_eq!(args.host, "localhost");
        assert_eq!(args.path, "/");
        assert_eq!(args.port, 8080);
        assert_eq!(args.body, "");
        assert_eq!(args.log_level, super::super::logging::Level::Warn);
        assert!(args.log_file.is_none());
        assert!(!args.log_json);
    }

    #[test]
    fn test_args_override() {
        let args = Args::try_parse_from([
            "sendreq",
            "--method",
            "POST",
            "--host",
            "example.com",
            "--path",
            "/submit",
            "--port",
            "80",
            "--body",
            "a=1",
            "--log-level",
            "debug",
            "--log-json",
        ])
        .unwrap();

        assert_eq!(args.method, "POST");
        assert_eq!(args.host, "example.com");
        assert_eq!(args.path, "/submit");
        assert_eq!(args.port, 80);
        assert_eq!(args.body, "a=1");
        assert_eq!(args.log_level, super::super::logging::Level::Debug);
        assert!(args.log_json);
    }
}
