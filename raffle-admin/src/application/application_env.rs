use anyhow::anyhow;
use std::{path::PathBuf, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    /// Backend address without the `/v1` prefix
    pub api_base_url: String,
    pub http_timeout: Duration,

    pub session_file: PathBuf,

    pub search_debounce: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("RAFFLE_ADMIN_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("RAFFLE_ADMIN_LOG_FILENAME")?;
        let api_base_url = Self::env_var("RAFFLE_ADMIN_API_BASE_URL")?;
        let http_timeout = Self::env_var("RAFFLE_ADMIN_HTTP_TIMEOUT_SECONDS")?.parse()?;
        let http_timeout = Duration::from_secs(http_timeout);
        let session_file = Self::env_var("RAFFLE_ADMIN_SESSION_FILE")?.into();
        let search_debounce = Self::env_var("RAFFLE_ADMIN_SEARCH_DEBOUNCE_MILLIS")?.parse()?;
        let search_debounce = Duration::from_millis(search_debounce);

        Ok(Self {
            log_directory,
            log_filename,
            api_base_url,
            http_timeout,
            session_file,
            search_debounce,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serial_test::serial;

    const VARIABLES: [(&str, &str); 6] = [
        ("RAFFLE_ADMIN_LOG_DIRECTORY", "logs"),
        ("RAFFLE_ADMIN_LOG_FILENAME", "raffle-admin.log"),
        ("RAFFLE_ADMIN_API_BASE_URL", "http://localhost:8080"),
        ("RAFFLE_ADMIN_HTTP_TIMEOUT_SECONDS", "15"),
        ("RAFFLE_ADMIN_SESSION_FILE", "/tmp/raffle-admin/session.json"),
        ("RAFFLE_ADMIN_SEARCH_DEBOUNCE_MILLIS", "300"),
    ];

    fn set_variables() {
        for (name, value) in VARIABLES {
            std::env::set_var(name, value);
        }
    }

    #[test]
    #[serial]
    fn parse_ok() {
        set_variables();

        let env = ApplicationEnv::parse().unwrap();

        assert_eq!(env.api_base_url, "http://localhost:8080");
        assert_eq!(env.http_timeout, Duration::from_secs(15));
        assert_eq!(env.session_file, PathBuf::from("/tmp/raffle-admin/session.json"));
        assert_eq!(env.search_debounce, Duration::from_millis(300));
    }

    #[test]
    #[serial]
    fn parse_missing_variable() {
        set_variables();
        std::env::remove_var("RAFFLE_ADMIN_API_BASE_URL");

        let result = ApplicationEnv::parse();

        assert_eq!(
            result.err().map(|err| err.to_string()).as_deref(),
            Some("environment variable RAFFLE_ADMIN_API_BASE_URL not set")
        );
    }

    #[test]
    #[serial]
    fn parse_invalid_timeout() {
        set_variables();
        std::env::set_var("RAFFLE_ADMIN_HTTP_TIMEOUT_SECONDS", "soon");

        let result = ApplicationEnv::parse();

        assert!(result.is_err());
    }
}
