/// Centralized environment configuration.
/// All env vars and defaults are defined here.
#[derive(Debug, Clone)]
pub struct Config {
    /// From address for outgoing inquiry emails.
    /// Default: please-configure@example.com
    pub mail_from: String,

    /// Recipient address for contact-form inquiries.
    /// Default: info@lostescapes.com
    pub mail_to: String,

    /// Mail adapter: "console" or "smtp".
    /// Default: console
    pub mail_adapter: String,

    /// SMTP host. Required when mail_adapter=smtp.
    pub smtp_host: Option<String>,

    /// SMTP port.
    /// Default: 587
    pub smtp_port: u16,

    /// SMTP username. Optional for some servers.
    pub smtp_user: Option<String>,

    /// SMTP password. Optional for some servers.
    pub smtp_pass: Option<String>,
}

impl Config {
    /// Build config from environment variables.
    /// Returns an error if a var is present but unparseable.
    pub fn from_env() -> Result<Self, String> {
        let mail_from = std::env::var("MAIL_FROM")
            .unwrap_or_else(|_| "please-configure@example.com".to_string());

        let mail_to = std::env::var("MAIL_TO")
            .unwrap_or_else(|_| "info@lostescapes.com".to_string());

        let mail_adapter = std::env::var("MAIL_ADAPTER")
            .unwrap_or_else(|_| "console".to_string());

        let smtp_host = std::env::var("SMTP_HOST").ok();
        let smtp_port = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse::<u16>()
            .map_err(|_| "SMTP_PORT must be a valid port number")?;
        let smtp_user = std::env::var("SMTP_USER").ok();
        let smtp_pass = std::env::var("SMTP_PASS").ok();

        Ok(Self {
            mail_from,
            mail_to,
            mail_adapter,
            smtp_host,
            smtp_port,
            smtp_user,
            smtp_pass,
        })
    }

    /// Config for tests. Uses the console mailer and fixed addresses.
    pub fn for_tests() -> Self {
        Self {
            mail_from: "test@example.com".to_string(),
            mail_to: "inquiries@example.com".to_string(),
            mail_adapter: "console".to_string(),
            smtp_host: None,
            smtp_port: 587,
            smtp_user: None,
            smtp_pass: None,
        }
    }
}
