use clap::{Args as ClapArgs, Parser};
use medivoice_core::{
    domain::common::{LLMConfig, MedivoiceConfig, SessionConfig},
    infrastructure::llm::gemini_client::DEFAULT_GEMINI_BASE_URL,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "medivoice-api", version, about = "MediVoice API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub session: SessionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. "/api".
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = DEFAULT_GEMINI_BASE_URL
    )]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SessionArgs {
    /// Minutes a session may sit unused before it is dropped.
    #[arg(
        long = "session-idle-ttl-minutes",
        env = "SESSION_IDLE_TTL_MINUTES",
        default_value_t = 720
    )]
    pub idle_ttl_minutes: u64,

    /// The least recently used session is evicted beyond this count.
    #[arg(long = "max-sessions", env = "MAX_SESSIONS", default_value_t = 10_000)]
    pub max_sessions: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// tracing-subscriber EnvFilter directives.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for MedivoiceConfig {
    fn from(args: Args) -> Self {
        MedivoiceConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            session: SessionConfig {
                idle_ttl_minutes: args.session.idle_ttl_minutes,
                max_sessions: args.session.max_sessions,
            },
        }
    }
}
