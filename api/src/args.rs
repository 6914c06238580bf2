use clap::Parser;
use foodrec_core::domain::common::{DatabaseConfig, FoodrecConfig, LLMConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "foodrec-api", about = "Dietary recommendation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(flatten)]
    pub database: DatabaseArgs,
    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long, env = "ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "foodrec")]
    pub database_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "foodrec")]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "foodrec")]
    pub database_name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value_t = 30)]
    pub llm_timeout_secs: u64,
}

impl From<Args> for FoodrecConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.database.database_host,
                port: args.database.database_port,
                username: args.database.database_user,
                password: args.database.database_password,
                name: args.database.database_name,
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                request_timeout_secs: args.llm.llm_timeout_secs,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_minimal_invocation() {
        let args = Args::parse_from(["foodrec-api", "--gemini-api-key", "test-key"]);
        assert_eq!(args.server.port, 3333);
        assert_eq!(args.server.root_path, "/api");
        assert_eq!(args.llm.gemini_model, "gemini-2.5-flash");
        assert_eq!(args.llm.llm_timeout_secs, 30);

        let config = FoodrecConfig::from(args);
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.llm.gemini_api_key, "test-key");
    }

    #[test]
    fn test_allowed_origins_split_on_comma() {
        let args = Args::parse_from([
            "foodrec-api",
            "--gemini-api-key",
            "k",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );
    }
}
