use clap::Parser;
use sqlx::postgres::PgConnectOptions;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, short, default_value_t = 3)]
    pub verbosity: usize,
    #[arg(long, short, default_value_t = false)]
    pub quiet: bool,
    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,
    /// Origins allowed to make credentialed cross-origin requests
    #[arg(
        long,
        env = "CORS_ORIGINS",
        value_delimiter = ',',
        default_values = ["http://localhost:3000", "http://54.88.82.65:3000"]
    )]
    pub allowed_origins: Vec<String>,
    #[command(flatten)]
    pub database: DatabaseConfig,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DatabaseConfig {
    #[arg(long = "db-host", env = "DB_HOST", default_value = "localhost")]
    pub host: String,
    #[arg(id = "db_port", long = "db-port", env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,
    #[arg(long = "db-user", env = "DB_USER", default_value = "postgres")]
    pub user: String,
    #[arg(
        long = "db-password",
        env = "DB_PASSWORD",
        default_value = "",
        hide_env_values = true
    )]
    pub password: String,
    #[arg(long = "db-name", env = "DB_NAME", default_value = "canciones")]
    pub name: String,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}
