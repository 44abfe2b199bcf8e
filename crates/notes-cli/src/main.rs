//! Seeds a user row. Prints an `INSERT` statement by default; `--apply`
//! writes it to the configured database instead.

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;

use notes_core::domain::User;
use notes_core::repositories::UserRepository;
use notes_infrastructure::{create_pool, PgUserRepository};
use notes_security::PasswordService;
use notes_shared::config::AppConfig;

#[derive(Parser, Debug)]
#[command(
    name = "create-user",
    version,
    about = "Notes - create a user account"
)]
struct Args {
    /// Username for the new user (stored exactly as given)
    #[arg(long, default_value = "")]
    username: String,

    /// Password for the new user
    #[arg(long, default_value = "")]
    password: String,

    /// bcrypt cost factor
    #[arg(long, default_value_t = PasswordService::DEFAULT_COST)]
    cost: u32,

    /// Insert into the configured database instead of printing SQL
    #[arg(long)]
    apply: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    notes_shared::telemetry::init_cli_telemetry();
    let args = Args::parse();

    if args.username.is_empty() {
        bail!("--username is required");
    }
    if args.password.is_empty() {
        bail!("--password is required");
    }

    let hash = PasswordService::hash_with_cost(&args.password, args.cost)?;

    if !args.apply {
        println!("{}", insert_statement(&args.username, &hash));
        return Ok(());
    }

    let config = AppConfig::load()?;
    let pool = create_pool(
        &config.database.url,
        1,
        config.database.acquire_timeout_seconds,
    )
    .await?;
    let user = PgUserRepository::new(pool)
        .create(&User::new(args.username, hash))
        .await?;

    info!("Created user {}", user.id);
    println!("{}", user.id);
    Ok(())
}

fn insert_statement(username: &str, hash: &str) -> String {
    format!(
        "INSERT INTO users (username, password_hash) VALUES ('{}', '{}');",
        sql_quote(username),
        sql_quote(hash)
    )
}

fn sql_quote(value: &str) -> String {
    value.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_statement_escapes_quotes() {
        assert_eq!(
            insert_statement("o'brien", "$2b$04$abc"),
            "INSERT INTO users (username, password_hash) VALUES ('o''brien', '$2b$04$abc');"
        );
    }

    #[test]
    fn args_parse() {
        let args = Args::try_parse_from(["create-user", "--username", "alice", "--password", "pw", "--apply"]).unwrap();
        assert_eq!(args.username, "alice");
        assert!(args.apply);
        assert_eq!(args.cost, PasswordService::DEFAULT_COST);
    }
}
