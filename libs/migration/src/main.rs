use migration::Migrator;
use sea_orm_migration::cli;

// `fresh` drops and recreates all tables; `up` applies pending migrations.
// The CLI exits 0 on success and 1 on failure.
#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
