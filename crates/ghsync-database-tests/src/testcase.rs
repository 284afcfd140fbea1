use futures::Future;
use ghsync_config::Config;
use ghsync_database_interface::DbService;
use ghsync_database_memory::MemoryDb;
use ghsync_database_pg::{
    create_db_pool_connection, create_db_url, get_base_url, setup_test_db, teardown_test_db,
    PostgresDb,
};
use tracing::info;

type BlockResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

/// Run a store test against the memory driver, then against Postgres
/// when `GHSYNC_DATABASE_PG_URL` is set.
pub async fn db_test_case<F, Fut>(test_name: &str, block: F)
where
    F: Fn(Box<dyn DbService>) -> Fut,
    Fut: Future<Output = BlockResult>,
{
    {
        // In memory
        let mem_db = Box::new(MemoryDb::new());
        info!("running memory test {test_name} ...");
        block(mem_db).await.unwrap();
    }

    db_test_case_pg(test_name, block).await;
}

pub async fn db_test_case_pg<F, Fut>(test_name: &str, block: F)
where
    F: Fn(Box<dyn DbService>) -> Fut,
    Fut: Future<Output = BlockResult>,
{
    let mut config = Config::from_env_no_version();
    if config.database.pg.url.is_empty() {
        info!("skipping postgres test {test_name}: no database URL");
        return;
    }

    let full_name = format!("test-ghsync-{test_name}");
    let base_url = get_base_url(&config.database.pg.url);
    let new_url = create_db_url(&base_url, &full_name);
    config.database.pg.url.clone_from(&new_url);
    config.database.pg.pool_size = 2;
    config.database.pg.connection_timeout = 5;

    setup_test_db(&base_url, &full_name).await.unwrap();

    let pool = create_db_pool_connection(&config, &base_url, &full_name)
        .await
        .unwrap();
    let pg_db = Box::new(PostgresDb::new(pool));
    info!("running postgres test {full_name} ...");
    block(pg_db).await.unwrap();

    teardown_test_db(&base_url, &full_name).await.unwrap();
}
