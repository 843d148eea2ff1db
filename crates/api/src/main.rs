//! Catalog Recommender API - HTTP serving boundary for the scoring engine.

use recommender_api::Server;
use recommender_core::load_dotenv;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    Server::from_env()?.run().await
}
