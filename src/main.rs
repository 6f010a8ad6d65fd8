use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use bytive::config::Config;
use bytive::doc::ApiDoc;
use bytive::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    log::info!("Server running on {}", config.server_url());

    let bind_addr = (config.server_host.clone(), config.server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config.clone()))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(routes::config)
            .service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .default_service(web::route().to(routes::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
