use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};
use log::info;
use order_state_engine::{OrderStateApi, SqliteDatabase};

use crate::{
    config::{PublicUrl, ServerConfig},
    errors::ServerError,
    routes::{health, CreateOrderStateRoute, DeleteOrderStateRoute, OrderStateByIdRoute, OrderStatesRoute},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    db.run_migrations().await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
    // Seed the canonical states before the listener starts accepting requests
    let seeded = OrderStateApi::new(db.clone()).seed_default_states().await;
    info!("🚀️ {seeded} default order states were seeded");
    let srv = create_server_instance(config, db)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, db: SqliteDatabase) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        let api = OrderStateApi::new(db.clone());
        let public_url = PublicUrl::new(config.public_url.clone());
        let json_config = web::JsonConfig::default()
            .error_handler(|err, _req| ServerError::InvalidRequestBody(err.to_string()).into());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("oss::access_log"))
            .app_data(json_config)
            .app_data(web::Data::new(api))
            .app_data(web::Data::new(public_url))
            .service(health)
            .service(CreateOrderStateRoute::<SqliteDatabase>::new())
            .service(OrderStatesRoute::<SqliteDatabase>::new())
            .service(OrderStateByIdRoute::<SqliteDatabase>::new())
            .service(DeleteOrderStateRoute::<SqliteDatabase>::new())
    })
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
