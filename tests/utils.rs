use actix_http::Request;
use actix_web::{
    dev::{Service, ServiceResponse},
    test,
    web::Data,
    App,
};
use common::{
    db::init_db,
    redis::init_redis_pool,
    settings::{get_test_settings, types::Settings},
};
use deadpool_redis::Pool;
use sea_orm::{DbConn, DbErr};
use server::get_routes;
use web_adapters::auth_middleware::AuthenticateUser;

pub struct Connections<S>
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    pub app: S,
    pub db: DbConn,
    pub redis_pool: Pool,
    pub settings: Settings,
}

pub async fn init_app() -> Result<
    Connections<impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>>,
    DbErr,
> {
    let settings = get_test_settings();
    let db = init_db(&settings).await?;
    let redis_pool = init_redis_pool(&settings).expect("Cannot create deadpool redis.");
    let app = test::init_service(
        // MYMEMO: keep in sync with startup.rs
        App::new()
            .wrap(AuthenticateUser)
            .service(get_routes())
            .app_data(Data::new(db.clone()))
            .app_data(Data::new(redis_pool.clone()))
            .app_data(Data::new(settings.clone())),
    )
    .await;
    Ok(Connections {
        app,
        db,
        redis_pool,
        settings,
    })
}
