use actix_web::{dev::Server, middleware::Compress, web::Data, App, HttpServer};
use common::{db::init_db, redis::init_redis_pool, settings::types::Settings};
use sea_orm::DbConn;
use server::get_routes;
use web_adapters::auth_middleware::AuthenticateUser;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let db = init_db(&settings).await.map_err(std::io::Error::other)?;
        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );

        let listener = std::net::TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, db, settings)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn run(
    listener: std::net::TcpListener,
    db: DbConn,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let redis_pool = init_redis_pool(&settings).map_err(std::io::Error::other)?;
    let db = Data::new(db);
    let redis_pool = Data::new(redis_pool);
    let settings = Data::new(settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(AuthenticateUser)
            .wrap(Compress::default())
            .service(get_routes())
            .app_data(db.clone())
            .app_data(redis_pool.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
