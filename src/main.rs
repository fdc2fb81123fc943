use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use mentoria_server::app_state::AppState;
use mentoria_server::config::Config;
use mentoria_server::handlers;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config);

    log::info!("Starting MentorIA server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::resolve_chat)
            .service(handlers::chat_or_quiz)
            .service(handlers::create_quiz)
            .service(handlers::get_quiz)
            .service(handlers::grade_quiz)
            .service(handlers::health_check)
            .service(handlers::health_check_live)
            .service(handlers::health_check_ready)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
