use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ssc_site::args;
use ssc_site::controller::http_handlers;
use ssc_site::SiteState;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ssc_site=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let state = SiteState::from_args(&args);
    let static_dir = args.static_dir.clone();
    let bind = (args.host.clone(), args.port);
    info!("Serving on http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state.clone()))
            .configure(http_handlers::configure)
            .service(Files::new("/assets", static_dir.clone()))
    })
    .bind(bind)?
    .run()
    .await?;
    Ok(())
}
