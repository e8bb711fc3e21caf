use std::io;
use std::sync::Arc;

use actix_files::{Files, NamedFile};
use actix_web::{web, App, HttpServer};
use clap::Parser;
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reviewsite::api::{add_reply, add_reply_rest, create_review, get_reviews};
use reviewsite::config::Args;
use reviewsite::seed::seed_reviews;
use reviewsite::store::ReviewStore;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    // Initialize the store and seed it on first run, before serving anything
    let mut store = ReviewStore::open(&args.data_file).map_err(into_io_error)?;
    store
        .seed_if_new(seed_reviews(chrono::Local::now().date_naive()))
        .map_err(into_io_error)?;
    info!(
        "[SERVER] {} reviews in {}",
        store.len(),
        args.data_file.display()
    );
    let store = Arc::new(Mutex::new(store)); // Shared state for all workers

    info!("[SERVER] listening on http://{}", &args.listen);
    let listen = args.listen;
    HttpServer::new(move || {
        let store = store.clone(); // Clone the Arc for each worker

        App::new()
            .app_data(web::Data::new(store))
            .app_data(web::Data::new(args.clone()))
            .service(
                web::scope("/api")
                    .route("/reviews", web::get().to(get_reviews)) // GET /api/reviews
                    .route("/reviews", web::post().to(create_review)) // POST /api/reviews
                    .route("/reply", web::post().to(add_reply)) // POST /api/reply (legacy)
                    .route("/reviews/{review_id}/reply", web::post().to(add_reply_rest)),
            )
            // Serve page assets from the static directory
            .service(Files::new("/static", args.static_dir.clone()))
            // The review page itself (rendering lives entirely client-side)
            .route("/", web::get().to(index))
            .route("/reviews", web::get().to(index))
    })
    .bind(listen)?
    .run()
    .await
}

// Serve the static review page for both / and /reviews
async fn index(args: web::Data<Args>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(args.static_dir.join("index.html"))?)
}

fn into_io_error(e: reviewsite::error::StoreError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e.to_string())
}
