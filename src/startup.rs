use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::web;
use actix_web::App;
use actix_web::HttpServer;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::routes::health_check;
use crate::routes::submit_form;
use crate::storage::SubmissionStore;

/// Wrapper for actix's `Server` with access to the bound port. Not to be
/// confused with actix's `App`!
pub struct Application {
    /// Left private; use `get_port` to access
    port: u16,
    server: Server,
}

impl Application {
    /// Bind the listener, set up the submission store, and build a `Server`.
    pub async fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        let addr = format!("{}:{}", cfg.application.host, cfg.application.port);
        let listener = TcpListener::bind(addr)?;

        // the port assigned by the OS (configured port 0 means "any free
        // port"; the test suite relies on this)
        let port = listener.local_addr()?.port();

        let store = SubmissionStore::new(cfg.storage.data_file);

        let server = run(listener, store)?;
        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Because this consumes `self`, this should be the final function call (or
    /// passed to `tokio::spawn`)
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

/// Declares all API endpoints. The server is not responsible for binding to
/// an address, it only listens to an already bound address.
pub fn run(
    listener: TcpListener,
    store: SubmissionStore,
) -> Result<Server, std::io::Error> {
    // `Data` is externally an `Arc`; every actix worker shares the same store,
    // and therefore the same write lock
    let store = web::Data::new(store);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default()) // wrap the whole app in tracing middleware
            .route("/health_check", web::get().to(health_check))
            .route("/submit-form", web::post().to(submit_form))
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
