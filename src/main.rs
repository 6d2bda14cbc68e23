use std::net::SocketAddr;
use std::sync::Arc;
use wt_store_rust::router::create_app_router;
use wt_store_rust::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize application state with the sample catalog
    let state = Arc::new(AppState::new());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Configure the server address
    let addr = SocketAddr::from(([0, 0, 0, 0], 8010));
    println!("Server running on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
