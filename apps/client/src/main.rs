//! # Tiffin Client Entry Point
//!
//! Runs a scripted ordering session and prints the order confirmation.
//!
//! ```text
//! $ RUST_LOG=debug TIFFIN_DELIVERY_ETA="35-45 minutes" tiffin-client
//! ```

#[tokio::main]
async fn main() {
    if let Err(e) = tiffin_client::run().await {
        eprintln!("tiffin-client: {}", e);
        std::process::exit(1);
    }
}
