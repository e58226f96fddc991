#[tokio::main]
async fn main() {
    loo_finder_be::start_server().await;
}
