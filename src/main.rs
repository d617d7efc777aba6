#[tokio::main]
async fn main() {
    testmaster::run().await;
}
