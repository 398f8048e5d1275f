#[tokio::main]
async fn main() -> anyhow::Result<()> {
    wordgame_agent::run().await
}
