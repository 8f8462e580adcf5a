#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcswap_lib::main().await
}
