#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quizsheet_importer::run().await
}
