//! This example shows:
//! - Configuring a client with experimental uploads enabled
//! - Uploading an image file read from disk

use miki_api::{Config, ImghoardClient};
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    SimpleLogger::new().init()?;

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: upload <image> [tags...]"))?;
    let tags: Vec<String> = std::env::args().skip(2).collect();
    let tags: Vec<&str> = tags.iter().map(String::as_str).collect();

    // Experimental mode lets files of 1MB and above through as multipart.
    let config = Config::default().tenancy("dev").experimental(true);
    let client = ImghoardClient::new(config)?;

    let file = tokio::fs::File::open(&path).await?;
    let url = client.post_image_reader(file, &tags).await?;
    println!("uploaded {path} to {url}");

    Ok(())
}
