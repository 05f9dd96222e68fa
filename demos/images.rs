//! This example shows:
//! - Creating an Imghoard client
//! - Searching images by tag
//! - Walking to the next page of the same search
//! - Fetching a single image by its ID

use miki_api::{Config, Imghoard, ImghoardClient};
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // setting up logging.
    SimpleLogger::new().init()?;

    // Create a client for the public instance
    let client = ImghoardClient::new(Config::default())?;

    // First page of images tagged both "animal" and "cat"
    let first = client.images(&["animal", "cat"]).await?;
    for image in first.iter() {
        println!("{} {:?} {}", image.id(), image.tags(), image.url());
    }

    // Same tags, one page further
    let second = client.next_page(&first).await?;
    println!("page {} has {} images", second.page(), second.len());

    // Look one of them up again by ID
    if let Some(image) = second.first() {
        let again = client.image(image.id()).await?;
        println!("fetched {} again: {}", again.id(), again.url());
    }

    Ok(())
}
