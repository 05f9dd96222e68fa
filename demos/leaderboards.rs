//! This example shows:
//! - Creating an authorized leaderboards client
//! - Fetching a page of a guild's currency leaderboard
//! - Fetching a user's inventory

use miki_api::{
    leaderboards::{LeaderboardsOptions, LeaderboardsType},
    MikiApiClient,
};
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    SimpleLogger::new().init()?;

    let token = std::env::var("MIKI_TOKEN")?;
    let client = MikiApiClient::new(&token)?;

    let options = LeaderboardsOptions::new(LeaderboardsType::Currency)
        .guild(160_067_691_783_127_041)
        .amount(10);
    println!("view online: {}", client.leaderboards_url(&options));

    let page = client.paged_leaderboards(&options).await?;
    println!("page {} of {}", page.current_page(), page.total_pages());
    for item in page.iter() {
        println!("{:?}", item.fields());
    }

    let inventory = client.user_inventory(121_919_449_996_460_033).await?;
    println!("{:#}", inventory.as_json());

    Ok(())
}
