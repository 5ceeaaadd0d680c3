use showfinder_core::{ApiClient, ClickTarget, Controller, Outcome};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("showfinder_core=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let query = std::env::args().nth(1).unwrap_or_else(|| "batman".to_string());
    let controller = Controller::new(ApiClient::new()?);

    println!("Searching for '{}'...\n", query);
    controller.on_input(&query).await;
    if let Outcome::Failed(e) = controller.on_submit().await {
        return Err(e.into());
    }

    let first = {
        let view = controller.view().await;
        println!("Found {} show(s):", view.entries().len());
        for entry in view.entries() {
            println!("  [{}] {}", entry.data("id").unwrap_or("?"), entry.text_content());
        }
        let target = view.entries().first().map(|entry| ClickTarget::from_element(entry));
        target
    };

    let Some(target) = first else {
        println!("{}", controller.view().await.show_list.text_content());
        return Ok(());
    };

    if let Outcome::Failed(e) = controller.on_click(&target).await {
        return Err(e.into());
    }

    let snapshot = controller.snapshot().await;
    println!("\n--- #show-detail ---\n{}", snapshot.show_detail);
    println!("\n--- #episode-list ---\n{}", snapshot.episode_list);

    Ok(())
}
