use dioxus::prelude::*;

use project_board::{logging, App, BoardConfig, Page};

fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let config = BoardConfig::load();
    let page = Page::standard()?;
    tracing::info!(locale = ?config.locale, "launching project board");
    LaunchBuilder::new()
        .with_context(config)
        .with_context(page)
        .launch(App);
    Ok(())
}
