use pos_terminal::catalog::MenuCatalog;
use pos_terminal::shell::Shell;
use pos_terminal::storage::JsonStore;
use pos_terminal::setup_environment;
use std::rc::Rc;

fn main() -> anyhow::Result<()> {
    let config = setup_environment()?;
    tracing::info!(data_dir = %config.data_dir.display(), "Starting POS terminal");

    let menu_store = JsonStore::new(config.menu_path());
    let catalog = Rc::new(MenuCatalog::load(&menu_store));
    if catalog.is_empty() {
        tracing::warn!("Menu catalog is empty; ordering is unavailable this session");
    }

    Shell::new(config, catalog).run();
    tracing::info!("POS terminal shut down");
    Ok(())
}
