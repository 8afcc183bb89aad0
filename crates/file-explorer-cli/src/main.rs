use anyhow::{Context, Result};
use std::path::Path;

use file_explorer::{
    ExplorerAction, ExplorerOptions, ExplorerState, FileCatalog, LayoutCapture, LayoutSource,
    VirtualLayout,
};
use file_explorer_config::ExplorerConfig;

mod cli;
mod render;

use cli::{CatalogArgs, Commands};

fn main() -> Result<()> {
    let args = cli::parse_args();
    init_logger(args.verbose);

    let config = match &args.config {
        Some(path) => ExplorerConfig::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ExplorerConfig::load(),
    };

    match args.command {
        Commands::Tree(tree_args) => {
            let options = catalog_options(&tree_args.catalog, &config);
            let mut state = load_state(&tree_args.catalog, options)?;
            print!("{}", render::render_tree(&state.visible_rows()));
        }
        Commands::Connectors(connector_args) => {
            if !config.connectors_enabled() {
                log::info!("Connectors disabled by config");
                return Ok(());
            }

            let mut options = catalog_options(&connector_args.catalog, &config);
            if let Some(radius) = connector_args.radius {
                options.corner_radius = radius;
            }

            let mut state = load_state(&connector_args.catalog, options)?;
            let source: Box<dyn LayoutSource> = match &connector_args.layout {
                Some(path) => Box::new(load_layout(path)?),
                None => Box::new(
                    VirtualLayout::new(state.visible_rows(), state.options().indent_px)
                        .with_row_height(connector_args.row_height),
                ),
            };

            for path in state.connectors(source.as_ref()) {
                println!("{}", path);
            }
        }
    }

    Ok(())
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Config options with the command-line overrides applied.
fn catalog_options(args: &CatalogArgs, config: &ExplorerConfig) -> ExplorerOptions {
    let mut options = config.options();
    options.collapse_packages |= args.collapse_packages;
    options.start_expanded &= !args.collapsed;
    options
}

fn load_state(args: &CatalogArgs, options: ExplorerOptions) -> Result<ExplorerState> {
    let json = std::fs::read_to_string(&args.catalog)
        .with_context(|| format!("Failed to read catalog {}", args.catalog.display()))?;
    let catalog = FileCatalog::from_json(&json)
        .with_context(|| format!("Failed to parse catalog {}", args.catalog.display()))?;
    log::info!("Loaded {} changed files", catalog.len());

    let mut state = ExplorerState::new(catalog, options);
    if let Some(query) = &args.query {
        state.handle_action(ExplorerAction::SetQuery(query.clone()));
    }
    Ok(state)
}

fn load_layout(path: &Path) -> Result<LayoutCapture> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout {}", path.display()))?;
    LayoutCapture::from_json(&json)
        .with_context(|| format!("Failed to parse layout {}", path.display()))
}
