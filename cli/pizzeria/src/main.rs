//! Pizzeria CLI: load menu files, inspect them and take orders.

mod commands;
mod config;
mod exit;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

use commands::Shop;
use config::PizzeriaConfig;

#[derive(Parser)]
#[command(name = "pizzeria", version, about = "Pizza menu loader and order desk")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Use this config file instead of searching for pizzeria.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new pizzeria project
    Init {
        /// Project name
        name: String,
    },
    /// Print the pizzas on a menu
    Menu {
        /// Menu file (default: [menu] default from pizzeria.toml)
        file: Option<String>,
    },
    /// List the toppings a menu declares
    Toppings {
        /// Menu file (default: [menu] default from pizzeria.toml)
        file: Option<String>,
    },
    /// Validate a menu file
    Check {
        /// Menu file (default: [menu] default from pizzeria.toml)
        file: Option<String>,
    },
    /// Take a customer order
    Order {
        /// Names of the pizzas to order
        #[arg(required = true)]
        pizzas: Vec<String>,
        /// Customer name (asked for when omitted)
        #[arg(long)]
        customer: Option<String>,
        /// Menu file (default: [menu] default from pizzeria.toml)
        #[arg(long)]
        file: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = std::env::current_dir()
        .context("reading the working directory")
        .and_then(|cwd| run(cli, &cwd));
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(exit::for_error(&e));
    }
}

fn run(cli: Cli, cwd: &Path) -> anyhow::Result<()> {
    let Cli {
        verbose,
        config,
        command,
    } = cli;

    // `init` runs without loading any config.
    let open_shop = || -> anyhow::Result<Shop> {
        let shop = load_shop(config.as_deref(), cwd)?;
        init_logging(verbose, shop.config.logging.level.as_deref())?;
        Ok(shop)
    };

    match command {
        Commands::Init { name } => {
            init_logging(verbose, None)?;
            commands::init::run(cwd, &name)
        }
        Commands::Menu { file } => commands::menu::run(&open_shop()?, file.as_deref()),
        Commands::Toppings { file } => commands::toppings::run(&open_shop()?, file.as_deref()),
        Commands::Check { file } => commands::check::run(&open_shop()?, file.as_deref()).map(|_| ()),
        Commands::Order {
            pizzas,
            customer,
            file,
        } => commands::order::run(&open_shop()?, file.as_deref(), customer.as_deref(), &pizzas),
    }
}

/// Load configuration from `--config`, or from the nearest `pizzeria.toml`
/// above `cwd`, falling back to defaults rooted at `cwd`.
fn load_shop(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<Shop> {
    if let Some(path) = explicit {
        let config = PizzeriaConfig::load(path)?;
        let root = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
        return Ok(Shop { config, root });
    }
    match PizzeriaConfig::find_and_load(cwd)? {
        Some((config, root)) => Ok(Shop { config, root }),
        None => Ok(Shop {
            config: PizzeriaConfig::default(),
            root: cwd.to_path_buf(),
        }),
    }
}

/// Install the stderr log subscriber.
///
/// `-v` flags take precedence over the configured level.
fn init_logging(verbose: u8, configured: Option<&str>) -> anyhow::Result<()> {
    let level = match (verbose, configured) {
        (0, Some(level)) => level
            .parse::<Level>()
            .with_context(|| format!("invalid [logging] level '{level}'"))?,
        (0, None) => Level::WARN,
        (1, _) => Level::INFO,
        (2, _) => Level::DEBUG,
        _ => Level::TRACE,
    };
    // Tests run several commands in one process; the first subscriber wins.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Full workflow: init, check, then order.
    #[test]
    fn init_check_order_workflow() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("workflow-shop");

        commands::init::create_project(&project_path, "workflow-shop").unwrap();

        let shop = load_shop(Some(project_path.join("pizzeria.toml").as_path()), dir.path()).unwrap();
        assert_eq!(shop.root, project_path);

        assert_eq!(commands::check::run(&shop, None).unwrap(), 4);

        let order = commands::order::build(
            &shop,
            None,
            "Alex",
            &["Hawaiian".to_string(), "Funghi".to_string()],
        )
        .unwrap();
        assert_eq!(order.order().total(), 16.0);
    }

    #[test]
    fn broken_menu_maps_to_format_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("broken-shop");
        commands::init::create_project(&project_path, "broken-shop").unwrap();
        std::fs::write(
            project_path.join("assets/menu.txt"),
            "PizzaMenu 1\n\nHam\nMushroom\n\nFishy [Anchovy]\n",
        )
        .unwrap();

        let shop = load_shop(Some(project_path.join("pizzeria.toml").as_path()), dir.path()).unwrap();
        let err = commands::menu::run(&shop, None).unwrap_err();
        assert_eq!(exit::for_error(&err), exit::FILE_FORMAT_ERROR);
    }

    #[test]
    fn init_ignores_broken_config_above() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pizzeria.toml"), "[shop\nname = ").unwrap();

        let cli = Cli::try_parse_from(["pizzeria", "init", "fresh-shop"]).unwrap();
        run(cli, dir.path()).unwrap();
        assert!(dir.path().join("fresh-shop/pizzeria.toml").is_file());
        assert!(dir.path().join("fresh-shop/assets/menu.txt").is_file());

        // Commands that need a shop still read that config.
        let cli = Cli::try_parse_from(["pizzeria", "check"]).unwrap();
        let err = run(cli, dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }

    #[test]
    fn check_runs_against_found_project() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from(["pizzeria", "init", "found"]).unwrap();
        run(cli, dir.path()).unwrap();

        let nested = dir.path().join("found/assets");
        let cli = Cli::try_parse_from(["pizzeria", "check"]).unwrap();
        run(cli, &nested).unwrap();
    }

    #[test]
    fn cli_parses_order_arguments() {
        let cli = Cli::try_parse_from([
            "pizzeria", "-vv", "order", "--customer", "Sam", "Margherita", "Hawaiian",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Order {
                pizzas, customer, ..
            } => {
                assert_eq!(pizzas, vec!["Margherita", "Hawaiian"]);
                assert_eq!(customer.as_deref(), Some("Sam"));
            }
            _ => panic!("expected order command"),
        }
    }

    #[test]
    fn cli_order_requires_pizzas() {
        assert!(Cli::try_parse_from(["pizzeria", "order"]).is_err());
    }
}
