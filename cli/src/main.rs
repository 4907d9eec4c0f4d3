mod commands;
mod terminal;

use chrono::Local;
use commands::{CommandLine, Commands, products, sales, users};
use terminal::{format, logging, print};
use till_common::config::Config;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging()?;

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        currency_symbol: commands.currency,
    };

    print::banner(cfg.no_banner, cfg.quiet);
    if cfg.quiet == 0 {
        print::aligned_line("Date", format::long_date(Local::now()));
    }

    match commands.command {
        Commands::Sales { catalog } => {
            print::header("opening the till", cfg.quiet);
            sales::sales(catalog.as_deref(), &cfg)
        }
        Commands::Products {
            catalog,
            search,
            category,
        } => products::products(
            catalog.as_deref(),
            search.as_deref(),
            category.as_deref(),
            &cfg,
        ),
        Commands::Users {
            users: users_path,
            search,
            role,
            delete,
            yes,
        } => {
            let query = users::UserQuery {
                search: search.as_deref(),
                role: role.as_deref(),
                delete: delete.as_deref(),
                assume_yes: yes,
            };
            users::users(users_path.as_deref(), query, &cfg)
        }
    }
}
