use super::args::{Cli, Commands, RoundsCommand, RoundsSourceArgs};
use super::handlers;
use anyhow::Result;
use vibegit_runtime::{Config, Env, RoundCatalog, logging};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(&cli.log_level.to_string())?;

    let env = Env::capture();
    let config = Config::load_resolved(cli.config.as_deref(), &env)?;

    match cli.command {
        Commands::Serve { host, port } => {
            let settings = config.server_settings(host.as_deref(), port, &env)?;
            handlers::serve::handle(settings)
        }

        Commands::Health => handlers::health::handle(cli.format),

        Commands::Rounds { command } => match command {
            RoundsCommand::List { source } => {
                let catalog = load_catalog(&config, &source, &env);
                handlers::rounds_list::handle(&catalog, cli.format)
            }
            RoundsCommand::Show { source, open, all } => {
                let catalog = load_catalog(&config, &source, &env);
                handlers::rounds_show::handle(&catalog, &open, all, cli.format)
            }
        },
    }
}

fn load_catalog(config: &Config, source: &RoundsSourceArgs, env: &Env) -> RoundCatalog {
    let dir = config.rounds_dir(source.dir.as_deref(), env);
    tracing::debug!(dir = %dir.display(), "resolved rounds directory");
    RoundCatalog::load(dir)
}
