use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use idea_reels::{
    app::App,
    config::Config,
    logger::{CustomLogger, LogBuffer},
};
use log::LevelFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("idea-reels")
        .version(crate_version!())
        .about("Spin category reels to land on a random idea")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding ideas.yml (default ~/.config/idea-reels)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("roll")
                .short("r")
                .long("roll")
                .help("Print one random idea and exit without opening the interface"),
        )
        .get_matches();

    let roll = matches.is_present("roll");
    // Without the interface only warnings are worth surfacing
    let level = if roll {
        LevelFilter::Warn
    } else {
        LevelFilter::Debug
    };
    let log = LogBuffer::new();
    if let Err(e) = CustomLogger::install(log.clone(), level) {
        eprintln!("{}", e);
    }

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    if roll {
        let catalog = config.catalog();
        for entry in log.tail(log.len()) {
            eprintln!("{}", entry);
        }
        for (category, option) in catalog?.roll(&mut rand::thread_rng()) {
            println!("{}: {}", category, option);
        }
        return Ok(());
    }

    App::start(config, log).await
}
