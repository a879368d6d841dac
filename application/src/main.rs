use std::{
    io::{self, Write as _},
    sync::OnceLock,
};

use application::{Args, Config, Discovery, Mode, Reactions};
use discovery::{
    command::{ApplyFilter, ChangeSort},
    domain::Grants,
    infra::JsonFile,
    Command as _,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || LOG_LEVEL
                            .get()
                            .copied()
                            .unwrap_or(log::Level::INFO)
                            >= *meta.level()
                })),
        )
        .init();

    if start().is_err() {
        std::process::exit(1);
    }
}

fn start() -> Result<(), ()> {
    let Args {
        config,
        catalog,
        mode,
    } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let config = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(config.log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let path = catalog.unwrap_or_else(|| config.catalog.path.clone());
    let mut discovery: Discovery = discovery::Discovery::new(
        (&config).into(),
        JsonFile::new(&path),
        Reactions::default(),
        Grants::of(config.role),
    )
    .map_err(|e| {
        log::error!("failed to load catalog `{path}`: {e}");
    })?;
    log::info!(
        "`{path}` loaded: {} listings, browsing as `{}`",
        discovery.snapshot().len(),
        config.role,
    );

    let filter = config.browse.filter.to_state(config.sentinels);
    if let Err(e) = discovery.execute(ApplyFilter(filter)) {
        match e {}
    }

    let mut out = io::stdout().lock();
    match mode {
        Mode::Browse { sort, limit } => application::browse(
            &mut discovery,
            sort.unwrap_or(config.browse.sort),
            limit,
            &mut out,
        ),
        Mode::Swipe { script } => {
            if let Err(e) = discovery.execute(ChangeSort(config.browse.sort))
            {
                log::warn!("configured sort ignored: {e}");
            }
            application::swipe(&mut discovery, script, &mut out)
        }
    }
    .and_then(|()| {
        out.flush()
            .map_err(tracerr::from_and_wrap!(=> application::Error))
    })
    .map_err(|e| {
        log::error!("{e}");
    })
}
