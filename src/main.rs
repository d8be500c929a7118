use aqi_mock::api_routes::AppState;
use aqi_mock::app::create_app;
use aqi_mock::config::{DEFAULT_CONFIG_FILE, load_config};
use aqi_mock::generator::generate_all_data_for;
use axum_server::tls_rustls::RustlsConfig;
use chrono::Local;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::ffi::OsString;
use std::net::{IpAddr, SocketAddr};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Location configuration file
    #[arg(short, long, env = "AQI_MOCK_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Seed for reproducible data
    #[arg(short, long, env = "AQI_MOCK_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve mock data over http (default)
    Serve(ServeArgs),
    /// Print a single payload as json
    Generate {
        #[arg(short, long)]
        pretty: bool,
    },
}

#[derive(clap::Args, Debug)]
struct ServeArgs {
    /// Ip to listen to
    #[arg(short, long, default_value = "127.0.0.1")]
    ip: String,

    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Directory with static dashboard files
    #[arg(short, long, env = "AQI_MOCK_ASSETS_PATH")]
    assets_path: Option<String>,

    #[arg(short, long, env = "KEY_FILE_PATH")]
    key_file_path: Option<String>,

    #[arg(short = 'C', long, env = "CERT_FILE_PATH")]
    cert_file_path: Option<String>,
}

/// Without a subcommand the arguments are parsed again as if `serve` had been
/// given, so its options still pick up their defaults and environment.
fn parse_args<I, T>(argv: I) -> Result<(Args, Command), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let mut args = Args::try_parse_from(argv.iter())?;
    let command = match args.command.take() {
        Some(command) => command,
        None => {
            let serve_argv = argv.into_iter().chain([OsString::from("serve")]);
            match Args::try_parse_from(serve_argv)?.command {
                Some(command) => command,
                None => return Err(clap::Error::new(ErrorKind::MissingSubcommand)),
            }
        }
    };
    Ok((args, command))
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let (args, command) = match parse_args(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(error) => error.exit(),
    };

    let config = match load_config(&args.config) {
        Ok(config) => config,
        Err(error) => {
            log::error!("Cannot load configuration {}: {}", args.config, error);
            return ExitCode::FAILURE;
        }
    };

    match command {
        Command::Generate { pretty } => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let payload = generate_all_data_for(&mut rng, Local::now(), &config.locations);
            let json = if pretty {
                serde_json::to_string_pretty(&payload)
            } else {
                serde_json::to_string(&payload)
            };
            match json {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(error) => {
                    log::error!("Cannot serialize payload: {}", error);
                    ExitCode::FAILURE
                }
            }
        }
        Command::Serve(serve_args) => {
            serve(serve_args, AppState::new(config.locations, args.seed)).await
        }
    }
}

async fn serve(args: ServeArgs, state: AppState) -> ExitCode {
    let ip = match args.ip.parse::<IpAddr>() {
        Ok(ip) => ip,
        Err(error) => {
            log::error!("Cannot parse ip \"{}\": {}", args.ip, error);
            return ExitCode::FAILURE;
        }
    };
    let addr = SocketAddr::new(ip, args.port);

    let app = create_app(state, args.assets_path.as_deref());

    log::info!("listening on {}", addr);
    let result = match (args.key_file_path, args.cert_file_path) {
        (Some(key_file_path), Some(cert_file_path)) => {
            log::info!(
                "using tls with key file {} and cert file {}",
                key_file_path,
                cert_file_path
            );
            let tls = match RustlsConfig::from_pem_file(cert_file_path, key_file_path).await {
                Ok(tls) => tls,
                Err(error) => {
                    log::error!("Cannot load tls configuration: {}", error);
                    return ExitCode::FAILURE;
                }
            };
            axum_server::bind_rustls(addr, tls)
                .serve(app.into_make_service())
                .await
        }
        (None, None) => {
            axum_server::bind(addr)
                .serve(app.into_make_service())
                .await
        }
        _ => {
            log::error!("Both a key file and a cert file are needed for tls");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = result {
        log::error!("Server stopped: {}", error);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
