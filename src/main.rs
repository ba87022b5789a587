use clap::{crate_description, Parser};

use env_logger::Builder;

use log::{error, info, LevelFilter};

use serenity::model::gateway::GatewayIntents;
use serenity::Client;

use std::{env, sync::Arc};

use tokio::sync::Notify;

use bellhop::commands::admin::{Announce, Shutdown};
use bellhop::commands::general::{Ping, Say, Server, Whoami};
use bellhop::commands::CommandSet;
use bellhop::handler::Handler;

#[derive(Parser, Debug)]
#[command(about=crate_description!())]
#[command(version, long_about = None)]
struct CLArgs {
    #[arg(short, long, default_value = "none")]
    loglevel: String,
}

#[tokio::main]
async fn main() {
    let clargs = CLArgs::parse();
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");
    let _ = dotenvy::dotenv();
    let token = env::var("DISCORD_TOKEN").expect("'DISCORD_TOKEN' environment variable not set");

    if clargs.loglevel != "none" {
        let mut builder = Builder::new();

        match clargs.loglevel.to_lowercase().as_str() {
            "trace" => {
                builder.filter_module("bellhop", LevelFilter::Trace).init();
            }
            "debug" => {
                builder.filter_module("bellhop", LevelFilter::Debug).init();
            }
            "info" => {
                builder.filter_module("bellhop", LevelFilter::Info).init();
            }
            "warn" => {
                builder.filter_module("bellhop", LevelFilter::Warn).init();
            }
            "error" => {
                builder.filter_module("bellhop", LevelFilter::Error).init();
            }
            &_ => {}
        }
    } else {
        let env = env_logger::Env::new();
        env_logger::init_from_env(env);
    }

    info!("Starting...");

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILDS;

    let prefix = match env::var("BELLHOP_PREFIX") {
        Ok(prefix) => prefix,
        Err(_error) => String::from("!"),
    };

    let shutdown = Arc::new(Notify::new());

    let commands = CommandSet::new(vec![
        Arc::new(Ping),
        Arc::new(Say),
        Arc::new(Whoami),
        Arc::new(Server),
        Arc::new(Announce),
        Arc::new(Shutdown::new(shutdown.clone())),
    ])
    .with_help();

    let handler = Handler::new(prefix, commands);

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .await
        .expect("Error creating client");

    tokio::spawn(async move {
        let _ = client
            .start()
            .await
            .map_err(|why| error!("client ended: {:?}", why));
    });

    tokio::select! {
        _ = tokio::signal::ctrl_c() => info!("Received Ctrl-C, shutting down."),
        _ = shutdown.notified() => info!("Shutdown command received, shutting down."),
    }
}
