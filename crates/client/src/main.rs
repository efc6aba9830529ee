//! GoPlayGo terminal client - composition root binary.

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use goplaygo_client::application::{ClientContext, SessionStore};
use goplaygo_client::config;
use goplaygo_client::infrastructure::messaging::ConnectionStateObserver;
use goplaygo_client::infrastructure::platform::{
    DesktopRandomProvider, DesktopStorageProvider,
};
use goplaygo_client::infrastructure::websocket::create_connection;
use goplaygo_client::ui;
use goplaygo_shared::{ClientMessageBuilder, Coord, GameMode};

type Context = Arc<Mutex<ClientContext<DesktopStorageProvider>>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "goplaygo_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GoPlayGo client");

    let storage = DesktopStorageProvider::new();
    let store = SessionStore::new(storage, &DesktopRandomProvider);

    let url = config::server_url()?;
    let mut connection = create_connection(&url);
    let observer = connection.state_observer.clone();
    let command_bus = connection.command_bus.clone();

    let context: Context = Arc::new(Mutex::new(ClientContext::new(
        store,
        command_bus.clone(),
    )));
    {
        let context = Arc::clone(&context);
        connection
            .event_bus
            .subscribe(move |event| match context.lock() {
                Ok(mut ctx) => ctx.handle_event(&event),
                Err(e) => tracing::error!("Client context lock poisoned: {}", e),
            })
            .await;
    }
    // Subscriber is wired; only now may the bridge dispatch events.
    connection.start();

    println!("{}", ui::HELP_TEXT);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(std::time::Duration::from_millis(500));
    let mut counter: u64 = 0;
    let mut last_frame = String::new();

    loop {
        tokio::select! {
            maybe = lines.next_line() => match maybe {
                Ok(Some(line)) => {
                    if !handle_line(&line, &context, &observer) {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::error!("Failed to read input: {}", e);
                    break;
                }
            },
            _ = ticker.tick() => {
                counter += 1;
                let frame = compose_frame(&context, &observer, counter);
                if frame != last_frame {
                    println!("{frame}");
                    last_frame = frame;
                }
            }
        }
    }

    connection.handle.disconnect();
    Ok(())
}

fn compose_frame(context: &Context, observer: &ConnectionStateObserver, counter: u64) -> String {
    let mut frame = ui::render_status(observer.status(), counter);
    let ctx = match context.lock() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Client context lock poisoned: {}", e);
            return frame;
        }
    };
    if let Some(notice) = ctx.notice() {
        frame.push_str("\n! ");
        frame.push_str(notice);
    }
    match (ctx.view(), ctx.game()) {
        (Some(view), Some((game_id, _))) => {
            frame.push('\n');
            frame.push_str(&ui::render_view(view, &game_id));
        }
        (Some(view), None) => {
            frame.push('\n');
            frame.push_str(&ui::render_view(view, "?"));
        }
        (None, _) => {}
    }
    frame
}

/// Handle one line of input. Returns false when the client should exit.
fn handle_line(line: &str, context: &Context, observer: &ConnectionStateObserver) -> bool {
    let command = match ui::parse_command(line) {
        Ok(command) => command,
        Err(message) => {
            println!("{message}");
            return true;
        }
    };

    match command {
        ui::UiCommand::Help => {
            println!("{}", ui::HELP_TEXT);
            true
        }
        ui::UiCommand::Quit => false,
        other => {
            if !observer.is_connected() {
                println!("Not connected to the server yet.");
                return true;
            }
            match context.lock() {
                Ok(ctx) => dispatch_command(other, &ctx),
                Err(e) => tracing::error!("Client context lock poisoned: {}", e),
            }
            true
        }
    }
}

fn dispatch_command(command: ui::UiCommand, ctx: &ClientContext<DesktopStorageProvider>) {
    let user_id = ctx.user_id();
    match command {
        ui::UiCommand::Create { mode, size } => {
            ctx.commands()
                .send(ClientMessageBuilder::create_game(mode, user_id, size));
        }
        ui::UiCommand::Join { game_id } => {
            ctx.commands().send(ClientMessageBuilder::join_game(
                GameMode::Remote,
                user_id,
                &game_id,
            ));
        }
        ui::UiCommand::Place { x, y } => match (ctx.game(), ctx.view()) {
            (Some((game_id, mode)), Some(view)) => {
                if x >= view.size() || y >= view.size() {
                    println!("Coordinates out of range for a {0}x{0} board.", view.size());
                    return;
                }
                ctx.commands().send(ClientMessageBuilder::place_stone(
                    mode,
                    user_id,
                    &game_id,
                    Coord::new(x, y),
                ));
            }
            (Some(_), None) => println!("No game state yet, wait a moment."),
            _ => println!("Not in a game. Create or join one first."),
        },
        ui::UiCommand::Pass => match ctx.game() {
            Some((game_id, mode)) => {
                ctx.commands()
                    .send(ClientMessageBuilder::pass(mode, user_id, &game_id));
            }
            None => println!("Not in a game. Create or join one first."),
        },
        ui::UiCommand::Leave => match ctx.game() {
            Some((game_id, mode)) => {
                ctx.commands()
                    .send(ClientMessageBuilder::leave_game(mode, user_id, &game_id));
            }
            None => println!("Not in a game."),
        },
        ui::UiCommand::Help | ui::UiCommand::Quit => {}
    }
}
