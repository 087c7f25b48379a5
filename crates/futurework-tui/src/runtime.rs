use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use futurework_core::{ContentLoader, LoadedContent};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::input::{handle_key, handle_mouse};
use crate::render::render;
use crate::ui::{App, Tui};

/// Sleep until the carousel's next advance, or forever while it is paused
async fn carousel_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending::<()>().await,
    }
}

pub(crate) async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    loader: Option<ContentLoader>,
) -> Result<()> {
    // Create async event stream for terminal events
    let mut event_stream = EventStream::new();

    // Redraw tick so the slide progress bar keeps moving
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    // Content arrives once from a background task; the page renders meanwhile
    let (content_tx, mut content_rx) = tokio::sync::mpsc::channel::<LoadedContent>(1);
    match loader {
        Some(loader) => {
            tokio::spawn(async move {
                let content = loader.load().await;
                // Receiver is gone if the user quit before loading finished
                let _ = content_tx.send(content).await;
            });
        }
        None => {
            info!("No content source configured, showing bundled content");
            app.apply_content(LoadedContent::bundled());
        }
    }

    while app.running {
        terminal.draw(|f| render(f, app, Instant::now()))?;

        let deadline = app.carousel.deadline();

        tokio::select! {
            maybe_event = event_stream.next() => {
                let now = Instant::now();
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        handle_key(app, key, now);
                    }
                    Some(Ok(Event::Mouse(mouse))) => handle_mouse(app, mouse, now),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => app.quit(),
                }
            }

            Some(content) = content_rx.recv() => {
                if app.running {
                    app.apply_content(content);
                }
            }

            _ = carousel_deadline(deadline) => {
                app.tick(Instant::now());
            }

            _ = tick_interval.tick() => {
                // Catch a deadline missed while another branch was busy
                if app.tick(Instant::now()) {
                    debug!("Carousel advanced on tick");
                }
            }
        }
    }

    Ok(())
}
