use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use verdant::app::{ActiveView, App, Focus};
use verdant::config::ClientConfig;
use verdant::{logging, ui};

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = ClientConfig::from_env();
    logging::init(config.log_file.as_deref())?;

    setup_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let mut app = App::new(config);

    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    restore_terminal(&mut terminal)?;
    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app
        .message_rx
        .take()
        .expect("message receiver already taken");

    let tick = std::time::Duration::from_millis(app.config.tick_ms);

    // Schedule the initial snapshot loads
    app.initialize();

    loop {
        // Draw only when state changed since the last frame
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, app);
            })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            // Periodic tick for notice expiry and animations
            _ = tokio::time::sleep(tick) => {
                app.tick();
            }

            // Async completions from remote calls
            maybe_msg = message_rx.recv() => {
                if let Some(msg) = maybe_msg {
                    app.handle_message(msg);
                }
            }

            // Keyboard events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            handle_key(app, key);
                            if app.should_quit {
                                return Ok(());
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}

/// Route a key press to the active view's handler.
fn handle_key(app: &mut App, key: KeyEvent) {
    app.mark_dirty();

    // Global keybinds (always active)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.view {
        ActiveView::Dashboard => handle_dashboard_key(app, key),
        ActiveView::DiseaseDetection => handle_detection_key(app, key),
        ActiveView::AddPlant => handle_add_plant_key(app, key),
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('1') => app.show_dashboard(),
        KeyCode::Char('2') | KeyCode::Char('d') => app.show_detection(),
        KeyCode::Char('3') | KeyCode::Char('n') => app.show_add_plant(),
        KeyCode::Char('r') => app.refresh_all(),
        KeyCode::Char('w') => app.water_selected_plant(),
        KeyCode::Char('x') => app.resolve_selected_alert(),
        KeyCode::Tab => app.next_view(),
        KeyCode::Left | KeyCode::Right => app.toggle_focus(),
        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),
        KeyCode::Enter => match app.focus {
            Focus::Plants => {
                app.select_plant_at(app.plants_index);
                app.show_detection();
            }
            Focus::Alerts => app.resolve_selected_alert(),
        },
        _ => {}
    }
}

fn handle_detection_key(app: &mut App, key: KeyEvent) {
    // Ctrl+D triggers the analysis; rejected actions raise their own notice
    if key.code == KeyCode::Char('d') && key.modifiers.contains(KeyModifiers::CONTROL) {
        let _ = app.analyze_image();
        return;
    }

    match key.code {
        KeyCode::Esc => app.show_dashboard(),
        KeyCode::Tab => app.next_view(),
        KeyCode::Enter => app.select_image_from_input(),
        KeyCode::Backspace => {
            app.image_input.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.image_input.push(c);
        }
        _ => {}
    }
}

fn handle_add_plant_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.show_dashboard(),
        KeyCode::Tab | KeyCode::Up | KeyCode::Down => app.form.toggle_field(),
        KeyCode::Enter => {
            let _ = app.submit_add_plant();
        }
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.push_char(c);
        }
        _ => {}
    }
}
