use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use skyhop::app::App;
use skyhop::config::{init_logging, Cli};
use skyhop::game::ArcadeEngine;
use skyhop::input::{map_key, map_mouse};
use skyhop::page::{create_flowing_cubes, CUBE_COUNT};
use skyhop::store::{open_best_score_store, BestScoreStore, MemoryStore};
use skyhop::ui::{arcade_surface, draw_app};
use skyhop::utils::version_line;
use skyhop::REALTIME_FRAME_MS;
use std::io;
use std::time::{Duration, Instant};

type ArcadeApp = App<Box<dyn BestScoreStore>, StdRng>;

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", version_line());
        return Ok(());
    }

    if let Err(e) = init_logging(cli.log_level.as_deref()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let config = cli.game_config();
    let store: Box<dyn BestScoreStore> = if cli.no_save {
        Box::new(MemoryStore::new())
    } else {
        open_best_score_store()
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let cubes = create_flowing_cubes(&mut rng, CUBE_COUNT);
    let engine = ArcadeEngine::new(config, store, rng);
    let mut app = App::new(engine, cubes, Instant::now());
    tracing::info!(seed = ?cli.seed, no_save = cli.no_save, "skyhop starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal even when the loop failed
    let restored = restore_terminal(&mut terminal);

    tracing::info!(best_score = app.engine.best_score(), "skyhop exiting");
    result.and(restored)
}

/// Undo every setup step, even after one of them fails.
fn restore_terminal<B: Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    let mut stdout = io::stdout();
    first_error([
        disable_raw_mode(),
        stdout.execute(DisableMouseCapture).map(|_| ()),
        stdout.execute(LeaveAlternateScreen).map(|_| ()),
        terminal.show_cursor(),
    ])
}

/// The first error among steps that have all already run.
fn first_error<const N: usize>(steps: [io::Result<()>; N]) -> io::Result<()> {
    steps.into_iter().collect()
}

/// Event loop: drain input until the next frame is due, tick, then redraw.
fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut ArcadeApp) -> io::Result<()> {
    let frame_interval = Duration::from_millis(REALTIME_FRAME_MS);
    let now = Instant::now();
    terminal.draw(|f| draw_app(f, app, now))?;
    let mut next_frame = now + frame_interval;

    while !app.should_quit {
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.apply(map_key(app.tab, key), Instant::now()),
                Event::Mouse(mouse) => {
                    let surface = arcade_surface(terminal.size()?);
                    app.apply(map_mouse(app.tab, surface, mouse), Instant::now());
                }
                _ => {}
            }
            continue;
        }

        let now = Instant::now();
        app.on_frame(now);
        terminal.draw(|f| draw_app(f, app, now))?;
        next_frame = now + frame_interval;
    }
    Ok(())
}
