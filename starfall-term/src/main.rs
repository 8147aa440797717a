mod render;

use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use console::{Key, Term};
use starfall_field::{
    AudioSink, FieldEvent, FieldView, ReplayedField, SimulatedField, SoundCue, TIME_STEP,
};

/// starfall - terminal host for the starfall field simulation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the piece bag (OS-seeded if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Play back a replay from a JSON instruction file
    #[arg(short, long)]
    replay: Option<PathBuf>,
}

/// Discrete commands delivered from the input thread. Key repeat comes
/// from the terminal itself; the simulation only sees discrete events.
enum Command {
    Left,
    Right,
    Rotate,
    SoftDrop,
    HardDrop,
    Pause,
    Quit,
}

/// Audio collaborator stand-in: logs cues instead of playing samples.
struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, cue: SoundCue) {
        tracing::debug!(?cue, "sound");
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let term = Term::stdout();
    term.clear_screen()?;
    term.hide_cursor()?;
    let result = match args.replay {
        Some(path) => run_replay(&term, &path),
        None => run_game(&term, args.seed),
    };
    term.show_cursor()?;
    result
}

fn spawn_input_thread() -> flume::Receiver<Command> {
    let (sender, receiver) = flume::unbounded();
    thread::spawn(move || {
        let term = Term::stdout();
        loop {
            let Ok(key) = term.read_key() else { break };
            let command = match key {
                Key::ArrowLeft => Command::Left,
                Key::ArrowRight => Command::Right,
                Key::ArrowUp | Key::Char('z') | Key::Char('x') => Command::Rotate,
                Key::ArrowDown => Command::SoftDrop,
                Key::Char(' ') => Command::HardDrop,
                Key::Char('p') | Key::Char('P') => Command::Pause,
                Key::Char('q') | Key::Char('Q') | Key::Escape => Command::Quit,
                _ => continue,
            };
            let quit = matches!(command, Command::Quit);
            if sender.send(command).is_err() || quit {
                break;
            }
        }
    });
    receiver
}

fn run_game(term: &Term, seed: Option<u64>) -> anyhow::Result<()> {
    let mut field = match seed {
        Some(seed) => SimulatedField::with_seed(seed),
        None => SimulatedField::new(),
    };
    field.set_audio_sink(Box::new(LogAudio));
    let events = field.events();
    let input = spawn_input_thread();

    let mut last = Instant::now();
    let mut accumulator = 0.0f32;
    let mut paused = false;

    loop {
        // Commands are delivered before the simulation ticks.
        for command in input.try_iter() {
            match command {
                Command::Left => field.move_left(),
                Command::Right => field.move_right(),
                Command::Rotate => field.rotate(),
                Command::SoftDrop => field.soft_drop(),
                Command::HardDrop => field.hard_drop(),
                Command::Pause => {
                    paused = !paused;
                    field.set_paused(paused);
                }
                Command::Quit => return Ok(()),
            }
        }

        // Fixed-timestep drain: simulation rate is decoupled from the
        // render rate.
        let now = Instant::now();
        accumulator += now.duration_since(last).as_secs_f32();
        last = now;
        while accumulator >= TIME_STEP {
            field.update(TIME_STEP);
            accumulator -= TIME_STEP;
        }

        for event in events.try_iter() {
            if let FieldEvent::LevelChanged(level) = event {
                tracing::info!(level, "level up");
            }
        }

        let status = if field.is_game_over() {
            "GAME OVER - press q to quit"
        } else if paused {
            "PAUSED - press p to resume"
        } else {
            "arrows move/drop, z rotate, space hard drop, p pause, q quit"
        };
        render::render(term, &field, status)?;
        thread::sleep(Duration::from_millis(16));
    }
}

fn run_replay(term: &Term, path: &Path) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut field = ReplayedField::new();
    field.load(&json);
    if let Some(error) = field.load_error() {
        anyhow::bail!("replay rejected: {error}");
    }

    let input = spawn_input_thread();
    let mut last = Instant::now();
    let mut accumulator = 0.0f32;

    while !field.finished() {
        if input.try_iter().any(|c| matches!(c, Command::Quit)) {
            return Ok(());
        }
        let now = Instant::now();
        accumulator += now.duration_since(last).as_secs_f32();
        last = now;
        while accumulator >= TIME_STEP {
            field.update(TIME_STEP);
            accumulator -= TIME_STEP;
        }
        render::render(term, &field, "replay - press q to quit")?;
        thread::sleep(Duration::from_millis(16));
    }

    render::render(term, &field, "replay finished - press q to quit")?;
    for command in input.iter() {
        if matches!(command, Command::Quit) {
            break;
        }
    }
    Ok(())
}
