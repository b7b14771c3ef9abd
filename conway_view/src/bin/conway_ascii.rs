// conway_ascii.rs - Console front end: the world printed as text, one
// command per line.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use conway::{Simulation, debug_dump, render_ascii};
use conway_view::{ViewConfig, ViewError, init_logging};
use tracing::{info, warn};

const FAST_FORWARD_STEPS: u64 = 100;
const REAL_TIME_DELAY: Duration = Duration::from_millis(100);
const HELP: &str = "commands: s step, f fast-forward 100, r N run N, n new random world, c clear, d dump, q quit";

fn main() -> Result<(), ViewError> {
    init_logging();

    let config = ViewConfig::from_env()?;
    let mut sim = Simulation::new(config.width, config.height)?;
    sim.randomize(config.types)?;
    info!(width = config.width, height = config.height, "starting console");

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    print_world(&mut out, &sim)?;
    writeln!(out, "{HELP}")?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        match words.next() {
            Some("s") => sim.step(),
            Some("f") => sim.step_n(FAST_FORWARD_STEPS),
            Some("r") => {
                let steps = match words.next().map(str::parse::<u64>) {
                    Some(Ok(steps)) => steps,
                    None => 1,
                    Some(Err(e)) => {
                        warn!(error = %e, "bad step count");
                        continue;
                    }
                };
                sim.set_running(true);
                for _ in 0..steps {
                    sim.step();
                    write!(out, "\x1b[2J\x1b[H")?;
                    print_world(&mut out, &sim)?;
                    out.flush()?;
                    thread::sleep(REAL_TIME_DELAY);
                }
                sim.set_running(false);
                continue;
            }
            Some("n") => {
                let types = sim.world().types();
                sim.randomize(types)?;
            }
            Some("c") => sim.clear(),
            Some("d") => write!(out, "{}", debug_dump(sim.world()))?,
            Some("q") => break,
            _ => {
                writeln!(out, "{HELP}")?;
                out.flush()?;
                continue;
            }
        }
        print_world(&mut out, &sim)?;
        out.flush()?;
    }

    sim.teardown();
    Ok(())
}

fn print_world(out: &mut impl Write, sim: &Simulation) -> io::Result<()> {
    write!(out, "{}", render_ascii(sim.world()))?;
    writeln!(
        out,
        "generation {} | live cells {}",
        sim.total_iterations(),
        sim.world().population()
    )
}
