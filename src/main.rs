use mazeforge::{GeneratorConfig, generate_level, level::catalog, solvers::shortest_route};
use tracing_appender::non_blocking::WorkerGuard;

/// Log to a file so tracing output never lands in the middle of the rendered maze.
fn init_logging() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "mazeforge.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let max_level = match std::env::var("DEBUG") {
        Ok(val) if val == "1" => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(max_level)
        .init();
    guard
}

fn main() -> std::io::Result<()> {
    let _guard = init_logging();

    let (flags, positional): (Vec<String>, Vec<String>) =
        std::env::args().skip(1).partition(|arg| arg.starts_with("--"));
    let show_route = flags.iter().any(|flag| flag == "--route");

    let level_input = match positional.first() {
        Some(arg) => arg.clone(),
        None => {
            let mut input = String::new();
            println!("Enter a level number (1-{}):", catalog::level_count());
            std::io::stdin().read_line(&mut input)?;
            input
        }
    };
    let Ok(level_number) = level_input.trim().parse::<u32>() else {
        eprintln!("Please enter a valid level number.");
        return Ok(());
    };

    let mut config = GeneratorConfig::default();
    if let Some(seed) = positional.get(1) {
        match seed.parse::<u64>() {
            Ok(seed) => config = config.with_seed(seed),
            Err(_) => {
                eprintln!("Seed must be a non-negative integer.");
                return Ok(());
            }
        }
    }

    let level = match generate_level(level_number, &config) {
        Ok(level) => level,
        Err(err) => {
            tracing::warn!("[main] no level generated: {}", err);
            println!("No level {} available ({}). All levels complete!", level_number, err);
            return Ok(());
        }
    };

    let mut stdout = std::io::stdout();
    if show_route {
        let route = shortest_route(
            level.maze().grid(),
            level.start(),
            level.exit(),
            &level.obstacle_set(),
        )
        .unwrap_or_default();
        level.render_with_route(&mut stdout, &route)?;
    } else {
        level.render(&mut stdout)?;
    }

    println!(
        "Level {} | {}x{} | {} obstacles | {} collectibles | time limit: {}",
        level.number(),
        level.width(),
        level.height(),
        level.obstacles().len(),
        level.collectibles().len(),
        level
            .time_limit()
            .map_or_else(|| "none".to_string(), |secs| format!("{}s", secs))
    );
    Ok(())
}
