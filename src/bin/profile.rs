use std::time::Instant;

use mazeforge::{GeneratorConfig, generate_level, level::catalog};

fn main() {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(100)
        .max(1);

    for template in catalog::all_levels() {
        let started = Instant::now();
        let (mut obstacles, mut collectibles) = (0usize, 0usize);
        for seed in 0..num_iters {
            let config = GeneratorConfig::default().with_seed(seed);
            match generate_level(template.number, &config) {
                Ok(level) => {
                    obstacles += level.obstacles().len();
                    collectibles += level.collectibles().len();
                }
                Err(err) => {
                    eprintln!("Level {} seed {} failed: {}", template.number, seed, err);
                    return;
                }
            }
        }
        let elapsed = started.elapsed();
        println!(
            "level {:>2}: {:?} per run, {:.2} obstacles, {:.2} collectibles on average",
            template.number,
            elapsed.div_f64(num_iters as f64),
            obstacles as f64 / num_iters as f64,
            collectibles as f64 / num_iters as f64
        );
    }
}
