use std::env;
use std::time::Instant;

mod io;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let start = Instant::now();
    let outcome = run();
    tracing::info!("{}ms", start.elapsed().as_millis());
    outcome
}

fn run() -> anyhow::Result<()> {
    let input_path = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("input.txt"));

    let input = io::read_input(&input_path)?;
    tracing::debug!(
        "loaded {0}x{0} board, {1}s remaining",
        input.board.size(),
        input.remaining_seconds
    );

    let Some(decision) = fruitrage_core::decide_move(&input.board, input.remaining_seconds)
    else {
        tracing::info!("no move available");
        return Ok(());
    };

    io::write_output("output.txt", &decision)?;
    tracing::info!(
        "played {}, backed-up score {}, {} nodes at depth {}",
        io::move_label(&decision.mv),
        decision.score,
        decision.stats.nodes,
        decision.stats.depth
    );
    Ok(())
}
