use waste_routing::utils::generator::{
    generate_synthetic_graph, DEFAULT_EDGE_PROBABILITY, DEFAULT_NUM_BINS,
};
use waste_routing::{compare_strategies, DEFAULT_THRESHOLD};

fn main() {
    let topology_seed = 42;
    let fill_seed = 7;

    println!(
        "Generating road network: {} bins, {:.0}% edge density (topology seed {})",
        DEFAULT_NUM_BINS,
        DEFAULT_EDGE_PROBABILITY * 100.0,
        topology_seed
    );
    let graph = generate_synthetic_graph(
        DEFAULT_NUM_BINS,
        DEFAULT_EDGE_PROBABILITY,
        topology_seed,
        fill_seed,
    );
    println!(
        "Network has {} bins and {} roads",
        graph.bin_count(),
        graph.road_count()
    );

    let targets = graph.targets(DEFAULT_THRESHOLD);
    println!(
        "{} bins are at or above the {:.0}% fill threshold: {:?}",
        targets.len(),
        DEFAULT_THRESHOLD * 100.0,
        targets
    );

    let outcomes = compare_strategies(&graph, DEFAULT_THRESHOLD);

    println!("\nStrategy comparison:");
    println!("--------------------");
    for outcome in &outcomes {
        println!(
            "{:<18} distance {:>8.2}  covered {:>2}/{:<2}  stops {:>2}  ({:.2?})",
            outcome.strategy,
            outcome.result.total_distance,
            outcome.result.bins_covered,
            targets.len(),
            outcome.result.tour.len(),
            outcome.elapsed
        );
    }

    if let (Some(optimized), Some(naive)) = (outcomes.first(), outcomes.last()) {
        if optimized.result.bins_covered == naive.result.bins_covered
            && naive.result.total_distance > 0.0
        {
            println!(
                "\n2-opt refinement saves {:.1}% over the naive pairing at equal coverage",
                100.0 * (naive.result.total_distance - optimized.result.total_distance)
                    / naive.result.total_distance
            );
        }
    }

    if let Some(optimized) = outcomes.first() {
        match serde_json::to_string_pretty(&optimized.result) {
            Ok(json) => println!("\nOptimized route as JSON:\n{}", json),
            Err(e) => eprintln!("Could not serialize the optimized route: {}", e),
        }
    }
}
