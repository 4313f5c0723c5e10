use kselect::dataset::synthetic_segments;
use kselect::{Analysis, AnalysisOptions, KRange, Metric, ResultTable, Summary};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut rng = StdRng::seed_from_u64(7);
    let dataset = synthetic_segments(50, &mut rng);
    println!(
        "Customer segments: {} samples, {} features",
        dataset.n_samples(),
        dataset.n_features()
    );

    let options = AnalysisOptions {
        random_state: Some(7),
        parallel_sweep: true,
        ..Default::default()
    };
    let analysis = Analysis::run(&dataset.features, 4, KRange::default(), &options)?;

    println!("\n{}", Summary::new(&analysis.result, &analysis.sweep, &dataset.feature_names));

    for metric in Metric::ALL {
        println!("{} by k:", metric);
        for (k, score) in analysis.sweep.curve(metric).iter() {
            println!("  k={}: {:.4}", k, score);
        }
        if let Some(best) = analysis.sweep.best_k(metric) {
            println!("  best k: {}", best);
        }
    }

    println!("\nProjection on the first two features (first 5 points):");
    for (x, y, id) in analysis.result.project(0, 1)?.into_iter().take(5) {
        println!("  ({:.4}, {:.4}) -> {:?}", x, y, id);
    }

    let table = ResultTable::new(&dataset.features, &analysis.result, &dataset.feature_names)?;
    println!("\nFirst rows of the results table:");
    for line in table.to_string().lines().take(6) {
        println!("{}", line);
    }

    Ok(())
}
