use kselect::{KMeans, Matrix, MinMaxScaler, Point, silhouette_score};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    println!("=== K-Means on a small 2-D dataset ===\n");

    // Three natural groups plus a few stragglers
    let x = array![
        // around (2, 2)
        [1.5, 1.8], [2.0, 2.2], [2.3, 1.9], [1.8, 2.5], [2.1, 1.7],
        // around (8, 8)
        [7.8, 8.2], [8.1, 7.9], [8.3, 8.1], [7.9, 8.4], [8.2, 7.7],
        // around (2, 8)
        [1.9, 7.8], [2.2, 8.1], [1.7, 8.3], [2.4, 7.9], [2.0, 8.2],
        [5.0, 5.0], [0.0, 0.0], [10.0, 0.0]
    ];

    println!("Dataset: {} samples, {} features\n", x.nrows(), x.ncols());

    let mut scaler = MinMaxScaler::new();
    let x_scaled = scaler.fit_transform(&x)?;
    let points = Point::from_rows(&x_scaled);

    for k in 2..=5 {
        let result = KMeans::new(k).max_iter(100).random_state(42).fit(&points)?;
        println!(
            "K-Means(k={}): {} clusters populated, inertia {:.4}, silhouette {:.4}, {} iterations",
            k,
            result.cluster_sizes().len(),
            result.inertia(),
            silhouette_score(result.points()),
            result.iterations()
        );
    }

    println!("\n=== k=3 in original units ===");
    let result = KMeans::new(3).random_state(42).fit(&points)?;
    let centers = Matrix::from_shape_vec(
        (result.k(), x.ncols()),
        result.centroids().iter().flatten().copied().collect(),
    )?;
    let centers = scaler.inverse_transform(&centers)?;
    for (i, c) in centers.rows().into_iter().enumerate() {
        println!("  Cluster {}: ({:.2}, {:.2})", i, c[0], c[1]);
    }
    for (id, count) in result.cluster_sizes() {
        println!("  Cluster {}: {} points", id, count);
    }

    Ok(())
}
