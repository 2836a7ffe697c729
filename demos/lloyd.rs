use gwas_kmeans::*;

fn main() -> Result<()> {
    let (sample_cnt, sample_dims, k, max_iter) = (20000, 20, 4, 100);

    // Generate some random data
    let mut samples = vec![0.0f64;sample_cnt * sample_dims];
    samples.iter_mut().for_each(|v| *v = rand::random());
    let mut points = Point::from_row_major(&samples, sample_dims)?;

    // Calculate kmeans, using kmean++ as initialization-method
    let engine = KMeansEngine::new(k, max_iter)?;
    let result = engine.cluster(&mut points, &KMeansConfig::default())?;

    println!("Centroids: {:?}", result.clusters.iter().map(|c| c.centroid().features()).collect::<Vec<_>>());
    println!("Cluster-Sizes: {:?}", result.centroid_frequency());
    println!("Error: {} after {} iterations (converged: {})", result.distsum, result.iterations, result.converged);
    Ok(())
}
