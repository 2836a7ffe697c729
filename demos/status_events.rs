use gwas_kmeans::*;

fn main() -> Result<()> {
    let (sample_cnt, sample_dims, k, max_iter) = (20000, 20, 4, 2500);

    // Generate some random data
    let mut samples = vec![0.0f64;sample_cnt * sample_dims];
    samples.iter_mut().for_each(|v| *v = rand::random());
    let mut points = Point::from_row_major(&samples, sample_dims)?;

	let conf = KMeansConfig::build()
		.init_done(&|_| println!("Initialization completed."))
		.iteration_done(&|s, nr, new_distsum|
			println!("Iteration {} - Error: {:.2} -> {:.2} | Improvement: {:.2}",
				nr, s.distsum, new_distsum, s.distsum - new_distsum))
		.abort_strategy(AbortStrategy::NoImprovementForXIterations { x: 5, threshold: 0.0005, abort_on_negative: true })
		.build();

    // Calculate kmeans, using random samples as initialization-method
    let engine = KMeansEngine::new(k, max_iter)?;
    let result = engine.cluster_with(&mut points, KMeansEngine::init_random_sample, &conf)?;

    println!("Cluster-Sizes: {:?}", result.centroid_frequency());
    println!("Error: {}", result.distsum);
    Ok(())
}
