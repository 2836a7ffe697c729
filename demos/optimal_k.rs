use gwas_kmeans::*;
use rand::prelude::*;

fn main() -> Result<()> {
    let (per_blob, sample_dims, blobs) = (500, 8, 4);

    // Generate data around a few random centers
    let mut rnd = StdRng::seed_from_u64(1337);
    let centers: Vec<Vec<f64>> = (0..blobs)
        .map(|_| (0..sample_dims).map(|_| rnd.gen_range(-50.0..50.0)).collect())
        .collect();
    let mut samples = Vec::with_capacity(blobs * per_blob * sample_dims);
    for center in &centers {
        for _ in 0..per_blob {
            samples.extend(center.iter().map(|c| c + rnd.gen_range(-2.0..2.0)));
        }
    }
    let mut points = Point::from_row_major(&samples, sample_dims)?;

    let conf = KMeansConfig::build().seed(42).build();
    let (search, state) = OptimalKSelector::new(2, 8)?.select_and_cluster(&mut points, &conf)?;

    for (k, inertia) in &search.inertia_by_k {
        println!("k={}: inertia {:.2}, silhouette {:.4}", k, inertia, search.silhouette_by_k[k]);
    }
    println!("elbow k = {}, silhouette k = {} -> optimal k = {}", search.elbow_k, search.silhouette_k, search.optimal_k);
    println!("Cluster-Sizes: {:?}", state.centroid_frequency());
    Ok(())
}
