use crate::{KMeansConfig, KMeansEngine, Point, Result, memory::*};
use rand::seq::SliceRandom;
use std::ops::DerefMut;

#[inline(always)] pub fn calculate<T: Primitive>(engine: &KMeansEngine, points: &[Point<T>], config: &KMeansConfig<'_, T>) -> Result<Vec<Point<T>>> {
    engine.validate(points)?;
    Ok(points.choose_multiple(config.rnd.borrow_mut().deref_mut(), engine.k())
        .map(Point::detached)       // Copy randomly chosen points into new centroids
        .collect())
}
