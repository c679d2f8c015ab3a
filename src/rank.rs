use serde::Deserialize;

use crate::constants::TOP_PER_CLUSTER;

/// Precomputed embeddings with their cluster assignments and centroids.
/// `k` is implied by the number of centroids.
#[derive(Debug, Deserialize)]
pub struct RankingBundle {
    pub embeddings: Vec<Vec<f32>>,
    pub labels: Vec<usize>,
    pub centroids: Vec<Vec<f32>>,
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Scores each embedding against its assigned cluster centroid; higher is
/// closer. `scores[i]` aligns with `embeddings[i]`.
/// `labels[i]` must be a valid index into `centroids`.
pub fn compute_scores(
    embeddings: &[Vec<f32>],
    labels: &[usize],
    centroids: &[Vec<f32>],
) -> Vec<f32> {
    embeddings
        .iter()
        .enumerate()
        .map(|(i, emb)| dot(emb, &centroids[labels[i]]))
        .collect()
}

/// For each cluster in `[0, k)` in order, the member indices sorted by score
/// descending and truncated to the top five, concatenated into one flat
/// sequence. The sort is stable, so ties keep original index order. A
/// cluster with fewer than five members contributes all of them.
pub fn top_per_cluster(scores: &[f32], labels: &[usize], k: usize) -> Vec<usize> {
    let mut selected = Vec::new();

    for c in 0..k {
        let mut idxs: Vec<usize> = (0..labels.len()).filter(|&i| labels[i] == c).collect();
        idxs.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        idxs.truncate(TOP_PER_CLUSTER);
        selected.extend(idxs);
    }

    selected
}
