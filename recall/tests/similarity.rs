use recall::cosine_similarity;

#[test]
fn is_symmetric() {
    let a = [0.2, 0.5, 0.1];
    let b = [0.9, 0.1, 0.4];
    assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
}

#[test]
fn identical_vector_scores_one() {
    let v = [3.0, 4.0, 0.0];
    let score = cosine_similarity(&v, &v);
    assert!((score - 1.0).abs() < 1e-6);
}

#[test]
fn orthogonal_vectors_score_zero() {
    assert_eq!(cosine_similarity(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), 0.0);
}

#[test]
fn zero_magnitude_scores_zero_not_nan() {
    let score = cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]);
    assert_eq!(score, 0.0);
    assert!(!score.is_nan());
}

#[test]
fn mismatched_lengths_score_zero() {
    // Placeholder [0.0] embeddings on legacy documents must not panic.
    assert_eq!(cosine_similarity(&[0.0], &[1.0, 0.0, 0.0]), 0.0);
}
