//! Benchmarks for feature extraction and prediction.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use drachma::analysis::normalize;
use drachma::ml::{LogisticRegression, TfIdfVectorizer};

fn synthetic_corpus() -> (Vec<String>, Vec<String>) {
    let verbs = ["bought", "paid", "sold", "ordered", "received"];
    let nouns = ["milk", "rice", "rent", "vegetables", "petrol", "wages"];
    let categories = ["groceries", "rent", "income", "transport"];

    let mut texts = Vec::new();
    let mut labels = Vec::new();
    for (i, verb) in verbs.iter().cycle().take(500).enumerate() {
        let noun = nouns[i % nouns.len()];
        texts.push(normalize(&format!("{verb} {noun} for {i}")));
        labels.push(categories[i % categories.len()].to_string());
    }
    (texts, labels)
}

fn bench_vectorizer_transform(c: &mut Criterion) {
    let (texts, _) = synthetic_corpus();
    let mut vectorizer = TfIdfVectorizer::default();
    vectorizer.fit(&texts).unwrap();

    c.bench_function("vectorizer_transform", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(vectorizer.transform(text));
            }
        })
    });
}

fn bench_classifier_predict(c: &mut Criterion) {
    let (texts, labels) = synthetic_corpus();
    let mut vectorizer = TfIdfVectorizer::default();
    vectorizer.fit(&texts).unwrap();
    let features = vectorizer.transform_batch(&texts);

    let mut classifier = LogisticRegression::new().with_max_iter(200);
    classifier.fit(&features, &labels).unwrap();

    c.bench_function("classifier_predict", |b| {
        b.iter(|| black_box(classifier.predict(&features).unwrap()))
    });
}

criterion_group!(benches, bench_vectorizer_transform, bench_classifier_predict);
criterion_main!(benches);
