//! Benchmarks for the figure/gallery rewrite pass.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use refigure::{rewrite, Element, Node, RewriteConfig};

fn img(alt: &str) -> Node {
    let mut el = Element::new("img");
    el.set_property("src", "photo.jpg");
    el.set_property("alt", alt);
    Node::Element(el)
}

fn paragraph(children: Vec<Node>) -> Node {
    let mut el = Element::new("p");
    el.children = children;
    Node::Element(el)
}

/// A document shaped like a long photo essay: prose paragraphs mixed
/// with captioned images, orientation hints, and gallery sections.
fn sample_document(sections: usize) -> Node {
    let mut root = Element::new("div");

    for i in 0..sections {
        root.children.push(paragraph(vec![Node::text(
            "Some prose between the photographs.",
        )]));
        root.children.push(paragraph(vec![img("a captioned photo")]));
        root.children.push(img("landscape hero shot"));
        root.children
            .push(paragraph(vec![img("left"), img("right")]));

        let mut gallery = Element::new("div");
        gallery.push_class("gallery-container");
        gallery.children.push(paragraph(vec![
            img("one"),
            img("_two"),
            img(if i % 2 == 0 { "landscape three" } else { "portrait three" }),
        ]));
        root.children.push(Node::Element(gallery));
    }

    Node::Element(root)
}

fn bench_rewrite_document(c: &mut Criterion) {
    let config = RewriteConfig::default();
    let document = sample_document(200);

    c.bench_function("rewrite_document", |b| {
        b.iter(|| {
            let mut tree = document.clone();
            rewrite(&mut tree, &config);
            tree
        });
    });
}

fn bench_rewrite_processed_document(c: &mut Criterion) {
    let config = RewriteConfig::default();
    let mut processed = sample_document(200);
    rewrite(&mut processed, &config);

    // Second-pass cost: everything is already sealed.
    c.bench_function("rewrite_processed_document", |b| {
        b.iter(|| {
            let mut tree = processed.clone();
            rewrite(&mut tree, &config);
            tree
        });
    });
}

criterion_group!(
    benches,
    bench_rewrite_document,
    bench_rewrite_processed_document
);
criterion_main!(benches);
