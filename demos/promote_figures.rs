//! Rewrite a small document and print the before/after trees as JSON.
//!
//! Run with: cargo run --example promote_figures

use refigure::{rewrite, Element, Node, RewriteConfig};

fn main() {
    let mut gallery = Element::new("div");
    gallery.push_class("gallery-container");

    let mut gallery_paragraph = Element::new("p");
    for alt in ["one", "two", "three"] {
        let mut image = Element::new("img");
        image.set_property("src", format!("{alt}.jpg"));
        image.set_property("alt", alt);
        gallery_paragraph.children.push(Node::Element(image));
    }
    gallery.children.push(Node::Element(gallery_paragraph));

    let mut hero = Element::new("img");
    hero.set_property("src", "hero.jpg");
    hero.set_property("alt", "landscape lake at dawn");

    let mut captioned = Element::new("img");
    captioned.set_property("src", "boat.jpg");
    captioned.set_property("alt", "a boat at rest");
    let mut captioned_paragraph = Element::new("p");
    captioned_paragraph.children.push(Node::Element(captioned));

    let mut document = Element::new("div");
    document.children.push(Node::Element(hero));
    document.children.push(Node::Element(captioned_paragraph));
    document.children.push(Node::Element(gallery));
    let mut root = Node::Element(document);

    println!("before:");
    println!("{}", serde_json::to_string_pretty(&root).unwrap());

    rewrite(&mut root, &RewriteConfig::default());

    println!("\nafter:");
    println!("{}", serde_json::to_string_pretty(&root).unwrap());
}
