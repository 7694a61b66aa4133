use wayfinder_core::{EdgeList, Navigator, NavigatorBuilder, Orientation};

/// Builds a navigator from edge-list text.
#[must_use]
pub fn navigator_from(text: &str, orientation: Orientation) -> Navigator {
    let edges = EdgeList::from_reader(text.as_bytes()).expect("fixture edge list must parse");
    NavigatorBuilder::new()
        .with_orientation(orientation)
        .with_edges(edges)
        .build()
        .expect("fixture edge list must be non-empty")
}

/// Two undirected pairs with no walkway between them.
#[must_use]
pub fn two_islands() -> Navigator {
    navigator_from(
        "# east wing\nGate Quad 3\n# west wing\nDock Shed 4\n",
        Orientation::Undirected,
    )
}
