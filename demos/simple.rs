use road_sssp::{Graph, compute};

fn main() {
    let mut graph = Graph::new();

    // A small road network, distances in km
    graph.add_edge("Lyon", "Geneva", 150);
    graph.add_edge("Lyon", "Grenoble", 110);
    graph.add_edge("Grenoble", "Geneva", 145);
    graph.add_edge("Geneva", "Lausanne", 62);
    graph.add_edge("Grenoble", "Turin", 240);
    graph.add_edge("Lausanne", "Turin", 280);
    graph.add_edge("Bastia", "Ajaccio", 150);

    let result = match compute(&graph, "Lyon") {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    println!("Shortest distances from Lyon:");
    for (city, distance) in result.distances() {
        println!("  {:<10} -> {}", city, distance);
    }

    println!("\nRoutes:");
    match result.paths() {
        Ok(paths) => {
            for (city, path) in paths {
                match path {
                    Some(path) => println!("  {:<10} {}", city, path.join(" <- ")),
                    None => println!("  {:<10} unreachable", city),
                }
            }
        }
        Err(err) => eprintln!("{err}"),
    }
}
