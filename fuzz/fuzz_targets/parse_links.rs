#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(links) = vertex_centrality::parse_links(text) {
        if links.vertices <= 256 {
            let graph = vertex_centrality::LinkGraph::from_links(&links);
            let _ = vertex_centrality::most_central(&graph);
        }
    }
});
