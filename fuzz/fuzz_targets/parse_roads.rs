#![no_main]

use libfuzzer_sys::fuzz_target;

// Arbitrary text must either parse or return a ParseError; never panic.
// Small parsed inputs are also solved to exercise the traversal.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(roads) = truck_routes::parse_roads(text) {
        if roads.cities <= 4096 {
            let network = truck_routes::RoadNetwork::from_roads(&roads);
            let _ = truck_routes::tallest_trucks(&network);
        }
    }
});
