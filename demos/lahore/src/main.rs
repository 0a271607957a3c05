//! lahore — demo embedding of the rust_nav navigator.
//!
//! Seeds a 10-location / 20-road network inspired by Lahore's geography,
//! runs shortest-path queries, then mutates traffic conditions and shows
//! how the routes react.  Seed data lives here, not in the core: the
//! engine is seeded through the same CSV loaders any host would use.

use std::io::Cursor;

use anyhow::Result;

use nav_engine::{seed_navigator, LocationId, Navigator, RoadStatus};

// ── Seed data ─────────────────────────────────────────────────────────────────

const LOCATIONS_CSV: &str = "\
id,name\n\
1,DHA\n\
2,Sadar Bazaar\n\
3,Anarkali\n\
4,Model Town\n\
5,Gulberg\n\
6,Defence Road\n\
7,Canal Road\n\
8,Mall Road\n\
9,Johar Town\n\
10,Bahria Town\n\
";

// Undirected specs; the store mirrors each into a directed pair.
const ROADS_CSV: &str = "\
from,to,distance_km,status\n\
1,2,8,normal\n\
2,3,6,normal\n\
3,4,12,heavy_traffic\n\
4,5,5,normal\n\
5,6,9,normal\n\
6,7,7,heavy_traffic\n\
7,8,4,normal\n\
8,9,10,blocked\n\
9,10,14,normal\n\
10,1,18,heavy_traffic\n\
1,3,14,normal\n\
2,4,15,normal\n\
3,5,11,normal\n\
4,6,8,heavy_traffic\n\
5,7,13,normal\n\
6,8,9,normal\n\
7,9,12,normal\n\
8,10,16,heavy_traffic\n\
2,6,18,normal\n\
9,1,20,normal\n\
";

// ── Helpers ───────────────────────────────────────────────────────────────────

fn print_stats(nav: &Navigator) {
    let stats = nav.stats();
    println!(
        "Network: {} locations, {} connections ({} normal / {} heavy / {} blocked)",
        stats.locations, stats.connections, stats.normal, stats.heavy_traffic, stats.blocked
    );
    println!(
        "Health: {}% available, {}% free-flowing",
        stats.availability_pct(),
        stats.normal_pct()
    );
}

fn print_route(nav: &Navigator, start: LocationId, end: LocationId) {
    print!(
        "{} -> {}: ",
        nav.location_label(start),
        nav.location_label(end)
    );
    match nav.plan_trip(start, end) {
        Err(e) => println!("rejected ({e})"),
        Ok(None) => println!("no route under current conditions"),
        Ok(Some(plan)) => {
            println!("{} km via {}", plan.result.distance_km, plan.waypoints.join(" -> "));
            println!(
                "    fuel {} L (cost {}), time {} h {:02} m",
                plan.estimate.fuel_display(),
                plan.estimate.cost_display(),
                plan.estimate.hours,
                plan.estimate.minutes
            );
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== lahore — rust_nav demo ===");
    println!();

    // 1. Seed the navigator from the embedded CSVs.
    let mut nav = Navigator::new();
    seed_navigator(&mut nav, Cursor::new(LOCATIONS_CSV), Cursor::new(ROADS_CSV))?;
    print_stats(&nav);
    println!();

    let dha = LocationId(1);
    let gulberg = LocationId(5);
    let mall_road = LocationId(8);

    // 2. Baseline queries.
    println!("-- baseline --");
    print_route(&nav, dha, gulberg);
    print_route(&nav, dha, mall_road);
    println!();

    // 3. Traffic builds up on Anarkali–Gulberg; the route diverts.
    println!("-- after heavy traffic on {} <-> {} --", nav.location_label(LocationId(3)), nav.location_label(gulberg));
    nav.update_road_status(LocationId(3), gulberg, RoadStatus::HeavyTraffic)?;
    print_route(&nav, dha, gulberg);
    println!();

    // 4. Close Sadar Bazaar–Model Town entirely.
    println!("-- after closing {} <-> {} --", nav.location_label(LocationId(2)), nav.location_label(LocationId(4)));
    nav.toggle_availability(LocationId(2), LocationId(4))?;
    print_route(&nav, dha, gulberg);
    println!();

    // 5. A same-endpoint query is rejected at the surface.
    print_route(&nav, dha, dha);
    println!();

    // 6. Deleting a location cascades to its roads.
    println!("-- after deleting {} --", nav.location_label(LocationId(9)));
    nav.delete_location(LocationId(9))?;
    print_stats(&nav);
    print_route(&nav, dha, LocationId(9));
    println!();

    // 7. Final location listing, insertion order.
    println!("{:<6} {}", "Id", "Location");
    println!("{}", "-".repeat(24));
    for loc in nav.locations() {
        println!("{:<6} {}", loc.id.0, loc.name);
    }

    Ok(())
}
