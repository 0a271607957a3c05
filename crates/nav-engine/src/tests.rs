//! Unit tests for nav-engine.

#[cfg(test)]
mod helpers {
    use crate::{LocationId, Navigator, RoadStatus};

    pub const L1: LocationId = LocationId(1);
    pub const L2: LocationId = LocationId(2);
    pub const L3: LocationId = LocationId(3);

    /// Triangle network behind the facade: 1—2 (8 km), 2—3 (6 km),
    /// 1—3 (20 km), all normal.
    pub fn triangle_navigator() -> Navigator {
        let mut nav = Navigator::new();
        nav.add_location(L1, "DHA").unwrap();
        nav.add_location(L2, "Sadar Bazaar").unwrap();
        nav.add_location(L3, "Anarkali").unwrap();
        nav.add_road(L1, L2, 8.0, RoadStatus::Normal).unwrap();
        nav.add_road(L2, L3, 6.0, RoadStatus::Normal).unwrap();
        nav.add_road(L1, L3, 20.0, RoadStatus::Normal).unwrap();
        nav
    }
}

// ── Facade surface ────────────────────────────────────────────────────────────

#[cfg(test)]
mod facade {
    use super::helpers::{self, L1, L2, L3};
    use crate::{EngineError, LocationId, Navigator, RoadStatus};

    #[test]
    fn mutations_return_notification_strings() {
        let mut nav = Navigator::new();
        assert_eq!(
            nav.add_location(L1, "DHA").unwrap(),
            "Location added successfully"
        );
        assert_eq!(
            nav.add_location(L2, "Gulberg").unwrap(),
            "Location added successfully"
        );
        assert_eq!(
            nav.add_road(L1, L2, 8.0, RoadStatus::Normal).unwrap(),
            "Road added successfully"
        );
        assert_eq!(
            nav.update_road_status(L1, L2, RoadStatus::Blocked).unwrap(),
            "Road status updated"
        );
        assert_eq!(
            nav.toggle_availability(L1, L2).unwrap(),
            "Road availability toggled"
        );
        assert_eq!(nav.delete_road(L1, L2).unwrap(), "Road deleted successfully");
        assert_eq!(
            nav.delete_location(L1).unwrap(),
            "Location deleted successfully"
        );
    }

    #[test]
    fn rejections_render_human_readable_reasons() {
        let mut nav = helpers::triangle_navigator();

        let dup = nav.add_location(L1, "Clone").unwrap_err();
        assert_eq!(dup.to_string(), "location id LocationId(1) already exists");

        let self_loop = nav.add_road(L2, L2, 4.0, RoadStatus::Normal).unwrap_err();
        assert_eq!(
            self_loop.to_string(),
            "cannot create a road from LocationId(2) to itself"
        );
    }

    #[test]
    fn same_endpoint_query_is_rejected_before_routing() {
        let nav = helpers::triangle_navigator();
        let err = nav.find_shortest_path(L2, L2).unwrap_err();
        assert!(matches!(err, EngineError::SameEndpoint(id) if id == L2));
    }

    #[test]
    fn path_query_passes_through() {
        let nav = helpers::triangle_navigator();
        let outcome = nav.find_shortest_path(L1, L3).unwrap();
        let result = outcome.route().unwrap();
        assert_eq!(result.path, vec![L1, L2, L3]);
        assert_eq!(result.distance_km, 14);
    }

    #[test]
    fn no_path_is_an_outcome_not_an_error() {
        let mut nav = helpers::triangle_navigator();
        nav.add_location(LocationId(4), "Island").unwrap();
        let outcome = nav.find_shortest_path(L1, LocationId(4)).unwrap();
        assert!(outcome.is_no_path());
    }

    #[test]
    fn plan_trip_bundles_estimate_and_labels() {
        let nav = helpers::triangle_navigator();
        let plan = nav.plan_trip(L1, L3).unwrap().expect("route exists");

        assert_eq!(plan.result.distance_km, 14);
        // 14 km → 1.68 L, 0 h 21 m, 2.52 cost.
        assert_eq!(plan.estimate.fuel_display(), "1.68");
        assert_eq!((plan.estimate.hours, plan.estimate.minutes), (0, 21));
        assert_eq!(plan.estimate.cost_display(), "2.52");
        assert_eq!(plan.waypoints, vec!["DHA", "Sadar Bazaar", "Anarkali"]);
    }

    #[test]
    fn plan_trip_reports_no_route_as_none() {
        let mut nav = helpers::triangle_navigator();
        nav.add_location(LocationId(4), "Island").unwrap();
        assert!(nav.plan_trip(L1, LocationId(4)).unwrap().is_none());
    }

    #[test]
    fn location_label_falls_back_to_raw_id() {
        let nav = helpers::triangle_navigator();
        assert_eq!(nav.location_label(L1), "DHA");
        assert_eq!(nav.location_label(LocationId(99)), "ID 99");
    }

    #[test]
    fn stats_reflect_mutations() {
        let mut nav = helpers::triangle_navigator();
        nav.update_road_status(L1, L2, RoadStatus::Blocked).unwrap();

        let stats = nav.stats();
        assert_eq!(stats.locations, 3);
        assert_eq!(stats.connections, 3);
        assert_eq!(stats.blocked, 1);
        assert_eq!(stats.availability_pct(), 100);
    }
}

// ── Seed loading ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod seed {
    use std::io::Cursor;

    use crate::seed::{load_locations_reader, load_roads_reader, seed_navigator};
    use crate::{EngineError, LocationId, Navigator, RoadStatus};

    const LOCATIONS: &str = "\
id,name\n\
1,DHA\n\
2,Sadar Bazaar\n\
3,Anarkali\n\
";

    const ROADS: &str = "\
from,to,distance_km,status\n\
1,2,8,normal\n\
2,3,6,heavy_traffic\n\
1,3,20,blocked\n\
";

    #[test]
    fn loads_locations_in_file_order() {
        let locations = load_locations_reader(Cursor::new(LOCATIONS)).unwrap();
        assert_eq!(locations.len(), 3);
        assert_eq!(locations[0], (LocationId(1), "DHA".to_owned()));
        assert_eq!(locations[2].1, "Anarkali");
    }

    #[test]
    fn loads_roads_with_parsed_status() {
        let roads = load_roads_reader(Cursor::new(ROADS)).unwrap();
        assert_eq!(roads.len(), 3);
        assert_eq!(roads[1].status, RoadStatus::HeavyTraffic);
        assert_eq!(roads[2].status, RoadStatus::Blocked);
        assert_eq!(roads[0].distance_km, 8.0);
    }

    #[test]
    fn seeds_a_navigator_end_to_end() {
        let mut nav = Navigator::new();
        seed_navigator(&mut nav, Cursor::new(LOCATIONS), Cursor::new(ROADS)).unwrap();

        assert_eq!(nav.locations().len(), 3);
        let stats = nav.stats();
        assert_eq!(stats.connections, 3);
        assert_eq!(stats.heavy_traffic, 1);
        assert_eq!(stats.blocked, 1);

        // Blocked direct road forces the two-hop route: 8 + 6×1.5 = 17.
        let outcome = nav.find_shortest_path(LocationId(1), LocationId(3)).unwrap();
        let result = outcome.route().unwrap();
        assert_eq!(result.path, vec![LocationId(1), LocationId(2), LocationId(3)]);
        assert_eq!(result.distance_km, 17);
    }

    #[test]
    fn malformed_status_is_a_parse_error() {
        let bad = "from,to,distance_km,status\n1,2,8,gridlock\n";
        let err = load_roads_reader(Cursor::new(bad)).unwrap_err();
        assert!(matches!(err, EngineError::Parse(_)));
    }

    #[test]
    fn non_numeric_id_is_a_parse_error() {
        let bad = "id,name\nfirst,DHA\n";
        let err = load_locations_reader(Cursor::new(bad)).unwrap_err();
        assert!(matches!(err, EngineError::Parse(_)));
    }

    #[test]
    fn duplicate_seed_location_fails_fast() {
        let dup = "id,name\n1,DHA\n1,Clone\n";
        let mut nav = Navigator::new();
        let err = seed_navigator(&mut nav, Cursor::new(dup), Cursor::new("from,to,distance_km,status\n")).unwrap_err();
        assert!(matches!(err, EngineError::Graph(_)));
    }
}
