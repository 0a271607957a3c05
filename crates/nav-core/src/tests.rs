//! Unit tests for nav-core primitives.

#[cfg(test)]
mod ids {
    use crate::LocationId;

    #[test]
    fn ordering() {
        assert!(LocationId(0) < LocationId(1));
        assert!(LocationId(100) > LocationId(99));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(LocationId::INVALID.0, u32::MAX);
        assert_eq!(LocationId::default(), LocationId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(LocationId(7).to_string(), "LocationId(7)");
    }

    #[test]
    fn canonical_pair_orders_endpoints() {
        let lo = LocationId(2);
        let hi = LocationId(9);
        assert_eq!(LocationId::canonical_pair(lo, hi), (lo, hi));
        assert_eq!(LocationId::canonical_pair(hi, lo), (lo, hi));
        // A degenerate pair maps to itself.
        assert_eq!(LocationId::canonical_pair(lo, lo), (lo, lo));
    }
}

#[cfg(test)]
mod status {
    use crate::RoadStatus;

    #[test]
    fn passability() {
        assert!(RoadStatus::Normal.is_passable());
        assert!(RoadStatus::HeavyTraffic.is_passable());
        assert!(!RoadStatus::Blocked.is_passable());
    }

    #[test]
    fn display() {
        assert_eq!(RoadStatus::Normal.to_string(), "normal");
        assert_eq!(RoadStatus::HeavyTraffic.to_string(), "heavy_traffic");
        assert_eq!(RoadStatus::Blocked.to_string(), "blocked");
    }

    #[test]
    fn parse_roundtrip() {
        for s in [RoadStatus::Normal, RoadStatus::HeavyTraffic, RoadStatus::Blocked] {
            assert_eq!(s.as_str().parse::<RoadStatus>().unwrap(), s);
        }
        // Surrounding whitespace is tolerated (CSV fields).
        assert_eq!(" blocked ".parse::<RoadStatus>().unwrap(), RoadStatus::Blocked);
    }

    #[test]
    fn parse_rejects_unknown_label() {
        assert!("gridlock".parse::<RoadStatus>().is_err());
        assert!("".parse::<RoadStatus>().is_err());
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(RoadStatus::default(), RoadStatus::Normal);
    }
}
