use crate::types::Coordinates;

/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance between two points, in kilometres.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Initial compass bearing from `from` towards `to`, in `[0, 360)`.
pub fn initial_bearing(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let x = d_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    let bearing = x.atan2(y).to_degrees().rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if bearing >= 360.0 {
        0.0
    } else {
        bearing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_haversine_same_point_is_zero() {
        let p = Coordinates::new(52.2297, 21.0122);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_haversine_warsaw_krakow() {
        let warsaw = Coordinates::new(52.2297, 21.0122);
        let krakow = Coordinates::new(50.0647, 19.9450);
        let d = haversine_km(warsaw, krakow);
        assert!(approx(d, 252.0, 1.5), "got {}", d);
        assert!(approx(d, haversine_km(krakow, warsaw), 1e-9));
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = haversine_km(Coordinates::new(0.0, 0.0), Coordinates::new(1.0, 0.0));
        assert!(approx(d, 111.195, 0.01), "got {}", d);
    }

    #[test]
    fn test_cardinal_bearings() {
        let origin = Coordinates::new(0.0, 0.0);
        assert!(approx(initial_bearing(origin, Coordinates::new(1.0, 0.0)), 0.0, 1e-9));
        assert!(approx(initial_bearing(origin, Coordinates::new(0.0, 1.0)), 90.0, 1e-9));
        assert!(approx(initial_bearing(origin, Coordinates::new(-1.0, 0.0)), 180.0, 1e-9));
        assert!(approx(initial_bearing(origin, Coordinates::new(0.0, -1.0)), 270.0, 1e-9));
    }

    #[test]
    fn test_bearing_is_normalised() {
        let from = Coordinates::new(52.2297, 21.0122);
        for to in [
            Coordinates::new(52.3, 20.9),
            Coordinates::new(52.1, 20.9),
            Coordinates::new(52.2297, 21.0122),
        ] {
            let b = initial_bearing(from, to);
            assert!((0.0..360.0).contains(&b), "bearing {} out of range", b);
        }
    }
}
