//! Delivery stops around Las Vegas / Henderson.
//!
//! Coordinates sourced from OpenStreetMap; spread over the metro area so
//! clustering has real structure to find.

use cluster_router::Point;

/// A named stop with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Stop {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Stop {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn point(&self) -> Point {
        Point::new(self.lat, self.lon)
    }
}

/// Distribution depot (Wynn Las Vegas loading dock).
pub const DEPOT: Stop = Stop::new("Wynn Las Vegas", 36.1263781, -115.1658180);

pub const STOPS: &[Stop] = &[
    Stop::new("Encore at Wynn", 36.1289345, -115.1653620),
    Stop::new("Bellagio", 36.1126, -115.1767),
    Stop::new("Longhorn Casino", 36.1070664, -115.0591256),
    Stop::new("SW Steakhouse", 36.1262145, -115.1669146),
    Stop::new("Public House", 36.1219193, -115.1689317),
    Stop::new("The Crack Shack", 36.1050709, -115.1735287),
    Stop::new("Flour & Barley", 36.1173688, -115.1702674),
    Stop::new("Gordon Ramsay BurGR", 36.1107195, -115.1720818),
    Stop::new("Earl of Sandwich Planet Hollywood", 36.1093912, -115.1720087),
    Stop::new("Gordon Ramsay Steak", 36.1127744, -115.1712029),
    Stop::new("Le Cirque", 36.1135689, -115.1749763),
    Stop::new("Guy Fieri's Vegas Kitchen", 36.1184064, -115.1722088),
    Stop::new("Ruth's Chris Steak House", 36.1193113, -115.1722630),
    Stop::new("Canaletto Ristorante", 36.1230743, -115.1688618),
    Stop::new("Carnevino Italian Steakhouse", 36.1249521, -115.1687357),
    Stop::new("Delmonico Steakhouse", 36.1231561, -115.1686955),
    Stop::new("Rao's", 36.1163982, -115.1763053),
    Stop::new("Bacchanal Buffet", 36.1159581, -115.1762929),
    Stop::new("Best Friend", 36.1049396, -115.1739173),
    Stop::new("America", 36.1021028, -115.1750921),
    Stop::new("Wolfgang Puck Bar & Grill", 36.1022046, -115.1696020),
    Stop::new("Charlie Palmer Steak", 36.0910624, -115.1743364),
    Stop::new("I Love Sushi Henderson", 35.9916660, -115.1028343),
    Stop::new("Islander's Grill", 36.0335058, -114.9856162),
    Stop::new("RibCage", 35.9949754, -115.0999810),
    Stop::new("Green Valley Ranch Area", 36.0308, -115.0825),
    Stop::new("Rivas Mexican Grill North", 36.1450055, -115.0482587),
    Stop::new("Monarca Mexican Restaurant", 36.1440711, -115.0634197),
    Stop::new("La Costa del Sol", 36.1470458, -115.0644345),
    Stop::new("Buffalo Wild Wings South", 36.0543044, -115.1714860),
    Stop::new("Bootlegger Bistro", 36.0492047, -115.1715744),
    Stop::new("Tahiti Joe's Restaurant", 36.0592855, -115.1716402),
    Stop::new("kabuki Japanese", 36.0675472, -115.1779391),
    Stop::new("Budget Suites South", 36.0366259, -115.1713361),
    Stop::new("Pyramid Cafe", 36.0956586, -115.1761902),
    Stop::new("Burger Bar", 36.0943773, -115.1760142),
    Stop::new("Musashi", 36.1177743, -115.1545417),
    Stop::new("Coco's Bakery", 36.1004202, -115.1652380),
    Stop::new("Denny's Mid Strip", 36.1209774, -115.1717620),
    Stop::new("Slice of Vegas Pizza", 36.0944330, -115.1759954),
    Stop::new("PBR Grill", 36.1090017, -115.1724402),
    Stop::new("mon ami Gabi", 36.1128554, -115.1724137),
    Stop::new("Bonanno's NY Pizzeria", 36.1165192, -115.1719357),
    Stop::new("Center Cut Steakhouse", 36.1162981, -115.1717185),
    Stop::new("Oyster Bar", 36.1194951, -115.1715059),
    Stop::new("Toby Keith's Bar & Grill", 36.1190579, -115.1703190),
    Stop::new("Lobster Me Venetian", 36.1217851, -115.1687545),
    Stop::new("Morels French Steakhouse", 36.1249500, -115.1690442),
    Stop::new("Zeffirino", 36.1219228, -115.1695013),
    Stop::new("Canonita", 36.1218701, -115.1687311),
    Stop::new("Payard Patisserie", 36.1166582, -115.1759111),
    Stop::new("Jose Cuervo Tequileria", 36.0806515, -115.1465380),
    Stop::new("Villa", 36.0825032, -115.1481717),
    Stop::new("The Local", 36.0861274, -115.1388524),
    Stop::new("Golden China", 36.1171166, -115.0904647),
    Stop::new("Rivas Mexican Grill East", 36.1295175, -115.1087980),
    Stop::new("Tomo Sushi", 36.0992464, -115.1142123),
    Stop::new("Wo Fat Chinese", 36.1298523, -115.0936239),
    Stop::new("Thai Food To Go", 36.1302738, -115.1037355),
    Stop::new("Denny's Boulder", 36.1061288, -115.0578247),
    Stop::new("Roma Pizza", 36.1012461, -115.0753039),
    Stop::new("Beers and Bets", 36.1428945, -115.1573836),
    Stop::new("Bellagio", 36.1126, -115.1767),
    Stop::new("Bootlegger Bistro", 36.0492047, -115.1715744),
    Stop::new("Green Valley Ranch Area", 36.0308, -115.0825),
    Stop::new("Longhorn Casino", 36.1070664, -115.0591256),
    Stop::new("Islander's Grill", 36.0335058, -114.9856162),
];

pub fn depot() -> Point {
    DEPOT.point()
}

/// All stops as points, in fixture order.
pub fn stop_points() -> Vec<Point> {
    STOPS.iter().map(Stop::point).collect()
}

/// The first `count` stops.
pub fn sample_points(count: usize) -> Vec<Point> {
    STOPS.iter().take(count).map(Stop::point).collect()
}
