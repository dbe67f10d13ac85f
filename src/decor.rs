//! Generative hero decorations.
//!
//! The hero backdrop layers two effects: a "neural network" of pulsing nodes
//! joined to their nearest neighbours, and a sparse rain of falling glyphs.
//! Layouts are regenerated whenever the viewport resizes, with node and drop
//! counts halved below the mobile breakpoint.
//!
//! Randomness is passed in as a closure so production can feed
//! `js_sys::Math::random` while tests feed a deterministic sequence. The
//! closure must return values in `[0, 1)`.

use crate::config;

/// Characters the rain columns draw from.
pub const RAIN_CHARSET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789$#@%&*";

/// One pulsing node, positioned in container percentages.
#[derive(Clone, PartialEq, Debug)]
pub struct NetworkNode {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
}

/// A line anchored at its source node, rotated about its left edge to reach
/// the neighbour.
#[derive(Clone, PartialEq, Debug)]
pub struct NetworkLink {
    pub left_pct: f64,
    pub top_pct: f64,
    pub length_pct: f64,
    pub angle_deg: f64,
    pub delay_s: f64,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct NetworkLayout {
    pub nodes: Vec<NetworkNode>,
    pub links: Vec<NetworkLink>,
}

/// One falling glyph.
#[derive(Clone, PartialEq, Debug)]
pub struct RainDrop {
    pub glyph: char,
    pub left_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub opacity: f64,
}

pub fn network_node_count(viewport_width: f64) -> usize {
    if viewport_width < config::MOBILE_BREAKPOINT_PX {
        10
    } else {
        20
    }
}

pub fn rain_drop_count(viewport_width: f64) -> usize {
    if viewport_width < config::MOBILE_BREAKPOINT_PX {
        15
    } else {
        30
    }
}

/// Scatters `count` nodes and joins each to its 2-3 nearest neighbours.
///
/// Links are directional: when two nodes pick each other the pair is drawn
/// twice, and the overlap renders short edges brighter.
pub fn generate_network(count: usize, rng: &mut impl FnMut() -> f64) -> NetworkLayout {
    let mut nodes = Vec::with_capacity(count);
    for _ in 0..count {
        nodes.push(NetworkNode {
            left_pct: rng() * 100.0,
            top_pct: rng() * 100.0,
            delay_s: rng() * 2.0,
        });
    }

    let mut links = Vec::new();
    for (i, node) in nodes.iter().enumerate() {
        let mut neighbors: Vec<(usize, f64)> = nodes
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(j, other)| {
                let dx = node.left_pct - other.left_pct;
                let dy = node.top_pct - other.top_pct;
                (j, (dx * dx + dy * dy).sqrt())
            })
            .collect();
        neighbors.sort_by(|a, b| a.1.total_cmp(&b.1));

        let wanted = (rng() * 2.0) as usize + 2;
        for &(j, _) in neighbors.iter().take(wanted) {
            let other = &nodes[j];
            let dx = other.left_pct - node.left_pct;
            let dy = other.top_pct - node.top_pct;
            links.push(NetworkLink {
                left_pct: node.left_pct,
                top_pct: node.top_pct,
                length_pct: (dx * dx + dy * dy).sqrt(),
                angle_deg: dy.atan2(dx).to_degrees(),
                delay_s: rng() * 3.0,
            });
        }
    }

    NetworkLayout { nodes, links }
}

/// Scatters `count` drops with random glyph, column, timing and opacity.
pub fn generate_rain(count: usize, rng: &mut impl FnMut() -> f64) -> Vec<RainDrop> {
    let glyphs: Vec<char> = RAIN_CHARSET.chars().collect();
    (0..count)
        .map(|_| {
            let index = ((rng() * glyphs.len() as f64) as usize).min(glyphs.len() - 1);
            RainDrop {
                glyph: glyphs[index],
                left_pct: rng() * 100.0,
                delay_s: rng() * 5.0,
                duration_s: 5.0 + rng() * 5.0,
                opacity: rng() * 0.5 + 0.1,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lcg(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed;
        move || {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as f64 / (1u64 << 31) as f64
        }
    }

    fn scripted(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut iter = values.into_iter();
        move || iter.next().unwrap_or(0.0)
    }

    #[test]
    fn test_counts_halve_below_mobile_breakpoint() {
        assert_eq!(network_node_count(320.0), 10);
        assert_eq!(network_node_count(767.9), 10);
        assert_eq!(network_node_count(768.0), 20);
        assert_eq!(network_node_count(1440.0), 20);
        assert_eq!(rain_drop_count(320.0), 15);
        assert_eq!(rain_drop_count(768.0), 30);
    }

    #[test]
    fn test_network_nodes_land_in_bounds() {
        let mut rng = lcg(7);
        let layout = generate_network(20, &mut rng);
        assert_eq!(layout.nodes.len(), 20);
        for node in &layout.nodes {
            assert!((0.0..100.0).contains(&node.left_pct));
            assert!((0.0..100.0).contains(&node.top_pct));
            assert!((0.0..2.0).contains(&node.delay_s));
        }
    }

    #[test]
    fn test_each_node_links_to_two_or_three_neighbours() {
        let mut rng = lcg(42);
        let layout = generate_network(20, &mut rng);
        for node in &layout.nodes {
            let degree = layout
                .links
                .iter()
                .filter(|link| {
                    link.left_pct == node.left_pct && link.top_pct == node.top_pct
                })
                .count();
            assert!(degree == 2 || degree == 3, "degree was {degree}");
        }
        for link in &layout.links {
            assert!(link.length_pct > 0.0, "node linked to itself");
            assert!((0.0..3.0).contains(&link.delay_s));
        }
    }

    #[test]
    fn test_link_geometry_matches_both_directions() {
        // Two nodes 30 across and 40 down from each other: a 3-4-5 triangle.
        let mut rng = scripted(vec![
            0.1, 0.2, 0.0, // node a: left 10, top 20
            0.4, 0.6, 0.0, // node b: left 40, top 60
            0.0, 0.5, // a wants 2 (capped to 1 neighbour), link delay 1.5
            0.0, 0.5, // b likewise
        ]);
        let layout = generate_network(2, &mut rng);
        assert_eq!(layout.links.len(), 2);

        let ab = &layout.links[0];
        assert!((ab.left_pct - 10.0).abs() < 1e-9);
        assert!((ab.top_pct - 20.0).abs() < 1e-9);
        assert!((ab.length_pct - 50.0).abs() < 1e-9);
        assert!((ab.angle_deg - 53.13010235415598).abs() < 1e-9);
        assert!((ab.delay_s - 1.5).abs() < 1e-9);

        let ba = &layout.links[1];
        assert!((ba.left_pct - 40.0).abs() < 1e-9);
        assert!((ba.top_pct - 60.0).abs() < 1e-9);
        assert!((ba.length_pct - 50.0).abs() < 1e-9);
        assert!((ba.angle_deg + 126.86989764584402).abs() < 1e-9);
    }

    #[test]
    fn test_tiny_networks_cap_their_links() {
        let mut rng = lcg(3);
        assert!(generate_network(0, &mut rng).links.is_empty());
        let mut rng = lcg(3);
        assert!(generate_network(1, &mut rng).links.is_empty());
        let mut rng = lcg(3);
        let pair = generate_network(2, &mut rng);
        assert_eq!(pair.links.len(), 2);
    }

    #[test]
    fn test_same_sequence_gives_same_layout() {
        let mut first = lcg(99);
        let mut second = lcg(99);
        assert_eq!(
            generate_network(20, &mut first),
            generate_network(20, &mut second)
        );
        let mut first = lcg(99);
        let mut second = lcg(99);
        assert_eq!(generate_rain(30, &mut first), generate_rain(30, &mut second));
    }

    #[test]
    fn test_rain_fields_land_in_bounds() {
        let mut rng = lcg(11);
        let drops = generate_rain(30, &mut rng);
        assert_eq!(drops.len(), 30);
        for drop in &drops {
            assert!(RAIN_CHARSET.contains(drop.glyph));
            assert!((0.0..100.0).contains(&drop.left_pct));
            assert!((0.0..5.0).contains(&drop.delay_s));
            assert!((5.0..10.0).contains(&drop.duration_s));
            assert!((0.1..0.6).contains(&drop.opacity));
        }
    }

    #[test]
    fn test_rain_picks_glyphs_by_index() {
        let mut rng = scripted(vec![0.0, 0.0, 0.0, 0.0, 0.0]);
        let first = &generate_rain(1, &mut rng)[0];
        assert_eq!(first.glyph, 'A');

        let mut rng = scripted(vec![0.99, 0.0, 0.0, 0.0, 0.0]);
        let last = &generate_rain(1, &mut rng)[0];
        assert_eq!(last.glyph, '*');
    }
}
