use crate::model::{HeightCandidate, Match, MatchStatus, RoomCandidate, TextFragment};

/// Euclidean distance between two fragments in raw page coordinates.
///
/// Page numbers are not compared: a room may match a height on another page
/// if their coordinates happen to be close.
pub fn distance(a: &TextFragment, b: &TextFragment) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Pair every room with its nearest height candidate.
///
/// Returns exactly one `Match` per room, in room order. Ties go to the
/// candidate that comes first in `heights`. A nearest candidate further than
/// `max_distance` is reported as `NoHeightWithinRadius` with its distance kept.
pub fn match_rooms_with_heights(
    rooms: &[RoomCandidate],
    heights: &[HeightCandidate],
    max_distance: f64,
) -> Vec<Match> {
    rooms
        .iter()
        .map(|room| match_room(room, heights, max_distance))
        .collect()
}

fn match_room(room: &RoomCandidate, heights: &[HeightCandidate], max_distance: f64) -> Match {
    let mut nearest: Option<(&HeightCandidate, f64)> = None;
    for height in heights {
        let d = distance(&room.fragment, &height.fragment);
        match nearest {
            Some((_, best)) if d >= best => {}
            _ => nearest = Some((height, d)),
        }
    }

    match nearest {
        None => Match {
            room: room.clone(),
            height: None,
            distance: None,
            status: MatchStatus::NoHeightsAvailable,
        },
        Some((height, d)) if d <= max_distance => Match {
            room: room.clone(),
            height: Some(height.clone()),
            distance: Some(d),
            status: MatchStatus::Matched,
        },
        Some((_, d)) => Match {
            room: room.clone(),
            height: None,
            distance: Some(d),
            status: MatchStatus::NoHeightWithinRadius,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeightPattern;

    fn room(text: &str, x: f64, y: f64) -> RoomCandidate {
        RoomCandidate {
            fragment: TextFragment::word(text, x, y, 1),
        }
    }

    fn height(value_mm: u32, x: f64, y: f64) -> HeightCandidate {
        HeightCandidate {
            fragment: TextFragment::word(format!("AFFL+{value_mm}"), x, y, 1),
            value_mm,
            display_text: format!("+{value_mm}"),
            pattern: HeightPattern::Affl,
        }
    }

    #[test]
    fn test_nearest_height_is_matched() {
        let rooms = vec![room("BEDROOM 1", 0.0, 0.0)];
        let heights = vec![height(2400, 100.0, 0.0), height(2700, 10.0, 5.0)];
        let matches = match_rooms_with_heights(&rooms, &heights, 200.0);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].status, MatchStatus::Matched);
        assert_eq!(matches[0].height.as_ref().unwrap().value_mm, 2700);
        assert!((matches[0].distance.unwrap() - 125f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_no_heights_available() {
        let rooms = vec![room("KITCHEN", 0.0, 0.0), room("BATH", 50.0, 50.0)];
        let matches = match_rooms_with_heights(&rooms, &[], 200.0);

        assert_eq!(matches.len(), 2);
        for m in &matches {
            assert_eq!(m.status, MatchStatus::NoHeightsAvailable);
            assert!(m.height.is_none());
            assert!(m.distance.is_none());
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let rooms = vec![room("LIVING", 0.0, 0.0)];

        let at_limit = match_rooms_with_heights(&rooms, &[height(2400, 200.0, 0.0)], 200.0);
        assert_eq!(at_limit[0].status, MatchStatus::Matched);
        assert_eq!(at_limit[0].distance, Some(200.0));

        let beyond = match_rooms_with_heights(&rooms, &[height(2400, 200.0001, 0.0)], 200.0);
        assert_eq!(beyond[0].status, MatchStatus::NoHeightWithinRadius);
        assert!(beyond[0].height.is_none());
        assert!(beyond[0].distance.unwrap() > 200.0);
    }

    #[test]
    fn test_ties_pick_first_candidate() {
        let rooms = vec![room("DINING", 0.0, 0.0)];
        let heights = vec![
            height(2400, 30.0, 40.0),
            height(2700, -50.0, 0.0),
            height(3000, 0.0, -50.0),
        ];

        for _ in 0..3 {
            let matches = match_rooms_with_heights(&rooms, &heights, 200.0);
            assert_eq!(matches[0].height.as_ref().unwrap().value_mm, 2400);
            assert_eq!(matches[0].distance, Some(50.0));
        }
    }

    #[test]
    fn test_pages_are_not_filtered() {
        let rooms = vec![RoomCandidate {
            fragment: TextFragment::word("BEDROOM 2", 0.0, 0.0, 2),
        }];
        let heights = vec![height(2550, 3.0, 4.0)];
        let matches = match_rooms_with_heights(&rooms, &heights, 200.0);
        assert_eq!(matches[0].status, MatchStatus::Matched);
        assert_eq!(matches[0].height.as_ref().unwrap().fragment.page, 1);
    }

    #[test]
    fn test_room_count_is_preserved() {
        let rooms: Vec<RoomCandidate> = (0..7)
            .map(|i| room("ROOM", i as f64 * 150.0, 0.0))
            .collect();
        let heights = vec![height(2400, 0.0, 0.0)];
        let matches = match_rooms_with_heights(&rooms, &heights, 200.0);
        assert_eq!(matches.len(), rooms.len());
        assert_eq!(matches[0].status, MatchStatus::Matched);
        assert_eq!(matches[6].status, MatchStatus::NoHeightWithinRadius);
    }
}
