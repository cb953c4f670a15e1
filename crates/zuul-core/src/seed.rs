use crate::error::CoreResult;
use crate::graph::RoomGraph;

/// Where the player stands when a game starts on the campus map.
pub const START_ROOM: &str = "outside";

const ROOMS: &[(&str, &str)] = &[
    ("outside", "outside the main entrance of the university"),
    ("theater", "in a lecture theater"),
    ("pub", "in the campus pub"),
    ("lab", "in a computing lab"),
    ("office", "in the computing admin office"),
    (
        "overlook",
        "on top of the lecture building, admiring the beautiful view of campus",
    ),
    (
        "dungeon",
        "in the 'dungeon,' a legendary work area under the computer lab",
    ),
];

// (room, direction, destination); not every exit has a reverse.
const EXITS: &[(&str, &str, &str)] = &[
    ("outside", "east", "theater"),
    ("outside", "south", "lab"),
    ("outside", "west", "pub"),
    ("theater", "west", "outside"),
    ("theater", "up", "overlook"),
    ("pub", "east", "outside"),
    ("lab", "north", "outside"),
    ("lab", "east", "office"),
    ("lab", "down", "dungeon"),
    ("office", "west", "lab"),
    ("overlook", "down", "theater"),
    ("dungeon", "up", "lab"),
];

/// Build the university campus map the game starts with.
pub fn campus_map() -> CoreResult<RoomGraph> {
    let mut graph = RoomGraph::new();
    for (id, description) in ROOMS {
        graph.create_room(*id, *description);
    }
    for (id, direction, destination) in EXITS {
        graph.set_exit(id, *direction, *destination)?;
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campus_has_seven_rooms() {
        let graph = campus_map().unwrap();
        assert_eq!(graph.len(), 7);
        assert!(graph.contains(START_ROOM));
    }

    #[test]
    fn campus_exits_match_fixture() {
        let graph = campus_map().unwrap();
        for (id, direction, destination) in EXITS {
            assert_eq!(
                graph.get_exit(id, direction).map(|d| d.as_str()),
                Some(*destination),
                "{id} {direction}"
            );
        }
        let total: usize = graph
            .room_ids()
            .into_iter()
            .filter_map(|id| graph.get(id.as_str()))
            .map(|room| room.exits().count())
            .sum();
        assert_eq!(total, EXITS.len());
    }

    #[test]
    fn every_seed_exit_leads_somewhere() {
        let graph = campus_map().unwrap();
        for (id, direction, _) in EXITS {
            assert!(graph.travel(id, direction).is_some(), "{id} {direction}");
        }
    }

    #[test]
    fn outside_description() {
        let graph = campus_map().unwrap();
        insta::assert_snapshot!(graph.describe("outside").unwrap(), @r"
        You are outside the main entrance of the university.
        Exits: east south west
        ");
    }
}
