//! End-to-end game scenarios.
//!
//! Each test builds a board and roll script in memory, runs the whole game
//! and checks the final state, the verdict and what the sinks received.

use monopoly_sim::{
    Board, DiceRoll, GameEvent, GameResult, JailCause, PlayerId, PlayerSeed, Recorder, RollEntry,
    RollScript, RulesConfig, Simulation, TableReporter, Tile, TileKind,
};

const P1: PlayerId = PlayerId::new(0);
const P2: PlayerId = PlayerId::new(1);

/// A 40-tile board: GO(200), JAIL@10, GO_TO_JAIL@30, blanks elsewhere,
/// with the given properties placed on top.
fn board(properties: &[(usize, &str, i64)]) -> Board {
    let mut tiles: Vec<Tile> = (0..40).map(Tile::blank).collect();
    tiles[0] = Tile::go(200);
    tiles[10] = Tile::new(TileKind::Jail, "Jail", 10);
    tiles[30] = Tile::new(TileKind::GoToJail, "Police", 30);
    for &(position, name, cost) in properties {
        tiles[position] = Tile::property(name, position, cost);
    }
    Board::new(tiles, &RulesConfig::default()).unwrap()
}

fn script(rolls: &[(u8, u8)]) -> RollScript {
    let mut entries = vec![RollEntry::Print];
    entries.extend(
        rolls
            .iter()
            .map(|&(a, b)| RollEntry::Dice(DiceRoll::new(a, b).unwrap())),
    );
    entries.push(RollEntry::Print);
    RollScript::new(entries).unwrap()
}

/// Doubles on the only real roll: the property is bought, the extra roll
/// is abandoned and the game runs out of rolls.
#[test]
fn test_single_doubles_runs_out_of_rolls() {
    let players = [PlayerSeed::new("alice", 1500), PlayerSeed::new("bob", 1500)];
    let mut sim = Simulation::new(
        &players,
        board(&[(6, "A", 60)]),
        script(&[(3, 3)]),
        RulesConfig::default(),
    );
    let mut sink = Recorder::new();

    let result = sim.run(&mut sink).unwrap();

    assert_eq!(result, GameResult::NotEnoughRolls);
    assert_eq!(sink.result, Some(GameResult::NotEnoughRolls));

    let alice = sim.state().player(P1);
    assert_eq!(alice.position(), Some(6));
    assert_eq!(alice.money(), 1440);
    assert_eq!(alice.properties(), &[6]);
    assert_eq!(sim.state().owner_of(6), Some(P1));

    // Opening print, closing print, final snapshot
    assert_eq!(sink.snapshots.len(), 3);
    assert_eq!(sink.snapshots[0].players[0].money, 1500);
    assert_eq!(sink.snapshots[2].players[0].properties, vec![6]);
}

#[test]
fn test_unaffordable_rent_bankrupts_without_payment() {
    let players = [
        PlayerSeed::new("alice", 1500),
        PlayerSeed::new("bob", 5),
        PlayerSeed::new("cara", 1500),
    ];
    let mut sim = Simulation::new(
        &players,
        board(&[(3, "A", 100)]),
        script(&[(1, 2), (1, 2), (4, 5), (4, 5)]),
        RulesConfig::default(),
    );

    let result = sim.run(&mut Recorder::new()).unwrap();

    // Cara is still solvent, so nobody has won
    assert_eq!(result, GameResult::NotEnoughRolls);

    let bob = sim.state().player(P2);
    assert!(bob.is_bankrupt());
    assert_eq!(bob.money(), 0);
    assert_eq!(bob.position(), None);
    assert!(bob.properties().is_empty());

    // Alice bought A and received nothing from Bob
    assert_eq!(sim.state().player(P1).money(), 1400);
    assert!(!sim
        .state()
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::RentPaid { .. })));
}

#[test]
fn test_sole_survivor_wins_immediately() {
    let players = [PlayerSeed::new("alice", 1500), PlayerSeed::new("bob", 5)];
    let mut sim = Simulation::new(
        &players,
        board(&[(3, "A", 100)]),
        script(&[(1, 2), (1, 2), (4, 5), (4, 5), (4, 5)]),
        RulesConfig::default(),
    );
    let mut sink = Recorder::new();

    let result = sim.run(&mut sink).unwrap();

    assert!(result.is_winner(P1));
    assert_eq!(result.to_string(), "alice won!");

    // Three roll entries were never consumed
    assert_eq!(sim.cursor(), 3);
    assert_eq!(sim.state().player(P1).position(), Some(3));

    // Opening print and the final snapshot only
    assert_eq!(sink.snapshots.len(), 2);
    assert!(sink.snapshots[1].players[1].bankrupt);
    assert_eq!(sink.snapshots[1].players[1].position, -1);
}

#[test]
fn test_rent_paid_to_owner() {
    let players = [PlayerSeed::new("alice", 1500), PlayerSeed::new("bob", 1500)];
    let mut sim = Simulation::new(
        &players,
        board(&[(3, "A", 105)]),
        script(&[(1, 2), (1, 2), (4, 5)]),
        RulesConfig::default(),
    );

    sim.run(&mut Recorder::new()).unwrap();

    // Rent paid is floor(10.5) = 10
    assert_eq!(sim.state().player(P1).money(), 1500 - 105 + 10);
    assert_eq!(sim.state().player(P2).money(), 1490);
}

#[test]
fn test_third_doubles_jails_then_sits_out() {
    let players = [PlayerSeed::new("alice", 1500), PlayerSeed::new("bob", 1500)];
    // Alice: 6+6 to 12, 6+6 to 24, then 3+3 is the third doubles
    let mut sim = Simulation::new(
        &players,
        board(&[]),
        script(&[(6, 6), (6, 6), (3, 3), (1, 2), (1, 2), (1, 2)]),
        RulesConfig::default(),
    );

    sim.run(&mut Recorder::new()).unwrap();

    // Bob rolled, Alice sat out, Bob rolled again, then Alice left jail
    let alice = sim.state().player(P1);
    assert_eq!(alice.position(), Some(13));
    assert!(!alice.is_jailed());
    assert_eq!(sim.state().player(P2).position(), Some(6));
    assert!(sim.state().events.iter().any(|e| *e
        == GameEvent::Jailed {
            player: P1,
            cause: JailCause::Doubles,
        }));
}

#[test]
fn test_table_output_is_deterministic() {
    let players = [PlayerSeed::new("alice", 1500), PlayerSeed::new("bob", 200)];
    let rolls = script(&[(1, 2), (3, 4), (2, 2), (5, 6), (1, 3), (6, 6), (2, 5), (4, 4), (1, 1)]);

    let render = || {
        let board = board(&[(3, "A", 100), (7, "B", 180), (15, "C", 60)]);
        let mut sink = TableReporter::new(Vec::new(), &board);
        let mut sim = Simulation::new(&players, board, rolls.clone(), RulesConfig::default());
        sim.run(&mut sink).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    };

    let first = render();
    let second = render();

    assert_eq!(first, second);
    assert!(first.contains("| NAME      | POS  | BANKRUPT | MONEY  |"));
    assert!(first.ends_with("Not enough dice rolls!\n") || first.ends_with("won!\n"));
}
