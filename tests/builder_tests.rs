//! Frame construction: partitioning, validation, and random generation.

use cli_bowling::core::{game_from_rolls, parse_roll_line, random_game, BuildError, ParseError};
use cli_bowling::types::{FRAME_COUNT, MAX_GAME_SCORE};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_partitions_twenty_open_rolls_into_ten_frames() {
    let game = game_from_rolls(&[1; 20]).unwrap();
    assert_eq!(game.frame_count(), FRAME_COUNT);
    for frame in game.frames() {
        assert_eq!(frame.rolls(), &[1, 1]);
    }
}

#[test]
fn test_round_trip_reproduces_the_input_sequence() {
    let sequences: &[&[u8]] = &[
        &[10; 12],
        &[5; 21],
        &[0; 20],
        &[9, 0, 5, 5, 10, 8, 1, 4, 6, 10, 10, 5, 3, 7, 2, 8, 2, 9],
    ];
    for rolls in sequences {
        let game = game_from_rolls(rolls).unwrap();
        assert_eq!(&game.raw_rolls(), rolls, "round trip broke for {rolls:?}");
    }
}

#[test]
fn test_final_frame_strike_demands_two_bonus_values() {
    let mut rolls = vec![0; 18];
    rolls.extend([10, 10, 10]);
    assert!(game_from_rolls(&rolls).is_ok());

    let mut short = vec![0; 18];
    short.extend([10, 5]);
    assert_eq!(
        game_from_rolls(&short),
        Err(BuildError::MissingStrikeBonus)
    );
}

#[test]
fn test_final_frame_spare_demands_one_bonus_value() {
    let mut short = vec![0; 18];
    short.extend([4, 6]);
    assert_eq!(game_from_rolls(&short), Err(BuildError::MissingSpareBonus));
}

#[test]
fn test_overlarge_frame_identifies_both_rolls() {
    match game_from_rolls(&[6, 6]) {
        Err(BuildError::FrameSumExceeded {
            first,
            second,
            first_pos,
            second_pos,
        }) => {
            assert_eq!((first, second), (6, 6));
            assert_eq!((first_pos, second_pos), (0, 1));
        }
        other => panic!("expected FrameSumExceeded, got {other:?}"),
    }
}

#[test]
fn test_truncated_sequence_is_rejected() {
    assert_eq!(
        game_from_rolls(&[5, 5, 3]),
        Err(BuildError::OutOfRolls { frame: 2 })
    );
}

#[test]
fn test_parse_then_build_pipeline() {
    let values = parse_roll_line("5,5,3,4,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0").unwrap();
    let game = game_from_rolls(&values).unwrap();
    assert_eq!(game.score(), 20);

    assert!(matches!(
        parse_roll_line("5,11"),
        Err(ParseError::ValueTooLarge { value: 11 })
    ));
}

#[test]
fn test_random_games_stay_in_bounds() {
    for seed in 0..300 {
        let mut rng = StdRng::seed_from_u64(seed);
        let game = random_game(&mut rng);
        assert_eq!(game.frame_count(), FRAME_COUNT);

        // Raw pinfall (no lookahead) can never exceed the score cap.
        let raw: u32 = game.frames().iter().map(|f| f.pin_total()).sum();
        assert!(raw <= MAX_GAME_SCORE);

        let score = game.score();
        assert!(score <= MAX_GAME_SCORE, "seed {seed} scored {score}");
    }
}

#[test]
fn test_random_game_survives_rebuild() {
    // A generated game flattened to raw rolls is itself a valid input.
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let game = random_game(&mut rng);
        let rebuilt = game_from_rolls(&game.raw_rolls()).unwrap();
        assert_eq!(rebuilt.score(), game.score());
        assert_eq!(rebuilt, game);
    }
}
