//! Integration tests for elimination play: round-1 pairing, winner
//! determination, and final generation.

use std::collections::HashSet;

use tournament_structure::{
    generate_elimination_matches, generate_final_from_semi_winners, GameMatch, MatchParticipant,
    MatchStatus, Member, Participant, TournamentError,
};

fn roster(n: usize) -> Vec<Participant> {
    (1..=n)
        .map(|i| Participant::solo(i as i64, Member::new(i as i64, format!("P{i}"))))
        .collect()
}

fn slot(id: i64, score: Option<u32>) -> MatchParticipant {
    MatchParticipant {
        participant_id: id,
        name: format!("P{id}"),
        score,
    }
}

fn played(id_1: i64, score_1: Option<u32>, id_2: i64, score_2: Option<u32>) -> GameMatch {
    GameMatch::new(Some(slot(id_1, score_1)), Some(slot(id_2, score_2)), 2, None)
}

#[test]
fn even_roster_pairs_everyone_exactly_once() {
    let participants = roster(6);
    let matches = generate_elimination_matches(&participants).unwrap();
    assert_eq!(matches.len(), 3);

    let mut seen = HashSet::new();
    for m in &matches {
        assert_eq!(m.id, 0); // backend assigns the real id
        assert_eq!(m.round, 1);
        assert_eq!(m.pool_id, None);
        assert_eq!(m.status, MatchStatus::Pending);
        for p in m.participants.iter().flatten() {
            assert_eq!(p.score, None);
            assert!(seen.insert(p.participant_id), "participant paired twice");
        }
    }
    let expected: HashSet<i64> = participants.iter().map(|p| p.id).collect();
    assert_eq!(seen, expected);
}

#[test]
fn odd_roster_is_rejected() {
    assert_eq!(
        generate_elimination_matches(&roster(5)),
        Err(TournamentError::OddParticipantCount)
    );
}

#[test]
fn too_small_roster_is_rejected() {
    assert_eq!(
        generate_elimination_matches(&roster(0)),
        Err(TournamentError::InsufficientParticipants)
    );
    // A single participant is both too few and odd; too few wins.
    assert_eq!(
        generate_elimination_matches(&roster(1)),
        Err(TournamentError::InsufficientParticipants)
    );
}

#[test]
fn higher_score_wins_the_match() {
    let m = played(1, Some(5), 2, Some(3));
    assert_eq!(m.winner().unwrap().participant_id, 1);

    let m = played(1, Some(2), 2, Some(6));
    assert_eq!(m.winner().unwrap().participant_id, 2);
}

#[test]
fn drawn_or_unplayed_match_has_no_winner() {
    assert!(played(1, Some(4), 2, Some(4)).winner().is_none());
    assert!(played(1, None, 2, Some(4)).winner().is_none());
    assert!(played(1, Some(4), 2, None).winner().is_none());
    assert!(played(1, None, 2, None).winner().is_none());
}

#[test]
fn bye_match_has_no_winner() {
    let m = GameMatch::new(Some(slot(1, Some(5))), None, 1, None);
    assert!(m.winner().is_none());
}

#[test]
fn final_pairs_the_two_semi_winners() {
    let semi_1 = played(1, Some(5), 2, Some(3)); // 1 wins
    let semi_2 = played(3, Some(2), 4, Some(6)); // 4 wins

    let finals = generate_final_from_semi_winners(&semi_1, &semi_2);
    assert_eq!(finals.len(), 1);
    let m = &finals[0];
    assert_eq!(m.round, 3);
    assert_eq!(m.pool_id, None);
    assert_eq!(m.status, MatchStatus::Pending);
    let ids: Vec<i64> = m
        .participants
        .iter()
        .flatten()
        .map(|p| p.participant_id)
        .collect();
    assert_eq!(ids, vec![1, 4]);
    for p in m.participants.iter().flatten() {
        assert_eq!(p.score, None); // fresh slots, prior scores cleared
    }
}

#[test]
fn undecided_semi_yields_no_final() {
    let decided = played(1, Some(5), 2, Some(3));
    let tied = played(3, Some(4), 4, Some(4));
    let unplayed = played(5, None, 6, None);

    assert!(generate_final_from_semi_winners(&decided, &tied).is_empty());
    assert!(generate_final_from_semi_winners(&unplayed, &decided).is_empty());
}
