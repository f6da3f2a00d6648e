use wordle_recommender::commands::play_out;
use wordle_recommender::core::Tile::{Hit, Miss, Present};
use wordle_recommender::core::{Feedback, MAX_TURNS, Word};
use wordle_recommender::solver::entropy::{score_entropy, select_best_guess};
use wordle_recommender::solver::filter::filter_candidates;
use wordle_recommender::solver::{Scan, Session, SessionError};
use wordle_recommender::wordlists::WordLists;

const GUESSES: &str = "salet\ncrane\nslate\nirate\ncrate\ngrate\ntrace\nplate\nbrace\ngrace\n\
                       audio\nroast\ntoast\nbeast\nstare\nraise\narise\nspeed\ncreep\n";
const ANSWERS: &str = "crane\nirate\ncrate\ngrate\nslate\nplate\ntrace\nbrace\ngrace\n\
                       roast\ntoast\nbeast\nstare\nraise\narise\n";

fn lists() -> WordLists {
    WordLists::from_strs(GUESSES, ANSWERS).unwrap()
}

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

#[test]
fn test_salet_against_crane() {
    let lists = lists();
    let mut session = Session::new(&lists);
    let total = lists.possible_answers().len();

    let feedback = Feedback::compute(&word("salet"), &word("crane"));
    assert_eq!(feedback, Feedback::new([Miss, Present, Miss, Present, Miss]));

    let result = session.submit_feedback(word("salet"), feedback).unwrap();
    assert!(result.remaining_candidates < total);
    assert!(result.remaining_candidates >= 1);
    assert!(!result.finished);
    assert!(session.candidates().iter().any(|w| w.text() == "crane"));
}

#[test]
fn test_repeated_letters_golden() {
    let feedback = Feedback::compute(&word("sheep"), &word("epees"));
    assert_eq!(feedback, Feedback::new([Present, Miss, Hit, Hit, Present]));
}

#[test]
fn test_candidates_shrink_monotonically() {
    let lists = lists();
    let mut session = Session::new(&lists);

    for target in lists.possible_answers() {
        let result = play_out(&mut session, target, None).unwrap();
        assert!(result.success, "{target}");
        assert!(result.guesses.len() <= MAX_TURNS);
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before, "{target}");
        }
        // the target never drops out of the candidate set
        assert!(session.candidates().contains(&target));
    }
}

#[test]
fn test_all_hit_is_terminal() {
    let lists = lists();
    let mut session = Session::new(&lists);

    let result = session.submit_feedback(word("trace"), Feedback::ALL_HIT).unwrap();
    assert!(result.finished);
    assert_eq!(result.next_suggestion, None);
    assert_eq!(result.remaining_candidates, 1);
    assert!(session.is_solved());

    let err = session.submit_str("crane", "GGGGG").unwrap_err();
    assert_eq!(err, SessionError::Finished);
}

#[test]
fn test_all_hit_on_unlisted_word_still_finishes() {
    let lists = lists();
    let mut session = Session::new(&lists);

    let result = session.submit_str("zzzzz", "GGGGG").unwrap();
    assert!(result.finished);
    assert_eq!(result.remaining_candidates, 0);
    assert!(session.is_solved());
}

#[test]
fn test_contradiction_leaves_session_untouched() {
    let lists = lists();
    let mut session = Session::new(&lists);
    session.submit_str("salet", "-Y-YY").unwrap();

    let before = session.clone();
    let err = session.submit_str("crane", "GGGG-").unwrap_err();

    assert!(matches!(err, SessionError::EmptyCandidateSet { .. }));
    assert_eq!(session.history(), before.history());
    assert_eq!(session.candidates(), before.candidates());
    assert_eq!(session.suggestion(), before.suggestion());
    assert!(!session.is_finished());
}

#[test]
fn test_malformed_input_is_rejected() {
    let lists = lists();
    let mut session = Session::new(&lists);

    assert!(matches!(
        session.submit_str("sal", "-----"),
        Err(SessionError::Validation(_))
    ));
    assert!(matches!(
        session.submit_str("salet", "--Q--"),
        Err(SessionError::Validation(_))
    ));
    assert!(session.history().is_empty());
}

#[test]
fn test_turn_cap_finishes_without_solving() {
    let words = "bills\nfills\ngills\nhills\nkills\nmills\npills\nsills\ntills\nwills\n";
    let lists = WordLists::from_strs(words, words).unwrap();
    let mut session = Session::new(&lists);
    let target = word("wills");

    for guess in ["bills", "fills", "gills", "hills", "kills", "mills"] {
        assert!(!session.is_finished());
        let guess = word(guess);
        let feedback = Feedback::compute(&guess, &target);
        session.submit_feedback(guess, feedback).unwrap();
    }

    assert!(session.is_finished());
    assert!(!session.is_solved());
    assert_eq!(session.suggestion(), None);
    assert_eq!(session.candidates().len(), 4);
}

#[test]
fn test_filter_is_idempotent() {
    let lists = lists();
    let all: Vec<&Word> = lists.possible_answers().iter().collect();
    let guess = word("stare");
    let feedback = Feedback::compute(&guess, &word("roast"));

    let once = filter_candidates(&all, &guess, feedback);
    let twice = filter_candidates(&once, &guess, feedback);

    assert_eq!(once, twice);
    assert!(once.iter().any(|w| w.text() == "roast"));
}

#[test]
fn test_parallel_and_serial_agree() {
    let lists = lists();
    let all: Vec<&Word> = lists.possible_answers().iter().collect();

    let parallel = select_best_guess(lists.allowed_guesses(), &all, Scan::Parallel).unwrap();
    let serial = select_best_guess(lists.allowed_guesses(), &all, Scan::Serial).unwrap();

    assert_eq!(parallel.0, serial.0);
    assert!((parallel.1 - serial.1).abs() < 1e-12);

    let best = lists
        .allowed_guesses()
        .iter()
        .map(|g| score_entropy(g, &all))
        .fold(f64::NEG_INFINITY, f64::max);
    assert!((parallel.1 - best).abs() < 1e-12);
}

#[test]
fn test_undo_replays_history() {
    let lists = lists();
    let mut session = Session::new(&lists);

    session.submit_str("salet", "-Y-YY").unwrap();
    let after_first = session.clone();
    session
        .submit_feedback(word("crane"), Feedback::compute(&word("crane"), &word("grate")))
        .unwrap();

    session.undo().unwrap();
    assert_eq!(session.history(), after_first.history());
    assert_eq!(session.candidates(), after_first.candidates());
    assert_eq!(session.suggestion(), after_first.suggestion());

    session.undo().unwrap();
    assert!(session.history().is_empty());
    assert_eq!(session.suggestion().unwrap().text(), "salet");
    assert_eq!(session.undo().unwrap_err(), SessionError::NothingToUndo);
}

#[test]
fn test_reset_restores_opening_state() {
    let lists = lists();
    let mut session = Session::with_opening(&lists, word("crane"));

    let _ = session.submit_str("crane", "-G-Y-");
    session.reset();

    assert!(session.history().is_empty());
    assert_eq!(session.candidates().len(), lists.possible_answers().len());
    assert_eq!(session.suggestion().unwrap().text(), "crane");
    assert_eq!(session.turn(), 1);
}
